//! Line-based command prompt over any `BufRead`/`Write` pair.
//!
//! Prompts go to the writer; outcomes are reported through `tracing`.

pub mod command;

pub use command::Command;

use std::io::{BufRead, Write};

use crate::core::manager::CatalogManager;
use crate::domain::ports::CatalogStore;
use crate::utils::error::{CatalogError, Result};

pub const DEFAULT_PROMPT: &str = "Enter command (add, remove, show, exit): ";
pub const TITLE_PROMPT: &str = "Enter book title: ";
pub const AUTHOR_PROMPT: &str = "Enter book author: ";
pub const YEAR_PROMPT: &str = "Enter book year: ";
pub const REMOVE_PROMPT: &str = "Enter book title to remove: ";

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R: BufRead, W: Write, S: CatalogStore> {
    input: R,
    output: W,
    manager: CatalogManager<S>,
    prompt: String,
}

impl<R: BufRead, W: Write, S: CatalogStore> Shell<R, W, S> {
    pub fn new(input: R, output: W, manager: CatalogManager<S>) -> Self {
        Self {
            input,
            output,
            manager,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Runs until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? == Flow::Continue {}
        Ok(())
    }

    /// Reads and executes a single command.
    pub fn step(&mut self) -> Result<Flow> {
        let prompt = self.prompt.clone();
        let Some(line) = self.read_line(&prompt)? else {
            return Ok(self.finish());
        };

        let command = Command::parse(&line);
        tracing::debug!("Received command: {:?}", command);

        match command {
            Command::Add => self.add(),
            Command::Remove => self.remove(),
            Command::Show => {
                self.manager.show_books();
                Ok(Flow::Continue)
            }
            Command::Exit => Ok(self.finish()),
            Command::Unknown(_) => {
                tracing::warn!("Invalid command. Please try again.");
                Ok(Flow::Continue)
            }
        }
    }

    pub fn manager(&self) -> &CatalogManager<S> {
        &self.manager
    }

    pub fn into_manager(self) -> CatalogManager<S> {
        self.manager
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(title) = self.read_line(TITLE_PROMPT)? else {
            return Ok(self.finish());
        };
        let Some(author) = self.read_line(AUTHOR_PROMPT)? else {
            return Ok(self.finish());
        };
        let Some(year_input) = self.read_line(YEAR_PROMPT)? else {
            return Ok(self.finish());
        };

        match parse_year(&year_input) {
            Ok(year) => self.manager.add_book(&title, &author, year),
            Err(e) => {
                tracing::debug!("{}", e);
                tracing::error!("{}", e.user_friendly_message());
            }
        }
        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> Result<Flow> {
        let Some(title) = self.read_line(REMOVE_PROMPT)? else {
            return Ok(self.finish());
        };
        self.manager.remove_book(&title);
        Ok(Flow::Continue)
    }

    fn finish(&self) -> Flow {
        tracing::info!("Exiting program.");
        Flow::Exit
    }

    /// Writes `prompt` and returns the next trimmed line, or `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Parses a trimmed year string as a signed integer.
pub fn parse_year(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| CatalogError::InvalidYear {
            input: input.to_string(),
        })
}
