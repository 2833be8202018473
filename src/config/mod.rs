#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::shell::DEFAULT_PROMPT;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate, LOG_LEVELS};

/// Effective runtime settings after merging file and command-line values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_level: String,
    pub log_format: LogFormat,
    pub verbose: bool,
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Compact,
            verbose: false,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            log_level: config
                .logging
                .level
                .as_ref()
                .map(|level| level.trim().to_lowercase())
                .unwrap_or(defaults.log_level),
            log_format: config.logging.format.unwrap_or(defaults.log_format),
            verbose: defaults.verbose,
            prompt: config.shell.prompt.clone().unwrap_or(defaults.prompt),
        }
    }

    /// Loads the optional config file named on the command line, then applies flag overrides.
    #[cfg(feature = "cli")]
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => {
                crate::utils::validation::validate_path("config", path)?;
                Self::from_toml(&TomlConfig::from_file(path)?)
            }
            None => Self::default(),
        };
        settings.apply_cli(cli);
        Ok(settings)
    }

    #[cfg(feature = "cli")]
    pub fn apply_cli(&mut self, cli: &CliConfig) {
        if cli.verbose {
            self.verbose = true;
        }
        if let Some(format) = cli.log_format {
            self.log_format = format;
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_one_of("logging.level", &self.log_level, &LOG_LEVELS)?;
        validate_non_empty_string("shell.prompt", &self.prompt)?;
        Ok(())
    }
}
