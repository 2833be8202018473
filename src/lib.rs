pub mod config;
pub mod core;
pub mod domain;
pub mod shell;
pub mod utils;

#[cfg(test)]
mod test_support;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::Settings;
pub use crate::core::{catalog::InMemoryCatalog, manager::CatalogManager};
pub use crate::domain::{model::Book, ports::CatalogStore};
pub use crate::shell::Shell;
pub use crate::utils::error::{CatalogError, Result};
