use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid year input: '{input}'")]
    InvalidYear { input: String },
}

impl CatalogError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(_) => "Could not read from or write to the console.".to_string(),
            CatalogError::TomlError(_) => {
                "The configuration file is not valid TOML.".to_string()
            }
            CatalogError::ConfigError { message } => format!("Configuration problem: {}", message),
            CatalogError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            CatalogError::InvalidYear { .. } => {
                "Invalid year input. Please enter a valid number.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
