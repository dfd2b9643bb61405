//! Error types and handling for tieba core
//!
//! Navigation itself never fails; these errors cover loading and
//! validating the layout the router is asked to manage.

use thiserror::Error;

/// Result type alias for tieba core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tieba core
#[derive(Error, Debug)]
pub enum Error {
    /// Layout configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Layout configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Duplicate section id: {id}")]
    DuplicateSection { id: String },

    #[error("{owner} refers to unknown section '{section}'")]
    UnknownSection { owner: String, section: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("No configuration found")]
    NoConfigFound,
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let error = ConfigError::DuplicateSection {
            id: "hot".to_string(),
        };
        assert_eq!(error.to_string(), "Duplicate section id: hot");

        let error = ConfigError::UnknownSection {
            owner: "tab group 'hot'".to_string(),
            section: "hot".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "tab group 'hot' refers to unknown section 'hot'"
        );
    }

    #[test]
    fn test_error_wraps_config_error() {
        let error: Error = ConfigError::NoConfigFound.into();
        assert_eq!(
            error.to_string(),
            "Configuration error: No configuration found"
        );
    }
}
