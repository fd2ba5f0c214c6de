//! Configuration loading errors.

use thiserror::Error;

/// Config load error
#[derive(Error, Debug, Clone)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
    /// Value out of range
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending key
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}
