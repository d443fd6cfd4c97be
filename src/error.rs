//! Error types for habit data and configuration

/// Error type for loading and validating habit data
#[derive(Debug, thiserror::Error)]
pub enum HabitError {
    #[error("Invalid completion date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
