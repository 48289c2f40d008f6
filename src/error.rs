use thiserror::Error;

/// Errors that can occur around the rant transformer.
///
/// Scanning and ranting themselves never fail; these come from configuration,
/// stream I/O and JSON decoding.
#[derive(Error, Debug)]
pub enum RantError {
    /// Error reading or parsing configuration
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// The configured emoji pool has no symbols in it
    #[error("emoji pool must contain at least one symbol")]
    EmptyEmojiPool,

    /// Error reading input lines
    #[error("failed to read input: {0}")]
    InputError(#[source] std::io::Error),

    /// Error writing rants out
    #[error("failed to write output: {0}")]
    OutputError(#[source] std::io::Error),

    /// Error decoding or encoding a JSON line
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
}

/// Result type alias for rant operations
pub type Result<T> = std::result::Result<T, RantError>;
