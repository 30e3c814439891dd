//! Error types for impress-colorhash

use thiserror::Error;

/// Result type alias for color hash operations
pub type Result<T> = std::result::Result<T, ColorHashError>;

/// Errors raised before any color is computed.
///
/// No variant is ever produced halfway through a computation: palettes are
/// validated up front and raw input is decoded in full before hashing.
#[derive(Error, Debug)]
#[cfg_attr(feature = "native", derive(uniffi::Error), uniffi(flat_error))]
pub enum ColorHashError {
    /// Palette has an empty level list or a level outside [0, 1]
    #[error("Invalid palette config: {0}")]
    InvalidConfig(String),

    /// Input could not be decoded into Unicode scalar values
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Palette document failed to deserialize
    #[error("Parse error: {0}")]
    Parse(String),

    /// Palette file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ColorHashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for ColorHashError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
