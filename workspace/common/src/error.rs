use thiserror::Error;

/// Error types for the display configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// Currency code not found in the ISO-4217 table
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Locale without a relative date table
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}

/// Result type for display operations
pub type Result<T> = std::result::Result<T, DisplayError>;
