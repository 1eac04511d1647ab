use thiserror::Error;

/// Result type for emoji converter operations
pub type Result<T> = std::result::Result<T, EmojiError>;

/// Error types for emoji conversion
#[derive(Error, Debug)]
pub enum EmojiError {
    /// Input bytes were not valid text
    #[error("Invalid input type: expected a UTF-8 string: {0}")]
    InvalidInputType(#[from] std::str::Utf8Error),
}
