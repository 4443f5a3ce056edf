use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    #[error("Unsupported character {ch:?} at index {index}")]
    UnsupportedChar { ch: char, index: usize },

    #[error("Data too long: {bits} bits exceeds capacity of {capacity} bits")]
    DataTooLong { bits: usize, capacity: usize },

    #[error("Invalid version: {0}")]
    InvalidVersion(usize),

    #[error("Invalid masking pattern: {0}")]
    InvalidMaskPattern(u8),
}

pub type QRResult<T> = Result<T, QRError>;
