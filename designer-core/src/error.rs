//! Structured error types for the designer-dna crates.

use thiserror::Error;

/// Unified error type for all sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesignerError {
    /// A byte outside the recognized nucleotide alphabet.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// 0-based offset into the input.
        position: usize,
    },

    /// A malformed parameter (e.g. a zero-length repeat unit).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DesignerError {
    /// Build a [`DesignerError::InvalidSymbol`] from a raw byte.
    pub fn invalid_symbol(byte: u8, position: usize) -> Self {
        Self::InvalidSymbol {
            symbol: char::from(byte),
            position,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, DesignerError>;
