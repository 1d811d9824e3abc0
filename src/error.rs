//! Error types for text validation and index construction.

use thiserror::Error;

/// Errors that can occur while validating input text.
///
/// Construction errors are unrecoverable for the offending input: every
/// builder is a pure function of the text, so the only remedy is to supply
/// corrected input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A symbol code exceeds the declared alphabet bound.
    ///
    /// Counting sorts size their buckets from the declared bound, so a
    /// larger code would silently corrupt suffix ordering. Rejected at
    /// construction instead.
    #[error("symbol {symbol} at position {position} exceeds alphabet bound {bound}")]
    SymbolOutOfBounds {
        /// The offending symbol code.
        symbol: u8,
        /// Zero-based position of the symbol in the input.
        position: usize,
        /// The declared alphabet bound.
        bound: u8,
    },

    /// A symbol uses code 0, which is reserved for the sentinel.
    ///
    /// The suffix array and suffix tree terminate the text with a synthetic
    /// symbol that must sort strictly below every real symbol.
    #[error("symbol at position {position} uses code 0, reserved for the sentinel")]
    ReservedSentinel {
        /// Zero-based position of the symbol in the input.
        position: usize,
    },
}

/// A specialized `Result` type for text validation.
pub type Result<T> = std::result::Result<T, TextError>;
