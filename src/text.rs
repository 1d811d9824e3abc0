//! Validated input text over a bounded alphabet.
//!
//! Every index structure in this crate is built over a [`Text`]: an
//! immutable sequence of byte-sized symbol codes drawn from `1..=bound`.
//! Code 0 ([`SENTINEL`]) is reserved; the suffix array and suffix tree
//! append it internally as a unique end-of-text symbol that sorts below
//! every real symbol.
//!
//! Driver input in the range `[1, m]` maps onto codes directly, so
//! reversing the mapping for output is the identity.

use crate::error::{Result, TextError};

/// Reserved end-of-text symbol, strictly below every valid symbol code.
pub const SENTINEL: u8 = 0;

/// An immutable string of bounded-alphabet symbol codes.
///
/// Validation happens once here, so the index builders can assume every
/// symbol is in `1..=alphabet_bound` and never collides with the sentinel.
///
/// # Examples
///
/// ```rust
/// use suffix_index::text::Text;
///
/// let text = Text::new(vec![1, 1, 2, 1, 2], 2).unwrap();
/// assert_eq!(text.len(), 5);
/// assert!(Text::new(vec![1, 3], 2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    symbols: Vec<u8>,
    alphabet_bound: u8,
}

impl Text {
    /// Validate and wrap a symbol sequence.
    ///
    /// # Errors
    ///
    /// - [`TextError::ReservedSentinel`] if any symbol is 0.
    /// - [`TextError::SymbolOutOfBounds`] if any symbol exceeds
    ///   `alphabet_bound`. The bound must be honest: counting sorts size
    ///   their buckets from it.
    pub fn new(symbols: Vec<u8>, alphabet_bound: u8) -> Result<Self> {
        for (position, &symbol) in symbols.iter().enumerate() {
            if symbol == SENTINEL {
                return Err(TextError::ReservedSentinel { position });
            }
            if symbol > alphabet_bound {
                return Err(TextError::SymbolOutOfBounds {
                    symbol,
                    position,
                    bound: alphabet_bound,
                });
            }
        }
        Ok(Self {
            symbols,
            alphabet_bound,
        })
    }

    /// The symbol codes, without any sentinel.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the text has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The declared alphabet bound (largest permitted symbol code).
    pub fn alphabet_bound(&self) -> u8 {
        self.alphabet_bound
    }

    /// The symbols followed by the sentinel, as the array and tree
    /// builders consume them.
    pub(crate) fn padded(&self) -> Vec<u8> {
        let mut padded = Vec::with_capacity(self.symbols.len() + 1);
        padded.extend_from_slice(&self.symbols);
        padded.push(SENTINEL);
        padded
    }
}
