//! # suffix-index
//!
//! Three equivalent index structures over a single bounded-alphabet text:
//! a suffix automaton, a suffix array with its LCP array, and a suffix
//! tree. Each is built in linear or near-linear time, and each answers the
//! same substring-optimization query: the contiguous substring maximizing
//! `occurrences × length`.
//!
//! Structures are built once over an immutable [`text::Text`] and only
//! queried afterward; every builder is a constructor, so a half-built
//! structure cannot be observed. The three [`refrain`] maximizers always
//! agree on the optimal value and each reports one substring attaining it.
//!
//! ## Example
//!
//! ```rust
//! use suffix_index::prelude::*;
//!
//! let text = Text::new(vec![1, 2, 1, 2, 1], 2)?;
//!
//! let automaton = SuffixAutomaton::build(&text);
//! assert!(automaton.contains(&[2, 1, 2]));
//!
//! let best = refrain::via_suffix_tree(&text);
//! assert_eq!(best.value, 6); // "1 2 1" twice
//! # Ok::<(), suffix_index::error::TextError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod automaton;
pub mod error;
pub mod refrain;
pub mod text;
pub mod tree;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::array::SuffixArray;
    pub use crate::automaton::SuffixAutomaton;
    pub use crate::error::{Result, TextError};
    pub use crate::refrain::{self, Repeat};
    pub use crate::text::{Text, SENTINEL};
    pub use crate::tree::SuffixTree;
}
