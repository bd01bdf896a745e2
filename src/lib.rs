//! Greedy longest-match tokenizer over a vocabulary trie.
//!
//! A fixed vocabulary of tokens (code-point sequences) is compiled into an
//! existence table: a chained hash of hashes where the root table holds the
//! first code point of every token and each node holds a small child table
//! for the next one. The scanner walks that table over an input, cuts the
//! longest recognized token, and falls back to single-code-point tokens for
//! anything the vocabulary does not know.
//!
//! # Key properties
//!
//! - **Total coverage**: the tokens of an input concatenate back to it
//! - **Idempotent insertion**: re-inserting a definition changes nothing
//! - **Arena storage**: nodes live in a `safe_bump` arena addressed by index;
//!   insertion path-copies, teardown drops the arena
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! # Example
//!
//! ```
//! use vocab_trie::{Config, Vocabulary, codec};
//!
//! let vocab = Vocabulary::build(
//!     ["the", "there", "is"].map(codec::decode_str),
//!     Config::default(),
//! )?;
//! let tokens = vocab.tokenize(&codec::decode_str("thereisx"))?;
//! let words: Vec<String> = tokens.iter().map(ToString::to_string).collect();
//! assert_eq!(words, ["there", "is", "x"]);
//! # Ok::<(), vocab_trie::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

use std::fmt;

pub mod codec;
pub mod config;
pub mod dump;
pub mod error;
pub mod iter;
pub mod load;
pub mod node;
pub mod scanner;
pub mod store;
pub mod token;

mod arena;
mod arena_sync;
mod ops;
mod vocab;

#[cfg(test)]
mod tests;

pub use arena::VocabArena;
pub use arena_sync::VocabArenaSync;
pub use config::Config;
pub use error::{Error, Result};
pub use node::{CodePoint, NodeId, TERMINATOR};
pub use token::Token;
pub use vocab::{Table, VocabTrie, Vocabulary, VocabularySync, destroy};

/// Saved trie state for rollback.
///
/// Created by [`VocabTrie::checkpoint`]. Restoring via
/// [`VocabTrie::rollback`] discards all insertions made after the
/// checkpoint.
#[derive(Clone, Copy)]
pub struct VocabCheckpoint {
    /// Two-arena store checkpoint.
    pub store: store::StoreCheckpoint,
    /// Root table at checkpoint time.
    pub root: [node::Chain; node::ROOT_SIZE],
    /// Live node count at checkpoint time.
    pub nodes: usize,
    /// Token count at checkpoint time.
    pub len: usize,
}

impl fmt::Debug for VocabCheckpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VocabCheckpoint")
            .field("nodes", &self.nodes)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
