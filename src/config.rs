//! Vocabulary configuration, bound to a trie at construction.

use crate::node::{self, CodePoint};

/// Default maximum token length in code points (terminator excluded).
pub const DEFAULT_MAX_TOKEN_LEN: usize = 7;

/// Default maximum number of definitions accepted by a batch build.
pub const DEFAULT_MAX_DEFINITIONS: usize = 64;

/// Tunables of one vocabulary trie.
///
/// The same value governs insertion and every lookup of the trie it was
/// passed to, so stored and probed code points are always folded alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Lowercase ASCII code points on insertion and lookup.
    pub fold_ascii_case: bool,
    /// Maximum definition length in code points.
    pub max_token_len: usize,
    /// Maximum number of non-empty definitions in one batch build.
    pub max_definitions: usize,
}

impl Config {
    /// Creates the default configuration: no folding, 7 code points per
    /// token, 64 definitions.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fold_ascii_case: false,
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
            max_definitions: DEFAULT_MAX_DEFINITIONS,
        }
    }

    /// Sets ASCII case folding.
    #[must_use]
    pub const fn with_fold_ascii_case(mut self, fold: bool) -> Self {
        self.fold_ascii_case = fold;
        self
    }

    /// Sets the maximum definition length.
    #[must_use]
    pub const fn with_max_token_len(mut self, max: usize) -> Self {
        self.max_token_len = max;
        self
    }

    /// Sets the maximum number of definitions per batch build.
    #[must_use]
    pub const fn with_max_definitions(mut self, max: usize) -> Self {
        self.max_definitions = max;
        self
    }

    /// Applies the configured folding to one code point.
    #[must_use]
    pub fn fold(&self, value: CodePoint) -> CodePoint {
        if self.fold_ascii_case {
            node::fold_ascii(value)
        } else {
            value
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
