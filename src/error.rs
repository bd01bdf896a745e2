//! Error type for trie construction, scanning and reading.

use std::collections::TryReserveError;

/// Errors reported by the vocabulary trie and the scanner.
///
/// Unrecognized input is not an error: it produces singleton tokens.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A token or output buffer could not be allocated.
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// A token definition is longer than the configured maximum.
    #[error("token definition of {len} code points exceeds the maximum of {max}")]
    DefinitionTooLong {
        /// Length of the offending definition, in code points.
        len: usize,
        /// Configured maximum token length.
        max: usize,
    },

    /// More token definitions were supplied than the configured maximum.
    #[error("{count} token definitions exceed the maximum of {max}")]
    TooManyDefinitions {
        /// Number of non-empty definitions supplied.
        count: usize,
        /// Configured maximum number of definitions.
        max: usize,
    },

    /// The scan produced more tokens than the output capacity allows.
    #[error("output capacity of {capacity} tokens exceeded")]
    CapacityExceeded {
        /// Capacity the caller provided.
        capacity: usize,
    },

    /// Reading definitions or input failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias with [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
