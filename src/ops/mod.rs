//! Recursive trie operations over a [`VocabStore`](crate::store::VocabStore).

pub mod destroy;
pub mod find;
pub mod insert;
