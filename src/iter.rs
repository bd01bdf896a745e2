//! Iterator over the definitions stored in a vocabulary trie.

use crate::node::{Chain, CodePoint};
use crate::store::VocabStore;

/// Iterator over every token stored in a [`VocabTrie`](crate::VocabTrie).
///
/// Tokens come in root bucket order, chain order within a bucket, and
/// depth-first below each node; a token precedes its extensions.
pub struct Definitions {
    entries: std::vec::IntoIter<Vec<CodePoint>>,
}

impl Definitions {
    /// Creates an iterator by collecting all endpoints via DFS.
    pub fn new<S: VocabStore>(store: &S, root: &[Chain]) -> Self {
        let mut entries = Vec::new();
        let mut prefix = Vec::new();
        collect(store, root, &mut prefix, &mut entries);
        Self {
            entries: entries.into_iter(),
        }
    }
}

impl Iterator for Definitions {
    type Item = Vec<CodePoint>;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for Definitions {}

/// DFS collect every endpoint path below `chains`.
fn collect<S: VocabStore>(
    store: &S,
    chains: &[Chain],
    prefix: &mut Vec<CodePoint>,
    out: &mut Vec<Vec<CodePoint>>,
) {
    for idx in chains.iter().flat_map(|chain| chain.iter(store)) {
        let node = store.get_node(idx);
        prefix.push(node.value);
        if node.is_endpoint {
            out.push(prefix.clone());
        }
        collect(store, &node.children, prefix, out);
        prefix.pop();
    }
}
