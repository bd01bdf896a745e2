//! Lookup operations: bucket chain scans and whole-sequence walks.

use crate::node::{self, CHILD_SIZE, Chain, CodePoint, NodeId, ROOT_SIZE};
use crate::store::VocabStore;

/// Scans `chain` for a node matching `value`.
///
/// Returns the chain position and index of the node if found.
pub fn find_in_chain<S: VocabStore>(
    store: &S,
    chain: Chain,
    value: CodePoint,
) -> Option<(usize, NodeId)> {
    chain
        .iter(store)
        .enumerate()
        .find(|&(_, idx)| store.get_node(idx).value == value)
}

/// Walks `seq` (already folded) from the root table.
///
/// Returns the node reached by the last code point, or `None` if some
/// prefix of `seq` is not in the trie or `seq` is empty.
pub fn walk<S: VocabStore>(
    store: &S,
    root: &[Chain; ROOT_SIZE],
    seq: &[CodePoint],
) -> Option<NodeId> {
    let (&first, rest) = seq.split_first()?;
    let (_, mut current) = find_in_chain(store, root[node::bucket(first, ROOT_SIZE)], first)?;
    for &value in rest {
        let chain = store.get_node(current).children[node::bucket(value, CHILD_SIZE)];
        (_, current) = find_in_chain(store, chain, value)?;
    }
    Some(current)
}
