//! Teardown operation: recursive walk over every reachable node.

use crate::node::{Chain, NodeId};
use crate::store::VocabStore;

/// Counts every node reachable from `chains`, recursing through each node's
/// child table before counting the node itself.
///
/// The arena frees the memory; the walk accounts for what is released.
pub fn release_recursive<S: VocabStore>(store: &S, chains: &[Chain]) -> usize {
    chains
        .iter()
        .flat_map(|chain| chain.iter(store))
        .map(|idx| release_node(store, idx))
        .sum()
}

fn release_node<S: VocabStore>(store: &S, idx: NodeId) -> usize {
    release_recursive(store, &store.get_node(idx).children) + 1
}
