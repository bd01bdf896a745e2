//! Storage abstraction for vocabulary trie operations.

use safe_bump::{Checkpoint, Idx};

use crate::node::{Node, NodeId};

/// Saved state of the two storage arenas.
#[derive(Clone, Copy)]
pub struct StoreCheckpoint {
    /// Nodes arena checkpoint.
    pub nodes: Checkpoint<Node>,
    /// Links arena checkpoint.
    pub links: Checkpoint<NodeId>,
}

/// Storage backend for trie operations.
///
/// Abstracts over [`Arena`](safe_bump::Arena) (single-thread) and
/// [`SharedArena`](safe_bump::SharedArena) (multi-thread) backends.
pub trait VocabStore {
    /// Allocates a single node, returning its index.
    fn alloc_node(&mut self, node: Node) -> NodeId;

    /// Returns a reference to the node at `idx`.
    fn get_node(&self, idx: NodeId) -> &Node;

    /// Allocates a contiguous run of node indices (one bucket chain),
    /// returning the index of the first one. Returns `None` if the iterator
    /// is empty.
    fn alloc_links(&mut self, iter: impl IntoIterator<Item = NodeId>) -> Option<Idx<NodeId>>;

    /// Returns a reference to the chain link at `idx`.
    fn get_link(&self, idx: Idx<NodeId>) -> &NodeId;

    /// Saves the current state of both arenas.
    fn checkpoint(&self) -> StoreCheckpoint;

    /// Rolls back both arenas to a previous checkpoint.
    fn rollback(&mut self, cp: StoreCheckpoint);

    /// Returns the total number of allocated items in each arena:
    /// `(nodes, links)`.
    ///
    /// Includes superseded path copies.
    fn arena_len(&self) -> (usize, usize);
}
