//! Shared-arena-backed storage (multi-threaded).

use safe_bump::{Idx, SharedArena};

use crate::node::{Node, NodeId};
use crate::store::{StoreCheckpoint, VocabStore};

/// Thread-safe storage backend using two [`SharedArena`]s.
///
/// A trie built on this store is `Send + Sync`, so one vocabulary can serve
/// scans from several threads at once.
pub struct VocabArenaSync {
    nodes: SharedArena<Node>,
    links: SharedArena<NodeId>,
}

impl VocabArenaSync {
    /// Creates an empty store.
    pub const fn new() -> Self {
        Self {
            nodes: SharedArena::new(),
            links: SharedArena::new(),
        }
    }
}

impl Default for VocabArenaSync {
    fn default() -> Self {
        Self::new()
    }
}

impl VocabStore for VocabArenaSync {
    fn alloc_node(&mut self, node: Node) -> NodeId {
        self.nodes.alloc(node)
    }

    fn get_node(&self, idx: NodeId) -> &Node {
        self.nodes.get(idx)
    }

    fn alloc_links(&mut self, iter: impl IntoIterator<Item = NodeId>) -> Option<Idx<NodeId>> {
        self.links.alloc_extend(iter)
    }

    fn get_link(&self, idx: Idx<NodeId>) -> &NodeId {
        self.links.get(idx)
    }

    fn checkpoint(&self) -> StoreCheckpoint {
        StoreCheckpoint {
            nodes: self.nodes.checkpoint(),
            links: self.links.checkpoint(),
        }
    }

    fn rollback(&mut self, cp: StoreCheckpoint) {
        self.nodes.rollback(cp.nodes);
        self.links.rollback(cp.links);
    }

    fn arena_len(&self) -> (usize, usize) {
        (self.nodes.len(), self.links.len())
    }
}
