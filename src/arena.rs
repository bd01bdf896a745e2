//! Arena-backed storage (single-threaded).

use safe_bump::{Arena, Idx};

use crate::node::{Node, NodeId};
use crate::store::{StoreCheckpoint, VocabStore};

/// Single-threaded storage backend using two [`Arena`]s.
pub struct VocabArena {
    nodes: Arena<Node>,
    links: Arena<NodeId>,
}

impl VocabArena {
    /// Creates an empty store.
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            links: Arena::new(),
        }
    }
}

impl Default for VocabArena {
    fn default() -> Self {
        Self::new()
    }
}

impl VocabStore for VocabArena {
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
