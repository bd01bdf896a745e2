//! Insertion operation: path-copy insert of one token definition.
//!
//! Nodes and chains are never mutated in place. Every node on the path from
//! the touched bucket down to the final code point is copied, and every chain
//! holding a copied node is re-allocated with the copy in the old position.
//! Re-inserting an existing definition allocates nothing.

use crate::node::{self, CHILD_SIZE, Chain, CodePoint, Node, NodeId};
use crate::ops::find::find_in_chain;
use crate::store::VocabStore;

/// Outcome of a recursive insert.
pub struct InsertOutcome {
    /// The bucket chain to store in place of the one passed in.
    pub chain: Chain,
    /// Index of the node matching the first code point (new copy if changed).
    pub node: NodeId,
    /// Number of logically new nodes created below and including `node`.
    pub created: usize,
    /// `false` if the definition was already present and nothing was allocated.
    pub changed: bool,
}

/// Inserts the sequence `value, rest..` into the table bucket `chain`.
///
/// `value` is the code point hashed into `chain` by the caller; `rest` goes
/// into the child tables below it.
pub fn insert_recursive<S: VocabStore>(
    store: &mut S,
    chain: Chain,
    value: CodePoint,
    rest: &[CodePoint],
) -> InsertOutcome {
    let Some((pos, idx)) = find_in_chain(&*store, chain, value) else {
        let (node, created) = create_path(store, value, rest);
        return InsertOutcome {
            chain: prepend_link(store, chain, node),
            node,
            created,
            changed: true,
        };
    };

    let mut created = 0;
    let existing = *store.get_node(idx);
    let Some(updated) = extend_node(store, existing, rest, &mut created) else {
        return InsertOutcome {
            chain,
            node: idx,
            created: 0,
            changed: false,
        };
    };

    let node = store.alloc_node(updated);
    InsertOutcome {
        chain: replace_link(store, chain, pos, node),
        node,
        created,
        changed: true,
    }
}

/// Allocates a fresh node for `value` with a fresh path for `rest` below it.
///
/// Returns the node and the number of nodes created.
fn create_path<S: VocabStore>(
    store: &mut S,
    value: CodePoint,
    rest: &[CodePoint],
) -> (NodeId, usize) {
    let mut node = Node::new(value);
    let mut created = 1;
    match rest.split_first() {
        None => node.is_endpoint = true,
        Some((&next, tail)) => {
            let (child, below) = create_path(store, next, tail);
            node.children[node::bucket(next, CHILD_SIZE)] = alloc_chain(store, vec![child]);
            created += below;
        }
    }
    (store.alloc_node(node), created)
}

/// Returns a copy of `node` with `rest` inserted below it, or `None` if
/// `rest` is already present and `node` needs no change.
fn extend_node<S: VocabStore>(
    store: &mut S,
    node: Node,
    rest: &[CodePoint],
    created: &mut usize,
) -> Option<Node> {
    match rest.split_first() {
        None => (!node.is_endpoint).then_some(Node {
            is_endpoint: true,
            ..node
        }),
        Some((&next, tail)) => {
            let bucket = node::bucket(next, CHILD_SIZE);
            let outcome = insert_recursive(store, node.children[bucket], next, tail);
            if !outcome.changed {
                return None;
            }
            *created += outcome.created;
            let mut updated = node;
            updated.children[bucket] = outcome.chain;
            Some(updated)
        }
    }
}

/// Allocates a copy of `chain` with `node` at the head.
fn prepend_link<S: VocabStore>(store: &mut S, chain: Chain, node: NodeId) -> Chain {
    let links: Vec<NodeId> = std::iter::once(node).chain(chain.iter(&*store)).collect();
    alloc_chain(store, links)
}

/// Allocates a copy of `chain` with the link at `pos` replaced by `node`.
fn replace_link<S: VocabStore>(store: &mut S, chain: Chain, pos: usize, node: NodeId) -> Chain {
    let links: Vec<NodeId> = chain
        .iter(&*store)
        .enumerate()
        .map(|(i, idx)| if i == pos { node } else { idx })
        .collect();
    alloc_chain(store, links)
}

fn alloc_chain<S: VocabStore>(store: &mut S, links: Vec<NodeId>) -> Chain {
    let len = links.len();
    store
        .alloc_links(links)
        .map_or(Chain::EMPTY, |start| Chain::from_parts(start, len))
}
