//! Trie node types, bucket chains and hashing helpers.

use std::fmt;

use safe_bump::Idx;

use crate::store::VocabStore;

/// One Unicode scalar value. `0` is reserved as [`TERMINATOR`].
pub type CodePoint = u32;

/// Sequence terminator; never part of real content.
pub const TERMINATOR: CodePoint = 0;

/// Number of buckets in the root table.
pub const ROOT_SIZE: usize = 32;

/// Number of buckets in every node's child table.
pub const CHILD_SIZE: usize = 4;

/// Index of a node in the nodes arena.
pub type NodeId = Idx<Node>;

/// One entry of the vocabulary trie.
///
/// Nodes are immutable once allocated; insertion path-copies instead of
/// mutating in place.
#[derive(Clone, Copy)]
pub struct Node {
    /// The code point this node matches.
    pub value: CodePoint,
    /// `true` if some token definition ends exactly here.
    pub is_endpoint: bool,
    /// Bucket chains of the next depth level.
    pub children: [Chain; CHILD_SIZE],
}

impl Node {
    /// Creates a non-endpoint node without children.
    #[must_use]
    pub const fn new(value: CodePoint) -> Self {
        Self {
            value,
            is_endpoint: false,
            children: [Chain::EMPTY; CHILD_SIZE],
        }
    }

    /// Returns `true` if at least one child bucket is populated.
    #[must_use]
    pub fn has_children(&self) -> bool {
        self.children.iter().any(|chain| !chain.is_empty())
    }
}

/// A hash bucket: contiguous run of node indices in the links arena.
///
/// Most recently inserted node first. Values within one chain are unique.
#[derive(Clone, Copy)]
pub struct Chain {
    start: Idx<NodeId>,
    len: usize,
}

impl Chain {
    /// The empty bucket.
    pub const EMPTY: Self = Self {
        start: Idx::from_raw(0),
        len: 0,
    };

    pub(crate) const fn from_parts(start: Idx<NodeId>, len: usize) -> Self {
        Self { start, len }
    }

    /// Number of nodes in the chain.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Returns `true` if the bucket holds no node.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Returns the node index at chain position `pos`.
    ///
    /// `pos` must be below [`len`](Self::len).
    pub fn get<S: VocabStore>(self, store: &S, pos: usize) -> NodeId {
        *store.get_link(offset(self.start, pos))
    }

    /// Iterates the chain's node indices head first.
    pub fn iter<S: VocabStore>(self, store: &S) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.len).map(move |pos| self.get(store, pos))
    }
}

/// Bucket index of `value` in a table of `size` buckets: `(value + 3) mod size`.
#[inline]
#[must_use]
pub fn bucket(value: CodePoint, size: usize) -> usize {
    let hashed = u64::from(value) + 3;
    // The remainder is below `size`, so it always fits.
    usize::try_from(hashed % size as u64).unwrap_or_default()
}

/// Returns the part of `seq` before the first [`TERMINATOR`].
#[must_use]
pub fn terminated(seq: &[CodePoint]) -> &[CodePoint] {
    seq.iter()
        .position(|&cp| cp == TERMINATOR)
        .map_or(seq, |end| &seq[..end])
}

/// Lowercases ASCII code points, leaves everything else unchanged.
#[inline]
#[must_use]
pub fn fold_ascii(value: CodePoint) -> CodePoint {
    u8::try_from(value)
        .ok()
        .filter(u8::is_ascii)
        .map_or(value, |byte| CodePoint::from(byte.to_ascii_lowercase()))
}

/// Offsets a base index by `n` positions.
#[inline]
#[must_use]
pub const fn offset<T>(base: Idx<T>, n: usize) -> Idx<T> {
    Idx::from_raw(base.into_raw() + n)
}

// ---------------------------------------------------------------------------
// Manual trait impls
// ---------------------------------------------------------------------------

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &format_args!("{:#x}", self.value))
            .field("is_endpoint", &self.is_endpoint)
            .field(
                "children",
                &format_args!("{:?}", self.children.map(Chain::len)),
            )
            .finish()
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("start", &self.start.into_raw())
            .field("len", &self.len)
            .finish()
    }
}
