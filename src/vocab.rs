//! The vocabulary trie: a root table of bucket chains over an arena store.

use std::fmt;
use std::io::BufRead;
use std::ops::Range;

use tracing::{debug, trace};

use crate::VocabCheckpoint;
use crate::arena::VocabArena;
use crate::arena_sync::VocabArenaSync;
use crate::config::Config;
use crate::dump::Dump;
use crate::error::{Error, Result};
use crate::iter::Definitions;
use crate::load;
use crate::node::{self, CHILD_SIZE, Chain, CodePoint, Node, NodeId, ROOT_SIZE};
use crate::ops::destroy::release_recursive;
use crate::ops::find::{find_in_chain, walk};
use crate::ops::insert::insert_recursive;
use crate::scanner::{self, Spans};
use crate::store::VocabStore;
use crate::token::Token;

/// Vocabulary trie on a single-threaded arena.
pub type Vocabulary = VocabTrie<VocabArena>;

/// Vocabulary trie on a thread-safe arena; `Send + Sync`.
pub type VocabularySync = VocabTrie<VocabArenaSync>;

/// A table to probe with [`VocabTrie::find`].
///
/// A [`NodeId`] is a handle into the current trie state only. Insertion
/// path-copies, so a handle taken before a mutation may point at a
/// superseded copy, and one taken before a [`rollback`](VocabTrie::rollback)
/// may point past the arena. Re-resolve handles from [`Table::Root`] after
/// every mutation.
#[derive(Clone, Copy)]
pub enum Table {
    /// The root table ([`ROOT_SIZE`] buckets).
    Root,
    /// The child table of a node ([`CHILD_SIZE`] buckets).
    Children(NodeId),
}

/// Existence table of token definitions, chained hash of hashes.
///
/// Every depth-0 code point hashes into the root table; every deeper code
/// point hashes into the child table of the node before it. Built once,
/// then shared read-only by any number of scans.
pub struct VocabTrie<S> {
    store: S,
    root: [Chain; ROOT_SIZE],
    config: Config,
    nodes: usize,
    len: usize,
}

// ---------------------------------------------------------------------------
// Accessors, no trait bounds
// ---------------------------------------------------------------------------

impl<S> VocabTrie<S> {
    /// Returns the configuration bound to this trie.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the number of distinct token definitions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no definition has been inserted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of live trie nodes (distinct prefixes).
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.nodes
    }
}

impl<S: VocabStore + Default> VocabTrie<S> {
    /// Creates an empty trie bound to `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            store: S::default(),
            root: [Chain::EMPTY; ROOT_SIZE],
            config,
            nodes: 0,
            len: 0,
        }
    }

    /// Builds a trie from a batch of definitions, inserted in order.
    ///
    /// Empty definitions are skipped.
    ///
    /// # Errors
    ///
    /// [`Error::TooManyDefinitions`] if more than `config.max_definitions`
    /// non-empty definitions are given, [`Error::DefinitionTooLong`] if any
    /// definition exceeds `config.max_token_len`.
    pub fn build<I, D>(definitions: I, config: Config) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: AsRef<[CodePoint]>,
    {
        let definitions: Vec<D> = definitions.into_iter().collect();
        let count = definitions
            .iter()
            .filter(|def| !node::terminated(def.as_ref()).is_empty())
            .count();
        if count > config.max_definitions {
            return Err(Error::TooManyDefinitions {
                count,
                max: config.max_definitions,
            });
        }

        let mut vocab = Self::new(config);
        for def in &definitions {
            vocab.insert(def.as_ref())?;
        }
        debug!(
            definitions = count,
            tokens = vocab.len,
            nodes = vocab.nodes,
            "built vocabulary"
        );
        Ok(vocab)
    }

    /// Builds a trie from one definition per line of `reader`.
    ///
    /// # Errors
    ///
    /// Read failures and every error of [`build`](Self::build).
    pub fn from_reader<R: BufRead>(reader: R, config: Config) -> Result<Self> {
        Self::build(load::read_definitions(reader)?, config)
    }
}

// ---------------------------------------------------------------------------
// Write operations
// ---------------------------------------------------------------------------

impl<S: VocabStore> VocabTrie<S> {
    /// Inserts one token definition.
    ///
    /// The definition ends at its first `0`, if any. With case folding on,
    /// ASCII code points are stored lowercased. Inserting a definition that
    /// is already present changes nothing.
    ///
    /// Returns the depth-0 node of the definition, or `None` if it is empty.
    /// The handle is valid until the next mutation of the trie.
    ///
    /// # Errors
    ///
    /// [`Error::DefinitionTooLong`] if the definition exceeds
    /// `max_token_len`; the trie is left unchanged.
    pub fn insert(&mut self, definition: &[CodePoint]) -> Result<Option<NodeId>> {
        let seq = self.prepare(definition)?;
        let Some((&first, rest)) = seq.split_first() else {
            return Ok(None);
        };

        let bucket = node::bucket(first, ROOT_SIZE);
        let outcome = insert_recursive(&mut self.store, self.root[bucket], first, rest);
        self.root[bucket] = outcome.chain;
        self.nodes += outcome.created;
        if outcome.changed {
            self.len += 1;
        }
        trace!(
            len = seq.len(),
            created = outcome.created,
            new_token = outcome.changed,
            "inserted definition"
        );
        Ok(Some(outcome.node))
    }

    /// Inserts a batch of definitions, all or nothing.
    ///
    /// Only `max_token_len` applies; `max_definitions` bounds
    /// [`build`](Self::build) alone, so a built trie may keep growing.
    ///
    /// # Errors
    ///
    /// The first insertion error; every definition of the batch inserted
    /// before it is rolled back.
    pub fn extend_atomic<I, D>(&mut self, definitions: I) -> Result<()>
    where
        I: IntoIterator<Item = D>,
        D: AsRef<[CodePoint]>,
    {
        let cp = self.checkpoint();
        for def in definitions {
            if let Err(err) = self.insert(def.as_ref()) {
                self.rollback(cp);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Saves the current trie state for later rollback.
    #[must_use]
    pub fn checkpoint(&self) -> VocabCheckpoint {
        VocabCheckpoint {
            store: self.store.checkpoint(),
            root: self.root,
            nodes: self.nodes,
            len: self.len,
        }
    }

    /// Restores the trie to a previously saved checkpoint.
    ///
    /// All insertions made after the checkpoint are discarded.
    pub fn rollback(&mut self, cp: VocabCheckpoint) {
        self.store.rollback(cp.store);
        self.root = cp.root;
        self.nodes = cp.nodes;
        self.len = cp.len;
    }

    fn prepare(&self, definition: &[CodePoint]) -> Result<Vec<CodePoint>> {
        let seq = node::terminated(definition);
        if seq.len() > self.config.max_token_len {
            return Err(Error::DefinitionTooLong {
                len: seq.len(),
                max: self.config.max_token_len,
            });
        }
        let mut folded = Vec::new();
        folded.try_reserve_exact(seq.len())?;
        folded.extend(seq.iter().map(|&cp| self.config.fold(cp)));
        Ok(folded)
    }
}

// ---------------------------------------------------------------------------
// Read operations
// ---------------------------------------------------------------------------

impl<S: VocabStore> VocabTrie<S> {
    /// Looks up one code point in `table`, folding it if configured.
    #[must_use]
    pub fn find(&self, table: Table, value: CodePoint) -> Option<NodeId> {
        let value = self.config.fold(value);
        let chain = match table {
            Table::Root => self.root[node::bucket(value, ROOT_SIZE)],
            Table::Children(parent) => {
                self.store.get_node(parent).children[node::bucket(value, CHILD_SIZE)]
            }
        };
        find_in_chain(&self.store, chain, value).map(|(_, idx)| idx)
    }

    /// Returns the node at `id`.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        self.store.get_node(id)
    }

    /// Returns `true` if `seq` is a complete token.
    #[must_use]
    pub fn contains(&self, seq: &[CodePoint]) -> bool {
        self.lookup(seq)
            .is_some_and(|id| self.store.get_node(id).is_endpoint)
    }

    /// Returns `true` if `seq` is a non-empty prefix of some token (a token
    /// counts as its own prefix).
    #[must_use]
    pub fn is_prefix(&self, seq: &[CodePoint]) -> bool {
        self.lookup(seq).is_some()
    }

    /// Iterates every stored token, in stored (folded) form.
    #[must_use]
    pub fn definitions(&self) -> Definitions {
        Definitions::new(&self.store, &self.root)
    }

    /// Returns the total number of allocated items in each arena:
    /// `(nodes, links)`.
    ///
    /// Includes superseded path copies.
    #[must_use]
    pub fn arena_len(&self) -> (usize, usize) {
        self.store.arena_len()
    }

    /// Renders the bucket/chain/endpoint structure for inspection.
    ///
    /// With `verbose`, empty buckets are listed too.
    #[must_use]
    pub const fn dump(&self, verbose: bool) -> Dump<'_, S> {
        Dump::new(&self.store, &self.root, verbose)
    }

    fn lookup(&self, seq: &[CodePoint]) -> Option<NodeId> {
        let folded: Vec<CodePoint> = node::terminated(seq)
            .iter()
            .map(|&cp| self.config.fold(cp))
            .collect();
        walk(&self.store, &self.root, &folded)
    }
}

// ---------------------------------------------------------------------------
// Scanning
// ---------------------------------------------------------------------------

impl<S: VocabStore> VocabTrie<S> {
    /// Splits `input` into greedy longest-match tokens.
    ///
    /// The input ends at its first `0`, if any. Concatenating the tokens
    /// reproduces the input.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] if a token buffer cannot be allocated.
    pub fn tokenize(&self, input: &[CodePoint]) -> Result<Vec<Token>> {
        scanner::tokenize(self, input)
    }

    /// Like [`tokenize`](Self::tokenize), with room for at most `capacity`
    /// tokens.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the input yields more tokens.
    pub fn tokenize_bounded(&self, input: &[CodePoint], capacity: usize) -> Result<Vec<Token>> {
        scanner::tokenize_bounded(self, input, capacity)
    }

    /// Iterates the token spans of `input` without copying.
    #[must_use]
    pub fn spans<'a>(&'a self, input: &'a [CodePoint]) -> Spans<'a, S> {
        Spans::new(self, input)
    }

    /// Returns the token span starting at `start`, or `None` past the end.
    #[must_use]
    pub fn span_at(&self, input: &[CodePoint], start: usize) -> Option<Range<usize>> {
        scanner::scan_one(self, node::terminated(input), start).map(|(span, _)| span)
    }
}

// ---------------------------------------------------------------------------
// Teardown
// ---------------------------------------------------------------------------

impl<S: VocabStore> VocabTrie<S> {
    /// Tears the trie down, returning the number of nodes released.
    pub fn destroy(self) -> usize {
        let released = release_recursive(&self.store, &self.root);
        debug!(
            released,
            arena = ?self.store.arena_len(),
            "destroyed vocabulary"
        );
        released
    }
}

/// Tears down `vocab` if present; `None` is a no-op releasing nothing.
pub fn destroy<S: VocabStore>(vocab: Option<VocabTrie<S>>) -> usize {
    vocab.map_or(0, VocabTrie::destroy)
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<S: VocabStore + Default> Default for VocabTrie<S> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<S> fmt::Debug for VocabTrie<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VocabTrie")
            .field("len", &self.len)
            .field("nodes", &self.nodes)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
