//! Greedy longest-match scanner.
//!
//! A candidate token grows from `start` while the trie recognizes it. The
//! longest recognized prefix seen so far is the checkpoint: when the
//! candidate cannot grow, that prefix is cut and scanning restarts right
//! after it. Without any recognized prefix, the first code point of the
//! candidate is cut alone and scanning restarts one code point later.
//!
//! Code points past the checkpoint are re-offered from the restart point,
//! never skipped, so the tokens always cover the input exactly.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::node::{self, CodePoint, NodeId};
use crate::store::VocabStore;
use crate::token::Token;
use crate::vocab::{Table, VocabTrie};

/// Whether a candidate is still growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The candidate may still be extended.
    Scanning,
    /// The candidate is final; its token is ready to be cut.
    Flushing,
}

/// Result of probing the current table with the next input code point.
#[derive(Clone, Copy)]
pub enum Probe {
    /// The code point continues the candidate at `node`.
    Hit {
        /// The matched node.
        node: NodeId,
        /// `true` if a definition ends at `node`.
        is_endpoint: bool,
    },
    /// The code point does not continue the candidate, or input ended.
    Miss,
}

/// State of one candidate token.
#[derive(Clone, Copy)]
pub struct ScanState {
    /// Current phase.
    pub phase: Phase,
    /// Input position where the candidate begins.
    pub start: usize,
    /// Code points consumed into the candidate.
    pub cursor: usize,
    /// Length of the longest recognized prefix of the candidate, `0` if none.
    pub last_endpoint_len: usize,
    /// Input position to restart from once the candidate is cut.
    pub resume_at: usize,
    /// Table to probe with the next code point.
    pub table: Table,
}

impl ScanState {
    /// Starts a candidate at input position `start`.
    #[must_use]
    pub const fn new(start: usize) -> Self {
        Self {
            phase: Phase::Scanning,
            start,
            cursor: 0,
            last_endpoint_len: 0,
            resume_at: start + 1,
            table: Table::Root,
        }
    }

    /// Input position of the next code point to probe.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.start + self.cursor
    }

    /// Applies one probe result. A flushing state is left unchanged.
    #[must_use]
    pub const fn step(self, probe: Probe) -> Self {
        if matches!(self.phase, Phase::Flushing) {
            return self;
        }
        let mut next = self;
        match probe {
            Probe::Hit { node, is_endpoint } => {
                next.cursor += 1;
                if is_endpoint {
                    next.last_endpoint_len = next.cursor;
                    next.resume_at = next.start + next.cursor;
                }
                next.table = Table::Children(node);
            }
            Probe::Miss => {
                if next.last_endpoint_len == 0 {
                    next.last_endpoint_len = 1;
                    next.resume_at = next.start + 1;
                }
                next.phase = Phase::Flushing;
            }
        }
        next
    }

    /// Input span of the token to cut, once flushing.
    #[must_use]
    pub const fn token(&self) -> Option<Range<usize>> {
        match self.phase {
            Phase::Scanning => None,
            Phase::Flushing => Some(self.start..self.start + self.last_endpoint_len),
        }
    }

    /// Starts the next candidate at the restart point.
    #[must_use]
    pub const fn restart(self) -> Self {
        Self::new(self.resume_at)
    }
}

impl fmt::Debug for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanState")
            .field("phase", &self.phase)
            .field("start", &self.start)
            .field("cursor", &self.cursor)
            .field("last_endpoint_len", &self.last_endpoint_len)
            .field("resume_at", &self.resume_at)
            .finish_non_exhaustive()
    }
}

/// Probes `vocab` with the code point at the state's position.
fn probe<S: VocabStore>(vocab: &VocabTrie<S>, input: &[CodePoint], state: &ScanState) -> Probe {
    input
        .get(state.position())
        .and_then(|&cp| vocab.find(state.table, cp))
        .map_or(Probe::Miss, |node| Probe::Hit {
            node,
            is_endpoint: vocab.node(node).is_endpoint,
        })
}

/// Scans one candidate starting at `start` of an already terminated input.
///
/// Returns the token span and the restart position, or `None` if `start` is
/// past the end.
pub fn scan_one<S: VocabStore>(
    vocab: &VocabTrie<S>,
    input: &[CodePoint],
    start: usize,
) -> Option<(Range<usize>, usize)> {
    if start >= input.len() {
        return None;
    }
    let mut state = ScanState::new(start);
    loop {
        if let Some(span) = state.token() {
            return Some((span, state.resume_at));
        }
        state = state.step(probe(vocab, input, &state));
    }
}

/// Iterator over the token spans of one input.
pub struct Spans<'a, S> {
    vocab: &'a VocabTrie<S>,
    input: &'a [CodePoint],
    next: usize,
}

impl<'a, S: VocabStore> Spans<'a, S> {
    /// Creates the iterator; `input` ends at its first `0`, if any.
    #[must_use]
    pub fn new(vocab: &'a VocabTrie<S>, input: &'a [CodePoint]) -> Self {
        Self {
            vocab,
            input: node::terminated(input),
            next: 0,
        }
    }

    /// The scanned input, without terminator.
    #[must_use]
    pub const fn input(&self) -> &'a [CodePoint] {
        self.input
    }
}

impl<S: VocabStore> Iterator for Spans<'_, S> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let (span, resume_at) = scan_one(self.vocab, self.input, self.next)?;
        self.next = resume_at;
        Some(span)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.input.len().saturating_sub(self.next);
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl<S: VocabStore> FusedIterator for Spans<'_, S> {}

/// Splits `input` into owned tokens with room for at most `capacity`.
///
/// # Errors
///
/// [`Error::CapacityExceeded`] past `capacity` tokens,
/// [`Error::Allocation`] if a buffer cannot be allocated.
pub fn tokenize_bounded<S: VocabStore>(
    vocab: &VocabTrie<S>,
    input: &[CodePoint],
    capacity: usize,
) -> Result<Vec<Token>> {
    let spans = Spans::new(vocab, input);
    let input = spans.input();
    let mut tokens = Vec::new();
    tokens.try_reserve_exact(input.len().min(capacity))?;

    for span in spans {
        if tokens.len() == capacity {
            debug!(capacity, consumed = span.start, "scanner output capacity exceeded");
            return Err(Error::CapacityExceeded { capacity });
        }
        tokens.push(Token::copy_from(&input[span])?);
    }
    trace!(input_len = input.len(), tokens = tokens.len(), "tokenized input");
    Ok(tokens)
}

/// Splits `input` into owned tokens.
///
/// Capacity is one token per input code point, which no input can exceed.
///
/// # Errors
///
/// [`Error::Allocation`] if a buffer cannot be allocated.
pub fn tokenize<S: VocabStore>(vocab: &VocabTrie<S>, input: &[CodePoint]) -> Result<Vec<Token>> {
    tokenize_bounded(vocab, input, node::terminated(input).len())
}
