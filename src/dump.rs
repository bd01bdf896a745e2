//! Diagnostic rendering of the trie's bucket structure.
//!
//! One line per populated bucket (`[index]`) followed by one line per chain
//! entry (`{position}: value 'hex'`, then `*` for an endpoint or a space).
//! Child tables are indented one tab deeper than their parent.

use std::fmt::{self, Write};

use crate::node::{Chain, ROOT_SIZE};
use crate::store::VocabStore;

/// Display adapter returned by [`VocabTrie::dump`](crate::VocabTrie::dump).
pub struct Dump<'a, S> {
    store: &'a S,
    root: &'a [Chain; ROOT_SIZE],
    verbose: bool,
}

impl<'a, S> Dump<'a, S> {
    pub(crate) const fn new(store: &'a S, root: &'a [Chain; ROOT_SIZE], verbose: bool) -> Self {
        Self {
            store,
            root,
            verbose,
        }
    }
}

impl<S: VocabStore> fmt::Display for Dump<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, self.store, self.root, 0, self.verbose)
    }
}

fn write_table<S: VocabStore>(
    f: &mut fmt::Formatter<'_>,
    store: &S,
    chains: &[Chain],
    level: usize,
    verbose: bool,
) -> fmt::Result {
    for (i, chain) in chains.iter().enumerate() {
        if chain.is_empty() {
            if verbose {
                indent(f, level)?;
                writeln!(f, "[{i}]: NULL")?;
            }
            continue;
        }
        indent(f, level)?;
        writeln!(f, "[{i}]")?;
        for (k, idx) in chain.iter(store).enumerate() {
            let node = store.get_node(idx);
            let marker = if node.is_endpoint { '*' } else { ' ' };
            indent(f, level)?;
            writeln!(f, "{{{k}}}: value '{:x}'{marker}", node.value)?;
            write_table(f, store, &node.children, level + 1, verbose)?;
        }
    }
    Ok(())
}

fn indent(f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
    for _ in 0..level {
        f.write_char('\t')?;
    }
    Ok(())
}
