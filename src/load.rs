//! Line-oriented reading of definitions and input.
//!
//! Bytes go through the non-validating [`codec::decode`]; a NUL byte ends
//! the line's content.

use std::io::BufRead;

use tracing::debug;

use crate::codec;
use crate::error::Result;
use crate::node::CodePoint;
use crate::store::VocabStore;
use crate::token::Token;
use crate::vocab::VocabTrie;

/// Reads one definition per line. Line endings (`\n` or `\r\n`) are
/// stripped and empty lines skipped.
///
/// # Errors
///
/// [`Error::Io`](crate::Error::Io) if reading fails.
pub fn read_definitions<R: BufRead>(reader: R) -> Result<Vec<Vec<CodePoint>>> {
    let mut definitions = Vec::new();
    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        let definition = codec::decode(&line, usize::MAX);
        if !definition.is_empty() {
            definitions.push(definition);
        }
    }
    debug!(definitions = definitions.len(), "read token definitions");
    Ok(definitions)
}

/// Tokenizes `reader` line by line and concatenates the tokens.
///
/// Line endings are content and come out as tokens too.
///
/// # Errors
///
/// [`Error::Io`](crate::Error::Io) if reading fails, and every scanner
/// error.
pub fn tokenize_lines<R: BufRead, S: VocabStore>(
    vocab: &VocabTrie<S>,
    mut reader: R,
) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut line = Vec::new();
    let mut lines = 0_usize;
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        lines += 1;
        let code_points = codec::decode(&line, usize::MAX);
        let mut line_tokens = vocab.tokenize(&code_points)?;
        tokens.try_reserve(line_tokens.len())?;
        tokens.append(&mut line_tokens);
    }
    debug!(lines, tokens = tokens.len(), "tokenized reader");
    Ok(tokens)
}
