use crate::{CodePoint, Config, Token, Vocabulary, codec};

mod collision;
mod load;
mod state;

/// Decodes a string literal into code points.
fn cps(text: &str) -> Vec<CodePoint> {
    codec::decode_str(text)
}

/// Builds a vocabulary with the default configuration.
fn vocab(words: &[&str]) -> Vocabulary {
    vocab_with(words, Config::default())
}

fn vocab_with(words: &[&str], config: Config) -> Vocabulary {
    Vocabulary::build(words.iter().map(|w| cps(w)), config).expect("valid vocabulary")
}

/// Renders tokens as strings for comparison.
fn words(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(ToString::to_string).collect()
}

/// Tokenizes `input` and renders the tokens.
fn split(vocab: &Vocabulary, input: &str) -> Vec<String> {
    words(&vocab.tokenize(&cps(input)).expect("tokenize"))
}
