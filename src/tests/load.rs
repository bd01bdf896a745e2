use std::io::Cursor;

use pretty_assertions::assert_eq;

use super::{cps, vocab, words};
use crate::load::{read_definitions, tokenize_lines};
use crate::{Config, Error, Vocabulary};

#[test]
fn reads_one_definition_per_line() {
    let defs = read_definitions(Cursor::new("the\nthere\r\n\nis")).unwrap();
    assert_eq!(defs, [cps("the"), cps("there"), cps("is")]);
}

#[test]
fn reads_multibyte_definitions() {
    let defs = read_definitions(Cursor::new("→\nwörld\n")).unwrap();
    assert_eq!(defs, [cps("→"), cps("wörld")]);
}

#[test]
fn builds_from_reader() {
    let vocab = Vocabulary::from_reader(Cursor::new("the\nthere\nis\n"), Config::default())
        .unwrap();
    assert_eq!(vocab.len(), 3);
    assert!(vocab.contains(&cps("there")));
}

#[test]
fn from_reader_reports_long_lines() {
    let err = Vocabulary::from_reader(Cursor::new("ok\nmuch too long\n"), Config::default())
        .unwrap_err();
    assert!(matches!(err, Error::DefinitionTooLong { len: 13, max: 7 }));
}

#[test]
fn tokenizes_line_by_line() {
    let vocab = vocab(&["the", "there", "is"]);
    let tokens = tokenize_lines(&vocab, Cursor::new("thereis\nxthe\n")).unwrap();
    assert_eq!(words(&tokens), ["there", "is", "\n", "x", "the", "\n"]);
}

#[test]
fn last_line_without_newline() {
    let vocab = vocab(&["is"]);
    let tokens = tokenize_lines(&vocab, Cursor::new("a\nis")).unwrap();
    assert_eq!(words(&tokens), ["a", "\n", "is"]);
}

#[test]
fn empty_reader() {
    let vocab = vocab(&["is"]);
    assert!(tokenize_lines(&vocab, Cursor::new("")).unwrap().is_empty());
    assert!(read_definitions(Cursor::new("")).unwrap().is_empty());
}

#[test]
fn io_errors_propagate() {
    struct Broken;
    impl std::io::Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk on fire"))
        }
    }
    let reader = std::io::BufReader::new(Broken);
    let err = read_definitions(reader).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.to_string(), "disk on fire");
}

#[test]
fn malformed_bytes_do_not_truncate_a_line() {
    let vocab = vocab(&["is"]);
    let tokens = tokenize_lines(&vocab, Cursor::new(b"a\x80b\nis\n")).unwrap();
    assert_eq!(words(&tokens), ["a", "\u{FFFD}", "b", "\n", "is", "\n"]);
}

#[test]
fn malformed_lead_byte_keeps_the_definition() {
    let defs = read_definitions(Cursor::new(b"\x80abc\n")).unwrap();
    assert_eq!(defs, [vec![0xFFFD, 97, 98, 99]]);
}
