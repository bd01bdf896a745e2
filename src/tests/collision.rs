use super::{cps, split, vocab};
use crate::Table;
use crate::node::{CHILD_SIZE, ROOT_SIZE, bucket};

#[test]
fn hash_function() {
    assert_eq!(bucket(0, ROOT_SIZE), 3);
    assert_eq!(bucket(29, ROOT_SIZE), 0);
    assert_eq!(bucket(u32::from('a'), ROOT_SIZE), 4);
    assert_eq!(bucket(u32::from('b'), CHILD_SIZE), 1);
    assert_eq!(bucket(u32::MAX, CHILD_SIZE), 2);
}

/// `'A'` (0x41) and `'a'` (0x61) share root bucket 4.
#[test]
fn root_bucket_collision() {
    assert_eq!(bucket('A'.into(), ROOT_SIZE), bucket('a'.into(), ROOT_SIZE));
    let vocab = vocab(&["a", "A"]);
    assert_eq!(vocab.len(), 2);
    assert!(vocab.contains(&cps("a")));
    assert!(vocab.contains(&cps("A")));
    assert_eq!(split(&vocab, "aAa"), ["a", "A", "a"]);
}

/// `'b'` and `'f'` share child bucket 1.
#[test]
fn child_bucket_collision() {
    assert_eq!(bucket('b'.into(), CHILD_SIZE), bucket('f'.into(), CHILD_SIZE));
    let vocab = vocab(&["ab", "af", "aj"]);
    let a = vocab.find(Table::Root, 'a'.into()).unwrap();
    let chain = vocab.node(a).children[1];
    assert_eq!(chain.len(), 3);
    assert!(vocab.contains(&cps("ab")));
    assert!(vocab.contains(&cps("af")));
    assert!(vocab.contains(&cps("aj")));
    assert!(!vocab.contains(&cps("an")));
}

#[test]
fn many_values_in_one_root_bucket() {
    let words: Vec<String> = (0..8)
        .map(|i| char::from_u32(0x4E00 + i * 32).unwrap().to_string())
        .collect();
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    let vocab = vocab(&refs);
    let first = u32::from(words[0].chars().next().unwrap());
    let expected = bucket(first, ROOT_SIZE);
    for word in &words {
        let value = u32::from(word.chars().next().unwrap());
        assert_eq!(bucket(value, ROOT_SIZE), expected);
        assert!(vocab.contains(&cps(word)));
    }
    assert_eq!(vocab.len(), 8);
}

#[test]
fn colliding_value_does_not_match() {
    let vocab = vocab(&["a"]);
    // 'A' hashes to the same bucket but is a different value.
    assert!(vocab.find(Table::Root, 'A'.into()).is_none());
}
