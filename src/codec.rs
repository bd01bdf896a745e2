//! Boundary codec between UTF-8 bytes and code points.
//!
//! Neither direction validates well-formedness: malformed bytes decode to
//! some code-point sequence, and out-of-range code points encode to some
//! byte sequence. Both stop at [`TERMINATOR`] and at the caller's limit.
//! Decoding never yields [`TERMINATOR`] for a non-NUL byte: a sequence whose
//! bits come out as `0` decodes to [`REPLACEMENT`].

use crate::node::{CodePoint, TERMINATOR};

/// U+FFFD, substituted for malformed sequences that would decode to `0`.
pub const REPLACEMENT: CodePoint = 0xFFFD;

/// Decodes at most `max` code points from `bytes`.
///
/// Stops at a `0` byte, at `max`, or at the end of the slice. A lead byte
/// whose continuation bytes are cut off yields the bits read so far, or
/// [`REPLACEMENT`] if those bits are all zero.
#[must_use]
pub fn decode(bytes: &[u8], max: usize) -> Vec<CodePoint> {
    let mut out = Vec::new();
    let mut rest = bytes;
    while out.len() < max {
        let Some((&head, tail)) = rest.split_first() else {
            break;
        };
        if head == 0 {
            break;
        }
        rest = tail;
        if head.is_ascii() {
            out.push(CodePoint::from(head));
            continue;
        }

        let width = head.leading_ones();
        let mut value = CodePoint::from(head) & 0xFF_u32.checked_shr(width + 1).unwrap_or(0);
        for _ in 1..width {
            let Some((&cont, tail)) = rest.split_first() else {
                break;
            };
            if cont == 0 {
                break;
            }
            value = (value << 6) | CodePoint::from(cont & 0x3F);
            rest = tail;
        }
        out.push(if value == TERMINATOR { REPLACEMENT } else { value });
    }
    out
}

/// Decodes a Rust string; the validated counterpart of [`decode`].
///
/// Stops at the first NUL, like [`decode`].
#[must_use]
pub fn decode_str(text: &str) -> Vec<CodePoint> {
    text.chars()
        .map(CodePoint::from)
        .take_while(|&cp| cp != TERMINATOR)
        .collect()
}

/// Encodes code points into at most `max` bytes.
///
/// Stops at [`TERMINATOR`] or before the first character that would not fit.
#[must_use]
pub fn encode(code_points: &[CodePoint], max: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for &cp in code_points.iter().take_while(|&&cp| cp != TERMINATOR) {
        let width = encoded_len(cp);
        if out.len() + width > max {
            break;
        }
        push_encoded(&mut out, cp, width);
    }
    out
}

/// Renders code points as a string, replacing non-scalar values with
/// U+FFFD.
#[must_use]
pub fn to_string_lossy(code_points: &[CodePoint]) -> String {
    code_points
        .iter()
        .take_while(|&&cp| cp != TERMINATOR)
        .map(|&cp| char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Number of bytes `cp` occupies once encoded.
#[must_use]
pub const fn encoded_len(cp: CodePoint) -> usize {
    match cp {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    }
}

fn push_encoded(out: &mut Vec<u8>, cp: CodePoint, width: usize) {
    if width == 1 {
        out.push(low_byte(cp));
        return;
    }
    let lead = (0xFF_u32 << (8 - width)) | (cp >> ((width - 1) * 6));
    out.push(low_byte(lead));
    for i in (0..width - 1).rev() {
        out.push(low_byte((cp >> (6 * i)) & 0x3F) | 0x80);
    }
}

const fn low_byte(value: u32) -> u8 {
    value.to_le_bytes()[0]
}
