//! Owned scanner output.

use std::fmt;

use crate::codec;
use crate::error::Result;
use crate::node::CodePoint;

/// One recognized unit of input: a non-empty, independently owned run of
/// code points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(Box<[CodePoint]>);

impl Token {
    /// Copies `code_points` into a freshly allocated token.
    pub(crate) fn copy_from(code_points: &[CodePoint]) -> Result<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(code_points.len())?;
        buf.extend_from_slice(code_points);
        Ok(Self(buf.into_boxed_slice()))
    }

    /// Returns the token's code points.
    #[must_use]
    pub fn as_slice(&self) -> &[CodePoint] {
        &self.0
    }

    /// Number of code points in the token.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the token holds no code point. Scanner output is
    /// never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encodes the token as UTF-8 bytes.
    #[must_use]
    pub fn to_utf8(&self) -> Vec<u8> {
        codec::encode(&self.0, usize::MAX)
    }

    /// Consumes the token, returning its code points.
    #[must_use]
    pub fn into_vec(self) -> Vec<CodePoint> {
        self.0.into_vec()
    }
}

impl AsRef<[CodePoint]> for Token {
    fn as_ref(&self) -> &[CodePoint] {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::to_string_lossy(&self.0))
    }
}
