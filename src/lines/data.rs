//! The HashedLine type - one line of input and its digest.

use bytes::Bytes;
use std::fmt;

use crate::digest::Digest;

/// A line of input together with its hash.
///
/// # Example
///
/// ```
/// use fnvrs::{HashedLine, Digest};
/// use bytes::Bytes;
///
/// let line = HashedLine {
///     data: Bytes::from_static(b"a"),
///     offset: 0,
///     digest: Digest::U64(0xaf63dc4c8601ec8c),
/// };
///
/// assert_eq!(line.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedLine {
    /// The line contents, without the terminating newline.
    pub data: Bytes,

    /// Byte offset of the line start in the original stream.
    pub offset: u64,

    /// The hash of `data`.
    pub digest: Digest,
}

impl HashedLine {
    /// Returns the length of the line contents.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the line is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Display for HashedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @{} ({} bytes)", self.digest, self.offset, self.len())
    }
}
