//! Per-line hashing - LineHasher and LineIter.
//!
//! - [`LineHasher`] - Configures and initiates per-line hashing
//! - [`LineIter`] - Iterator that yields hashed lines from a [`std::io::Read`] source
//!
//! # Example
//!
//! ```
//! use fnvrs::{LineHasher, HashConfig};
//! use std::io::Cursor;
//!
//! let hasher = LineHasher::new(HashConfig::default());
//! for line in hasher.lines(Cursor::new(&b"foo\nbar\n"[..])) {
//!     let line = line?;
//!     println!("{}", line.digest);
//! }
//! # Ok::<(), fnvrs::FnvError>(())
//! ```

use std::io::Read;

use bytes::Bytes;

use super::{HashedLine, LineSplitter};
use crate::buffer::Buffer;
use crate::config::HashConfig;
use crate::error::FnvError;
use crate::hash::hash_one_shot;

/// Hashes input one line at a time.
///
/// # Example
///
/// ```
/// use fnvrs::{LineHasher, HashConfig, Digest};
///
/// let hasher = LineHasher::new(HashConfig::default());
/// let lines = hasher.hash_bytes(&b"a\nfoobar"[..]);
///
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].digest, Digest::U64(0xaf63dc4c8601ec8c));
/// assert_eq!(lines[1].digest, Digest::U64(0x85944171f73967e8));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LineHasher {
    config: HashConfig,
}

impl LineHasher {
    /// Creates a new line hasher with the given configuration.
    pub fn new(config: HashConfig) -> Self {
        Self { config }
    }

    /// Creates an iterator over the hashed lines of `reader`.
    ///
    /// The reader is consumed lazily, one buffer at a time.
    pub fn lines<R: Read>(self, reader: R) -> LineIter<R> {
        LineIter::new(reader, self.config)
    }

    /// Hashes the lines of an in-memory buffer.
    ///
    /// Line data is sliced from `data` without copying.
    pub fn hash_bytes(&self, data: impl Into<Bytes>) -> Vec<HashedLine> {
        let data = data.into();
        let mut lines = Vec::new();
        let mut start = 0usize;

        for (i, &byte) in data.iter().enumerate() {
            if byte == b'\n' {
                lines.push(self.hash_line(data.slice(start..i), start as u64));
                start = i + 1;
            }
        }

        if start < data.len() {
            lines.push(self.hash_line(data.slice(start..), start as u64));
        }

        lines
    }

    pub(crate) fn hash_line(&self, data: Bytes, offset: u64) -> HashedLine {
        let digest = hash_one_shot(self.config.variant(), self.config.width(), &data);
        HashedLine {
            data,
            offset,
            digest,
        }
    }

    /// Returns the configuration used by this hasher.
    pub fn config(&self) -> &HashConfig {
        &self.config
    }
}

/// Hashes each line of `reader`.
///
/// Shorthand for `LineHasher::new(config).lines(reader)`.
pub fn hash_lines<R: Read>(reader: R, config: HashConfig) -> LineIter<R> {
    LineHasher::new(config).lines(reader)
}

/// An iterator that yields hashed lines from a reader.
///
/// Lines are split on `\n`, which is not part of the hashed data. A final line
/// without a newline is still yielded; an empty stream yields nothing. After
/// an I/O error the error is yielded once and the iterator ends.
pub struct LineIter<R> {
    reader: R,
    hasher: LineHasher,
    splitter: LineSplitter,
    buffer: Buffer,
    finished: bool,
}

impl<R: Read> LineIter<R> {
    fn new(reader: R, config: HashConfig) -> Self {
        log::trace!("hashing lines with {}", config);
        Self {
            reader,
            hasher: LineHasher::new(config),
            splitter: LineSplitter::new(),
            buffer: Buffer::take(),
            finished: false,
        }
    }
}

impl<R: Read> Iterator for LineIter<R> {
    type Item = Result<HashedLine, FnvError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            if let Some((offset, data)) = self.splitter.next_line() {
                return Some(Ok(self.hasher.hash_line(data, offset)));
            }

            match self.buffer.read_from(&mut self.reader) {
                Ok([]) => {
                    self.finished = true;
                    log::debug!("end of input after {} bytes", self.splitter.offset());
                    return self
                        .splitter
                        .finish()
                        .map(|(offset, data)| Ok(self.hasher.hash_line(data, offset)));
                }
                Ok(data) => self.splitter.push(data),
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}
