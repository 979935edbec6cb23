//! Newline splitter with a streaming `push()`/`next_line()`/`finish()` API.
//!
//! Bytes may be pushed in pieces of any size; the lines that come out are the
//! same regardless of how the stream was cut up.
//!
//! # Example
//!
//! ```
//! use fnvrs::LineSplitter;
//!
//! let mut splitter = LineSplitter::new();
//! splitter.push(b"one\ntw");
//! splitter.push(b"o\nthree");
//!
//! assert_eq!(splitter.next_line().unwrap().1, &b"one"[..]);
//! assert_eq!(splitter.next_line().unwrap().1, &b"two"[..]);
//! assert!(splitter.next_line().is_none());
//!
//! let (offset, last) = splitter.finish().unwrap();
//! assert_eq!((offset, &last[..]), (8, &b"three"[..]));
//! ```

use bytes::{Bytes, BytesMut};

/// Splits a byte stream into lines.
///
/// A line is everything up to and excluding a `\n`. A carriage return before
/// the newline is kept as part of the line. Each line is returned together
/// with its byte offset in the stream.
#[derive(Debug, Default)]
pub struct LineSplitter {
    pending: BytesMut,
    scanned: usize,
    offset: u64,
}

impl LineSplitter {
    /// Creates an empty splitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends bytes to the stream.
    pub fn push(&mut self, data: &[u8]) {
        self.pending.extend_from_slice(data);
    }

    /// Returns the next complete line and its offset, if one is buffered.
    ///
    /// The terminating `\n` is stripped. Call repeatedly until `None` before
    /// pushing more data or finishing.
    pub fn next_line(&mut self) -> Option<(u64, Bytes)> {
        let found = self.pending[self.scanned..]
            .iter()
            .position(|&b| b == b'\n');

        match found {
            Some(pos) => {
                let end = self.scanned + pos;
                let mut line = self.pending.split_to(end + 1);
                line.truncate(end);

                let line_offset = self.offset;
                self.offset += (end + 1) as u64;
                self.scanned = 0;
                Some((line_offset, line.freeze()))
            }
            None => {
                self.scanned = self.pending.len();
                None
            }
        }
    }

    /// Flushes the trailing unterminated line, if any.
    ///
    /// Complete lines still buffered are returned first; call
    /// [`next_line`](Self::next_line) until it yields `None` to avoid that.
    /// After the stream is drained the splitter can be reused.
    pub fn finish(&mut self) -> Option<(u64, Bytes)> {
        if let Some(line) = self.next_line() {
            return Some(line);
        }
        if self.pending.is_empty() {
            return None;
        }

        let line = self.pending.split().freeze();
        let line_offset = self.offset;
        self.offset += line.len() as u64;
        self.scanned = 0;
        Some((line_offset, line))
    }

    /// Resets the splitter for a new stream.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.scanned = 0;
        self.offset = 0;
    }

    /// Returns the stream offset of the next line to be emitted.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the number of bytes waiting for a newline.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
