//! Line-oriented hashing.
//!
//! - [`LineSplitter`] - Streaming newline splitter with `push()`/`finish()` API
//! - [`LineHasher`], [`LineIter`] - Hash each line of a reader
//! - [`HashedLine`] - A line with its offset and digest

mod data;
mod iter;
mod splitter;

pub use data::HashedLine;
pub use iter::{LineHasher, LineIter, hash_lines};
pub use splitter::LineSplitter;
