//! fnvrs
//!
//! Fowler-Noll-Vo (FNV) hashing for Rust.
//!
//! `fnvrs` computes FNV-1 and FNV-1a hashes at 32 and 64 bits over byte
//! sequences. The core is a streaming accumulator: feeding the same bytes in
//! any number of pieces gives the same result as hashing them all at once.
//!
//! FNV is fast and simple but NOT collision-resistant against adversarial
//! input. Do not use it where a cryptographic hash is needed.
//!
//! # One-shot and chunked
//!
//! ```
//! use fnvrs::{fnv1a_64, fnv1a_64_update, FNV64_OFFSET_BASIS};
//!
//! let mut hash = FNV64_OFFSET_BASIS;
//! fnv1a_64_update(b"foo", &mut hash);
//! fnv1a_64_update(b"bar", &mut hash);
//! assert_eq!(hash, fnv1a_64(b"foobar"));
//! ```
//!
//! # Streams
//!
//! ```no_run
//! use std::fs::File;
//! use fnvrs::{hash_reader, HashConfig, FnvError};
//!
//! fn main() -> Result<(), FnvError> {
//!     let file = File::open("data.bin")?;
//!     let digest = hash_reader(file, HashConfig::default())?;
//!     println!("{}", digest);
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use fnvrs::{hash_async, HashConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), fnvrs::FnvError> {
//!     let digest = hash_async(reader, HashConfig::default()).await?;
//!     println!("{}", digest);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod digest;
mod error;
mod hash;
mod lines;
mod reader;

mod buffer; // internal (thread-local reuse)

#[cfg(feature = "async-io")]
mod async_stream;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{HashConfig, HexCase, Variant, Width};
pub use digest::Digest;
pub use error::FnvError;
pub use hash::{
    FNV32_OFFSET_BASIS, FNV32_PRIME, FNV64_OFFSET_BASIS, FNV64_PRIME, FnvBuildHasher, FnvHasher,
    fnv1_32, fnv1_32_update, fnv1_64, fnv1_64_update, fnv1a_32, fnv1a_32_update, fnv1a_64,
    fnv1a_64_update, hash_chunked_update, hash_one_shot,
};
pub use lines::{HashedLine, LineHasher, LineIter, LineSplitter, hash_lines};
pub use reader::hash_reader;

#[cfg(feature = "async-io")]
pub use async_stream::{LineStream, hash_async, hash_lines_async};
