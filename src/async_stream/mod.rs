//! Async hashing support.
//!
//! Built on the `futures-io::AsyncRead` trait, so it is runtime-agnostic and
//! works with tokio (through `tokio_util::compat`), async-std, smol and others.
//!
//! - [`hash_async`] - Hashes a whole async reader
//! - [`hash_lines_async`] - Creates an async stream of hashed lines
//!
//! This module requires the `async-io` feature to be enabled.

mod stream;

pub use stream::{LineStream, hash_async, hash_lines_async};
