//! Internal read buffers.
//!
//! A thread-local pool of fixed-size buffers used by the reader adapters.
//! It is an implementation detail and not part of the public API.

mod pool;

pub(crate) use pool::Buffer;
