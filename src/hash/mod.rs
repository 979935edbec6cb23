//! The FNV hash engine.
//!
//! - Typed one-shot functions: [`fnv1_32`], [`fnv1_64`], [`fnv1a_32`], [`fnv1a_64`]
//! - Typed chunked updates: [`fnv1_32_update`] and friends
//! - Tag-dispatched forms: [`hash_one_shot`], [`hash_chunked_update`]
//! - [`FnvHasher`] - Accumulator object with `update`/`finalize`

mod fnv;
mod hasher;

pub use fnv::{
    FNV32_OFFSET_BASIS, FNV32_PRIME, FNV64_OFFSET_BASIS, FNV64_PRIME, fnv1_32, fnv1_32_update,
    fnv1_64, fnv1_64_update, fnv1a_32, fnv1a_32_update, fnv1a_64, fnv1a_64_update,
    hash_chunked_update, hash_one_shot,
};
pub use hasher::{FnvBuildHasher, FnvHasher};
