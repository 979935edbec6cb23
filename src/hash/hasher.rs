//! Stateful FNV accumulator.

use std::hash::{BuildHasher, Hasher};

use super::fnv::hash_chunked_update;
use crate::config::HashConfig;
use crate::digest::Digest;

/// A streaming FNV hasher.
///
/// Holds the running accumulator for one algorithm. Feed it with
/// [`update`](FnvHasher::update) in any number of pieces; the digest depends
/// only on the bytes and their order.
///
/// # Example
///
/// ```
/// use fnvrs::{FnvHasher, HashConfig, Digest};
///
/// let mut hasher = FnvHasher::new(HashConfig::default());
/// hasher.update(b"foo");
/// hasher.update(b"bar");
/// assert_eq!(hasher.finalize(), Digest::U64(0x85944171f73967e8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FnvHasher {
    config: HashConfig,
    state: Digest,
}

impl FnvHasher {
    /// Creates a new hasher starting from the offset basis.
    pub fn new(config: HashConfig) -> Self {
        Self {
            config,
            state: Digest::offset_basis(config.width()),
        }
    }

    /// Creates a hasher that resumes from a previously produced digest.
    ///
    /// The width of `state` takes precedence over the width in `config`.
    pub fn with_state(config: HashConfig, state: Digest) -> Self {
        Self {
            config: config.with_width(state.width()),
            state,
        }
    }

    /// Updates the hasher with more data.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        hash_chunked_update(self.config.variant(), data, &mut self.state);
    }

    /// Returns the digest of everything fed so far.
    ///
    /// The hasher is left untouched and can keep accepting data.
    pub fn finalize(&self) -> Digest {
        self.state
    }

    /// Resets the hasher to the offset basis.
    pub fn reset(&mut self) {
        self.state = Digest::offset_basis(self.config.width());
    }

    /// Returns the configuration used by this hasher.
    pub fn config(&self) -> &HashConfig {
        &self.config
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new(HashConfig::default())
    }
}

impl Hasher for FnvHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }

    fn finish(&self) -> u64 {
        self.state.as_u64()
    }
}

/// Builds [`FnvHasher`]s for hash maps and sets.
///
/// ```
/// use std::collections::HashMap;
/// use fnvrs::FnvBuildHasher;
///
/// let mut map: HashMap<&str, u32, FnvBuildHasher> = HashMap::default();
/// map.insert("one", 1);
/// assert_eq!(map.get("one"), Some(&1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FnvBuildHasher {
    config: HashConfig,
}

impl FnvBuildHasher {
    /// Creates a builder producing hashers with `config`.
    pub const fn new(config: HashConfig) -> Self {
        Self { config }
    }
}

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> FnvHasher {
        FnvHasher::new(self.config)
    }
}
