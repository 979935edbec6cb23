//! The FNV-1 and FNV-1a folding loops.
//!
//! Each algorithm comes in a chunked form, which folds a slice into a
//! caller-owned accumulator, and a one-shot form, which starts from the offset
//! basis and folds the whole slice once. Feeding a sequence through the
//! chunked form in any partition gives the same value as the one-shot form.
//!
//! All arithmetic wraps at the accumulator width.

use crate::config::{Variant, Width};
use crate::digest::Digest;

/// Offset basis for 32-bit hashes.
pub const FNV32_OFFSET_BASIS: u32 = 2_166_136_261;

/// Offset basis for 64-bit hashes.
pub const FNV64_OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;

/// Prime for 32-bit hashes.
pub const FNV32_PRIME: u32 = 16_777_619;

/// Prime for 64-bit hashes.
pub const FNV64_PRIME: u64 = 1_099_511_628_211;

/// Folds `data` into a 32-bit FNV-1 accumulator.
#[inline]
pub fn fnv1_32_update(data: &[u8], hash: &mut u32) {
    let mut h = *hash;
    for &byte in data {
        h = h.wrapping_mul(FNV32_PRIME);
        h ^= u32::from(byte);
    }
    *hash = h;
}

/// Folds `data` into a 64-bit FNV-1 accumulator.
#[inline]
pub fn fnv1_64_update(data: &[u8], hash: &mut u64) {
    let mut h = *hash;
    for &byte in data {
        h = h.wrapping_mul(FNV64_PRIME);
        h ^= u64::from(byte);
    }
    *hash = h;
}

/// Folds `data` into a 32-bit FNV-1a accumulator.
#[inline]
pub fn fnv1a_32_update(data: &[u8], hash: &mut u32) {
    let mut h = *hash;
    for &byte in data {
        h ^= u32::from(byte);
        h = h.wrapping_mul(FNV32_PRIME);
    }
    *hash = h;
}

/// Folds `data` into a 64-bit FNV-1a accumulator.
#[inline]
pub fn fnv1a_64_update(data: &[u8], hash: &mut u64) {
    let mut h = *hash;
    for &byte in data {
        h ^= u64::from(byte);
        h = h.wrapping_mul(FNV64_PRIME);
    }
    *hash = h;
}

/// Computes the 32-bit FNV-1 hash of `data`.
pub fn fnv1_32(data: &[u8]) -> u32 {
    let mut hash = FNV32_OFFSET_BASIS;
    fnv1_32_update(data, &mut hash);
    hash
}

/// Computes the 64-bit FNV-1 hash of `data`.
pub fn fnv1_64(data: &[u8]) -> u64 {
    let mut hash = FNV64_OFFSET_BASIS;
    fnv1_64_update(data, &mut hash);
    hash
}

/// Computes the 32-bit FNV-1a hash of `data`.
pub fn fnv1a_32(data: &[u8]) -> u32 {
    let mut hash = FNV32_OFFSET_BASIS;
    fnv1a_32_update(data, &mut hash);
    hash
}

/// Computes the 64-bit FNV-1a hash of `data`.
pub fn fnv1a_64(data: &[u8]) -> u64 {
    let mut hash = FNV64_OFFSET_BASIS;
    fnv1a_64_update(data, &mut hash);
    hash
}

/// Computes the hash of `data` with the selected algorithm.
///
/// The empty slice yields the offset basis for `width`.
///
/// # Example
///
/// ```
/// use fnvrs::{hash_one_shot, Digest, Variant, Width};
///
/// let digest = hash_one_shot(Variant::Fnv1a, Width::W32, b"a");
/// assert_eq!(digest, Digest::U32(0xe40c292c));
/// ```
pub fn hash_one_shot(variant: Variant, width: Width, data: &[u8]) -> Digest {
    let mut digest = Digest::offset_basis(width);
    hash_chunked_update(variant, data, &mut digest);
    digest
}

/// Folds `data` into `digest` in place.
///
/// The width of the arithmetic is taken from the digest itself, so an
/// accumulator started with [`Digest::offset_basis`] keeps its width for
/// its whole lifetime.
///
/// # Example
///
/// ```
/// use fnvrs::{hash_chunked_update, hash_one_shot, Digest, Variant, Width};
///
/// let mut digest = Digest::offset_basis(Width::W64);
/// hash_chunked_update(Variant::Fnv1, b"foo", &mut digest);
/// hash_chunked_update(Variant::Fnv1, b"bar", &mut digest);
/// assert_eq!(digest, hash_one_shot(Variant::Fnv1, Width::W64, b"foobar"));
/// ```
pub fn hash_chunked_update(variant: Variant, data: &[u8], digest: &mut Digest) {
    match (variant, digest) {
        (Variant::Fnv1, Digest::U32(h)) => fnv1_32_update(data, h),
        (Variant::Fnv1, Digest::U64(h)) => fnv1_64_update(data, h),
        (Variant::Fnv1a, Digest::U32(h)) => fnv1a_32_update(data, h),
        (Variant::Fnv1a, Digest::U64(h)) => fnv1a_64_update(data, h),
    }
}
