//! Digest types.
//!
//! - [`Digest`] - A 32- or 64-bit FNV hash value

use std::fmt;

use crate::config::{HexCase, Width};
use crate::hash::{FNV32_OFFSET_BASIS, FNV64_OFFSET_BASIS};

/// A fixed-width FNV hash value.
///
/// The variant tag doubles as the accumulator width: a `Digest::U32` is
/// always updated with 32-bit arithmetic and a `Digest::U64` with 64-bit
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Digest {
    /// A 32-bit hash value.
    U32(u32),
    /// A 64-bit hash value.
    U64(u64),
}

impl Digest {
    /// Returns the offset basis for the given width.
    pub const fn offset_basis(width: Width) -> Self {
        match width {
            Width::W32 => Digest::U32(FNV32_OFFSET_BASIS),
            Width::W64 => Digest::U64(FNV64_OFFSET_BASIS),
        }
    }

    /// Returns the width of this digest.
    pub const fn width(&self) -> Width {
        match self {
            Digest::U32(_) => Width::W32,
            Digest::U64(_) => Width::W64,
        }
    }

    /// Returns the value zero-extended to 64 bits.
    pub const fn as_u64(&self) -> u64 {
        match *self {
            Digest::U32(v) => v as u64,
            Digest::U64(v) => v,
        }
    }

    /// Returns the digest as fixed-width hex: 8 digits for 32-bit values,
    /// 16 for 64-bit values.
    pub fn to_hex(&self, case: HexCase) -> String {
        match case {
            HexCase::Lower => format!("{:x}", self),
            HexCase::Upper => format!("{:X}", self),
        }
    }

    /// Parses a digest from hex.
    ///
    /// Eight digits give a 32-bit digest, sixteen a 64-bit one. Returns `None`
    /// for any other length or for non-hex characters.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        if !hex_str.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match hex_str.len() {
            8 => u32::from_str_radix(hex_str, 16).ok().map(Digest::U32),
            16 => u64::from_str_radix(hex_str, 16).ok().map(Digest::U64),
            _ => None,
        }
    }
}

impl From<u32> for Digest {
    fn from(v: u32) -> Self {
        Digest::U32(v)
    }
}

impl From<u64> for Digest {
    fn from(v: u64) -> Self {
        Digest::U64(v)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Digest::U32(v) => write!(f, "{:08x}", v),
            Digest::U64(v) => write!(f, "{:016x}", v),
        }
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Digest::U32(v) => write!(f, "{:08X}", v),
            Digest::U64(v) => write!(f, "{:016X}", v),
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_basis() {
        assert_eq!(Digest::offset_basis(Width::W32), Digest::U32(0x811c9dc5));
        assert_eq!(
            Digest::offset_basis(Width::W64),
            Digest::U64(0xcbf29ce484222325)
        );
    }

    #[test]
    fn test_to_hex_is_zero_padded() {
        assert_eq!(Digest::U32(0x50c5d7e).to_hex(HexCase::Lower), "050c5d7e");
        assert_eq!(Digest::U64(0xab).to_hex(HexCase::Lower), "00000000000000ab");
    }

    #[test]
    fn test_to_hex_upper() {
        let digest = Digest::U64(0xaf63dc4c8601ec8c);
        assert_eq!(digest.to_hex(HexCase::Upper), "AF63DC4C8601EC8C");
        assert_eq!(digest.to_string(), "af63dc4c8601ec8c");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Digest::from_hex("e40c292c"), Some(Digest::U32(0xe40c292c)));
        assert_eq!(
            Digest::from_hex("AF63DC4C8601EC8C"),
            Some(Digest::U64(0xaf63dc4c8601ec8c))
        );

        // Wrong size
        assert!(Digest::from_hex("abc").is_none());
        assert!(Digest::from_hex("0123456789").is_none());
        // Sign prefixes are not hex
        assert!(Digest::from_hex("+1234567").is_none());
        assert!(Digest::from_hex("zzzzzzzz").is_none());
    }

    #[test]
    fn test_width_and_widening() {
        let digest = Digest::from(0xffff_ffffu32);
        assert_eq!(digest.width(), Width::W32);
        assert_eq!(digest.as_u64(), 0xffff_ffff);
        assert_eq!(Digest::from(1u64).width(), Width::W64);
    }
}
