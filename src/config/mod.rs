//! Configuration for hashing behavior.
//!
//! This module provides the tagged selection of an FNV algorithm:
//!
//! - [`Variant`] - FNV-1 or FNV-1a
//! - [`Width`] - 32-bit or 64-bit arithmetic
//! - [`HashConfig`] - A variant/width pair
//! - [`HexCase`] - Letter case used when rendering digests
//!
//! # Example
//!
//! ```
//! use fnvrs::{HashConfig, Variant, Width};
//!
//! // FNV-1a, 64-bit
//! let config = HashConfig::default();
//!
//! // FNV-1, 32-bit
//! let config = HashConfig::default()
//!     .with_variant(Variant::Fnv1)
//!     .with_width(Width::W32);
//! assert_eq!(config.width().bits(), 32);
//! ```

use std::fmt;

use crate::error::FnvError;

/// Order of the multiply and XOR steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Multiply by the prime, then XOR the byte.
    Fnv1,
    /// XOR the byte, then multiply by the prime.
    #[default]
    Fnv1a,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Fnv1 => f.write_str("FNV-1"),
            Variant::Fnv1a => f.write_str("FNV-1a"),
        }
    }
}

/// Bit width of the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Width {
    /// 32-bit hashes (arithmetic mod 2^32).
    W32,
    /// 64-bit hashes (arithmetic mod 2^64).
    #[default]
    W64,
}

impl Width {
    /// Returns the width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    /// Number of hex digits needed to print a digest of this width.
    pub const fn hex_digits(self) -> usize {
        (self.bits() / 4) as usize
    }

    /// Selects a width by bit count.
    ///
    /// Returns [`FnvError::InvalidConfig`] for anything other than 32 or 64.
    pub fn from_bits(bits: u32) -> Result<Self, FnvError> {
        match bits {
            32 => Ok(Width::W32),
            64 => Ok(Width::W64),
            _ => Err(FnvError::InvalidConfig {
                message: "hash width must be 32 or 64 bits",
            }),
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Letter case of hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HexCase {
    /// `0-9a-f`
    #[default]
    Lower,
    /// `0-9A-F`
    Upper,
}

/// Configuration selecting one of the four FNV algorithms.
///
/// The default is FNV-1a with 64-bit arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HashConfig {
    variant: Variant,
    width: Width,
}

impl HashConfig {
    /// Creates a new configuration.
    pub const fn new(variant: Variant, width: Width) -> Self {
        Self { variant, width }
    }

    /// Sets the algorithm variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the accumulator width.
    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    /// Returns the algorithm variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the accumulator width.
    pub fn width(&self) -> Width {
        self.width
    }
}

impl fmt::Display for HashConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.variant, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HashConfig::default();
        assert_eq!(config.variant(), Variant::Fnv1a);
        assert_eq!(config.width(), Width::W64);
    }

    #[test]
    fn test_builder_pattern() {
        let config = HashConfig::default()
            .with_variant(Variant::Fnv1)
            .with_width(Width::W32);
        assert_eq!(config, HashConfig::new(Variant::Fnv1, Width::W32));
    }

    #[test]
    fn test_width_from_bits() {
        assert_eq!(Width::from_bits(32).unwrap(), Width::W32);
        assert_eq!(Width::from_bits(64).unwrap(), Width::W64);
        assert!(Width::from_bits(16).is_err());
        assert!(Width::from_bits(128).is_err());
    }

    #[test]
    fn test_hex_digits() {
        assert_eq!(Width::W32.hex_digits(), 8);
        assert_eq!(Width::W64.hex_digits(), 16);
    }

    #[test]
    fn test_display() {
        let config = HashConfig::new(Variant::Fnv1a, Width::W32);
        assert_eq!(config.to_string(), "FNV-1a (32-bit)");
    }
}
