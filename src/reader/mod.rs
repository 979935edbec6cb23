//! Whole-stream hashing of a [`std::io::Read`] source.

use std::io::Read;

use crate::buffer::Buffer;
use crate::config::HashConfig;
use crate::digest::Digest;
use crate::error::FnvError;
use crate::hash::FnvHasher;

/// Hashes everything `reader` yields until end of stream.
///
/// The result equals the one-shot hash of the concatenated bytes; how the
/// reader splits its output does not matter.
///
/// # Example
///
/// ```
/// use fnvrs::{hash_reader, HashConfig, Digest};
/// use std::io::Cursor;
///
/// let digest = hash_reader(Cursor::new(b"foobar"), HashConfig::default())?;
/// assert_eq!(digest, Digest::U64(0x85944171f73967e8));
/// # Ok::<(), fnvrs::FnvError>(())
/// ```
pub fn hash_reader<R: Read>(mut reader: R, config: HashConfig) -> Result<Digest, FnvError> {
    let mut hasher = FnvHasher::new(config);
    let mut buffer = Buffer::take();
    let mut total = 0u64;

    log::trace!(
        "hashing stream with {} in blocks of {} bytes",
        config,
        buffer.capacity()
    );

    loop {
        let block = buffer.read_from(&mut reader)?;
        if block.is_empty() {
            break;
        }
        hasher.update(block);
        total += block.len() as u64;
    }

    log::debug!("hashed {} bytes", total);
    Ok(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Variant, Width};
    use crate::hash::hash_one_shot;
    use std::io::{self, Cursor};

    #[test]
    fn test_empty_stream() {
        let config = HashConfig::new(Variant::Fnv1, Width::W64);
        let digest = hash_reader(io::empty(), config).unwrap();
        assert_eq!(digest, Digest::U64(0xcbf29ce484222325));
    }

    #[test]
    fn test_larger_than_one_block() {
        let data: Vec<u8> = (0..200_000u32).map(|i| (i * 7 + 13) as u8).collect();
        let config = HashConfig::new(Variant::Fnv1a, Width::W32);
        let digest = hash_reader(Cursor::new(&data), config).unwrap();
        assert_eq!(digest, hash_one_shot(Variant::Fnv1a, Width::W32, &data));
    }

    #[test]
    fn test_chained_readers() {
        let reader = Cursor::new(&b"foo"[..]).chain(Cursor::new(&b"bar"[..]));
        let digest = hash_reader(reader, HashConfig::default()).unwrap();
        assert_eq!(digest, Digest::U64(0x85944171f73967e8));
    }

    #[test]
    fn test_io_error() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("boom"))
            }
        }
        assert!(matches!(
            hash_reader(Failing, HashConfig::default()),
            Err(FnvError::Io(_))
        ));
    }
}
