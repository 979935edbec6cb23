//! Digest output.

use std::io::{self, Write};

use crate::config::HexCase;
use crate::digest::Digest;

/// Writes one fixed-width hex digest per line.
#[derive(Debug)]
pub struct DigestWriter<W: Write> {
    out: W,
    case: HexCase,
    unbuffered: bool,
    written: u64,
}

impl<W: Write> DigestWriter<W> {
    /// Creates a writer. With `unbuffered`, every digest is flushed as soon as
    /// it is written.
    pub fn new(out: W, case: HexCase, unbuffered: bool) -> Self {
        Self {
            out,
            case,
            unbuffered,
            written: 0,
        }
    }

    /// Writes a digest followed by a newline.
    pub fn write_digest(&mut self, digest: Digest) -> io::Result<()> {
        match self.case {
            HexCase::Lower => writeln!(self.out, "{:x}", digest)?,
            HexCase::Upper => writeln!(self.out, "{:X}", digest)?,
        }
        if self.unbuffered {
            self.out.flush()?;
        }
        self.written += 1;
        Ok(())
    }

    /// Number of digests written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flushes and returns the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_lines() {
        let mut writer = DigestWriter::new(Vec::new(), HexCase::Lower, false);
        writer.write_digest(Digest::U32(0x050c5d7e)).unwrap();
        writer.write_digest(Digest::U64(0xaf63dc4c8601ec8c)).unwrap();
        assert_eq!(writer.written(), 2);

        let out = writer.finish().unwrap();
        assert_eq!(out, b"050c5d7e\naf63dc4c8601ec8c\n");
    }

    #[test]
    fn test_uppercase() {
        let mut writer = DigestWriter::new(Vec::new(), HexCase::Upper, false);
        writer.write_digest(Digest::U32(0xe40c292c)).unwrap();
        assert_eq!(writer.finish().unwrap(), b"E40C292C\n");
    }

    /// Writer that counts how often it is flushed.
    #[derive(Default)]
    struct FlushCounter {
        data: Vec<u8>,
        flushes: usize,
    }

    impl Write for FlushCounter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.data.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_unbuffered_flushes_every_digest() {
        let mut writer = DigestWriter::new(FlushCounter::default(), HexCase::Lower, true);
        for n in 1..=3 {
            writer.write_digest(Digest::U32(n)).unwrap();
            assert_eq!(writer.out.flushes, n as usize);
        }
        assert_eq!(writer.out.data, b"00000001\n00000002\n00000003\n");
    }

    #[test]
    fn test_buffered_flushes_only_on_finish() {
        let mut writer = DigestWriter::new(FlushCounter::default(), HexCase::Lower, false);
        writer.write_digest(Digest::U32(1)).unwrap();
        writer.write_digest(Digest::U32(2)).unwrap();
        assert_eq!(writer.out.flushes, 0);
        assert_eq!(writer.finish().unwrap().flushes, 1);
    }
}
