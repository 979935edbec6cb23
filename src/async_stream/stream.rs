//! Async adapters over `futures_io::AsyncRead`.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use fnvrs::{hash_lines_async, HashConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead>(reader: R) -> Result<(), fnvrs::FnvError> {
//!     let mut stream = std::pin::pin!(hash_lines_async(reader, HashConfig::default()));
//!
//!     while let Some(line) = stream.next().await {
//!         println!("{}", line?.digest);
//!     }
//!     Ok(())
//! }
//! ```

use std::future::poll_fn;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::config::HashConfig;
use crate::digest::Digest;
use crate::error::FnvError;
use crate::hash::FnvHasher;
use crate::lines::{HashedLine, LineHasher, LineSplitter};

/// Size of the read buffer used by the async adapters.
const READ_BUFFER_SIZE: usize = 8192;

pin_project! {
    /// A stream that yields hashed lines from an async reader.
    ///
    /// Same line semantics as [`LineIter`](crate::LineIter): split on `\n`,
    /// newline excluded, trailing partial line included, the stream ends
    /// after the first I/O error.
    pub struct LineStream<R> {
        #[pin]
        reader: R,
        hasher: LineHasher,
        splitter: LineSplitter,
        buffer: Vec<u8>,
        finished: bool,
    }
}

impl<R> LineStream<R> {
    /// Creates a new line stream from an async reader.
    pub fn new(reader: R, config: HashConfig) -> Self {
        Self {
            reader,
            hasher: LineHasher::new(config),
            splitter: LineSplitter::new(),
            buffer: vec![0u8; READ_BUFFER_SIZE],
            finished: false,
        }
    }
}

impl<R: AsyncRead> Stream for LineStream<R> {
    type Item = Result<HashedLine, FnvError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }

        loop {
            if let Some((offset, data)) = this.splitter.next_line() {
                return Poll::Ready(Some(Ok(this.hasher.hash_line(data, offset))));
            }

            match this.reader.as_mut().poll_read(cx, &mut this.buffer[..]) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) if e.kind() == io::ErrorKind::Interrupted => continue,
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(FnvError::Io(e))));
                }
                Poll::Ready(Ok(0)) => {
                    *this.finished = true;
                    let hasher = this.hasher;
                    return Poll::Ready(
                        this.splitter
                            .finish()
                            .map(|(offset, data)| Ok(hasher.hash_line(data, offset))),
                    );
                }
                Poll::Ready(Ok(n)) => this.splitter.push(&this.buffer[..n]),
            }
        }
    }
}

/// Creates a stream of hashed lines from an async reader.
///
/// Uses `futures_io::AsyncRead`, so it works with any runtime. Tokio readers
/// can be adapted with `tokio_util::compat`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use fnvrs::{hash_lines_async, HashConfig};
///
/// let file = tokio::fs::File::open("input.txt").await?;
/// let stream = hash_lines_async(file.compat(), HashConfig::default());
/// ```
pub fn hash_lines_async<R: AsyncRead>(reader: R, config: HashConfig) -> LineStream<R> {
    LineStream::new(reader, config)
}

/// Hashes everything an async reader yields until end of stream.
///
/// The async counterpart of [`hash_reader`](crate::hash_reader).
pub async fn hash_async<R: AsyncRead + Unpin>(
    mut reader: R,
    config: HashConfig,
) -> Result<Digest, FnvError> {
    let mut hasher = FnvHasher::new(config);
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];

    loop {
        let read = poll_fn(|cx| Pin::new(&mut reader).poll_read(cx, &mut buffer)).await;
        match read {
            Ok(0) => break,
            Ok(n) => hasher.update(&buffer[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Variant, Width};

    #[tokio::test]
    async fn test_line_stream_empty() {
        let reader: &[u8] = &[];
        let stream = LineStream::new(reader, HashConfig::default());
        let lines: Vec<_> = futures_util::StreamExt::collect(stream).await;
        assert!(lines.is_empty());
    }

    #[tokio::test]
    async fn test_line_stream_matches_sync() {
        let data: &[u8] = b"a\nfoobar\n\ntail";
        let stream = LineStream::new(data, HashConfig::default());

        let lines: Vec<_> = futures_util::StreamExt::collect(stream).await;
        let lines: Vec<_> = lines.into_iter().collect::<Result<Vec<_>, _>>().unwrap();

        let expected = LineHasher::new(HashConfig::default()).hash_bytes(data.to_vec());
        assert_eq!(lines, expected);
        assert_eq!(lines[0].digest, Digest::U64(0xaf63dc4c8601ec8c));
    }

    #[tokio::test]
    async fn test_hash_async() {
        let data: &[u8] = b"foobar";
        let config = HashConfig::new(Variant::Fnv1, Width::W32);
        let digest = hash_async(data, config).await.unwrap();
        assert_eq!(digest, Digest::U32(0x31f0b262));
    }
}
