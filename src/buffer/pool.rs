//! Thread-local pool of read buffers.

use std::cell::RefCell;
use std::io::{self, Read};

/// Size of each pooled read buffer.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024; // 64 KiB

/// Maximum number of buffers to keep per thread.
pub const MAX_POOL_SIZE: usize = 4;

/// A reusable, fixed-size read buffer.
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Takes a buffer from the thread-local pool or allocates a new one.
    pub fn take() -> Self {
        let data = THREAD_BUFFER_POOL
            .with(|pool| pool.borrow_mut().pop())
            .unwrap_or_else(|| vec![0u8; DEFAULT_BUFFER_SIZE]);
        Self { data }
    }

    /// Performs a single read into the buffer and returns the bytes read.
    ///
    /// An empty slice means end of stream. Interrupted reads are retried.
    pub fn read_from<R: Read + ?Sized>(&mut self, reader: &mut R) -> io::Result<&[u8]> {
        loop {
            match reader.read(&mut self.data) {
                Ok(n) => return Ok(&self.data[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Returns the buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        if self.data.len() == DEFAULT_BUFFER_SIZE {
            THREAD_BUFFER_POOL.with(|pool| {
                let mut pool = pool.borrow_mut();
                if pool.len() < MAX_POOL_SIZE {
                    pool.push(std::mem::take(&mut self.data));
                }
            });
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::take()
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer").field("len", &self.data.len()).finish()
    }
}

thread_local! {
    static THREAD_BUFFER_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}
