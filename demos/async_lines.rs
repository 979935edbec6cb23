//! Async per-line hashing example.
//!
//! Run with:
//!     cargo run --example async_lines --features async-io -- /path/to/file

use fnvrs::{HashConfig, hash_async, hash_lines_async};
use futures_util::StreamExt;
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    let file = tokio::fs::File::open(&path).await?;
    let mut lines = hash_lines_async(file.compat(), HashConfig::default());

    let mut count = 0;
    while let Some(line) = lines.next().await {
        let line = line?;
        count += 1;
        println!("{} {}", line.digest, String::from_utf8_lossy(&line.data));
    }

    let file = tokio::fs::File::open(&path).await?;
    let whole = hash_async(file.compat(), HashConfig::default()).await?;
    println!("\n{} lines, whole file {}", count, whole);

    Ok(())
}
