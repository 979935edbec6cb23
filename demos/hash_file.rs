//! File hashing example.
//!
//! Run with:
//!     cargo run --example hash_file -- /path/to/file

use std::env;
use std::fs::File;

use fnvrs::{HashConfig, HexCase, LineHasher, Variant, Width, hash_reader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Hashing file: {}\n", path);

    for variant in [Variant::Fnv1, Variant::Fnv1a] {
        for width in [Width::W32, Width::W64] {
            let config = HashConfig::new(variant, width);
            let digest = hash_reader(File::open(&path)?, config)?;
            println!("{:<16} {}", config.to_string(), digest.to_hex(HexCase::Lower));
        }
    }

    println!("\nPer line (FNV-1a, 64-bit):");
    let hasher = LineHasher::new(HashConfig::default());
    let mut total_lines = 0;
    for line in hasher.lines(File::open(&path)?) {
        let line = line?;
        total_lines += 1;
        println!(
            "Line {:>4}: offset={:>8}, len={:>5}, hash={}",
            total_lines,
            line.offset,
            line.len(),
            line.digest
        );
    }

    println!("\nTotal: {} lines", total_lines);
    Ok(())
}
