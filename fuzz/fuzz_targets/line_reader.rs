#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use fnvrs::{HashConfig, LineHasher, hash_lines, hash_reader, hash_one_shot};

fuzz_target!(|data: Vec<u8>| {
    let config = HashConfig::default();

    // Verify: streaming and in-memory line hashing agree
    let streamed: Vec<_> = hash_lines(Cursor::new(&data), config)
        .collect::<Result<_, _>>()
        .unwrap();
    let in_memory = LineHasher::new(config).hash_bytes(data.clone());
    assert_eq!(streamed, in_memory);

    // Verify: no line contains a newline, and lines plus separators cover the input
    let mut covered = 0usize;
    for line in &streamed {
        assert!(!line.data.contains(&b'\n'));
        assert_eq!(line.offset as usize, covered);
        covered += line.len() + 1;
    }
    assert!(covered == data.len() || covered == data.len() + 1);

    // Verify: whole-stream hashing equals one-shot
    let whole = hash_reader(Cursor::new(&data), config).unwrap();
    assert_eq!(whole, hash_one_shot(config.variant(), config.width(), &data));
});
