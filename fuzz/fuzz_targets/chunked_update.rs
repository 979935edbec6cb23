#![no_main]

use libfuzzer_sys::fuzz_target;
use fnvrs::{Digest, FnvHasher, HashConfig, Variant, Width, hash_chunked_update, hash_one_shot};

fuzz_target!(|input: (Vec<u8>, Vec<u16>)| {
    let (data, cuts) = input;

    // Turn the fuzzer's cut list into sorted split points inside `data`
    let mut points: Vec<usize> = cuts
        .iter()
        .map(|&c| if data.is_empty() { 0 } else { c as usize % (data.len() + 1) })
        .collect();
    points.sort_unstable();

    for variant in [Variant::Fnv1, Variant::Fnv1a] {
        for width in [Width::W32, Width::W64] {
            let expected = hash_one_shot(variant, width, &data);

            // Verify: arbitrary partitions give the one-shot digest
            let mut digest = Digest::offset_basis(width);
            let mut start = 0;
            for &end in &points {
                hash_chunked_update(variant, &data[start..end], &mut digest);
                start = end;
            }
            hash_chunked_update(variant, &data[start..], &mut digest);
            assert_eq!(digest, expected);

            // Verify: the accumulator object agrees
            let mut hasher = FnvHasher::new(HashConfig::new(variant, width));
            for chunk in data.chunks(7) {
                hasher.update(chunk);
            }
            assert_eq!(hasher.finalize(), expected);

            // Verify: width never changes
            assert_eq!(expected.width(), width);
        }
    }
});
