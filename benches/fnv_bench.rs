//! Benchmarks for fnvrs.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use fnvrs::{FnvHasher, HashConfig, LineHasher, Variant, Width, hash_one_shot, hash_reader};

const ALGORITHMS: [(Variant, Width, &str); 4] = [
    (Variant::Fnv1, Width::W32, "fnv1_32"),
    (Variant::Fnv1, Width::W64, "fnv1_64"),
    (Variant::Fnv1a, Width::W32, "fnv1a_32"),
    (Variant::Fnv1a, Width::W64, "fnv1a_64"),
];

fn bench_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_shot");

    for size in [16, 1024, 1024 * 1024] {
        // Deterministic pseudo-random data
        let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();
        group.throughput(Throughput::Bytes(size as u64));

        for (variant, width, name) in ALGORITHMS {
            group.bench_with_input(format!("{}_{}b", name, size), &data, |b, data| {
                b.iter(|| hash_one_shot(variant, width, black_box(data)));
            });
        }
    }

    group.finish();
}

fn bench_chunked(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunked");
    let size = 1024 * 1024; // 1 MB
    let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();
    group.throughput(Throughput::Bytes(size as u64));

    for piece in [1, 64, 8 * 1024] {
        group.bench_function(format!("pieces_{}b", piece), |b| {
            b.iter(|| {
                let mut hasher = FnvHasher::new(HashConfig::default());
                for chunk in black_box(&data).chunks(piece) {
                    hasher.update(chunk);
                }
                black_box(hasher.finalize())
            });
        });
    }

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");
    let size = 1024 * 1024; // 1 MB
    let text: Vec<u8> = (0..size)
        .map(|i| if i % 80 == 79 { b'\n' } else { b'a' + (i % 26) as u8 })
        .collect();
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("reader", |b| {
        b.iter(|| {
            let cursor = std::io::Cursor::new(black_box(&text));
            hash_reader(cursor, HashConfig::default()).unwrap()
        });
    });

    group.bench_function("lines_iterator", |b| {
        b.iter(|| {
            let cursor = std::io::Cursor::new(black_box(&text));
            let hasher = LineHasher::new(HashConfig::default());
            let mut count = 0;
            for line in hasher.lines(cursor) {
                let _ = line.unwrap();
                count += 1;
            }
            black_box(count)
        });
    });

    group.bench_function("lines_in_memory", |b| {
        b.iter(|| {
            let hasher = LineHasher::new(HashConfig::default());
            black_box(hasher.hash_bytes(black_box(text.clone())).len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_one_shot, bench_chunked, bench_streaming);
criterion_main!(benches);
