//! Benchmarks for hillvig cipher operations.
//!
//! Measures pipeline construction (key validation and inverse derivation),
//! encrypt/decrypt throughput, and how throughput scales with the Hill block
//! size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hillvig::CipherPipeline;

/// Substitution key used consistently across all benchmarks.
const BENCH_KEY: &str = "BenchmarkSecret";

const KEY_2X2: &str = "[[3, 3], [2, 5]]";
const KEY_3X3: &str = "[[6, 24, 1], [13, 16, 10], [20, 17, 15]]";

/// A caption-sized plaintext, long enough to amortize per-call overhead.
fn caption(repeats: usize) -> String {
    "A sunset over the harbor, with boats and gulls. ".repeat(repeats)
}

/// Benchmarks `CipherPipeline::from_literal()`.
///
/// Covers key parsing, shape checks, determinant, adjugate and modular
/// inverse for both supported orders.
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for (name, key) in [("2x2", KEY_2X2), ("3x3", KEY_3X3)] {
        group.bench_function(name, |b| {
            b.iter(|| CipherPipeline::from_literal(black_box(key), black_box(BENCH_KEY)).unwrap());
        });
    }
    group.finish();
}

/// Benchmarks `encrypt()` on a caption-sized input with the 3x3 key.
fn bench_encrypt(c: &mut Criterion) {
    let pipeline = CipherPipeline::from_literal(KEY_3X3, BENCH_KEY).unwrap();
    let plaintext = caption(20);

    let mut group = c.benchmark_group("encrypt");
    group.throughput(Throughput::Bytes(plaintext.len() as u64));
    group.bench_function("3x3", |b| {
        b.iter(|| pipeline.encrypt(black_box(&plaintext)));
    });
    group.finish();
}

/// Benchmarks `decrypt()` on the ciphertext of the same caption.
fn bench_decrypt(c: &mut Criterion) {
    let pipeline = CipherPipeline::from_literal(KEY_3X3, BENCH_KEY).unwrap();
    let ciphertext = pipeline.encrypt(&caption(20));

    let mut group = c.benchmark_group("decrypt");
    group.throughput(Throughput::Bytes(ciphertext.len() as u64));
    group.bench_function("3x3", |b| {
        b.iter(|| pipeline.decrypt(black_box(&ciphertext)).unwrap());
    });
    group.finish();
}

/// Benchmarks encrypt throughput for both block sizes across input lengths.
fn bench_block_size_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("encrypt_block_size_scaling");

    for (name, key) in [("2x2", KEY_2X2), ("3x3", KEY_3X3)] {
        let pipeline = CipherPipeline::from_literal(key, BENCH_KEY).unwrap();
        for &repeats in &[1usize, 20, 200] {
            let plaintext = caption(repeats);
            group.throughput(Throughput::Bytes(plaintext.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(name, plaintext.len()),
                &plaintext,
                |b, text| {
                    b.iter(|| pipeline.encrypt(black_box(text)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_encrypt,
    bench_decrypt,
    bench_block_size_scaling,
);
criterion_main!(benches);
