//! Lookup throughput benchmarks for the classification registries.
//!
//! Classification runs once per KLV triplet on the demux hot path, so the
//! interesting numbers are a table hit, a table miss, and the per-lookup
//! label construction.

use criterion::{criterion_group, criterion_main, Criterion};
use mxfkit::{classify_codec, classify_metadata, Ul};
use std::hint::black_box;

const CONTENT_STORAGE: [u8; 16] = [
    0x06, 0x0e, 0x2b, 0x34, 0x02, 0x53, 0x01, 0x01, 0x0d, 0x01, 0x01, 0x01, 0x01, 0x01, 0x18,
    0x00,
];

const MPEG2_ML: [u8; 16] = [
    0x06, 0x0e, 0x2b, 0x34, 0x04, 0x01, 0x01, 0x03, 0x04, 0x01, 0x02, 0x02, 0x01, 0x01, 0x11,
    0x00,
];

const UNREGISTERED: [u8; 16] = [0u8; 16];

fn bench_classify(c: &mut Criterion) {
    // Force the lazy registries up front so the first sample is not an outlier.
    let _ = classify_metadata(&CONTENT_STORAGE);
    let _ = classify_codec(&MPEG2_ML);

    c.bench_function("classify_metadata_hit", |b| {
        b.iter(|| classify_metadata(black_box(&CONTENT_STORAGE)))
    });

    c.bench_function("classify_metadata_miss", |b| {
        b.iter(|| classify_metadata(black_box(&UNREGISTERED)))
    });

    c.bench_function("classify_codec_hit", |b| {
        b.iter(|| classify_codec(black_box(&MPEG2_ML)))
    });

    c.bench_function("classify_codec_miss", |b| {
        b.iter(|| classify_codec(black_box(&UNREGISTERED)))
    });

    c.bench_function("ul_construction", |b| {
        b.iter(|| Ul::from_slice(black_box(&CONTENT_STORAGE)))
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
