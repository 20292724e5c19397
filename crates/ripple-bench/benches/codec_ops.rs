//! Criterion benchmarks for CSV snapshot encoding and decoding.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ripple_bench::reference_profile;
use ripple_engine::initialize;
use ripple_io::{decode_line, encode_line, field_hash};

fn bench_encode(c: &mut Criterion) {
    let field = initialize(&reference_profile().unwrap()).unwrap().field;
    c.bench_function("csv_encode_500", |b| {
        b.iter(|| black_box(encode_line(black_box(&field))));
    });
}

fn bench_decode(c: &mut Criterion) {
    let field = initialize(&reference_profile().unwrap()).unwrap().field;
    let line = encode_line(&field);
    c.bench_function("csv_decode_500", |b| {
        b.iter(|| black_box(decode_line(black_box(&line)).unwrap()));
    });
}

fn bench_hash(c: &mut Criterion) {
    let field = initialize(&reference_profile().unwrap()).unwrap().field;
    c.bench_function("field_hash_500", |b| {
        b.iter(|| black_box(field_hash(black_box(&field))));
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_hash);
criterion_main!(benches);
