use criterion::{criterion_group, criterion_main, Criterion};
use geojson_container::{decode, decode_batch};
use std::fs;

pub fn decode_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("block_groups");
    let bytes = fs::read("./tests/data/block_groups.geojson").unwrap();
    group.bench_function("decode", |b| {
        b.iter(|| decode(&bytes).unwrap());
    });
    group.finish();
}

pub fn decode_batch_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let bytes = fs::read("./tests/data/batch.geojson").unwrap();
    group.bench_function("decode_batch", |b| {
        b.iter(|| decode_batch(&bytes).unwrap());
    });
    group.finish();
}

criterion_group!(benches, decode_bench, decode_batch_bench);
criterion_main!(benches);
