//! One-shot and streaming throughput across the registered algorithms

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use digestry::{hash, hash_stream, names};
use std::hint::black_box;
use std::io::Cursor;

fn bench_one_shot(c: &mut Criterion) {
    let data = vec![0xa5u8; 64 * 1024];
    let mut group = c.benchmark_group("one_shot_64k");
    group.throughput(Throughput::Bytes(data.len() as u64));
    for name in [names::SHA256, names::SHA512, names::BLAKE3] {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| hash(name, black_box(&data)).expect("registered algorithm"));
        });
    }
    group.finish();
}

fn bench_stream(c: &mut Criterion) {
    let data = vec![0x5au8; 256 * 1024];
    let mut group = c.benchmark_group("stream_256k");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("sha256", |b| {
        b.iter(|| {
            let mut source = Cursor::new(data.as_slice());
            hash_stream(names::SHA256, &mut source).expect("stream hash")
        });
    });
    group.finish();
}

criterion_group!(benches, bench_one_shot, bench_stream);
criterion_main!(benches);
