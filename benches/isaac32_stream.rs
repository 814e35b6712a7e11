use isaac32::rng::Isaac32;
use isaac32::tools::apply_keystream;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_fill_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("isaac32 fill_bytes");

    for size in [64usize, 4096, 65536] {
        let mut rng = Isaac32::from_seed(b"bench");
        let mut buf = vec![0u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("{size} bytes"), |b| {
            b.iter(|| rng.fill_bytes(black_box(buf.as_mut_slice())))
        });
    }

    group.finish();
}

pub fn bench_keystream(c: &mut Criterion) {
    let mut group = c.benchmark_group("isaac32 keystream");
    let mut rng = Isaac32::from_seed(b"swordfish");
    let mut buf = vec![0u8; 4096];

    group.throughput(Throughput::Bytes(buf.len() as u64));
    group.bench_function("4096 bytes", |b| {
        b.iter(|| apply_keystream(&mut rng, black_box(buf.as_mut_slice())))
    });

    group.finish();
}

criterion_group!(benches, bench_fill_bytes, bench_keystream);
criterion_main!(benches);
