use isaac32::rng::Isaac32;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_next_u32(c: &mut Criterion) {
    let mut rng = Isaac32::from_seed(b"bench");
    c.bench_function("isaac32 next_u32", |b| b.iter(|| black_box(rng.next_u32())));
}

pub fn bench_seed(c: &mut Criterion) {
    let seed = [0x5au8; 1024];
    c.bench_function("isaac32 seed 1024 bytes", |b| {
        b.iter(|| Isaac32::from_seed(black_box(&seed)))
    });
}

pub fn bench_clone(c: &mut Criterion) {
    let rng = Isaac32::from_seed(b"bench");
    c.bench_function("isaac32 clone", |b| b.iter(|| black_box(&rng).clone()));
}

criterion_group!(benches, bench_next_u32, bench_seed, bench_clone);
criterion_main!(benches);
