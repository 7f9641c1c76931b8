use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use splay_memo::fibonacci::fibonacci;
use splay_memo::lru::LruCache;
use splay_memo::range_sum;
use splay_memo::splay_tree::SplayMap;

const FIBONACCI_N: u64 = 500;
const ARRAY_SIZE: usize = 10_000;
const NUM_OF_QUERIES: usize = 1000;
const CACHE_CAPACITY: usize = 1000;

fn bench_fibonacci(c: &mut Criterion) {
    c.bench_function("fibonacci splay map", |b| {
        b.iter(|| {
            let mut tree = SplayMap::new();
            black_box(fibonacci(FIBONACCI_N, &mut tree))
        })
    });
    c.bench_function("fibonacci lru cache", |b| {
        b.iter(|| {
            let mut cache = LruCache::new(usize::max_value());
            black_box(fibonacci(FIBONACCI_N, &mut cache))
        })
    });
}

fn bench_range_sum(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let array = range_sum::generate_array(&mut rng, ARRAY_SIZE);
    let queries = range_sum::generate_queries(&mut rng, ARRAY_SIZE, NUM_OF_QUERIES, 0.8)
        .expect("valid workload");

    c.bench_function("range sum uncached", |b| {
        b.iter(|| black_box(range_sum::run_uncached(&array, &queries)))
    });
    c.bench_function("range sum lru cache", |b| {
        b.iter(|| black_box(range_sum::run_cached(&array, &queries, CACHE_CAPACITY)))
    });
}

criterion_group!(benches, bench_fibonacci, bench_range_sum);
criterion_main!(benches);
