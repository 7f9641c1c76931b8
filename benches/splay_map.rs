use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use splay_memo::splay_tree::SplayMap;
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 1000;

fn random_pairs() -> Vec<(u32, u32)> {
    let mut rng = StdRng::seed_from_u64(1);
    (0..NUM_OF_OPERATIONS).map(|_| (rng.gen(), rng.gen())).collect()
}

fn bench_insert(c: &mut Criterion) {
    let pairs = random_pairs();
    c.bench_function("splay map insert", |b| {
        b.iter(|| {
            let mut map = SplayMap::new();
            for (key, val) in &pairs {
                map.insert(*key, *val);
            }
            map
        })
    });
    c.bench_function("btreemap insert", |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for (key, val) in &pairs {
                map.insert(*key, *val);
            }
            map
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let pairs = random_pairs();
    let mut map: SplayMap<u32, u32> = pairs.iter().cloned().collect();
    c.bench_function("splay map search", |b| {
        b.iter(|| {
            for (key, _) in &pairs {
                black_box(map.search(key));
            }
        })
    });

    // Repeated access to a small working set stays near the root.
    let hot: Vec<u32> = pairs.iter().take(16).map(|(key, _)| *key).collect();
    c.bench_function("splay map search hot keys", |b| {
        b.iter(|| {
            for key in hot.iter().cycle().take(NUM_OF_OPERATIONS) {
                black_box(map.search(key));
            }
        })
    });
}

criterion_group!(benches, bench_insert, bench_search);
criterion_main!(benches);
