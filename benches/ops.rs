//! Micro-operation benchmarks for the sampled-LRU policy.
//!
//! Run with: `cargo bench --bench ops`
//!
//! Measures per-operation latency (nanoseconds) for the hot-path
//! operations under identical conditions: hits, misses, in-capacity
//! inserts, and evicting inserts.

use std::hint::black_box;
use std::time::Instant;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use probelru::ds::OsSeededRng;
use probelru::policy::sampled_lru::SampledLruCache;

const CAPACITY: usize = 16_384;
const OPS: u64 = 100_000;

fn filled_cache(seed: u64) -> SampledLruCache<u64, u64> {
    let mut cache = SampledLruCache::with_rng(CAPACITY, OsSeededRng::with_seed(seed)).unwrap();
    for i in 0..CAPACITY as u64 {
        cache.add(i, i);
    }
    cache
}

// ============================================================================
// Get Latency (ns/op)
// ============================================================================

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_ns");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("hit", |b| {
        b.iter_custom(|iters| {
            let mut cache = filled_cache(1);
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    let key = i % (CAPACITY as u64);
                    black_box(cache.get(&key));
                }
            }
            start.elapsed()
        })
    });

    group.bench_function("miss", |b| {
        b.iter_custom(|iters| {
            let mut cache = filled_cache(2);
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    let key = (CAPACITY as u64) + i;
                    black_box(cache.get(&key));
                }
            }
            start.elapsed()
        })
    });

    group.bench_function("peek_hit", |b| {
        b.iter_custom(|iters| {
            let cache = filled_cache(3);
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    let key = i % (CAPACITY as u64);
                    black_box(cache.peek(&key));
                }
            }
            start.elapsed()
        })
    });

    group.finish();
}

// ============================================================================
// Insert Latency (ns/op)
// ============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_ns");
    group.throughput(Throughput::Elements(OPS));

    group.bench_function("update_in_place", |b| {
        b.iter_custom(|iters| {
            let mut cache = filled_cache(4);
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    let key = i % (CAPACITY as u64);
                    black_box(cache.add(key, i));
                }
            }
            start.elapsed()
        })
    });

    group.bench_function("evicting", |b| {
        b.iter_custom(|iters| {
            let mut cache = filled_cache(5);
            let mut next_key = CAPACITY as u64;
            let start = Instant::now();
            for _ in 0..iters {
                for _ in 0..OPS {
                    black_box(cache.add(next_key, next_key));
                    next_key += 1;
                }
            }
            start.elapsed()
        })
    });

    group.finish();
}

// ============================================================================
// Mixed Workload (ns/op)
// ============================================================================

fn bench_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_ns");
    group.throughput(Throughput::Elements(OPS));

    // 90% reads over the resident set, 10% inserts of fresh keys.
    group.bench_function("read_heavy", |b| {
        b.iter_custom(|iters| {
            let mut cache = filled_cache(6);
            let mut next_key = CAPACITY as u64;
            let start = Instant::now();
            for _ in 0..iters {
                for i in 0..OPS {
                    if i % 10 == 0 {
                        black_box(cache.add(next_key, next_key));
                        next_key += 1;
                    } else {
                        let key = i % (CAPACITY as u64);
                        black_box(cache.get(&key));
                    }
                }
            }
            start.elapsed()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_get, bench_insert, bench_mixed);
criterion_main!(benches);
