use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rangecache::RangeSumCache;
use rangesum::range_sum;

const N: usize = 100_000;

fn make_array() -> Vec<i64> {
    (0..N as i64).map(|i| i % 100 + 1).collect()
}

fn bench_cached_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_range_sum");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("hot_hit", |b| {
        let array = make_array();
        let mut cache = RangeSumCache::new(1000).unwrap();
        let hot: Vec<(usize, usize)> = (0..30).map(|i| (i * 100, N / 2 + i * 100)).collect();

        // Warm the cache
        for &(l, r) in &hot {
            cache.range_sum(&array, l, r).unwrap();
        }

        let mut counter = 0;
        b.iter(|| {
            let (l, r) = hot[counter % hot.len()];
            black_box(cache.range_sum(&array, l, r).unwrap());
            counter += 1;
        });
    });

    group.bench_function("direct", |b| {
        let array = make_array();
        b.iter(|| black_box(range_sum(&array, 0, N / 2).unwrap()));
    });

    group.finish();
}

fn bench_update_invalidate(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("full_cache_scan", |b| {
        let mut array = make_array();
        let mut cache = RangeSumCache::new(1000).unwrap();

        // Fill with narrow ranges so most survive each write
        for i in 0..1000 {
            cache.range_sum(&array, i * 10, i * 10 + 5).unwrap();
        }

        let mut counter = 0usize;
        b.iter(|| {
            black_box(cache.update(&mut array, (counter * 37) % N, 1).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_cache_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_miss");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("small_cache_cycle", |b| {
        let array = make_array();
        let mut cache = RangeSumCache::new(10).unwrap(); // Small cache

        let mut counter = 0;
        b.iter(|| {
            // Cycling through more ranges than fit guarantees misses
            let l = (counter % 100) * 10;
            black_box(cache.range_sum(&array, l, l + 1000).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cached_hit,
    bench_update_invalidate,
    bench_cache_miss
);
criterion_main!(benches);
