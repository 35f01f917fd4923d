use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use order_stats::sort::{deterministic_select, randomized_quickselect_with_rng};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SIZES: [usize; 3] = [1_000, 5_000, 10_000];

#[derive(Clone, Copy)]
enum Distribution {
    Random,
    Sorted,
    Reverse,
}

impl Distribution {
    fn name(self) -> &'static str {
        match self {
            Distribution::Random => "random",
            Distribution::Sorted => "sorted",
            Distribution::Reverse => "reverse",
        }
    }

    fn generate(self, n: usize, rng: &mut ChaCha8Rng) -> Vec<usize> {
        match self {
            Distribution::Random => (0..n).map(|_| rng.gen_range(0..=n * 10)).collect(),
            Distribution::Sorted => (0..n).collect(),
            Distribution::Reverse => (0..n).rev().collect(),
        }
    }
}

fn bench_selection(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for distribution in [Distribution::Random, Distribution::Sorted, Distribution::Reverse] {
        let mut group = c.benchmark_group(format!("select_median_{}", distribution.name()));
        for &n in &SIZES {
            let data = distribution.generate(n, &mut rng);
            let k = n / 2;

            group.bench_with_input(BenchmarkId::new("deterministic", n), &data, |b, data| {
                b.iter(|| deterministic_select(black_box(data), black_box(k)))
            });

            group.bench_with_input(BenchmarkId::new("randomized", n), &data, |b, data| {
                let mut pivots = ChaCha8Rng::seed_from_u64(n as u64);
                b.iter(|| randomized_quickselect_with_rng(black_box(data), black_box(k), &mut pivots))
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
