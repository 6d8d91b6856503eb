//! Benchmark: wide capacities, where the full table would not fit comfortably.
//!
//! Run with:
//! `cargo bench --bench large_capacity`

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use knapsack_dp::{Item, KnapsackSolver};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_items(rng: &mut StdRng, n: usize, max_weight: i64) -> Vec<Item> {
    (0..n)
        .map(|_| Item::new(rng.gen_range(1..max_weight), rng.gen_range(0..10_000)))
        .collect()
}

fn bench_large_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_large_capacity");
    group.sample_size(10);

    for &capacity in &[50_000i64, 100_000, 200_000] {
        for &block_size in &[8usize, 32] {
            let solver = KnapsackSolver::builder().block_size(block_size).build();
            group.bench_function(format!("cap_{capacity}_block_{block_size}"), |b| {
                b.iter_batched(
                    || random_items(&mut StdRng::seed_from_u64(7), 256, capacity / 64),
                    |items| {
                        let sol = solver.solve_with_selection(&items, capacity).unwrap();
                        criterion::black_box(sol.value);
                    },
                    BatchSize::PerIteration,
                )
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_large_capacity);
criterion_main!(benches);
