use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use knapsack_dp::{solve_knapsack, solve_with_selection, Item};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_items(rng: &mut StdRng, n: usize) -> Vec<Item> {
    (0..n)
        .map(|_| Item::new(rng.gen_range(1..100), rng.gen_range(0..1_000)))
        .collect()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(p) => p.memory() / 1024,
        None => 0,
    }
}

fn bench_knapsack_perf(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_perf");
    for &n in &[100usize, 500, 1_000] {
        let capacity = (n * 25) as i64;
        group.bench_function(format!("rolling_row_n_{n}"), |b| {
            b.iter_batched(
                || random_items(&mut StdRng::seed_from_u64(42), n),
                |items| {
                    let best = solve_knapsack(&items, capacity).unwrap();
                    criterion::black_box(best);
                },
                BatchSize::PerIteration,
            )
        });
        group.bench_function(format!("with_selection_n_{n}"), |b| {
            b.iter_batched(
                || random_items(&mut StdRng::seed_from_u64(42), n),
                |items| {
                    let before = rss_kib();
                    let sol = solve_with_selection(&items, capacity).unwrap();
                    let after = rss_kib();
                    criterion::black_box(sol);
                    // stderr keeps the delta out of criterion's statistics
                    eprintln!(
                        "RSS KiB delta (selection n={n}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_knapsack_perf);
criterion_main!(benches);
