#![cfg(feature = "parallel")]

use knapsack_dp::problems::knapsack::KnapsackProblem;
use knapsack_dp::{solve_knapsack, Item, KnapsackSolver, LayeredEngine, LayeredEngineBuilder};
use proptest::prelude::*;

fn items_from(pairs: &[(i64, i64)]) -> Vec<Item> {
    pairs.iter().copied().map(Item::from).collect()
}

proptest! {
    #[test]
    fn parallel_engine_matches_rolling_row(
        pairs in prop::collection::vec((0i64..12, 0i64..50), 0..40),
        capacity in 0i64..80,
        block_size in 1usize..6,
    ) {
        let items = items_from(&pairs);
        let expected = solve_knapsack(&items, capacity).unwrap();

        let problem = KnapsackProblem::new(&items, capacity).unwrap();
        let (value, path) = LayeredEngineBuilder::new(problem)
            .with_block_size(block_size)
            .build()
            .run();
        prop_assert_eq!(value, expected);
        if !items.is_empty() {
            prop_assert_eq!(path.len(), items.len() + 1);
        }
    }

    #[test]
    fn parallel_runs_are_deterministic(
        pairs in prop::collection::vec((1i64..12, 0i64..50), 1..40),
        capacity in 0i64..80,
    ) {
        let items = items_from(&pairs);
        let solver = KnapsackSolver::builder().block_size(2).build();
        let first = solver.solve_with_selection(&items, capacity).unwrap();
        let second = solver.solve_with_selection(&items, capacity).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn known_instance_solves_with_unit_blocks() {
    let items = items_from(&[
        (23, 92),
        (31, 57),
        (29, 49),
        (44, 68),
        (53, 60),
        (38, 43),
        (63, 67),
        (85, 84),
        (89, 87),
        (82, 72),
    ]);
    let problem = KnapsackProblem::new(&items, 165).unwrap();
    let (value, path) = LayeredEngine::with_block_size(problem.clone(), 1).run();
    assert_eq!(value, 309);
    let sel = problem.selection_from_path(&path);
    let weight: i64 = sel.iter().map(|&k| items[k].weight).sum();
    assert!(weight <= 165);
}
