use knapsack_dp::problems::knapsack::{KnapsackProblem, KnapsackState};
use knapsack_dp::{solve_knapsack, Item, LayeredEngine, LayeredEngineBuilder, LayeredProblem};
use proptest::prelude::*;

fn items_from(pairs: &[(i64, i64)]) -> Vec<Item> {
    pairs.iter().copied().map(Item::from).collect()
}

/// Consecutive layers, each step either skips the item or adds its weight.
fn path_is_walk(problem: &KnapsackProblem, path: &[KnapsackState]) -> bool {
    path.windows(2).all(|w| {
        let item = problem.items()[w[0].layer];
        w[1].layer == w[0].layer + 1
            && (w[1].used == w[0].used || w[1].used == w[0].used + item.weight)
    })
}

#[test]
fn zero_layers_no_op() {
    let problem = KnapsackProblem::new(&[], 8).unwrap();
    let (value, path) = LayeredEngine::new(problem).run();
    assert_eq!(value, 0);
    assert!(path.is_empty());
}

#[test]
fn path_spans_all_layers_and_ends_on_optimum() {
    let items = items_from(&[(4, 7), (2, 3), (3, 5), (1, 1), (5, 8), (2, 2), (6, 9)]);
    let problem = KnapsackProblem::new(&items, 10).unwrap();
    let engine = LayeredEngine::with_block_size(problem, 2);
    let (value, path) = engine.run();

    assert_eq!(value, solve_knapsack(&items, 10).unwrap());
    assert_eq!(path.first(), Some(&KnapsackState { layer: 0, used: 0 }));
    assert_eq!(path.last().map(|s| s.layer), Some(items.len()));
    assert!(path.last().map_or(false, |s| s.used <= 10));
    assert!(path_is_walk(engine.problem(), &path));
}

#[test]
fn builder_defaults_to_sqrt_blocks() {
    let items = items_from(&[(1, 1); 10]);
    let problem = KnapsackProblem::new(&items, 4).unwrap();
    let engine = LayeredEngineBuilder::new(problem.clone()).build();
    assert_eq!(engine.block_size(), 4);
    let engine = LayeredEngineBuilder::new(problem).with_block_size(3).build();
    assert_eq!(engine.block_size(), 3);
}

#[test]
fn frontier_after_all_layers_holds_the_optimum() {
    let items = items_from(&[(2, 3), (3, 4), (4, 5), (5, 6)]);
    let problem = KnapsackProblem::new(&items, 5).unwrap();
    let f = problem.advance_block(0, problem.num_layers(), &problem.init_frontier());
    assert_eq!(f.best.iter().flatten().max(), Some(&7));
    let beta = problem.terminal_boundary(&f);
    assert_eq!(problem.extract_cost(&f, &beta), 7);
}

proptest! {
    #[test]
    fn every_block_size_gives_a_valid_optimal_walk(
        pairs in prop::collection::vec((0i64..10, 0i64..30), 1..14),
        capacity in 0i64..40,
        block_size in 1usize..16,
    ) {
        let items = items_from(&pairs);
        let problem = KnapsackProblem::new(&items, capacity).unwrap();
        let engine = LayeredEngine::with_block_size(problem, block_size);
        let (value, path) = engine.run();

        prop_assert_eq!(value, solve_knapsack(&items, capacity).unwrap());
        prop_assert_eq!(path.len(), items.len() + 1);
        prop_assert!(path_is_walk(engine.problem(), &path));

        let sel = engine.problem().selection_from_path(&path);
        let picked: u64 = sel.iter().map(|&k| items[k].value as u64).sum();
        prop_assert_eq!(picked, value);
    }
}
