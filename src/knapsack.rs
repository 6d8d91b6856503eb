//! Exact 0/1 knapsack solvers.
//!
//! [`solve_knapsack`] is the workhorse: one DP row of `C + 1` cells, updated
//! in place once per item. [`solve_with_selection`] additionally reports which
//! items make up an optimum, using the layered engine so that memory stays
//! close to one row even for long item lists.

use crate::builder::LayeredEngineBuilder;
use crate::error::KnapsackError;
use crate::item::{try_row, validate, Item, PackedItem};
use crate::problems::knapsack::KnapsackProblem;

/// Maximum total value of a subset of `items` weighing at most `capacity`.
///
/// Each item is used at most once. Runs in `O(n·W)` time and `O(W)` memory,
/// where `W` is the capacity clipped to the total weight of the items that
/// fit on their own. A row of `W + 1` cells that cannot be allocated is
/// reported as [`KnapsackError::CapacityTooLarge`].
///
/// ```
/// use knapsack_dp::{solve_knapsack, Item};
///
/// let items = [Item::new(10, 60), Item::new(20, 100), Item::new(30, 120)];
/// assert_eq!(solve_knapsack(&items, 50), Ok(220));
/// assert!(solve_knapsack(&items, -1).is_err());
/// ```
pub fn solve_knapsack(items: &[Item], capacity: i64) -> Result<u64, KnapsackError> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("knapsack_solve", items = items.len(), capacity);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let input = validate(items, capacity)?;
    if input.items.is_empty() {
        return Ok(0);
    }
    if input.total_weight() <= input.capacity {
        return Ok(input.total_value());
    }
    let row = try_row(input.usable_capacity() + 1, 0u64, capacity)?;
    let best = rolling_best(&input.items, row);

    #[cfg(feature = "tracing")]
    tracing::debug!(best, "knapsack solved");
    Ok(best)
}

/// Rolling-row recurrence over validated items.
///
/// `row` starts as the empty prefix (all zeros, one cell per budget) and is
/// swept from high to low budgets so that every cell read still belongs to the
/// previous item.
fn rolling_best(items: &[PackedItem], mut row: Vec<u64>) -> u64 {
    let capacity = row.len() - 1;
    for item in items {
        if item.weight > capacity {
            continue;
        }
        for j in (item.weight..=capacity).rev() {
            let cand = row[j - item.weight] + item.value;
            if cand > row[j] {
                row[j] = cand;
            }
        }
    }
    row[capacity]
}

/// An optimal value together with one selection attaining it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub value: u64,
    /// Total weight of `selected`; never above the capacity.
    pub weight: usize,
    /// Indices into the input item slice, ascending.
    pub selected: Vec<usize>,
}

/// Solve and report one optimal selection, with the default engine settings.
pub fn solve_with_selection(items: &[Item], capacity: i64) -> Result<Solution, KnapsackError> {
    KnapsackSolver::default().solve_with_selection(items, capacity)
}

/// Configured solver.
///
/// ```
/// use knapsack_dp::{Item, KnapsackSolver};
///
/// let solver = KnapsackSolver::builder().block_size(2).build();
/// let items = [Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)];
/// let sol = solver.solve_with_selection(&items, 5).unwrap();
/// assert_eq!(sol.value, 7);
/// assert_eq!(sol.selected, vec![0, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnapsackSolver {
    block_size: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct KnapsackSolverBuilder {
    block_size: Option<usize>,
}

impl KnapsackSolverBuilder {
    /// Items per leaf block during reconstruction. Defaults to `ceil(sqrt(n))`.
    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    pub fn build(self) -> KnapsackSolver {
        KnapsackSolver {
            block_size: self.block_size,
        }
    }
}

impl KnapsackSolver {
    pub fn builder() -> KnapsackSolverBuilder {
        KnapsackSolverBuilder::default()
    }

    /// Same as [`solve_knapsack`].
    pub fn solve(&self, items: &[Item], capacity: i64) -> Result<u64, KnapsackError> {
        solve_knapsack(items, capacity)
    }

    pub fn solve_with_selection(
        &self,
        items: &[Item],
        capacity: i64,
    ) -> Result<Solution, KnapsackError> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("knapsack_select", items = items.len(), capacity);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let input = validate(items, capacity)?;
        let problem = KnapsackProblem::from_validated(input, capacity)?;
        let mut builder = LayeredEngineBuilder::new(problem);
        if let Some(b) = self.block_size {
            builder = builder.with_block_size(b);
        }
        let engine = builder.build();
        let (value, path) = engine.run();

        let problem = engine.into_problem();
        let selected = problem.selection_from_path(&path);
        let weight = selected.iter().map(|&k| problem.items()[k].weight).sum();
        Ok(Solution {
            value,
            weight,
            selected,
        })
    }
}
