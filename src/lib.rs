//! Exact 0/1 knapsack solvers.
//!
//! Given items with non-negative integer weights and values and a weight
//! budget, find the largest total value of a subset that fits. Each item is
//! used at most once.
//!
//! ## Quick start
//! ```
//! use knapsack_dp::{solve_knapsack, solve_with_selection, Item};
//!
//! let items = [Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)];
//! assert_eq!(solve_knapsack(&items, 5), Ok(7));
//!
//! let sol = solve_with_selection(&items, 5).unwrap();
//! assert_eq!(sol.selected, vec![0, 1]);
//! ```
//!
//! ## Solvers
//! - [`solve_knapsack`]: rolling-row DP, `O(n·C)` time, `O(C)` memory.
//! - [`KnapsackTable`]: the full `(n + 1) × (C + 1)` table, for inspection.
//! - [`solve_with_selection`] / [`KnapsackSolver`]: optimum plus the chosen
//!   items, reconstructed by the [`LayeredEngine`] without keeping the full
//!   table.
//!
//! All of them validate their input first and return [`KnapsackError`] for
//! negative capacities, weights or values.
//!
//! ## Features
//! - `parallel`: split reconstruction across the rayon pool.
//! - `tracing`: emit spans for solver calls and engine phases.

pub mod blocks;
pub mod builder;
pub mod engine;
pub mod error;
pub mod item;
pub mod knapsack;
pub mod problems;
pub mod table;
pub mod traits;

pub use crate::builder::LayeredEngineBuilder;
pub use crate::engine::LayeredEngine;
pub use crate::error::{ErrorKind, KnapsackError};
pub use crate::item::Item;
pub use crate::knapsack::{
    solve_knapsack, solve_with_selection, KnapsackSolver, KnapsackSolverBuilder, Solution,
};
pub use crate::table::KnapsackTable;
pub use crate::traits::LayeredProblem;
