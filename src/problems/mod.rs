//! Problems implemented on top of the layered engine.
//!
//! - [`knapsack`] : 0/1 knapsack with exact-weight states, for selection reconstruction.

pub mod knapsack;
