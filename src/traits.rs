//! Trait for dynamic programs the layered engine can run.
//!
//! A problem is a DP over layers `0..=T` where layer `i + 1` depends only on
//! layer `i`. The engine needs four abilities from it:
//! - Forward stepping: map the frontier (all DP values) of layer `i` to layer `i + 1`.
//! - Boundaries: pin down a single state at a layer.
//! - Midpoint selection: given pinned states at layers `a` and `c`, find a
//!   state at `a < m < c` that lies on an optimal path between them.
//! - Local reconstruction: recover the optimal path inside one short block.
//!
//! With these the engine keeps O(W) memory live per recursion level (W is the
//! frontier width) instead of materialising a `T × W` table.

/// Marker for values that may cross threads when the `parallel` feature is on.
#[cfg(feature = "parallel")]
pub trait ThreadSafe: Send + Sync {}
#[cfg(feature = "parallel")]
impl<T: Send + Sync + ?Sized> ThreadSafe for T {}

/// Marker for values that may cross threads when the `parallel` feature is on.
#[cfg(not(feature = "parallel"))]
pub trait ThreadSafe {}
#[cfg(not(feature = "parallel"))]
impl<T: ?Sized> ThreadSafe for T {}

/// A fixed layered DP instance.
pub trait LayeredProblem {
    /// One state on the reconstructed optimal path.
    type State: Clone + PartialEq;

    /// All DP values of one layer.
    type Frontier: Clone;

    /// A pinned state at some layer, used to split reconstruction.
    type Boundary: Clone;

    /// Objective value.
    type Cost: Copy + Ord;

    /// Number of steps `T`; frontiers exist for layers `0..=T`.
    fn num_layers(&self) -> usize;

    /// Frontier at layer 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// One DP step from layer `layer` to `layer + 1`.
    ///
    /// Must depend only on `frontier_i` and fixed problem data.
    fn forward_step(&self, layer: usize, frontier_i: &Self::Frontier) -> Self::Frontier;

    /// Advance the frontier across the block `[a, b)`.
    fn advance_block(&self, a: usize, b: usize, frontier_a: &Self::Frontier) -> Self::Frontier {
        let mut f = frontier_a.clone();
        for layer in a..b {
            f = self.forward_step(layer, &f);
        }
        f
    }

    /// Boundary at layer 0.
    fn initial_boundary(&self) -> Self::Boundary;

    /// Boundary at layer `T`, selected from the final frontier.
    ///
    /// Typically the state that attains the optimum.
    fn terminal_boundary(&self, frontier_t: &Self::Frontier) -> Self::Boundary;

    /// Pick a boundary at layer `m` for the interval `[a, c]`.
    ///
    /// `beta_a` and `beta_c` are known to lie on a globally optimal path. The
    /// returned boundary must lie on an optimal path between them. Working
    /// memory should stay O(W).
    fn choose_boundary(
        &self,
        a: usize,
        m: usize,
        c: usize,
        beta_a: &Self::Boundary,
        beta_c: &Self::Boundary,
    ) -> Self::Boundary;

    /// Optimal path `(state_a, ..., state_b)` inside `[a, b]` between two
    /// pinned boundaries.
    ///
    /// The engine concatenates segments and drops the repeated state at each
    /// join.
    fn reconstruct_block(
        &self,
        a: usize,
        b: usize,
        beta_a: &Self::Boundary,
        beta_b: &Self::Boundary,
    ) -> Vec<Self::State>;

    /// Objective value from the final frontier and terminal boundary.
    fn extract_cost(&self, frontier_t: &Self::Frontier, beta_t: &Self::Boundary) -> Self::Cost;
}
