//! Generic layered DP engine with path reconstruction.
//!
//! The engine runs in two phases:
//! 1. A forward pass that advances the frontier block by block to layer `T`,
//!    keeping a single frontier live.
//! 2. A divide-and-conquer reconstruction that splits the block range at its
//!    midpoint, asks the problem for a boundary state there, and recurses on
//!    both halves until a single block remains, which the problem rebuilds
//!    locally.
//!
//! Peak memory is one frontier per recursion level plus one leaf table,
//! instead of the full `T × W` table. With the `parallel` feature the two
//! halves of each split run on the rayon pool.

use crate::blocks::{default_block_size, plan_blocks, Block};
use crate::traits::{LayeredProblem, ThreadSafe};

/// Layered DP engine for a problem instance `P`.
///
/// ```
/// use knapsack_dp::{problems::knapsack::KnapsackProblem, Item, LayeredEngine};
///
/// let items = [Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)];
/// let problem = KnapsackProblem::new(&items, 5).unwrap();
/// let (value, path) = LayeredEngine::new(problem).run();
/// assert_eq!(value, 7);
/// assert_eq!(path.len(), items.len() + 1);
/// ```
pub struct LayeredEngine<P: LayeredProblem> {
    problem: P,
    block_size: usize,
}

impl<P: LayeredProblem> LayeredEngine<P> {
    /// Create an engine with the default block size (≈ √T).
    pub fn new(problem: P) -> Self {
        let b = default_block_size(problem.num_layers());
        Self::with_block_size(problem, b)
    }

    /// Create an engine with an explicit block size.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(problem: P, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self {
            problem,
            block_size,
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn into_problem(self) -> P {
        self.problem
    }

    /// Phase I: advance from layer 0 to layer `T`, one block at a time.
    fn forward_pass(&self, blocks: &[Block]) -> P::Frontier {
        let mut frontier = self.problem.init_frontier();
        for block in blocks {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("advance_block", start = block.start, end = block.end);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            frontier = self
                .problem
                .advance_block(block.start, block.end, &frontier);
        }
        frontier
    }
}

impl<P> LayeredEngine<P>
where
    P: LayeredProblem + ThreadSafe,
    P::State: ThreadSafe,
    P::Boundary: ThreadSafe,
{
    /// Run the DP and reconstruct one optimal path.
    ///
    /// Returns `(optimal_cost, path)`. The path runs from the initial boundary
    /// at layer 0 to the terminal boundary at layer `T`; it is empty when the
    /// problem has no layers. A problem that breaks the [`LayeredProblem`]
    /// contract (boundaries not on an optimal path) yields an arbitrary path.
    pub fn run(&self) -> (P::Cost, Vec<P::State>) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "engine_run",
            layers = self.problem.num_layers(),
            block_size = self.block_size
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let blocks = plan_blocks(self.problem.num_layers(), self.block_size);
        let frontier_t = self.forward_pass(&blocks);

        let beta_0 = self.problem.initial_boundary();
        let beta_t = self.problem.terminal_boundary(&frontier_t);
        let path = self.reconstruct(&blocks, &beta_0, &beta_t);
        let cost = self.problem.extract_cost(&frontier_t, &beta_t);

        (cost, path)
    }

    /// Phase II: reconstruct the optimal path across `blocks`, pinned at
    /// `beta_a` (start of the first block) and `beta_c` (end of the last).
    fn reconstruct(
        &self,
        blocks: &[Block],
        beta_a: &P::Boundary,
        beta_c: &P::Boundary,
    ) -> Vec<P::State> {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("reconstruct_interval", blocks = blocks.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        match blocks {
            [] => Vec::new(),
            [block] => self
                .problem
                .reconstruct_block(block.start, block.end, beta_a, beta_c),
            _ => {
                let (left, right) = blocks.split_at(blocks.len() / 2);
                let a = left[0].start;
                let m = right[0].start;
                let c = right[right.len() - 1].end;

                #[cfg(feature = "tracing")]
                let beta_m = tracing::trace_span!("choose_boundary", a, m, c)
                    .in_scope(|| self.problem.choose_boundary(a, m, c, beta_a, beta_c));
                #[cfg(not(feature = "tracing"))]
                let beta_m = self.problem.choose_boundary(a, m, c, beta_a, beta_c);

                let (path_left, path_right) = join(
                    || self.reconstruct(left, beta_a, &beta_m),
                    || self.reconstruct(right, &beta_m, beta_c),
                );
                concat_paths(path_left, path_right)
            }
        }
    }
}

/// Join two path segments that share their boundary state.
fn concat_paths<S: Clone + PartialEq>(left: Vec<S>, right: Vec<S>) -> Vec<S> {
    if left.is_empty() {
        return right;
    }
    if right.is_empty() {
        return left;
    }
    let mut out = left;
    let offset = usize::from(out.last() == right.first());
    out.extend_from_slice(&right[offset..]);
    out
}

#[cfg(feature = "parallel")]
fn join<A, B, RA, RB>(left: A, right: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(left, right)
}

#[cfg(not(feature = "parallel"))]
fn join<A, B, RA, RB>(left: A, right: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (left(), right())
}
