//! 0/1 knapsack as a layered DP.
//!
//! Layers are items: layer `i` has decided items `0..i`. The frontier at layer
//! `i` maps each exact used weight `0..=C` to the best value that reaches it
//! (or `None` when no subset of the first `i` items weighs exactly that much).
//! Exact-weight states make a path through the layers spell out a selection:
//! the used weight grows by `weight[i]` exactly when item `i` is taken.
//!
//! Reconstruction pins both ends of an interval, so every sweep only needs the
//! window of used weights between the two pinned states.

use crate::error::KnapsackError;
use crate::item::{try_row, validate, Item, PackedItem, Validated};
use crate::traits::LayeredProblem;

#[derive(Clone, Debug)]
pub struct KnapsackProblem {
    items: Vec<PackedItem>,
    capacity: usize,
}

/// Best value per exact used weight; `best.len() == capacity + 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnapsackFrontier {
    pub best: Vec<Option<u64>>,
}

/// A point on the reconstructed path: after deciding `layer` items, `used`
/// units of capacity are taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KnapsackState {
    pub layer: usize,
    pub used: usize,
}

impl KnapsackProblem {
    /// Validate the input and size the frontier.
    ///
    /// The frontier spans the usable capacity (see
    /// [`Validated::usable_capacity`]); a frontier of that width that cannot
    /// be allocated is reported as [`KnapsackError::CapacityTooLarge`].
    pub fn new(items: &[Item], capacity: i64) -> Result<Self, KnapsackError> {
        Self::from_validated(validate(items, capacity)?, capacity)
    }

    pub(crate) fn from_validated(input: Validated, capacity: i64) -> Result<Self, KnapsackError> {
        let width = input.usable_capacity();
        // Reserve one frontier up front; the engine keeps a few of them live.
        try_row(width + 1, None::<u64>, capacity)?;
        Ok(Self {
            items: input.items,
            capacity: width,
        })
    }

    pub fn items(&self) -> &[PackedItem] {
        &self.items
    }

    /// Largest used weight a state can reach.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Item indices chosen along `path`, ascending.
    ///
    /// Weightless items leave `used` unchanged; any optimal path takes every
    /// one of them that carries value, so those are reported as taken.
    pub fn selection_from_path(&self, path: &[KnapsackState]) -> Vec<usize> {
        path.windows(2)
            .filter_map(|w| {
                let k = w[0].layer;
                let item = self.items[k];
                let taken = w[1].used != w[0].used || (item.weight == 0 && item.value > 0);
                taken.then_some(k)
            })
            .collect()
    }
}

/// Push `item` through an exact-weight row of width `row.len()`.
fn take_or_skip(item: PackedItem, row: &[Option<u64>]) -> Vec<Option<u64>> {
    let mut next = row.to_vec();
    for u in item.weight..row.len() {
        if let Some(v) = row[u - item.weight] {
            let cand = v + item.value;
            if next[u].map_or(true, |cur| cand > cur) {
                next[u] = Some(cand);
            }
        }
    }
    next
}

/// Undo `item` on a "best value still to collect" row: `out[u]` is the best
/// value from standing at `u` before the item.
fn take_or_skip_back(item: PackedItem, row: &[Option<u64>]) -> Vec<Option<u64>> {
    let mut prev = row.to_vec();
    for u in 0..row.len().saturating_sub(item.weight) {
        if let Some(v) = row[u + item.weight] {
            let cand = v + item.value;
            if prev[u].map_or(true, |cur| cand > cur) {
                prev[u] = Some(cand);
            }
        }
    }
    prev
}

/// A row of `width` cells that is reachable only at `at`, with value 0.
fn pinned(width: usize, at: usize) -> Vec<Option<u64>> {
    let mut row = vec![None; width];
    row[at] = Some(0);
    row
}

impl LayeredProblem for KnapsackProblem {
    type State = KnapsackState;
    type Frontier = KnapsackFrontier;
    type Boundary = KnapsackState;
    type Cost = u64;

    fn num_layers(&self) -> usize {
        self.items.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        KnapsackFrontier {
            best: pinned(self.capacity + 1, 0),
        }
    }

    fn forward_step(&self, layer: usize, frontier_i: &Self::Frontier) -> Self::Frontier {
        KnapsackFrontier {
            best: take_or_skip(self.items[layer], &frontier_i.best),
        }
    }

    fn initial_boundary(&self) -> Self::Boundary {
        KnapsackState { layer: 0, used: 0 }
    }

    fn terminal_boundary(&self, frontier_t: &Self::Frontier) -> Self::Boundary {
        // Lightest weight among those attaining the best value.
        let mut used = 0;
        let mut best = None;
        for (u, &v) in frontier_t.best.iter().enumerate() {
            if v > best {
                best = v;
                used = u;
            }
        }
        KnapsackState {
            layer: self.items.len(),
            used,
        }
    }

    fn choose_boundary(
        &self,
        a: usize,
        m: usize,
        c: usize,
        beta_a: &Self::Boundary,
        beta_c: &Self::Boundary,
    ) -> Self::Boundary {
        debug_assert!(a < m && m < c);
        debug_assert!(beta_a.used <= beta_c.used);
        let lo = beta_a.used;
        let width = beta_c.used - lo + 1;

        let mut fwd = pinned(width, 0);
        for &item in &self.items[a..m] {
            fwd = take_or_skip(item, &fwd);
        }
        let mut bwd = pinned(width, width - 1);
        for &item in self.items[m..c].iter().rev() {
            bwd = take_or_skip_back(item, &bwd);
        }

        let mut best: Option<(u64, usize)> = None;
        for (u, (f, b)) in fwd.iter().zip(&bwd).enumerate() {
            if let (Some(f), Some(b)) = (f, b) {
                let total = f + b;
                if best.map_or(true, |(v, _)| total > v) {
                    best = Some((total, u));
                }
            }
        }
        debug_assert!(best.is_some(), "pinned boundaries must be connected");
        let offset = best.map_or(0, |(_, u)| u);

        KnapsackState {
            layer: m,
            used: lo + offset,
        }
    }

    fn reconstruct_block(
        &self,
        a: usize,
        b: usize,
        beta_a: &Self::Boundary,
        beta_b: &Self::Boundary,
    ) -> Vec<Self::State> {
        debug_assert!(a <= b && b <= self.items.len());
        debug_assert!(beta_a.used <= beta_b.used);
        let lo = beta_a.used;
        let width = beta_b.used - lo + 1;

        // Local exact-weight table over the window [lo, beta_b.used].
        let mut rows = Vec::with_capacity(b - a + 1);
        rows.push(pinned(width, 0));
        for &item in &self.items[a..b] {
            let next = take_or_skip(item, &rows[rows.len() - 1]);
            rows.push(next);
        }

        let mut u = width - 1;
        let mut rev_path = Vec::with_capacity(b - a + 1);
        rev_path.push(KnapsackState {
            layer: b,
            used: lo + u,
        });
        for k in (1..rows.len()).rev() {
            let item = self.items[a + k - 1];
            if rows[k - 1][u] != rows[k][u] {
                debug_assert!(u >= item.weight);
                u -= item.weight;
            }
            rev_path.push(KnapsackState {
                layer: a + k - 1,
                used: lo + u,
            });
        }
        rev_path.reverse();
        rev_path
    }

    fn extract_cost(&self, frontier_t: &Self::Frontier, beta_t: &Self::Boundary) -> Self::Cost {
        frontier_t
            .best
            .get(beta_t.used)
            .copied()
            .flatten()
            .unwrap_or(0)
    }
}
