//! Full `O(n·C)` knapsack table.
//!
//! This is the direct formulation: row `i` holds the best value achievable
//! with the first `i` items for every budget `0..=C`. Row 0 is the empty
//! prefix (all zeros), which lets the first item go through the same
//! recurrence as every other one.
//!
//! The table is stored flat, row-major. It is mostly useful as a reference
//! for the rolling-row solver and the layered engine, and for inspecting
//! intermediate values.

use crate::error::KnapsackError;
use crate::item::{try_row, validate, Item, PackedItem};

#[derive(Debug, Clone)]
pub struct KnapsackTable {
    items: Vec<PackedItem>,
    width: usize,
    cells: Vec<u64>,
}

impl KnapsackTable {
    /// Validate the input and fill the whole table.
    ///
    /// The table always spans every budget `0..=C`. A table whose cell count
    /// overflows or cannot be allocated is reported as
    /// [`KnapsackError::CapacityTooLarge`].
    pub fn build(items: &[Item], capacity: i64) -> Result<Self, KnapsackError> {
        let validated = validate(items, capacity)?;
        let width = validated.capacity + 1;
        let cells = (validated.items.len() + 1)
            .checked_mul(width)
            .ok_or(KnapsackError::CapacityTooLarge(capacity))?;
        let cells = try_row(cells, 0u64, capacity)?;
        Ok(Self::fill(validated.items, width, cells))
    }

    /// Fill `cells`, zeroed and holding `(items.len() + 1) * width` entries.
    fn fill(items: Vec<PackedItem>, width: usize, mut cells: Vec<u64>) -> Self {
        for (i, item) in items.iter().enumerate() {
            let (prev, next) = cells.split_at_mut((i + 1) * width);
            let prev = &prev[i * width..];
            let next = &mut next[..width];
            for j in 0..width {
                next[j] = if item.weight > j {
                    prev[j]
                } else {
                    prev[j].max(prev[j - item.weight] + item.value)
                };
            }
        }

        Self {
            items,
            width,
            cells,
        }
    }

    /// Number of rows, including the empty-prefix row.
    pub fn rows(&self) -> usize {
        self.items.len() + 1
    }

    pub fn capacity(&self) -> usize {
        self.width - 1
    }

    /// Best value using the first `i` items with budget `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<u64> {
        if i >= self.rows() || j >= self.width {
            return None;
        }
        self.cells.get(i * self.width + j).copied()
    }

    pub fn row(&self, i: usize) -> Option<&[u64]> {
        if i >= self.rows() {
            return None;
        }
        let start = i * self.width;
        self.cells.get(start..start + self.width)
    }

    /// Optimal value for the whole item set and full capacity.
    pub fn best_value(&self) -> u64 {
        self.cells.last().copied().unwrap_or(0)
    }

    /// Indices of one optimal selection, ascending.
    ///
    /// Items are only taken when excluding them would lose value, so ties
    /// resolve toward leaving later items out.
    pub fn selection(&self) -> Vec<usize> {
        let mut picked = Vec::new();
        let mut j = self.capacity();
        for i in (1..self.rows()).rev() {
            let here = self.cells[i * self.width + j];
            let above = self.cells[(i - 1) * self.width + j];
            if here != above {
                picked.push(i - 1);
                j -= self.items[i - 1].weight;
            }
        }
        picked.reverse();
        picked
    }
}
