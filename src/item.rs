//! Knapsack items and input validation.
//!
//! Callers describe items with signed integers so that malformed input can be
//! reported instead of being unrepresentable; every solver funnels its input
//! through [`validate`] before touching a DP row.

use crate::error::KnapsackError;

/// An item as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub weight: i64,
    pub value: i64,
}

impl Item {
    pub const fn new(weight: i64, value: i64) -> Self {
        Self { weight, value }
    }

    /// Value per unit of weight.
    ///
    /// Returns `None` for weightless items. The exact solvers never look at
    /// this; it is handy for greedy orderings and reporting.
    pub fn value_per_weight(&self) -> Option<f64> {
        if self.weight == 0 {
            None
        } else {
            Some(self.value as f64 / self.weight as f64)
        }
    }
}

impl From<(i64, i64)> for Item {
    fn from((weight, value): (i64, i64)) -> Self {
        Self { weight, value }
    }
}

/// An item after validation.
///
/// `weight` saturates at `usize::MAX` on targets where the caller's weight
/// does not fit; such an item can never fit any addressable capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedItem {
    pub weight: usize,
    pub value: u64,
}

/// Validated solver input.
///
/// Invariant: the sum of all `items[k].value` fits in a `u64`, so no DP cell
/// (which is always the value of some subset) can overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    pub items: Vec<PackedItem>,
    pub capacity: usize,
}

impl Validated {
    /// Total value of every item.
    pub fn total_value(&self) -> u64 {
        // Cannot overflow: checked in `validate`.
        self.items.iter().map(|it| it.value).sum()
    }

    /// Total weight of every item, saturating.
    pub fn total_weight(&self) -> usize {
        self.items
            .iter()
            .fold(0usize, |acc, it| acc.saturating_add(it.weight))
    }

    /// Largest weight any feasible subset can reach: `capacity`, or less when
    /// the items that fit on their own weigh less than that together.
    ///
    /// Solving with this budget gives the same optimum as with `capacity`,
    /// and items heavier than `capacity` cost nothing in row width.
    pub fn usable_capacity(&self) -> usize {
        self.items
            .iter()
            .filter(|it| it.weight <= self.capacity)
            .fold(0usize, |acc, it| acc.saturating_add(it.weight))
            .min(self.capacity)
    }
}

/// Allocate a DP row of `len` cells set to `fill`.
///
/// A row the allocator cannot provide is reported as
/// [`KnapsackError::CapacityTooLarge`] for the caller's `capacity`.
pub(crate) fn try_row<T: Clone>(len: usize, fill: T, capacity: i64) -> Result<Vec<T>, KnapsackError> {
    let mut row = Vec::new();
    row.try_reserve_exact(len)
        .map_err(|_| KnapsackError::CapacityTooLarge(capacity))?;
    row.resize(len, fill);
    Ok(row)
}

/// Check `items` and `capacity` and convert them into solver form.
///
/// Fails on the first violation found: capacity is checked before items, and
/// items in order.
pub fn validate(items: &[Item], capacity: i64) -> Result<Validated, KnapsackError> {
    if capacity < 0 {
        return Err(KnapsackError::NegativeCapacity(capacity));
    }
    let cap = usize::try_from(capacity)
        .ok()
        .filter(|c| c.checked_add(1).is_some())
        .ok_or(KnapsackError::CapacityTooLarge(capacity))?;

    let mut packed = Vec::with_capacity(items.len());
    let mut total: u64 = 0;
    for (index, item) in items.iter().enumerate() {
        if item.weight < 0 {
            return Err(KnapsackError::NegativeWeight {
                index,
                weight: item.weight,
            });
        }
        if item.value < 0 {
            return Err(KnapsackError::NegativeValue {
                index,
                value: item.value,
            });
        }
        let value = item.value as u64;
        total = total
            .checked_add(value)
            .ok_or(KnapsackError::ValueOverflow)?;
        packed.push(PackedItem {
            weight: usize::try_from(item.weight).unwrap_or(usize::MAX),
            value,
        });
    }

    Ok(Validated {
        items: packed,
        capacity: cap,
    })
}
