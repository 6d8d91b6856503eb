//! Layer blocks and block sizing.
//!
//! The engine partitions layers `[0, T)` into consecutive blocks. Blocks are
//! the leaves of reconstruction: each one is rebuilt with a local table, so a
//! block's length bounds the engine's peak memory together with the frontier
//! width.

/// Contiguous interval of layers `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start: usize,
    pub end: usize,
}

impl Block {
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split `num_layers` layers into blocks of `block_size` (the last one may be
/// shorter).
///
/// # Panics
/// Panics if `block_size == 0`.
pub fn plan_blocks(num_layers: usize, block_size: usize) -> Vec<Block> {
    assert!(block_size > 0, "block_size must be positive");
    (0..num_layers.div_ceil(block_size))
        .map(|k| Block {
            start: k * block_size,
            end: ((k + 1) * block_size).min(num_layers),
        })
        .collect()
}

/// Default block size for `num_layers` layers: `ceil(sqrt(T))`, at least 1.
///
/// This balances the number of blocks against the size of each leaf table.
#[inline]
pub fn default_block_size(num_layers: usize) -> usize {
    if num_layers <= 1 {
        1
    } else {
        (num_layers as f64).sqrt().ceil() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_typical_blocks() {
        let b = Block { start: 3, end: 3 };
        assert!(b.is_empty());
        let b = Block { start: 2, end: 7 };
        assert_eq!(b.len(), 5);
        assert!(!b.is_empty());
    }

    #[test]
    fn plan_covers_all_layers_without_gaps() {
        let blocks = plan_blocks(10, 3);
        assert_eq!(
            blocks,
            vec![
                Block { start: 0, end: 3 },
                Block { start: 3, end: 6 },
                Block { start: 6, end: 9 },
                Block { start: 9, end: 10 },
            ]
        );
        assert!(plan_blocks(0, 4).is_empty());
        assert_eq!(plan_blocks(4, 8), vec![Block { start: 0, end: 4 }]);
    }

    #[test]
    #[should_panic]
    fn plan_rejects_zero_block_size() {
        let _ = plan_blocks(5, 0);
    }

    #[test]
    fn default_size_is_sqrt_ceiling() {
        assert_eq!(default_block_size(0), 1);
        assert_eq!(default_block_size(1), 1);
        assert_eq!(default_block_size(2), 2);
        assert_eq!(default_block_size(5), 3);
        assert_eq!(default_block_size(100), 10);
        assert_eq!(default_block_size(101), 11);
    }

    #[test]
    fn default_size_never_shrinks() {
        let mut prev = 0;
        for t in 0..500 {
            let b = default_block_size(t);
            assert!(b >= prev, "block size decreased at t={t}: {b} < {prev}");
            prev = b;
        }
    }
}
