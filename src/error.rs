//! Error type shared by every solver in the crate.
//!
//! All failures are input-validation failures: the solvers are pure functions
//! and never fail once their inputs have been accepted.

use thiserror::Error;

/// Coarse classification of a [`KnapsackError`].
///
/// There is only one kind today; callers that want to branch on the broad
/// category rather than the exact violation match on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
}

/// Rejected solver input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnapsackError {
    /// The weight budget was below zero.
    #[error("invalid input: capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),

    /// The weight budget cannot be used as a DP row width on this platform.
    #[error("invalid input: capacity {0} is too large to allocate a DP row")]
    CapacityTooLarge(i64),

    /// An item carried a negative weight.
    #[error("invalid input: item {index} has negative weight {weight}")]
    NegativeWeight { index: usize, weight: i64 },

    /// An item carried a negative value.
    #[error("invalid input: item {index} has negative value {value}")]
    NegativeValue { index: usize, value: i64 },

    /// The values of all items together do not fit in a `u64`.
    #[error("invalid input: total item value exceeds {}", u64::MAX)]
    ValueOverflow,
}

impl KnapsackError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_is_invalid_input() {
        let errs = [
            KnapsackError::NegativeCapacity(-1),
            KnapsackError::CapacityTooLarge(i64::MAX),
            KnapsackError::NegativeWeight {
                index: 0,
                weight: -3,
            },
            KnapsackError::NegativeValue {
                index: 2,
                value: -7,
            },
            KnapsackError::ValueOverflow,
        ];
        for err in errs {
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn messages_name_the_offending_item() {
        let err = KnapsackError::NegativeWeight {
            index: 4,
            weight: -2,
        };
        assert_eq!(
            err.to_string(),
            "invalid input: item 4 has negative weight -2"
        );
        assert_eq!(
            KnapsackError::NegativeCapacity(-5).to_string(),
            "invalid input: capacity must be non-negative, got -5"
        );
    }
}
