//! Error type shared by the model, configuration and search modules.

use thiserror::Error;

/// Errors raised while building an instance or running a search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TardinessError {
    /// The job table has no jobs.
    #[error("instance must contain at least one job")]
    EmptyInstance,

    /// A job has a zero or negative processing time.
    #[error("job {id} has non-positive processing time {processing_time}")]
    NonPositiveProcessingTime { id: u32, processing_time: i64 },

    /// A job has a zero or negative weight.
    #[error("job {id} has non-positive weight {weight}")]
    NonPositiveWeight { id: u32, weight: i64 },

    /// Total processing time or worst-case cost does not fit in `i64`.
    #[error("instance too large: {quantity} overflows i64")]
    CostOverflow { quantity: &'static str },

    /// The iteration budget is zero.
    #[error("iteration count must be positive")]
    ZeroIterations,

    /// The tabu list could forbid every adjacent pair at once.
    #[error("tabu list is too long: capacity {capacity} must be less than {limit}")]
    TabuCapacityTooLarge { capacity: usize, limit: usize },

    /// Every adjacent pair was tabu and the policy forbids relaxing it.
    #[error("no admissible move at iteration {iteration}: every adjacent pair is tabu")]
    NoAdmissibleMove { iteration: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message() {
        let err = TardinessError::TabuCapacityTooLarge {
            capacity: 105,
            limit: 105,
        };
        assert_eq!(
            err.to_string(),
            "tabu list is too long: capacity 105 must be less than 105"
        );
    }

    #[test]
    fn test_no_move_message_names_iteration() {
        let err = TardinessError::NoAdmissibleMove { iteration: 7 };
        assert!(err.to_string().contains("iteration 7"));
    }
}
