//! Tabu Search configuration.

use crate::error::TardinessError;

/// What an iteration does when every adjacent pair is tabu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoMovePolicy {
    /// Abort the run with [`TardinessError::NoAdmissibleMove`].
    Fail,
    /// Leave schedule, cost and tabu list unchanged for this iteration.
    Skip,
    /// Ignore the tabu list for this iteration and take the cheapest
    /// swap in the whole neighborhood.
    #[default]
    RelaxTabu,
}

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_tardiness::tabu::{NoMovePolicy, TabuConfig};
///
/// let config = TabuConfig::default()
///     .with_iterations(500)
///     .with_tabu_capacity(7)
///     .with_no_move_policy(NoMovePolicy::Skip);
/// assert_eq!(config.iterations, 500);
/// assert!(config.validate(15).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of ordered job pairs remembered as tabu.
    pub tabu_capacity: usize,
    /// Exact number of iterations to run.
    pub iterations: usize,
    /// Behavior when no adjacent pair is admissible.
    pub no_move_policy: NoMovePolicy,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tabu_capacity: 11,
            iterations: 200,
            no_move_policy: NoMovePolicy::default(),
        }
    }
}

impl TabuConfig {
    /// Sets the tabu list capacity.
    pub fn with_tabu_capacity(mut self, capacity: usize) -> Self {
        self.tabu_capacity = capacity;
        self
    }

    /// Sets the iteration count.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the no-move policy.
    pub fn with_no_move_policy(mut self, policy: NoMovePolicy) -> Self {
        self.no_move_policy = policy;
        self
    }

    /// Validates the configuration for an instance of `job_count` jobs.
    ///
    /// The tabu capacity must stay below `n(n-1)/2`; otherwise the list
    /// could hold every pair at once and forbid the whole neighborhood.
    pub fn validate(&self, job_count: usize) -> Result<(), TardinessError> {
        if self.iterations == 0 {
            return Err(TardinessError::ZeroIterations);
        }
        let limit = job_count * job_count.saturating_sub(1) / 2;
        if self.tabu_capacity >= limit {
            return Err(TardinessError::TabuCapacityTooLarge {
                capacity: self.tabu_capacity,
                limit,
            });
        }
        Ok(())
    }
}
