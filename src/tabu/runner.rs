//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the instance's table order; compute its cost by full scan
//! 2. At each of the K iterations:
//!    a. Scan adjacent positions left to right with a running elapsed time
//!    b. Skip pairs held in the tabu list, price the rest with `swap_cost`
//!    c. Take the cheapest swap (lowest position on ties), even if worse
//!    d. Record the swapped pair, in its new orientation, as tabu
//!    e. Snapshot the schedule if its cost is strictly below the best
//! 3. Report the best schedule and the iteration that found it
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use super::config::{NoMovePolicy, TabuConfig};
use super::memory::TabuMemory;
use super::observer::{NoopObserver, SearchObserver};
use crate::cost::{swap_cost, total_cost};
use crate::error::TardinessError;
use crate::model::{Instance, Schedule};

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
    /// Best schedule found.
    pub best: Schedule,
    /// Domain ids of the best schedule.
    pub best_ids: Vec<u32>,
    /// Cost of the best schedule.
    pub best_cost: i64,
    /// Iteration at which the best schedule was found (0 = initial order).
    pub best_iteration: usize,
    /// Cost of the initial schedule.
    pub initial_cost: i64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Current cost after each iteration.
    pub cost_history: Vec<i64>,
    /// Iterations in which the tabu list was lifted.
    pub relaxed_iterations: usize,
    /// Iterations that made no move.
    pub skipped_iterations: usize,
}

/// Outcome of a single [`SearchState::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// 1-based iteration index.
    pub iteration: usize,
    /// Position `i` of the applied swap `(i, i+1)`, `None` if skipped.
    pub position: Option<usize>,
    /// Current cost after the step.
    pub cost: i64,
    /// True if the tabu list was ignored to find a move.
    pub relaxed: bool,
    /// True if the step produced a new best schedule.
    pub improved: bool,
}

/// Mutable state of one search run.
///
/// Owned by the caller and advanced one iteration at a time with
/// [`step`](SearchState::step). Independent states share nothing.
#[derive(Debug, Clone)]
pub struct SearchState {
    current: Schedule,
    current_cost: i64,
    best: Schedule,
    best_cost: i64,
    best_iteration: usize,
    iteration: usize,
    tabu: TabuMemory,
    policy: NoMovePolicy,
}

impl SearchState {
    /// Validates `config` against the instance and starts from the table
    /// order with an empty tabu list. The config's no-move policy governs
    /// every later [`step`](SearchState::step).
    pub fn new(instance: &Instance, config: &TabuConfig) -> Result<Self, TardinessError> {
        config.validate(instance.len())?;
        Ok(Self::with_memory(
            instance,
            TabuMemory::new(config.tabu_capacity),
            config.no_move_policy,
        ))
    }

    fn with_memory(instance: &Instance, tabu: TabuMemory, policy: NoMovePolicy) -> Self {
        let current = Schedule::identity(instance.len());
        let current_cost = total_cost(instance, &current);
        Self {
            best: current.clone(),
            best_cost: current_cost,
            current,
            current_cost,
            best_iteration: 0,
            iteration: 0,
            tabu,
            policy,
        }
    }

    /// Runs one iteration.
    ///
    /// When every pair is tabu, the state's [`NoMovePolicy`] decides
    /// between failing, skipping the iteration and taking the best move
    /// regardless of the tabu list. On error the state is left untouched.
    pub fn step(&mut self, instance: &Instance) -> Result<Step, TardinessError> {
        let iteration = self.iteration + 1;

        let mut relaxed = false;
        let mut candidate =
            best_swap(instance, &self.current, self.current_cost, Some(&self.tabu));
        if candidate.is_none() {
            match self.policy {
                NoMovePolicy::Fail => {
                    return Err(TardinessError::NoAdmissibleMove { iteration });
                }
                NoMovePolicy::Skip => {}
                NoMovePolicy::RelaxTabu => {
                    candidate = best_swap(instance, &self.current, self.current_cost, None);
                    relaxed = candidate.is_some();
                }
            }
        }

        let mut improved = false;
        if let Some((pos, cost)) = candidate {
            self.current.swap_adjacent(pos);
            self.tabu
                .record(self.current.slot(pos), self.current.slot(pos + 1));
            self.current_cost = cost;

            if cost < self.best_cost {
                self.best.clone_from(&self.current);
                self.best_cost = cost;
                self.best_iteration = iteration;
                improved = true;
            }
        }
        self.iteration = iteration;

        Ok(Step {
            iteration,
            position: candidate.map(|(pos, _)| pos),
            cost: self.current_cost,
            relaxed,
            improved,
        })
    }

    /// Current schedule.
    pub fn current(&self) -> &Schedule {
        &self.current
    }

    /// Cost of the current schedule, maintained incrementally.
    pub fn current_cost(&self) -> i64 {
        self.current_cost
    }

    /// Best schedule seen so far.
    pub fn best(&self) -> &Schedule {
        &self.best
    }

    pub fn best_cost(&self) -> i64 {
        self.best_cost
    }

    /// Iteration of the last improvement, 0 if none.
    pub fn best_iteration(&self) -> usize {
        self.best_iteration
    }

    /// Iterations completed.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn tabu(&self) -> &TabuMemory {
        &self.tabu
    }

    /// Policy applied when no adjacent pair is admissible.
    pub fn no_move_policy(&self) -> NoMovePolicy {
        self.policy
    }
}

/// Cheapest adjacent swap `(position, resulting cost)`, skipping pairs in
/// `tabu`. Ties go to the lowest position.
fn best_swap(
    instance: &Instance,
    schedule: &Schedule,
    current_cost: i64,
    tabu: Option<&TabuMemory>,
) -> Option<(usize, i64)> {
    let mut best: Option<(usize, i64)> = None;
    let mut elapsed = 0;

    for pos in 0..schedule.len().saturating_sub(1) {
        let first = schedule.slot(pos);
        let second = schedule.slot(pos + 1);
        let job = instance.job(first);

        if !tabu.is_some_and(|memory| memory.contains(first, second)) {
            let cost = swap_cost(job, instance.job(second), current_cost, elapsed);
            if best.map_or(true, |(_, best_cost)| cost < best_cost) {
                best = Some((pos, cost));
            }
        }
        elapsed += job.processing_time();
    }

    best
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on the given instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tardiness::model::Instance;
    /// use u_tardiness::tabu::{TabuConfig, TabuRunner};
    ///
    /// let instance = Instance::reference();
    /// let result = TabuRunner::run(&instance, &TabuConfig::default()).unwrap();
    /// assert!(result.best_cost < result.initial_cost);
    /// assert_eq!(result.iterations, 200);
    /// ```
    pub fn run(instance: &Instance, config: &TabuConfig) -> Result<TabuResult, TardinessError> {
        Self::run_with_observer(instance, config, &mut NoopObserver)
    }

    /// Executes Tabu Search, reporting every step to `observer`.
    ///
    /// Configuration errors are returned before any event is emitted.
    pub fn run_with_observer<O: SearchObserver + ?Sized>(
        instance: &Instance,
        config: &TabuConfig,
        observer: &mut O,
    ) -> Result<TabuResult, TardinessError> {
        let mut state = SearchState::new(instance, config)?;
        let initial_cost = state.current_cost();
        observer.on_start(instance, state.current(), initial_cost);

        let mut cost_history = Vec::with_capacity(config.iterations);
        let mut relaxed_iterations = 0;
        let mut skipped_iterations = 0;

        for _ in 0..config.iterations {
            let step = state.step(instance)?;
            if step.relaxed {
                relaxed_iterations += 1;
            }
            if step.position.is_none() {
                skipped_iterations += 1;
            }
            cost_history.push(step.cost);
            observer.on_iteration(step.iteration, instance, state.current(), step.cost);
        }

        observer.on_finish(
            instance,
            state.best(),
            state.best_cost(),
            state.best_iteration(),
        );

        Ok(TabuResult {
            best_ids: state.best().ids(instance),
            best: state.best,
            best_cost: state.best_cost,
            best_iteration: state.best_iteration,
            initial_cost,
            iterations: state.iteration,
            cost_history,
            relaxed_iterations,
            skipped_iterations,
        })
    }

    /// Runs an independent search on each instance with the same config.
    ///
    /// With the `parallel` feature the runs are spread over rayon's pool.
    pub fn run_batch(
        instances: &[Instance],
        config: &TabuConfig,
    ) -> Vec<Result<TabuResult, TardinessError>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            instances
                .par_iter()
                .map(|instance| Self::run(instance, config))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            instances
                .iter()
                .map(|instance| Self::run(instance, config))
                .collect()
        }
    }
}
