//! Callbacks for observing a search run.
//!
//! The runner reports the initial schedule, every iteration in order, and
//! the best schedule at the end. Each callback returns before the runner
//! starts the next iteration, so an observer sees a complete, ordered
//! trace. Observers never influence the search.

use crate::model::{Instance, Schedule};

/// Receives the search trace.
///
/// All methods default to doing nothing.
pub trait SearchObserver {
    /// Called once before the first iteration with the initial schedule.
    fn on_start(&mut self, _instance: &Instance, _schedule: &Schedule, _cost: i64) {}

    /// Called after each iteration `1..=K` with the current schedule.
    fn on_iteration(
        &mut self,
        _iteration: usize,
        _instance: &Instance,
        _schedule: &Schedule,
        _cost: i64,
    ) {
    }

    /// Called once with the best schedule and the iteration that found it
    /// (0 when the initial schedule was never beaten).
    fn on_finish(
        &mut self,
        _instance: &Instance,
        _best: &Schedule,
        _best_cost: i64,
        _best_iteration: usize,
    ) {
    }
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// One recorded trace line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraceEvent {
    Start {
        ids: Vec<u32>,
        cost: i64,
    },
    Iteration {
        iteration: usize,
        ids: Vec<u32>,
        cost: i64,
    },
    Finish {
        ids: Vec<u32>,
        cost: i64,
        iteration: usize,
    },
}

/// Collects the trace in memory.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    events: Vec<TraceEvent>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in emission order.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// `(iteration, cost)` of every iteration event.
    pub fn iteration_costs(&self) -> Vec<(usize, i64)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TraceEvent::Iteration {
                    iteration, cost, ..
                } => Some((*iteration, *cost)),
                _ => None,
            })
            .collect()
    }
}

impl SearchObserver for TraceRecorder {
    fn on_start(&mut self, instance: &Instance, schedule: &Schedule, cost: i64) {
        self.events.push(TraceEvent::Start {
            ids: schedule.ids(instance),
            cost,
        });
    }

    fn on_iteration(
        &mut self,
        iteration: usize,
        instance: &Instance,
        schedule: &Schedule,
        cost: i64,
    ) {
        self.events.push(TraceEvent::Iteration {
            iteration,
            ids: schedule.ids(instance),
            cost,
        });
    }

    fn on_finish(
        &mut self,
        instance: &Instance,
        best: &Schedule,
        best_cost: i64,
        best_iteration: usize,
    ) {
        self.events.push(TraceEvent::Finish {
            ids: best.ids(instance),
            cost: best_cost,
            iteration: best_iteration,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_keeps_order() {
        let instance = Instance::reference();
        let schedule = Schedule::identity(instance.len());
        let mut recorder = TraceRecorder::new();

        recorder.on_start(&instance, &schedule, 10);
        recorder.on_iteration(1, &instance, &schedule, 9);
        recorder.on_iteration(2, &instance, &schedule, 11);
        recorder.on_finish(&instance, &schedule, 9, 1);

        assert_eq!(recorder.events().len(), 4);
        assert!(matches!(recorder.events()[0], TraceEvent::Start { cost: 10, .. }));
        assert_eq!(recorder.iteration_costs(), vec![(1, 9), (2, 11)]);
        assert!(matches!(
            recorder.events()[3],
            TraceEvent::Finish {
                cost: 9,
                iteration: 1,
                ..
            }
        ));
    }
}
