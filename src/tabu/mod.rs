//! Tabu Search over the adjacent-swap neighborhood.
//!
//! Each iteration evaluates every adjacent transposition of the current
//! schedule in O(1) via [`swap_cost`](crate::cost::swap_cost), skips the
//! ordered job pairs held in the [`TabuMemory`], and moves to the cheapest
//! remaining neighbor even when it is worse than the current schedule.
//! The pair just created is then made tabu so the move is not undone on
//! the next step. The search runs for a fixed number of iterations.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod observer;
mod runner;

pub use config::{NoMovePolicy, TabuConfig};
pub use memory::TabuMemory;
pub use observer::{NoopObserver, SearchObserver, TraceEvent, TraceRecorder};
pub use runner::{SearchState, Step, TabuResult, TabuRunner};
