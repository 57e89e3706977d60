//! Single-machine total weighted tardiness minimization (`1 || Σ wj·Tj`).
//!
//! Sequences a fixed set of jobs on one machine so that the sum of
//! weighted tardiness is as small as possible, using Tabu Search over the
//! adjacent-swap neighborhood:
//!
//! - **Model**: `Job`, `Instance` (validated job table) and `Schedule`
//!   (a permutation of the table).
//! - **Cost**: full-scan total cost and the O(1) cost of an adjacent swap.
//! - **Tabu Search**: a fixed-capacity FIFO tabu list, an explicit
//!   `SearchState` advanced one iteration at a time, and a runner that
//!   executes a fixed iteration budget while streaming the trace to a
//!   `SearchObserver`.
//! - **Report**: a plain-text observer that prints the trace.
//!
//! # Example
//!
//! ```
//! use u_tardiness::model::Instance;
//! use u_tardiness::tabu::{TabuConfig, TabuRunner};
//!
//! let instance = Instance::reference();
//! let config = TabuConfig::default().with_tabu_capacity(11).with_iterations(200);
//! let result = TabuRunner::run(&instance, &config).unwrap();
//!
//! assert_eq!(result.initial_cost, 42048);
//! assert_eq!(result.best_cost, 8373);
//! assert_eq!(result.best_iteration, 120);
//! ```
//!
//! # Determinism
//!
//! The search is single threaded and fully deterministic: the same
//! instance and configuration always produce the same trace. The
//! `parallel` feature only spreads independent runs across threads.

pub mod cost;
pub mod error;
pub mod model;
pub mod report;
pub mod tabu;

pub use error::TardinessError;
