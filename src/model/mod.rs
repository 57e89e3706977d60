//! Single-machine sequencing model.
//!
//! A problem is a fixed table of [`Job`]s held by an [`Instance`]; a
//! [`Schedule`] is an ordering of that table. Jobs are identified by their
//! slot in the table, never by field values, so two jobs with identical
//! `(pj, dj, wj)` remain distinct.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod instance;
mod job;
mod schedule;

pub use instance::Instance;
pub use job::Job;
pub use schedule::Schedule;
