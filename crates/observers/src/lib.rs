//! Reusable observers for the unisolve solvers.
//!
//! Every solver in [`unisolve_solvers`] emits the same [`Event`] type, so the
//! observers here work with all four methods.
//!
//! - [`Trace`] — logs each iteration through [`tracing`]
//! - [`History`] — records every event for inspection after the solve
//!
//! [`Event`]: unisolve_solvers::Event

mod history;
mod trace;

pub use history::History;
pub use trace::Trace;
