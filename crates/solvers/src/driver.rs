//! The bounded iteration loop shared by every method.
//!
//! Each method supplies an [`UpdateRule`] that owns its state and proposes
//! the next iterate. [`drive`] applies the rule, measures the relative change
//! against the previous estimate, reports an [`Event`] to the observer, and
//! stops the first time the change falls below the tolerance.

use std::fmt;

use tracing::debug;
use unisolve_core::Observer;

use crate::{
    Config, Error, Solution, Status,
    convergence::{is_converged, relative_change},
};

/// The update rule that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Bisection,
    Newton,
    Secant,
    FisherScoring,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Bisection => "bisection",
            Method::Newton => "newton",
            Method::Secant => "secant",
            Method::FisherScoring => "fisher-scoring",
        };
        f.write_str(name)
    }
}

/// Control actions supported by every solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the latest estimate.
    StopEarly,
}

/// Iteration event emitted after each update step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Method that produced the step.
    pub method: Method,
    /// Zero-based index of the update step.
    pub iter: usize,
    /// Estimate after the step.
    pub estimate: f64,
    /// Estimate before the step.
    pub previous: f64,
    /// Relative change between `estimate` and `previous`.
    pub relative_change: f64,
    /// Current search bracket, for bracketing methods.
    pub bracket: Option<[f64; 2]>,
}

/// Proposes the next iterate from the current solver state.
pub(crate) trait UpdateRule {
    const METHOD: Method;

    /// Returns the current best estimate.
    fn current(&self) -> f64;

    /// Returns the search bracket, if the method maintains one.
    fn bracket(&self) -> Option<[f64; 2]> {
        None
    }

    /// Advances the state by one step and returns the new estimate.
    fn step(&mut self) -> Result<f64, Error>;
}

/// Runs `rule` until convergence or until the iteration budget is exhausted.
///
/// # Errors
///
/// Returns [`Error::NotConverged`] if no step meets the tolerance within
/// `config.max_iters()` steps, or any error raised by the rule itself.
pub(crate) fn drive<R, Obs>(
    mut rule: R,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    R: UpdateRule,
    Obs: Observer<Event, Action>,
{
    let mut change = f64::INFINITY;

    for iter in 0..config.max_iters() {
        let previous = rule.current();
        let estimate = rule.step()?;
        change = relative_change(estimate, previous);

        let event = Event {
            method: R::METHOD,
            iter,
            estimate,
            previous,
            relative_change: change,
            bracket: rule.bracket(),
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(method = %R::METHOD, iter, estimate, "stopped by observer");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                estimate,
                iters: iter,
                relative_change: change,
            });
        }

        if is_converged(change, config.tolerance()) {
            debug!(method = %R::METHOD, iter, estimate, relative_change = change, "converged");
            return Ok(Solution {
                status: Status::Converged,
                estimate,
                iters: iter,
                relative_change: change,
            });
        }
    }

    let estimate = rule.current();
    debug!(
        method = %R::METHOD,
        iters = config.max_iters(),
        estimate,
        relative_change = change,
        "did not converge"
    );
    Err(Error::NotConverged {
        estimate,
        iters: config.max_iters(),
        relative_change: change,
    })
}
