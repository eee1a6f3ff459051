//! Secant method on `g'`.
//!
//! Approximates the Newton step from the two most recent iterates instead of
//! an analytic second derivative. Both `g'` values are evaluated afresh on
//! every step.

use unisolve_core::{Function, Observer};

use crate::{
    Action, Config, Error, Event, Solution,
    driver::{Method, UpdateRule, drive},
    error::ensure_finite,
    evaluate::evaluate,
};

/// Finds a root of `gp` using the secant method.
///
/// The starting pair is `[x_old, x_new]`; `x_new` is the initial estimate.
///
/// # Errors
///
/// Returns [`Error::NotConverged`] if the tolerance is not met within the
/// iteration budget, [`Error::NonFiniteInput`] if a starting value is not
/// finite, or [`Error::Function`] if `gp` fails.
pub fn solve<G, Obs>(
    gp: &G,
    start: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    G: Function,
    Obs: Observer<Event, Action>,
{
    let [x_old, x_new] = start;
    let rule = Secant {
        gp,
        x_old: ensure_finite(x_old)?,
        x_new: ensure_finite(x_new)?,
    };
    drive(rule, config, observer)
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<G: Function>(
    gp: &G,
    start: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(gp, start, config, ())
}

struct Secant<'f, G> {
    gp: &'f G,
    x_old: f64,
    x_new: f64,
}

impl<G: Function> UpdateRule for Secant<'_, G> {
    const METHOD: Method = Method::Secant;

    fn current(&self) -> f64 {
        self.x_new
    }

    fn step(&mut self) -> Result<f64, Error> {
        let g_old = evaluate(self.gp, self.x_old)?;
        let g_new = evaluate(self.gp, self.x_new)?;
        let next = self.x_new - g_new * ((self.x_new - self.x_old) / (g_new - g_old));

        self.x_old = self.x_new;
        self.x_new = next;
        Ok(next)
    }
}
