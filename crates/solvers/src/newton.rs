//! Newton's method on `g'` using the analytic second derivative `g''`.
//!
//! Each step computes `x - g'(x) / g''(x)`. Nothing guards against a vanishing
//! `g''`: the resulting non-finite iterates never meet the tolerance and the
//! solve ends with [`Error::NotConverged`].

use unisolve_core::{Function, Observer};

use crate::{
    Action, Config, Error, Event, Solution,
    driver::{Method, UpdateRule, drive},
    error::ensure_finite,
    evaluate::evaluate,
};

/// Finds a root of `gp` starting from `x0` using Newton's method.
///
/// # Errors
///
/// Returns [`Error::NotConverged`] if the tolerance is not met within the
/// iteration budget, [`Error::NonFiniteInput`] if `x0` is not finite, or
/// [`Error::Function`] if `gp` or `gpp` fails.
pub fn solve<G, H, Obs>(
    gp: &G,
    gpp: &H,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    G: Function,
    H: Function,
    Obs: Observer<Event, Action>,
{
    let rule = Newton {
        gp,
        gpp,
        x: ensure_finite(x0)?,
    };
    drive(rule, config, observer)
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<G, H>(
    gp: &G,
    gpp: &H,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    G: Function,
    H: Function,
{
    solve(gp, gpp, x0, config, ())
}

struct Newton<'f, G, H> {
    gp: &'f G,
    gpp: &'f H,
    x: f64,
}

impl<G: Function, H: Function> UpdateRule for Newton<'_, G, H> {
    const METHOD: Method = Method::Newton;

    fn current(&self) -> f64 {
        self.x
    }

    fn step(&mut self) -> Result<f64, Error> {
        let gpx = evaluate(self.gp, self.x)?;
        let gppx = evaluate(self.gpp, self.x)?;
        self.x -= gpx / gppx;
        Ok(self.x)
    }
}
