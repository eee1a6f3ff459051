//! Bisection on a sign change of `g'`.
//!
//! The endpoints `a` and `b` must satisfy `g'(a) * g'(b) <= 0`, so that the
//! intermediate value theorem guarantees a root of `g'` between them. Each
//! step evaluates `g'` at the midpoint, keeps the half that still contains the
//! sign change, and reports the new midpoint as the estimate.
//!
//! Observers receive the current bracket on every [`Event`].

mod bracket;

use tracing::debug;
use unisolve_core::{Function, Observer};

use crate::{
    Action, Config, Error, Event, Solution,
    driver::{Method, UpdateRule, drive},
    error::ensure_finite,
    evaluate::evaluate,
};

use bracket::Bracket;

/// Finds a root of `gp` inside `[a, b]` using bisection.
///
/// # Errors
///
/// Returns [`Error::NoSignChange`] without iterating if `gp(a) * gp(b) > 0`,
/// [`Error::NotConverged`] if the tolerance is not met within the iteration
/// budget, [`Error::NonFiniteInput`] for a non-finite endpoint, or
/// [`Error::Function`] if `gp` fails.
pub fn solve<G, Obs>(
    gp: &G,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    G: Function,
    Obs: Observer<Event, Action>,
{
    let [a, b] = bracket;
    let a = ensure_finite(a)?;
    let b = ensure_finite(b)?;

    let a_value = evaluate(gp, a)?;
    let b_value = evaluate(gp, b)?;

    if a_value * b_value > 0.0 {
        debug!(a, b, a_value, b_value, "no sign change between endpoints");
        return Err(Error::NoSignChange {
            left: a,
            right: b,
            left_value: a_value,
            right_value: b_value,
        });
    }

    let rule = Bisection {
        gp,
        bracket: Bracket::new(a, b, a_value),
    };
    drive(rule, config, observer)
}

/// Runs bisection without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<G: Function>(
    gp: &G,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(gp, bracket, config, ())
}

struct Bisection<'f, G> {
    gp: &'f G,
    bracket: Bracket,
}

impl<G: Function> UpdateRule for Bisection<'_, G> {
    const METHOD: Method = Method::Bisection;

    fn current(&self) -> f64 {
        self.bracket.midpoint()
    }

    fn bracket(&self) -> Option<[f64; 2]> {
        Some(self.bracket.as_array())
    }

    fn step(&mut self) -> Result<f64, Error> {
        let mid = self.bracket.midpoint();
        let mid_value = evaluate(self.gp, mid)?;
        self.bracket.shrink(mid, mid_value);
        Ok(self.bracket.midpoint())
    }
}
