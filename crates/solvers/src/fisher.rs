//! Fisher scoring for maximum-likelihood estimation.
//!
//! Solves the score equation `l'(x) = 0` with the update
//! `x + (l'(x) / I(x)) / n`, where `l'` is the score of the full sample, `I`
//! is the Fisher information of a single observation, and `n` is the sample
//! size. This is Newton's method with the expected information `n * I(x)`
//! standing in for the observed curvature `-l''(x)`.

use unisolve_core::{Function, Observer};

use crate::{
    Action, Config, Error, Event, Solution,
    driver::{Method, UpdateRule, drive},
    error::ensure_finite,
    evaluate::evaluate,
};

/// Estimates the parameter maximizing a likelihood using Fisher scoring.
///
/// # Errors
///
/// Returns [`Error::NotConverged`] if the tolerance is not met within the
/// iteration budget, [`Error::InvalidSampleSize`] if `n` is zero,
/// [`Error::NonFiniteInput`] if `x0` is not finite, or [`Error::Function`]
/// if `score` or `information` fails.
pub fn solve<S, I, Obs>(
    score: &S,
    information: &I,
    n: usize,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    S: Function,
    I: Function,
    Obs: Observer<Event, Action>,
{
    if n == 0 {
        return Err(Error::InvalidSampleSize { n });
    }

    #[allow(clippy::cast_precision_loss)]
    let rule = FisherScoring {
        score,
        information,
        n: n as f64,
        x: ensure_finite(x0)?,
    };
    drive(rule, config, observer)
}

/// Runs Fisher scoring without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<S, I>(
    score: &S,
    information: &I,
    n: usize,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    S: Function,
    I: Function,
{
    solve(score, information, n, x0, config, ())
}

struct FisherScoring<'f, S, I> {
    score: &'f S,
    information: &'f I,
    n: f64,
    x: f64,
}

impl<S: Function, I: Function> UpdateRule for FisherScoring<'_, S, I> {
    const METHOD: Method = Method::FisherScoring;

    fn current(&self) -> f64 {
        self.x
    }

    fn step(&mut self) -> Result<f64, Error> {
        let score = evaluate(self.score, self.x)?;
        let information = evaluate(self.information, self.x)?;
        self.x += (score / information) / self.n;
        Ok(self.x)
    }
}
