use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur while solving.
///
/// Every error is terminal for the call. No partial result is returned and
/// no retry is attempted; adjust the inputs or [`Config`](crate::Config)
/// and call again.
#[derive(Debug, Error)]
pub enum Error {
    /// Input validation: a starting value or endpoint is NaN or infinite.
    #[error("initial value is not finite: {value}")]
    NonFiniteInput { value: f64 },

    /// Input validation: Fisher scoring was given an empty sample.
    #[error("sample size must be at least 1, got {n}")]
    InvalidSampleSize { n: usize },

    /// The bisection endpoints do not bracket a sign change.
    #[error(
        "cannot apply intermediate value theorem: g'({left})={left_value}, \
         g'({right})={right_value}; choose new endpoints"
    )]
    NoSignChange {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
    },

    /// The iteration budget ran out before the tolerance was met.
    #[error(
        "convergence failed after {iters} iterations \
         (estimate {estimate}, relative change {relative_change}); \
         increase max_iters or tolerance"
    )]
    NotConverged {
        estimate: f64,
        iters: usize,
        relative_change: f64,
    },

    /// A caller-supplied function returned an error.
    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

/// Checks that an initial value is finite.
pub(crate) fn ensure_finite(value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteInput { value })
    }
}
