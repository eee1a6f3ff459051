//! Relative-change convergence test shared by all solvers.
//!
//! The criterion divides by the magnitude of the previous iterate without a
//! zero guard. A previous iterate of exactly zero yields an infinite (or NaN)
//! change, which never satisfies the tolerance, so a solve that lands on zero
//! keeps iterating and eventually reports [`Error::NotConverged`].
//!
//! [`Error::NotConverged`]: crate::Error::NotConverged

/// Returns `|current - previous| / |previous|`.
#[must_use]
pub fn relative_change(current: f64, previous: f64) -> f64 {
    (current - previous).abs() / previous.abs()
}

/// Returns true if `change` is strictly below `tolerance`.
///
/// NaN never converges.
#[must_use]
pub fn is_converged(change: f64, tolerance: f64) -> bool {
    change < tolerance
}
