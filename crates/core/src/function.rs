use std::convert::Infallible;

/// A callable that maps a scalar to a scalar.
///
/// Solvers use this capability for every caller-supplied quantity: the first
/// derivative `g'`, the second derivative `g''`, a score function `l'`, or a
/// Fisher information `I`. Each solver fixes how many functions it needs and
/// in what role; the solver only orchestrates calling them.
///
/// Any `Fn(f64) -> f64` implements this trait with [`Infallible`] errors.
/// Wrap a closure returning `Result` in [`Fallible`] when evaluation can fail.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`.
    fn eval(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

/// Adapts a fallible closure into a [`Function`].
///
/// ```
/// use unisolve_core::{Fallible, Function};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("log-likelihood undefined for p = {0}")]
/// struct OutOfDomain(f64);
///
/// let score = Fallible(|p: f64| {
///     if p <= 0.0 || p >= 1.0 {
///         return Err(OutOfDomain(p));
///     }
///     Ok(1.0 / p - 1.0 / (1.0 - p))
/// });
///
/// assert!(score.eval(0.25).is_ok());
/// assert!(score.eval(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Function for Fallible<F>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        (self.0)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn cube(x: f64) -> f64 {
        x * x * x
    }

    #[test]
    fn closures_are_functions() {
        let shift = 5.0;
        let gp = |x: f64| x - shift;

        assert_relative_eq!(gp.eval(7.0).unwrap(), 2.0);
    }

    #[test]
    fn fn_items_are_functions() {
        assert_relative_eq!(cube.eval(2.0).unwrap(), 8.0);
    }

    #[derive(Debug, thiserror::Error)]
    #[error("negative input")]
    struct Negative;

    #[test]
    fn fallible_forwards_errors() {
        let root = Fallible(|x: f64| if x < 0.0 { Err(Negative) } else { Ok(x.sqrt()) });

        assert_relative_eq!(root.eval(9.0).unwrap(), 3.0);
        assert!(matches!(root.eval(-1.0), Err(Negative)));
    }
}
