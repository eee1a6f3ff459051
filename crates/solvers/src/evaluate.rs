use unisolve_core::Function;

use crate::Error;

/// Evaluates a caller-supplied function, boxing any failure with the point `x`.
///
/// # Errors
///
/// Returns [`Error::Function`] if the function cannot be evaluated at `x`.
pub(crate) fn evaluate<F: Function>(function: &F, x: f64) -> Result<f64, Error> {
    function.eval(x).map_err(|source| Error::Function {
        x,
        source: Box::new(source),
    })
}
