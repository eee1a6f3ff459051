use thiserror::Error;

/// Configuration shared by every solver in this crate.
///
/// A `Config` can only be built through [`Config::new`] (or [`Default`]), so
/// any value a solver receives has already been validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance and iteration budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and positive,
    /// or if `max_iters` is zero.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            tolerance,
            max_iters,
        })
    }

    /// Returns the relative-change tolerance used to declare convergence.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of update steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
