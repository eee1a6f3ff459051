/// Indicates why the solver stopped successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The relative change dropped below the configured tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a successful solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the root (or of the maximum-likelihood parameter).
    pub estimate: f64,

    /// Zero-based index of the update step the solver stopped on.
    pub iters: usize,

    /// Relative change between the last two iterates.
    pub relative_change: f64,
}

impl Solution {
    /// Returns true if the solve met the convergence tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
