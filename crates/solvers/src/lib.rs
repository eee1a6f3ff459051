//! Iterative solvers for univariate equations and score equations.
//!
//! Every solver drives a caller-supplied derivative `g'` (or score `l'`)
//! toward zero. The methods share one bounded iteration loop and one
//! relative-change convergence test; they differ only in how the next
//! iterate is proposed.
//!
//! # Solvers
//!
//! - [`bisection`] — halves a bracket `[a, b]` across a sign change of `g'`
//! - [`newton`] — Newton steps using `g'` and `g''`
//! - [`secant`] — Newton-like steps from the two most recent iterates
//! - [`fisher`] — Fisher scoring using a score and the Fisher information
//!
//! # Convergence
//!
//! A solve succeeds the first time `|x_new - x_old| / |x_old|` falls strictly
//! below [`Config::tolerance`]. If that never happens within
//! [`Config::max_iters`] steps, the solve fails with [`Error::NotConverged`].
//!
//! ```
//! use unisolve_solvers::{Config, newton};
//!
//! let gp = |x: f64| x * x - 4.0;
//! let gpp = |x: f64| 2.0 * x;
//!
//! let config = Config::new(1e-12, 50).unwrap();
//! let solution = newton::solve_unobserved(&gp, &gpp, 3.0, &config).unwrap();
//! assert!((solution.estimate - 2.0).abs() < 1e-12);
//! ```

mod config;
mod driver;
mod error;
mod evaluate;
mod solution;

pub mod bisection;
pub mod convergence;
pub mod fisher;
pub mod newton;
pub mod secant;

pub use config::{Config, ConfigError};
pub use driver::{Action, Event, Method};
pub use error::Error;
pub use solution::{Solution, Status};
