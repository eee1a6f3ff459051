//! Logs every iteration of each solver on the same problem.
//!
//! Finds the maximum of `g(x) = x e^{-x/2}` by solving `g'(x) = 0`; the root
//! is `x = 2`.
//!
//! # Usage
//!
//! ```text
//! cargo run --example trace
//! RUST_LOG=trace cargo run --example trace -- 1e-14
//! ```

use std::error::Error;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use unisolve_observers::{History, Trace};
use unisolve_solvers::{Config, bisection, fisher, newton, secant};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let tolerance = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()?
        .unwrap_or(1e-10);
    let config = Config::new(tolerance, 200)?;

    let gp = |x: f64| (1.0 - 0.5 * x) * (-0.5 * x).exp();
    let gpp = |x: f64| (0.25 * x - 1.0) * (-0.5 * x).exp();

    let solution = bisection::solve(&gp, [0.5, 5.0], &config, Trace::new())?;
    tracing::info!(estimate = solution.estimate, iters = solution.iters, "bisection");

    let solution = newton::solve(&gp, &gpp, 1.0, &config, Trace::new())?;
    tracing::info!(estimate = solution.estimate, iters = solution.iters, "newton");

    let mut history = History::new();
    let solution = secant::solve(&gp, [1.0, 1.5], &config, &mut history)?;
    tracing::info!(
        estimate = solution.estimate,
        iters = solution.iters,
        steps = history.len(),
        "secant"
    );

    // One observation of an exponential waiting time of 2.0: the rate MLE is 0.5.
    let score = |rate: f64| 1.0 / rate - 2.0;
    let information = |rate: f64| 1.0 / (rate * rate);
    let solution = fisher::solve(&score, &information, 1, 0.3, &config, Trace::new())?;
    tracing::info!(estimate = solution.estimate, iters = solution.iters, "fisher scoring");

    Ok(())
}
