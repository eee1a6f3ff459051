use tracing::Level;
use unisolve_core::Observer;
use unisolve_solvers::{Action, Event};

/// Logs every solver iteration as a structured `tracing` event.
///
/// Installing a subscriber is left to the caller. Each record carries the
/// fields `method`, `iter`, `estimate`, `previous`, `relative_change`, and
/// `bracket` (bisection only).
///
/// ```
/// use unisolve_observers::Trace;
/// use unisolve_solvers::{Config, secant};
///
/// let gp = |x: f64| x * x - 2.0;
/// let solution = secant::solve(&gp, [1.0, 2.0], &Config::default(), Trace::new()).unwrap();
/// assert!((solution.estimate - 2f64.sqrt()).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trace {
    level: Level,
}

impl Trace {
    /// Creates an observer that logs at `DEBUG`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::DEBUG,
        }
    }

    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn at(level: Level) -> Self {
        Self { level }
    }

    /// Returns the level records are emitted at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for Trace {
    fn default() -> Self {
        Self::new()
    }
}

// `tracing::event!` needs a constant level.
macro_rules! emit {
    ($level:expr, $event:ident) => {
        tracing::event!(
            $level,
            method = %$event.method,
            iter = $event.iter,
            estimate = $event.estimate,
            previous = $event.previous,
            relative_change = $event.relative_change,
            bracket = ?$event.bracket,
            "iteration"
        )
    };
}

impl Observer<Event, Action> for Trace {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        let level = self.level;
        if level == Level::ERROR {
            emit!(Level::ERROR, event);
        } else if level == Level::WARN {
            emit!(Level::WARN, event);
        } else if level == Level::INFO {
            emit!(Level::INFO, event);
        } else if level == Level::DEBUG {
            emit!(Level::DEBUG, event);
        } else {
            emit!(Level::TRACE, event);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use approx::assert_relative_eq;
    use tracing_subscriber::fmt::MakeWriter;
    use unisolve_solvers::{Config, bisection, newton};

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture<T>(max_level: Level, f: impl FnOnce() -> T) -> (T, String) {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(max_level)
            .with_ansi(false)
            .with_writer(captured.clone())
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, captured.text())
    }

    #[test]
    fn logs_each_iteration() {
        let gp = |x: f64| x - 5.0;
        let gpp = |_: f64| 1.0;

        let (solution, text) = capture(Level::DEBUG, || {
            newton::solve(&gp, &gpp, 3.0, &Config::default(), Trace::new())
        });

        let solution = solution.expect("should converge");
        assert_relative_eq!(solution.estimate, 5.0);
        assert_eq!(text.matches("iteration").count(), 2);
        assert!(text.contains("method=newton"));
        assert!(text.contains("iter=1"));
    }

    #[test]
    fn includes_bracket_for_bisection() {
        let gp = |x: f64| x - 2.5;
        let config = Config::new(1e-3, 100).unwrap();

        let (_, text) = capture(Level::INFO, || {
            bisection::solve(&gp, [0.0, 4.0], &config, Trace::at(Level::INFO))
        });

        assert!(text.contains("method=bisection"));
        assert!(text.contains("bracket=Some([2.0, 4.0])"));
    }

    #[test]
    fn respects_subscriber_level() {
        let gp = |x: f64| x - 5.0;
        let gpp = |_: f64| 1.0;

        let (_, text) = capture(Level::INFO, || {
            newton::solve(&gp, &gpp, 3.0, &Config::default(), Trace::at(Level::TRACE))
        });

        assert!(!text.contains("iteration"));
    }
}
