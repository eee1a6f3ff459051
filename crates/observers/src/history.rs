use unisolve_core::Observer;
use unisolve_solvers::{Action, Event};

/// Records every event a solver emits.
///
/// Pass `&mut History` to a solver so the record is still available after
/// the solve returns, whether it succeeded or failed.
///
/// ```
/// use unisolve_observers::History;
/// use unisolve_solvers::{Config, newton};
///
/// let gp = |x: f64| x * x - 4.0;
/// let gpp = |x: f64| 2.0 * x;
///
/// let mut history = History::new();
/// newton::solve(&gp, &gpp, 3.0, &Config::default(), &mut history).unwrap();
///
/// assert_eq!(history.events()[0].previous, 3.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct History {
    events: Vec<Event>,
    stop_after: Option<usize>,
}

impl History {
    /// Creates an empty history that never stops the solver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history that stops the solver once `count` events
    /// have been recorded.
    #[must_use]
    pub fn stop_after(count: usize) -> Self {
        Self {
            events: Vec::new(),
            stop_after: Some(count),
        }
    }

    /// Returns the recorded events in order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns the estimate after each recorded step.
    pub fn estimates(&self) -> impl Iterator<Item = f64> + '_ {
        self.events.iter().map(|event| event.estimate)
    }

    /// Returns the relative change after each recorded step.
    pub fn relative_changes(&self) -> impl Iterator<Item = f64> + '_ {
        self.events.iter().map(|event| event.relative_change)
    }

    /// Returns the most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Observer<Event, Action> for History {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        self.events.push(*event);
        match self.stop_after {
            Some(count) if self.events.len() >= count => Some(Action::StopEarly),
            _ => None,
        }
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the record can be read after the solve completes.
impl Observer<Event, Action> for &mut History {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (*self).observe(event)
    }
}
