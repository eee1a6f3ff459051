/// Bisection bracket with the derivative value cached at endpoint `a`.
///
/// Endpoints keep the order the caller supplied them in; `a` may be greater
/// than `b`. Halving works the same either way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    a: f64,
    b: f64,
    a_value: f64,
}

impl Bracket {
    /// Creates a bracket from endpoints and the derivative value at `a`.
    pub(super) fn new(a: f64, b: f64, a_value: f64) -> Self {
        Self { a, b, a_value }
    }

    /// Returns the bracket endpoints as `[a, b]`.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    pub(super) fn midpoint(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    /// Keeps the half that still contains a sign change.
    ///
    /// If `g'(a) * g'(x) <= 0` the root lies in `[a, x]` and `b` moves to `x`;
    /// otherwise `a` moves to `x`.
    pub(super) fn shrink(&mut self, x: f64, value: f64) {
        if self.a_value * value <= 0.0 {
            self.b = x;
        } else {
            self.a = x;
            self.a_value = value;
        }
    }
}
