/// A range of ray parameters between `min` and `max`.
///
/// The tracer narrows `max` to the closest hit found so far while scanning
/// primitives, and `min` carries the self-intersection epsilon. Membership
/// is exclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Interval from `min` to positive infinity.
    pub fn from_min(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    /// True if `t` lies strictly between `min` and `max`.
    pub fn surrounds(&self, t: f64) -> bool {
        self.min < t && t < self.max
    }

    /// Same lower bound with `max` pulled in to the closest hit so far.
    pub fn with_max(&self, max: f64) -> Interval {
        Interval::new(self.min, max)
    }
}
