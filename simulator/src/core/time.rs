//! Time management for the simulation
//!
//! The simulation operates in continuous simulated time: the clock jumps
//! directly from one scheduled event to the next. This module provides the
//! time value type; advancement is owned by the event loop.

use serde::{Deserialize, Serialize};

/// A point in simulated time.
///
/// Wraps an `f64` measured in simulated time units (seconds in the default
/// configuration). Values are finite and non-negative for every time the
/// engine produces; total ordering is defined via `f64::total_cmp` so ties
/// in the event queue resolve identically on every run.
///
/// # Example
/// ```
/// use checkpoint_simulator_core_rs::SimTime;
///
/// let t = SimTime::ZERO.after(5.0);
/// assert_eq!(t.value(), 5.0);
/// assert_eq!(t.elapsed_since(SimTime::ZERO), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimTime(f64);

impl SimTime {
    /// Simulation start time.
    pub const ZERO: SimTime = SimTime(0.0);

    /// Create a time value from raw simulated units.
    ///
    /// # Panics
    /// Panics in debug builds if `value` is NaN; the engine never produces
    /// NaN times and the ordering guarantees depend on that.
    pub fn new(value: f64) -> Self {
        debug_assert!(!value.is_nan(), "SimTime must not be NaN");
        SimTime(value)
    }

    /// Raw time value in simulated units.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// The time `delay` units after this one.
    pub fn after(&self, delay: f64) -> SimTime {
        SimTime::new(self.0 + delay)
    }

    /// Units elapsed since `earlier`.
    pub fn elapsed_since(&self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }
}

impl Eq for SimTime {}

impl Ord for SimTime {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for SimTime {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for SimTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_accumulates() {
        let t = SimTime::ZERO.after(1.5).after(2.5);
        assert_eq!(t.value(), 4.0);
    }

    #[test]
    fn test_ordering_is_total() {
        let a = SimTime::new(1.0);
        let b = SimTime::new(2.0);
        assert!(a < b);
        assert_eq!(a.cmp(&a), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_elapsed_since() {
        let start = SimTime::new(3.0);
        let end = start.after(7.0);
        assert_eq!(end.elapsed_since(start), 7.0);
    }
}
