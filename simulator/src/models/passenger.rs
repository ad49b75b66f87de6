//! Passenger model
//!
//! A passenger is created by the arrival source, waits in exactly one queue
//! at a time, is screened by one agent, and is then converted into a
//! completion record and discarded. The identity fields are fixed at
//! creation and never mutated.

use crate::core::time::SimTime;
use serde::{Deserialize, Serialize};

/// Lane classification, fixed when the passenger is created.
///
/// Expedited (precheck) passengers get strict queue priority and a shorter
/// screening-time distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    Expedited,
    Regular,
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lane::Expedited => write!(f, "expedited"),
            Lane::Regular => write!(f, "regular"),
        }
    }
}

/// A passenger moving through the checkpoint.
///
/// # Example
/// ```
/// use checkpoint_simulator_core_rs::{Lane, Passenger, SimTime};
///
/// let p = Passenger::new(7, SimTime::new(12.5), Lane::Regular, false);
/// assert_eq!(p.id(), 7);
/// assert_eq!(p.lane(), Lane::Regular);
/// assert!(!p.needs_secondary());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    /// Unique sequential identifier
    id: u64,

    /// Simulated time at which the passenger entered the system
    arrival_time: SimTime,

    /// Lane classification (fixed at creation)
    lane: Lane,

    /// Whether this passenger requires secondary screening
    needs_secondary: bool,
}

impl Passenger {
    /// Create a passenger with fixed attributes.
    pub fn new(id: u64, arrival_time: SimTime, lane: Lane, needs_secondary: bool) -> Self {
        Self {
            id,
            arrival_time,
            lane,
            needs_secondary,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn arrival_time(&self) -> SimTime {
        self.arrival_time
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    pub fn needs_secondary(&self) -> bool {
        self.needs_secondary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passenger_attributes_fixed_at_creation() {
        let p = Passenger::new(1, SimTime::ZERO, Lane::Expedited, true);
        assert_eq!(p.id(), 1);
        assert_eq!(p.arrival_time(), SimTime::ZERO);
        assert_eq!(p.lane(), Lane::Expedited);
        assert!(p.needs_secondary());
    }

    #[test]
    fn test_lane_display() {
        assert_eq!(Lane::Expedited.to_string(), "expedited");
        assert_eq!(Lane::Regular.to_string(), "regular");
    }
}
