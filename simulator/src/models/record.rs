//! Completion records
//!
//! The final, immutable summary of one passenger's timing through the
//! system. Records are the core's only output stream; everything downstream
//! (CSV export, aggregation, plotting) consumes them through a
//! [`CompletionSink`](crate::collector::CompletionSink).

use crate::core::time::SimTime;
use crate::models::passenger::{Lane, Passenger};
use serde::{Deserialize, Serialize};

/// Timing summary emitted once per completed passenger.
///
/// Invariant for every emitted record:
/// `exit_time ≥ screening_start_time ≥ arrival_time ≥ 0` and
/// `wait_time = screening_start_time − arrival_time`.
///
/// # Example
/// ```
/// use checkpoint_simulator_core_rs::{CompletionRecord, Lane, Passenger, SimTime};
///
/// let p = Passenger::new(1, SimTime::ZERO, Lane::Regular, false);
/// let record = CompletionRecord::new(&p, SimTime::new(2.0), SimTime::new(12.0));
/// assert_eq!(record.wait_time, 2.0);
/// assert_eq!(record.exit_time.value(), 12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub passenger_id: u64,
    pub arrival_time: SimTime,
    pub screening_start_time: SimTime,
    pub exit_time: SimTime,
    pub wait_time: f64,
    pub lane: Lane,
    pub needs_secondary: bool,
}

impl CompletionRecord {
    /// Build the record for `passenger` whose screening began at
    /// `screening_start_time` and whose service finished at `exit_time`.
    pub fn new(passenger: &Passenger, screening_start_time: SimTime, exit_time: SimTime) -> Self {
        Self {
            passenger_id: passenger.id(),
            arrival_time: passenger.arrival_time(),
            screening_start_time,
            exit_time,
            wait_time: screening_start_time.elapsed_since(passenger.arrival_time()),
            lane: passenger.lane(),
            needs_secondary: passenger.needs_secondary(),
        }
    }
}
