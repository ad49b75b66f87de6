//! Event logging for simulation replay and auditing.
//!
//! Every significant state change is appended to the [`EventLog`] in the
//! order it occurs. Two runs with the same configuration and seed must
//! produce identical logs; replay-identity tests compare them directly.

use crate::core::time::SimTime;
use crate::models::passenger::Lane;
use serde::{Deserialize, Serialize};

/// A state change observed during the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A passenger entered the system (generated or injected).
    Arrival {
        time: SimTime,
        passenger_id: u64,
        lane: Lane,
        needs_secondary: bool,
    },

    /// A passenger joined its lane queue at the router.
    LaneJoined {
        time: SimTime,
        passenger_id: u64,
        lane: Lane,
    },

    /// An assign tick moved a passenger from a lane queue into the intake.
    IntakeTransfer {
        time: SimTime,
        passenger_id: u64,
        lane: Lane,
    },

    /// A dispatch tick handed the intake head to an idle agent.
    Dispatch {
        time: SimTime,
        passenger_id: u64,
        agent_id: usize,
    },

    /// Primary screening finished and secondary screening began.
    SecondaryStarted {
        time: SimTime,
        passenger_id: u64,
        agent_id: usize,
    },

    /// Service finished; a completion record was emitted.
    Completed {
        time: SimTime,
        passenger_id: u64,
        agent_id: usize,
        wait_time: f64,
    },
}

impl Event {
    /// Simulated time at which the event occurred.
    pub fn time(&self) -> SimTime {
        match self {
            Event::Arrival { time, .. }
            | Event::LaneJoined { time, .. }
            | Event::IntakeTransfer { time, .. }
            | Event::Dispatch { time, .. }
            | Event::SecondaryStarted { time, .. }
            | Event::Completed { time, .. } => *time,
        }
    }
}

/// Append-only, time-ordered record of all simulation events.
///
/// # Example
/// ```
/// use checkpoint_simulator_core_rs::models::event::{Event, EventLog};
/// use checkpoint_simulator_core_rs::{Lane, SimTime};
///
/// let mut log = EventLog::new();
/// log.log(Event::Arrival {
///     time: SimTime::ZERO,
///     passenger_id: 1,
///     lane: Lane::Regular,
///     needs_secondary: false,
/// });
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// All events, in occurrence order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
