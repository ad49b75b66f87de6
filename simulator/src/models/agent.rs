//! Screening agent model
//!
//! A screening agent is a small state machine:
//!
//! ```text
//! Idle → Screening → SecondaryScreening (only if flagged) → Idle
//! ```
//!
//! The state carries the passenger being served, so "busy with no passenger"
//! is unrepresentable. Each agent is owned exclusively by one checkpoint and
//! serves at most one passenger at a time; the only state other components
//! may observe is `is_busy()`.

use crate::core::time::SimTime;
use crate::models::passenger::Passenger;
use thiserror::Error;

/// Errors from misusing the agent state machine.
///
/// These never occur under a correct engine; they exist so scheduler bugs
/// surface as invariant violations instead of silent corruption.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AgentError {
    #[error("agent {agent_id} is already serving passenger {passenger_id}")]
    AlreadyBusy { agent_id: usize, passenger_id: u64 },

    #[error("agent {agent_id} has no passenger in service")]
    NotServing { agent_id: usize },
}

/// Service phase of a busy agent.
#[derive(Debug, Clone, PartialEq)]
enum ServicePhase {
    Screening,
    SecondaryScreening,
}

#[derive(Debug, Clone, PartialEq)]
enum AgentState {
    Idle,
    Serving {
        passenger: Passenger,
        screening_start: SimTime,
        phase: ServicePhase,
    },
}

/// One member of the checkpoint's screening pool.
///
/// # Example
/// ```
/// use checkpoint_simulator_core_rs::{Lane, Passenger, ScreeningAgent, SimTime};
///
/// let mut agent = ScreeningAgent::new(0);
/// assert!(!agent.is_busy());
///
/// let p = Passenger::new(1, SimTime::ZERO, Lane::Regular, false);
/// agent.begin_screening(p, SimTime::new(1.0)).unwrap();
/// assert!(agent.is_busy());
///
/// let (passenger, start) = agent.finish_service().unwrap();
/// assert_eq!(passenger.id(), 1);
/// assert_eq!(start.value(), 1.0);
/// assert!(!agent.is_busy());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningAgent {
    /// Position in the checkpoint's fixed pool
    id: usize,

    state: AgentState,
}

impl ScreeningAgent {
    /// Create an idle agent with the given pool position.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            state: AgentState::Idle,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// True while a passenger is in service (primary or secondary phase).
    pub fn is_busy(&self) -> bool {
        !matches!(self.state, AgentState::Idle)
    }

    /// The passenger currently in service, if any.
    pub fn current_passenger(&self) -> Option<&Passenger> {
        match &self.state {
            AgentState::Idle => None,
            AgentState::Serving { passenger, .. } => Some(passenger),
        }
    }

    /// Start screening `passenger` at `now`.
    ///
    /// Fails if the agent is already busy; the dispatcher must only select
    /// idle agents.
    pub fn begin_screening(&mut self, passenger: Passenger, now: SimTime) -> Result<(), AgentError> {
        match &self.state {
            AgentState::Idle => {
                self.state = AgentState::Serving {
                    passenger,
                    screening_start: now,
                    phase: ServicePhase::Screening,
                };
                Ok(())
            }
            AgentState::Serving { passenger: current, .. } => Err(AgentError::AlreadyBusy {
                agent_id: self.id,
                passenger_id: current.id(),
            }),
        }
    }

    /// Transition from primary screening to secondary screening.
    ///
    /// Only valid while a passenger is in the primary phase.
    pub fn begin_secondary(&mut self) -> Result<(), AgentError> {
        match &mut self.state {
            AgentState::Serving { phase, .. } if *phase == ServicePhase::Screening => {
                *phase = ServicePhase::SecondaryScreening;
                Ok(())
            }
            _ => Err(AgentError::NotServing { agent_id: self.id }),
        }
    }

    /// Complete service: release the passenger and return to idle.
    ///
    /// Returns the passenger and the time primary screening began, which the
    /// engine turns into a completion record.
    pub fn finish_service(&mut self) -> Result<(Passenger, SimTime), AgentError> {
        match std::mem::replace(&mut self.state, AgentState::Idle) {
            AgentState::Serving {
                passenger,
                screening_start,
                ..
            } => Ok((passenger, screening_start)),
            AgentState::Idle => Err(AgentError::NotServing { agent_id: self.id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::passenger::Lane;

    fn passenger(id: u64) -> Passenger {
        Passenger::new(id, SimTime::ZERO, Lane::Regular, false)
    }

    #[test]
    fn test_idle_agent_has_no_passenger() {
        let agent = ScreeningAgent::new(3);
        assert_eq!(agent.id(), 3);
        assert!(!agent.is_busy());
        assert_eq!(agent.current_passenger(), None);
    }

    #[test]
    fn test_busy_iff_serving() {
        let mut agent = ScreeningAgent::new(0);
        agent.begin_screening(passenger(1), SimTime::new(2.0)).unwrap();
        assert!(agent.is_busy());
        assert_eq!(agent.current_passenger().map(Passenger::id), Some(1));

        agent.finish_service().unwrap();
        assert!(!agent.is_busy());
        assert_eq!(agent.current_passenger(), None);
    }

    #[test]
    fn test_double_dispatch_rejected() {
        let mut agent = ScreeningAgent::new(0);
        agent.begin_screening(passenger(1), SimTime::ZERO).unwrap();

        let err = agent.begin_screening(passenger(2), SimTime::ZERO).unwrap_err();
        assert_eq!(
            err,
            AgentError::AlreadyBusy {
                agent_id: 0,
                passenger_id: 1
            }
        );
    }

    #[test]
    fn test_finish_without_passenger_rejected() {
        let mut agent = ScreeningAgent::new(5);
        assert_eq!(
            agent.finish_service().unwrap_err(),
            AgentError::NotServing { agent_id: 5 }
        );
    }

    #[test]
    fn test_secondary_transition() {
        let mut agent = ScreeningAgent::new(0);
        agent.begin_screening(passenger(1), SimTime::new(1.0)).unwrap();
        agent.begin_secondary().unwrap();
        assert!(agent.is_busy());

        // Secondary → secondary is a state machine misuse.
        assert!(agent.begin_secondary().is_err());

        let (p, start) = agent.finish_service().unwrap();
        assert_eq!(p.id(), 1);
        assert_eq!(start, SimTime::new(1.0));
    }
}
