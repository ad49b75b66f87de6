//! Checkpoint: the intake queue and the fixed agent pool
//!
//! The checkpoint owns its agents exclusively. On each dispatch tick the
//! engine moves **at most one** passenger from the head of the intake queue
//! to an idle agent chosen by the configured
//! [`AgentSelector`](crate::policy::AgentSelector); the default selects the
//! first idle agent in fixed pool order. One dispatch per tick even when
//! several agents are idle; that is the modeled policy, not an optimization
//! target.

use crate::models::agent::ScreeningAgent;
use crate::models::passenger::Passenger;
use std::collections::VecDeque;

/// Intake queue plus fixed pool of screening agents.
///
/// # Example
/// ```
/// use checkpoint_simulator_core_rs::{Checkpoint, Lane, Passenger, SimTime};
///
/// let mut checkpoint = Checkpoint::new(3);
/// assert_eq!(checkpoint.agent_count(), 3);
/// assert_eq!(checkpoint.busy_agents(), 0);
///
/// checkpoint.enqueue(Passenger::new(1, SimTime::ZERO, Lane::Regular, false));
/// assert_eq!(checkpoint.intake_len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Checkpoint {
    agents: Vec<ScreeningAgent>,
    intake_queue: VecDeque<Passenger>,
}

impl Checkpoint {
    /// Create a checkpoint with `agent_count` idle agents.
    pub fn new(agent_count: usize) -> Self {
        Self {
            agents: (0..agent_count).map(ScreeningAgent::new).collect(),
            intake_queue: VecDeque::new(),
        }
    }

    /// Append a passenger to the tail of the intake queue.
    pub fn enqueue(&mut self, passenger: Passenger) {
        self.intake_queue.push_back(passenger);
    }

    /// Remove and return the head of the intake queue.
    pub fn pop_intake(&mut self) -> Option<Passenger> {
        self.intake_queue.pop_front()
    }

    /// The fixed agent pool, in pool order.
    pub fn agents(&self) -> &[ScreeningAgent] {
        &self.agents
    }

    /// Mutable access to one agent by pool position.
    pub fn agent_mut(&mut self, id: usize) -> Option<&mut ScreeningAgent> {
        self.agents.get_mut(id)
    }

    /// Size of the fixed pool.
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Number of agents currently serving a passenger.
    pub fn busy_agents(&self) -> usize {
        self.agents.iter().filter(|a| a.is_busy()).count()
    }

    /// Current intake queue length.
    pub fn intake_len(&self) -> usize {
        self.intake_queue.len()
    }
}
