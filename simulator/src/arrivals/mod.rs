//! Passenger arrival generation
//!
//! The source creates passengers at exponentially distributed intervals and
//! classifies each one with independent Bernoulli draws (lane, secondary
//! screening). All generation is deterministic given the RNG seed: the draw
//! order per passenger is fixed as interarrival, then lane, then secondary
//! flag.
//!
//! The source has no terminal state. It keeps rescheduling itself; the event
//! loop simply stops resuming it past the simulation horizon.

use crate::core::time::SimTime;
use crate::models::passenger::{Lane, Passenger};
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};

/// Configuration for stochastic passenger arrivals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalConfig {
    /// Mean of the exponential inter-arrival distribution (time units)
    pub mean_interarrival: f64,

    /// Probability that a passenger is classified expedited
    pub expedited_probability: f64,

    /// Probability that a passenger requires secondary screening
    pub secondary_probability: f64,
}

impl Default for ArrivalConfig {
    fn default() -> Self {
        // One arrival every ~5 units, 30% expedited, 10% secondary.
        Self {
            mean_interarrival: 5.0,
            expedited_probability: 0.3,
            secondary_probability: 0.1,
        }
    }
}

/// Generator for passenger entities.
///
/// Owns the sequential id counter so generated and injected passengers never
/// collide.
///
/// # Example
/// ```
/// use checkpoint_simulator_core_rs::arrivals::{ArrivalConfig, PassengerSource};
/// use checkpoint_simulator_core_rs::{RngManager, SimTime};
///
/// let mut source = PassengerSource::new(ArrivalConfig::default());
/// let mut rng = RngManager::new(42);
///
/// let p = source.spawn(SimTime::ZERO, &mut rng);
/// assert_eq!(p.id(), 0);
/// let q = source.spawn(SimTime::new(3.0), &mut rng);
/// assert_eq!(q.id(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PassengerSource {
    config: ArrivalConfig,

    /// Next passenger id to hand out
    next_id: u64,
}

impl PassengerSource {
    /// Create a source with the given arrival configuration.
    pub fn new(config: ArrivalConfig) -> Self {
        Self { config, next_id: 0 }
    }

    /// Draw the interval until the next arrival.
    pub fn sample_interarrival(&self, rng: &mut RngManager) -> f64 {
        rng.exponential(self.config.mean_interarrival)
    }

    /// Create a passenger at `now` with randomly drawn classification.
    ///
    /// Draw order is lane, then secondary flag; replay identity depends on
    /// this order staying fixed.
    pub fn spawn(&mut self, now: SimTime, rng: &mut RngManager) -> Passenger {
        let lane = if rng.bernoulli(self.config.expedited_probability) {
            Lane::Expedited
        } else {
            Lane::Regular
        };
        let needs_secondary = rng.bernoulli(self.config.secondary_probability);
        self.spawn_fixed(now, lane, needs_secondary)
    }

    /// Create a passenger at `now` with fixed attributes (no RNG draws).
    ///
    /// Used for deterministic scenario injection.
    pub fn spawn_fixed(&mut self, now: SimTime, lane: Lane, needs_secondary: bool) -> Passenger {
        let id = self.next_id;
        self.next_id += 1;
        Passenger::new(id, now, lane, needs_secondary)
    }

    /// Number of passengers handed out so far.
    pub fn spawned(&self) -> u64 {
        self.next_id
    }
}
