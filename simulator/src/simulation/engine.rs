//! Simulation engine
//!
//! Single-threaded cooperative event loop driving all components:
//!
//! ```text
//! PassengerSource → QueueRouter.join (lane queue)
//!                 → assign tick  (lane queue → intake, ≤1 per tick)
//!                 → dispatch tick (intake → first idle agent, ≤1 per tick)
//!                 → screening [→ secondary screening] → CompletionSink
//! ```
//!
//! Each logical process suspends only at modeled waits (inter-arrival delay,
//! tick interval, screening durations); between suspensions it runs to
//! completion, so queue and agent mutation is race-free by construction.
//! Events scheduled for the same instant execute in scheduling order, which
//! makes runs with equal seeds byte-identical.
//!
//! # Example
//!
//! ```rust
//! use checkpoint_simulator_core_rs::collector::RecordCollector;
//! use checkpoint_simulator_core_rs::{Simulation, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     horizon: 600.0,
//!     rng_seed: 42,
//!     ..SimulationConfig::default()
//! };
//!
//! let mut sim = Simulation::new(config).unwrap();
//! let mut collector = RecordCollector::new();
//! let summary = sim.run(&mut collector).unwrap();
//!
//! assert_eq!(summary.passengers_completed as usize, collector.len());
//! ```

use crate::arrivals::{ArrivalConfig, PassengerSource};
use crate::collector::CompletionSink;
use crate::core::time::SimTime;
use crate::models::checkpoint::Checkpoint;
use crate::models::event::{Event, EventLog};
use crate::models::passenger::{Lane, Passenger};
use crate::models::record::CompletionRecord;
use crate::models::router::QueueRouter;
use crate::policy::{AgentSelector, ExpeditedFirst, FirstIdle, LaneSelector};
use crate::rng::RngManager;
use crate::scheduler::EventQueue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Configuration Types
// ============================================================================

/// Inclusive-lower, exclusive-upper range for a uniform service-time draw.
///
/// A degenerate range (`min == max`) pins the duration to a constant, which
/// scenario tests use to make timings exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub min: f64,
    pub max: f64,
}

impl TimeRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Draw a duration from [min, max).
    pub fn sample(&self, rng: &mut RngManager) -> f64 {
        rng.uniform(self.min, self.max)
    }
}

/// Service-time distributions for each screening phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceTimes {
    /// Primary screening for expedited-lane passengers
    pub expedited: TimeRange,

    /// Primary screening for regular-lane passengers
    pub regular: TimeRange,

    /// Secondary screening (lane-independent)
    pub secondary: TimeRange,
}

impl Default for ServiceTimes {
    fn default() -> Self {
        Self {
            expedited: TimeRange::new(5.0, 15.0),
            regular: TimeRange::new(10.0, 25.0),
            secondary: TimeRange::new(5.0, 15.0),
        }
    }
}

/// Complete simulation configuration.
///
/// Defaults mirror a one-hour run of a three-agent checkpoint with arrivals
/// every ~5 units, 30% expedited and 10% secondary screening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Simulation horizon in time units; events past it never run
    pub horizon: f64,

    /// Number of screening agents in the checkpoint pool (≥ 1)
    pub agent_count: usize,

    /// Period of the routing and dispatch tick loops
    pub tick_interval: f64,

    /// Stochastic arrival configuration (None = injected passengers only)
    pub arrival: Option<ArrivalConfig>,

    /// Screening duration distributions
    pub service_times: ServiceTimes,

    /// Seed for deterministic random number generation
    pub rng_seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon: 3600.0,
            agent_count: 3,
            tick_interval: 1.0,
            arrival: Some(ArrivalConfig::default()),
            service_times: ServiceTimes::default(),
            rng_seed: 12345,
        }
    }
}

// ============================================================================
// Errors and results
// ============================================================================

/// Simulation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    /// Configuration validation failed before the simulation started
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A defensive internal check failed; indicates an engine bug
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Result of a `run`/`run_until` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Time limit the run was driven to
    pub end_time: SimTime,

    /// Passengers created since construction (generated + injected)
    pub passengers_created: u64,

    /// Passengers whose completion record has been emitted
    pub passengers_completed: u64,

    /// Passengers currently in a queue or being served
    pub passengers_in_system: u64,

    /// Events executed since construction
    pub events_processed: u64,
}

// ============================================================================
// Engine
// ============================================================================

/// Continuations driven by the event loop.
///
/// Each variant resumes one logical process at its wake time: the arrival
/// generator, a zero-delay lane join, one of the two tick loops, or an
/// in-flight screening reaching a phase boundary.
#[derive(Debug, Clone)]
enum SimEvent {
    /// Arrival generator wakes: create a passenger, reschedule itself
    Arrival,

    /// Zero-delay join of a freshly created passenger into its lane queue
    JoinLane { passenger: Passenger },

    /// Router tick: move ≤1 passenger from the lane queues to the intake
    AssignTick,

    /// Checkpoint tick: move ≤1 passenger from the intake to an idle agent
    DispatchTick,

    /// Primary screening finished on the given agent
    ScreeningComplete { agent_id: usize },

    /// Secondary screening finished on the given agent
    SecondaryComplete { agent_id: usize },
}

/// The discrete-event simulation engine.
///
/// Owns the clock, the pending-event queue, the RNG, and every component.
/// Completion records flow out through the sink passed to [`Simulation::run`];
/// the engine itself keeps only counters and the audit log.
pub struct Simulation {
    config: SimulationConfig,

    /// Current simulated time; advanced only by the event loop
    clock: SimTime,

    /// Time-ordered pending events
    events: EventQueue<SimEvent>,

    /// Deterministic RNG (sole source of randomness)
    rng: RngManager,

    /// Passenger generator and id counter
    source: PassengerSource,

    /// Lane queues
    router: QueueRouter,

    /// Intake queue plus agent pool
    checkpoint: Checkpoint,

    /// Lane-priority policy for assign ticks
    lane_selector: Box<dyn LaneSelector>,

    /// Agent-choice policy for dispatch ticks
    agent_selector: Box<dyn AgentSelector>,

    /// Audit trail of every state change
    event_log: EventLog,

    passengers_created: u64,
    passengers_completed: u64,
    events_processed: u64,
}

impl Simulation {
    /// Create an engine with the default policies (strict expedited lane
    /// priority, first idle agent).
    ///
    /// Validates the configuration and schedules the initial events: the
    /// first arrival (when arrivals are configured), then the assign tick,
    /// then the dispatch tick, in that order, so same-instant ties always
    /// resolve source → router → checkpoint.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        Self::with_policies(config, Box::new(ExpeditedFirst), Box::new(FirstIdle))
    }

    /// Create an engine with substituted selection policies.
    ///
    /// The defaults are the modeled behavior; substitutes change observable
    /// timings and belong to intentional experiments.
    pub fn with_policies(
        config: SimulationConfig,
        lane_selector: Box<dyn LaneSelector>,
        agent_selector: Box<dyn AgentSelector>,
    ) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;

        let rng = RngManager::new(config.rng_seed);
        let source = PassengerSource::new(config.arrival.clone().unwrap_or_default());
        let checkpoint = Checkpoint::new(config.agent_count);

        let mut sim = Self {
            clock: SimTime::ZERO,
            events: EventQueue::new(),
            rng,
            source,
            router: QueueRouter::new(),
            checkpoint,
            lane_selector,
            agent_selector,
            event_log: EventLog::new(),
            passengers_created: 0,
            passengers_completed: 0,
            events_processed: 0,
            config,
        };

        if sim.config.arrival.is_some() {
            let delay = sim.source.sample_interarrival(&mut sim.rng);
            sim.schedule(delay, SimEvent::Arrival)?;
        }
        let tick = sim.config.tick_interval;
        sim.schedule(tick, SimEvent::AssignTick)?;
        sim.schedule(tick, SimEvent::DispatchTick)?;

        Ok(sim)
    }

    /// Validate configuration, failing fast before any event runs.
    fn validate_config(config: &SimulationConfig) -> Result<(), SimulationError> {
        if config.agent_count < 1 {
            return Err(SimulationError::InvalidConfig(
                "agent_count must be >= 1".to_string(),
            ));
        }
        if !config.horizon.is_finite() || config.horizon < 0.0 {
            return Err(SimulationError::InvalidConfig(format!(
                "horizon must be finite and non-negative, got {}",
                config.horizon
            )));
        }
        if !config.tick_interval.is_finite() || config.tick_interval <= 0.0 {
            return Err(SimulationError::InvalidConfig(format!(
                "tick_interval must be positive, got {}",
                config.tick_interval
            )));
        }
        if let Some(arrival) = &config.arrival {
            if !arrival.mean_interarrival.is_finite() || arrival.mean_interarrival <= 0.0 {
                return Err(SimulationError::InvalidConfig(format!(
                    "mean_interarrival must be positive, got {}",
                    arrival.mean_interarrival
                )));
            }
            for (name, p) in [
                ("expedited_probability", arrival.expedited_probability),
                ("secondary_probability", arrival.secondary_probability),
            ] {
                if !(0.0..=1.0).contains(&p) {
                    return Err(SimulationError::InvalidConfig(format!(
                        "{} must be within [0, 1], got {}",
                        name, p
                    )));
                }
            }
        }
        for (name, range) in [
            ("expedited", config.service_times.expedited),
            ("regular", config.service_times.regular),
            ("secondary", config.service_times.secondary),
        ] {
            if !range.min.is_finite() || !range.max.is_finite() || range.min < 0.0 || range.min > range.max {
                return Err(SimulationError::InvalidConfig(format!(
                    "{} service range [{}, {}) is malformed",
                    name, range.min, range.max
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current simulated time.
    pub fn now(&self) -> SimTime {
        self.clock
    }

    /// Configuration the engine was built with.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Length of one lane queue at the router.
    pub fn lane_queue_len(&self, lane: Lane) -> usize {
        self.router.queue_len(lane)
    }

    /// Length of the checkpoint intake queue.
    pub fn intake_len(&self) -> usize {
        self.checkpoint.intake_len()
    }

    /// Number of agents currently serving a passenger.
    pub fn busy_agents(&self) -> usize {
        self.checkpoint.busy_agents()
    }

    /// Size of the fixed agent pool.
    pub fn agent_count(&self) -> usize {
        self.checkpoint.agent_count()
    }

    /// Passengers created since construction.
    pub fn passengers_created(&self) -> u64 {
        self.passengers_created
    }

    /// Passengers completed since construction.
    pub fn passengers_completed(&self) -> u64 {
        self.passengers_completed
    }

    /// Passengers currently waiting or in service.
    pub fn passengers_in_system(&self) -> u64 {
        (self.router.total_len() + self.checkpoint.intake_len() + self.checkpoint.busy_agents())
            as u64
    }

    /// Audit trail of all state changes so far.
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Pending events in the queue (including ones past the horizon).
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    // ========================================================================
    // Scenario injection
    // ========================================================================

    /// Inject a passenger with fixed attributes at the current clock time.
    ///
    /// The passenger takes the same zero-delay join path as generated ones.
    /// Returns the assigned id.
    pub fn inject_passenger(
        &mut self,
        lane: Lane,
        needs_secondary: bool,
    ) -> Result<u64, SimulationError> {
        let passenger = self.source.spawn_fixed(self.clock, lane, needs_secondary);
        let id = passenger.id();
        self.passengers_created += 1;
        self.event_log.log(Event::Arrival {
            time: self.clock,
            passenger_id: id,
            lane,
            needs_secondary,
        });
        self.schedule(0.0, SimEvent::JoinLane { passenger })?;
        Ok(id)
    }

    // ========================================================================
    // Event loop
    // ========================================================================

    /// Run until the configured horizon.
    pub fn run(&mut self, sink: &mut dyn CompletionSink) -> Result<RunSummary, SimulationError> {
        self.run_until(self.config.horizon, sink)
    }

    /// Run until `until`, executing every event with time ≤ `until`.
    ///
    /// May be called repeatedly with increasing limits to observe the system
    /// at sampled instants; later events stay pending in between.
    pub fn run_until(
        &mut self,
        until: f64,
        sink: &mut dyn CompletionSink,
    ) -> Result<RunSummary, SimulationError> {
        if !until.is_finite() {
            return Err(SimulationError::InvalidConfig(format!(
                "run limit must be finite, got {}",
                until
            )));
        }
        let limit = SimTime::new(until);

        while let Some((time, event)) = self.events.pop_at_or_before(limit) {
            if time < self.clock {
                return Err(SimulationError::InvariantViolation(format!(
                    "clock regression: event at {} while clock is {}",
                    time, self.clock
                )));
            }
            self.clock = time;
            self.events_processed += 1;
            self.handle_event(event, sink)?;
        }

        Ok(RunSummary {
            end_time: limit,
            passengers_created: self.passengers_created,
            passengers_completed: self.passengers_completed,
            passengers_in_system: self.passengers_in_system(),
            events_processed: self.events_processed,
        })
    }

    /// Insert an event at `clock + delay`.
    ///
    /// A negative delay is a configuration error, never clamped.
    fn schedule(&mut self, delay: f64, event: SimEvent) -> Result<(), SimulationError> {
        if !delay.is_finite() || delay < 0.0 {
            return Err(SimulationError::InvalidConfig(format!(
                "cannot schedule an event {} units in the past",
                delay
            )));
        }
        self.events.push(self.clock.after(delay), event);
        Ok(())
    }

    /// Resume exactly one continuation at the current clock time.
    fn handle_event(
        &mut self,
        event: SimEvent,
        sink: &mut dyn CompletionSink,
    ) -> Result<(), SimulationError> {
        match event {
            SimEvent::Arrival => self.on_arrival(),
            SimEvent::JoinLane { passenger } => {
                self.event_log.log(Event::LaneJoined {
                    time: self.clock,
                    passenger_id: passenger.id(),
                    lane: passenger.lane(),
                });
                self.router.join(passenger);
                Ok(())
            }
            SimEvent::AssignTick => self.on_assign_tick(),
            SimEvent::DispatchTick => self.on_dispatch_tick(),
            SimEvent::ScreeningComplete { agent_id } => self.on_screening_complete(agent_id, sink),
            SimEvent::SecondaryComplete { agent_id } => self.finish_service(agent_id, sink),
        }
    }

    /// Arrival generator activation: create one passenger, submit it via a
    /// zero-delay lane join, and reschedule the generator.
    fn on_arrival(&mut self) -> Result<(), SimulationError> {
        let passenger = self.source.spawn(self.clock, &mut self.rng);
        self.passengers_created += 1;
        self.event_log.log(Event::Arrival {
            time: self.clock,
            passenger_id: passenger.id(),
            lane: passenger.lane(),
            needs_secondary: passenger.needs_secondary(),
        });
        self.schedule(0.0, SimEvent::JoinLane { passenger })?;

        let delay = self.source.sample_interarrival(&mut self.rng);
        self.schedule(delay, SimEvent::Arrival)
    }

    /// Assign tick: transfer at most one passenger from the lane queues to
    /// the intake, then reschedule the tick.
    fn on_assign_tick(&mut self) -> Result<(), SimulationError> {
        if let Some(lane) = self.lane_selector.next_lane(&self.router) {
            if let Some(passenger) = self.router.pop_lane(lane) {
                self.event_log.log(Event::IntakeTransfer {
                    time: self.clock,
                    passenger_id: passenger.id(),
                    lane,
                });
                self.checkpoint.enqueue(passenger);
            }
        }
        self.schedule(self.config.tick_interval, SimEvent::AssignTick)
    }

    /// Dispatch tick: hand at most one intake passenger to an idle agent,
    /// then reschedule the tick. Empty intake or no idle agent is a no-op.
    fn on_dispatch_tick(&mut self) -> Result<(), SimulationError> {
        if self.checkpoint.intake_len() > 0 {
            if let Some(agent_id) = self.agent_selector.select(self.checkpoint.agents()) {
                let passenger = self.checkpoint.pop_intake().ok_or_else(|| {
                    SimulationError::InvariantViolation("intake emptied mid-dispatch".to_string())
                })?;
                let duration = match passenger.lane() {
                    Lane::Expedited => self.config.service_times.expedited.sample(&mut self.rng),
                    Lane::Regular => self.config.service_times.regular.sample(&mut self.rng),
                };
                self.event_log.log(Event::Dispatch {
                    time: self.clock,
                    passenger_id: passenger.id(),
                    agent_id,
                });
                let now = self.clock;
                let agent = self.checkpoint.agent_mut(agent_id).ok_or_else(|| {
                    SimulationError::InvariantViolation(format!("no agent {}", agent_id))
                })?;
                agent
                    .begin_screening(passenger, now)
                    .map_err(|e| SimulationError::InvariantViolation(e.to_string()))?;
                self.schedule(duration, SimEvent::ScreeningComplete { agent_id })?;
            }
        }
        self.schedule(self.config.tick_interval, SimEvent::DispatchTick)
    }

    /// Primary screening finished: either enter secondary screening or
    /// complete the service.
    fn on_screening_complete(
        &mut self,
        agent_id: usize,
        sink: &mut dyn CompletionSink,
    ) -> Result<(), SimulationError> {
        let (passenger_id, needs_secondary) = self
            .checkpoint
            .agents()
            .get(agent_id)
            .and_then(|agent| agent.current_passenger())
            .map(|p| (p.id(), p.needs_secondary()))
            .ok_or_else(|| {
                SimulationError::InvariantViolation(format!(
                    "screening completed on agent {} with no passenger in service",
                    agent_id
                ))
            })?;

        if needs_secondary {
            let duration = self.config.service_times.secondary.sample(&mut self.rng);
            let agent = self.checkpoint.agent_mut(agent_id).ok_or_else(|| {
                SimulationError::InvariantViolation(format!("no agent {}", agent_id))
            })?;
            agent
                .begin_secondary()
                .map_err(|e| SimulationError::InvariantViolation(e.to_string()))?;
            self.event_log.log(Event::SecondaryStarted {
                time: self.clock,
                passenger_id,
                agent_id,
            });
            self.schedule(duration, SimEvent::SecondaryComplete { agent_id })
        } else {
            self.finish_service(agent_id, sink)
        }
    }

    /// Service finished: emit the completion record and idle the agent.
    fn finish_service(
        &mut self,
        agent_id: usize,
        sink: &mut dyn CompletionSink,
    ) -> Result<(), SimulationError> {
        let agent = self.checkpoint.agent_mut(agent_id).ok_or_else(|| {
            SimulationError::InvariantViolation(format!("no agent {}", agent_id))
        })?;
        let (passenger, screening_start) = agent
            .finish_service()
            .map_err(|e| SimulationError::InvariantViolation(e.to_string()))?;

        let record = CompletionRecord::new(&passenger, screening_start, self.clock);
        self.passengers_completed += 1;
        self.event_log.log(Event::Completed {
            time: self.clock,
            passenger_id: record.passenger_id,
            agent_id,
            wait_time: record.wait_time,
        });
        sink.record(record);
        Ok(())
    }
}

// Manual Debug implementation (policy boxes don't implement Debug)
impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("now", &self.clock)
            .field("pending_events", &self.events.len())
            .field("passengers_created", &self.passengers_created)
            .field("passengers_completed", &self.passengers_completed)
            .field("busy_agents", &self.checkpoint.busy_agents())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
