//! Checkpoint Simulator Core - Rust Engine
//!
//! Discrete-event simulation of passenger flow through an airport security
//! checkpoint, with deterministic execution.
//!
//! # Architecture
//!
//! - **core**: Simulated time
//! - **rng**: Deterministic random number generation
//! - **scheduler**: Time-ordered event queue (the sole concurrency primitive)
//! - **models**: Domain types (Passenger, ScreeningAgent, QueueRouter,
//!   Checkpoint, CompletionRecord, Event log)
//! - **arrivals**: Stochastic passenger generation
//! - **policy**: Lane-priority and agent-selection seams
//! - **collector**: Completion sinks and aggregate statistics
//! - **simulation**: Configuration validation and the event loop
//!
//! # Critical Invariants
//!
//! 1. The clock never decreases; same-instant events run in scheduling order
//! 2. All randomness is deterministic (seeded RNG)
//! 3. A passenger occupies exactly one container at any simulated instant
//! 4. For every record: exit ≥ screening start ≥ arrival, wait = start − arrival

// Module declarations
pub mod arrivals;
pub mod collector;
pub mod core;
pub mod models;
pub mod policy;
pub mod rng;
pub mod scheduler;
pub mod simulation;

// Re-exports for convenience
pub use arrivals::{ArrivalConfig, PassengerSource};
pub use collector::{CompletionSink, NullSink, RecordCollector};
pub use self::core::time::SimTime;
pub use models::{
    agent::{AgentError, ScreeningAgent},
    checkpoint::Checkpoint,
    event::{Event, EventLog},
    passenger::{Lane, Passenger},
    record::CompletionRecord,
    router::QueueRouter,
};
pub use rng::RngManager;
pub use simulation::{
    RunSummary, ServiceTimes, Simulation, SimulationConfig, SimulationError, TimeRange,
};
