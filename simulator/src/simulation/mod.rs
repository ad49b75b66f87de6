//! Simulation engine: configuration, event loop, and run summary.
//!
//! See `engine.rs` for the implementation.

pub mod engine;

pub use engine::{
    RunSummary, ServiceTimes, Simulation, SimulationConfig, SimulationError, TimeRange,
};
