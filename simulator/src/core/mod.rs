//! Core primitives: simulated time.

pub mod time;

pub use time::SimTime;
