//! Domain types: passengers, agents, queues, records, events.

pub mod agent;
pub mod checkpoint;
pub mod event;
pub mod passenger;
pub mod record;
pub mod router;
