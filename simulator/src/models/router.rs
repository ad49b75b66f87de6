//! Queue router: the two lane queues feeding the checkpoint
//!
//! Passengers join the queue matching their fixed lane in O(1). On each
//! assign tick the engine transfers **at most one** passenger into the
//! checkpoint intake, pulling from the lane chosen by the configured
//! [`LaneSelector`](crate::policy::LaneSelector). The default selector
//! drains the expedited queue before ever touching the regular queue, with
//! no fairness guarantee; sustained expedited load can starve the regular
//! lane indefinitely. That is the modeled policy, not a defect.

use crate::models::passenger::{Lane, Passenger};
use std::collections::VecDeque;

/// Holds the two lane-specific FIFO queues.
///
/// # Example
/// ```
/// use checkpoint_simulator_core_rs::{Lane, Passenger, QueueRouter, SimTime};
///
/// let mut router = QueueRouter::new();
/// router.join(Passenger::new(1, SimTime::ZERO, Lane::Regular, false));
/// router.join(Passenger::new(2, SimTime::ZERO, Lane::Expedited, false));
///
/// assert_eq!(router.queue_len(Lane::Regular), 1);
/// assert_eq!(router.queue_len(Lane::Expedited), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueueRouter {
    expedited_queue: VecDeque<Passenger>,
    regular_queue: VecDeque<Passenger>,
}

impl QueueRouter {
    /// Create a router with both lanes empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a passenger to the queue for its fixed lane.
    pub fn join(&mut self, passenger: Passenger) {
        match passenger.lane() {
            Lane::Expedited => self.expedited_queue.push_back(passenger),
            Lane::Regular => self.regular_queue.push_back(passenger),
        }
    }

    /// Remove and return the head of the given lane queue.
    pub fn pop_lane(&mut self, lane: Lane) -> Option<Passenger> {
        match lane {
            Lane::Expedited => self.expedited_queue.pop_front(),
            Lane::Regular => self.regular_queue.pop_front(),
        }
    }

    /// Length of one lane queue.
    pub fn queue_len(&self, lane: Lane) -> usize {
        match lane {
            Lane::Expedited => self.expedited_queue.len(),
            Lane::Regular => self.regular_queue.len(),
        }
    }

    /// Total passengers waiting across both lanes.
    pub fn total_len(&self) -> usize {
        self.expedited_queue.len() + self.regular_queue.len()
    }

    /// True if both lane queues are empty.
    pub fn is_empty(&self) -> bool {
        self.expedited_queue.is_empty() && self.regular_queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::SimTime;

    fn passenger(id: u64, lane: Lane) -> Passenger {
        Passenger::new(id, SimTime::ZERO, lane, false)
    }

    #[test]
    fn test_join_routes_by_lane() {
        let mut router = QueueRouter::new();
        router.join(passenger(1, Lane::Expedited));
        router.join(passenger(2, Lane::Regular));
        router.join(passenger(3, Lane::Regular));

        assert_eq!(router.queue_len(Lane::Expedited), 1);
        assert_eq!(router.queue_len(Lane::Regular), 2);
        assert_eq!(router.total_len(), 3);
    }

    #[test]
    fn test_lanes_are_fifo() {
        let mut router = QueueRouter::new();
        router.join(passenger(1, Lane::Regular));
        router.join(passenger(2, Lane::Regular));

        assert_eq!(router.pop_lane(Lane::Regular).unwrap().id(), 1);
        assert_eq!(router.pop_lane(Lane::Regular).unwrap().id(), 2);
        assert!(router.pop_lane(Lane::Regular).is_none());
    }

    #[test]
    fn test_empty_router() {
        let mut router = QueueRouter::new();
        assert!(router.is_empty());
        assert!(router.pop_lane(Lane::Expedited).is_none());
    }
}
