//! Time-ordered event queue
//!
//! The queue is the simulation's sole concurrency primitive: logical
//! processes (the passenger source, the routing and dispatch tick loops,
//! each in-flight screening) are interleaved by popping one entry at a time
//! and running its continuation to the next suspension point. Nothing ever
//! executes in parallel, so shared state needs no locking.
//!
//! # Ordering
//!
//! Entries are ordered by execution time, with ties broken by a strictly
//! increasing insertion counter. Two events scheduled for the same instant
//! therefore execute in the order they were scheduled, independent of heap
//! internals. Replay-identity tests rely on this property.

use crate::core::time::SimTime;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A pending event: execution time, insertion sequence, payload.
#[derive(Debug, Clone)]
struct Entry<T> {
    time: SimTime,
    seq: u64,
    payload: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the earliest
        // (time, seq) pair on top.
        other
            .time
            .cmp(&self.time)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-ordered queue of scheduled events.
///
/// # Example
/// ```
/// use checkpoint_simulator_core_rs::scheduler::EventQueue;
/// use checkpoint_simulator_core_rs::SimTime;
///
/// let mut queue: EventQueue<&str> = EventQueue::new();
/// queue.push(SimTime::new(2.0), "later");
/// queue.push(SimTime::new(1.0), "sooner");
///
/// let (time, payload) = queue.pop().unwrap();
/// assert_eq!(time.value(), 1.0);
/// assert_eq!(payload, "sooner");
/// ```
#[derive(Debug, Clone)]
pub struct EventQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> EventQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `payload` for execution at `time`.
    ///
    /// Returns the insertion sequence number assigned to the entry.
    pub fn push(&mut self, time: SimTime, payload: T) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { time, seq, payload });
        seq
    }

    /// Pop the earliest pending entry (lowest time, then lowest sequence).
    pub fn pop(&mut self) -> Option<(SimTime, T)> {
        self.heap.pop().map(|entry| (entry.time, entry.payload))
    }

    /// Pop the earliest entry only if it is due at or before `limit`.
    pub fn pop_at_or_before(&mut self, limit: SimTime) -> Option<(SimTime, T)> {
        match self.peek_time() {
            Some(time) if time <= limit => self.pop(),
            _ => None,
        }
    }

    /// Execution time of the earliest pending entry, if any.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.heap.peek().map(|entry| entry.time)
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True if no entries are pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_in_time_order() {
        let mut queue = EventQueue::new();
        queue.push(SimTime::new(3.0), "c");
        queue.push(SimTime::new(1.0), "a");
        queue.push(SimTime::new(2.0), "b");

        assert_eq!(queue.pop().unwrap().1, "a");
        assert_eq!(queue.pop().unwrap().1, "b");
        assert_eq!(queue.pop().unwrap().1, "c");
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_ties_break_by_insertion_order() {
        let mut queue = EventQueue::new();
        let t = SimTime::new(5.0);
        queue.push(t, "first");
        queue.push(t, "second");
        queue.push(t, "third");

        assert_eq!(queue.pop().unwrap().1, "first");
        assert_eq!(queue.pop().unwrap().1, "second");
        assert_eq!(queue.pop().unwrap().1, "third");
    }

    #[test]
    fn test_pop_at_or_before_respects_limit() {
        let mut queue = EventQueue::new();
        queue.push(SimTime::new(1.0), 1);
        queue.push(SimTime::new(2.0), 2);

        assert_eq!(queue.pop_at_or_before(SimTime::new(1.0)), Some((SimTime::new(1.0), 1)));
        assert_eq!(queue.pop_at_or_before(SimTime::new(1.5)), None);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_interleaved_push_pop_keeps_ordering() {
        let mut queue = EventQueue::new();
        queue.push(SimTime::new(10.0), "late");
        queue.push(SimTime::new(1.0), "early");
        assert_eq!(queue.pop().unwrap().1, "early");

        // Same time as the remaining entry, but inserted afterwards.
        queue.push(SimTime::new(10.0), "later insert");
        assert_eq!(queue.pop().unwrap().1, "late");
        assert_eq!(queue.pop().unwrap().1, "later insert");
    }
}
