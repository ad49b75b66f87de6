//! Tests for the event queue ordering guarantees

use checkpoint_simulator_core_rs::scheduler::EventQueue;
use checkpoint_simulator_core_rs::SimTime;

#[test]
fn test_pops_in_time_order() {
    let mut queue = EventQueue::new();
    queue.push(SimTime::new(3.0), "c");
    queue.push(SimTime::new(1.0), "a");
    queue.push(SimTime::new(2.0), "b");

    assert_eq!(queue.pop(), Some((SimTime::new(1.0), "a")));
    assert_eq!(queue.pop(), Some((SimTime::new(2.0), "b")));
    assert_eq!(queue.pop(), Some((SimTime::new(3.0), "c")));
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_ties_break_by_insertion_order() {
    let mut queue = EventQueue::new();
    for i in 0..100u32 {
        queue.push(SimTime::new(5.0), i);
    }
    for i in 0..100u32 {
        assert_eq!(queue.pop(), Some((SimTime::new(5.0), i)));
    }
}

#[test]
fn test_pop_at_or_before_leaves_later_events() {
    let mut queue = EventQueue::new();
    queue.push(SimTime::new(1.0), "early");
    queue.push(SimTime::new(2.0), "boundary");
    queue.push(SimTime::new(3.0), "late");

    assert_eq!(
        queue.pop_at_or_before(SimTime::new(2.0)),
        Some((SimTime::new(1.0), "early"))
    );
    // Boundary events execute: the limit is inclusive.
    assert_eq!(
        queue.pop_at_or_before(SimTime::new(2.0)),
        Some((SimTime::new(2.0), "boundary"))
    );
    assert_eq!(queue.pop_at_or_before(SimTime::new(2.0)), None);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.peek_time(), Some(SimTime::new(3.0)));
}

#[test]
fn test_interleaved_push_pop() {
    let mut queue = EventQueue::new();
    queue.push(SimTime::new(10.0), 10);
    queue.push(SimTime::new(1.0), 1);
    assert_eq!(queue.pop(), Some((SimTime::new(1.0), 1)));

    queue.push(SimTime::new(5.0), 5);
    assert_eq!(queue.pop(), Some((SimTime::new(5.0), 5)));
    assert_eq!(queue.pop(), Some((SimTime::new(10.0), 10)));
    assert!(queue.is_empty());
}
