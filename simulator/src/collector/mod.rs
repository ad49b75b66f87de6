//! Completion sinks and the record collector
//!
//! The engine emits one [`CompletionRecord`] per finished passenger, in
//! completion order, through the [`CompletionSink`] trait. Aggregate
//! statistics live in an explicit accumulator object owned by the caller,
//! never in program-wide state, so repeated or parallel experiments stay
//! independent.

use crate::models::passenger::Lane;
use crate::models::record::CompletionRecord;

/// Receives finished-passenger records for downstream reporting.
pub trait CompletionSink {
    /// Called exactly once per completed passenger, in completion order.
    fn record(&mut self, record: CompletionRecord);
}

/// Sink that discards records; useful when only engine state matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl CompletionSink for NullSink {
    fn record(&mut self, _record: CompletionRecord) {}
}

/// Collects records and maintains running wait-time aggregates.
///
/// # Example
/// ```
/// use checkpoint_simulator_core_rs::collector::{CompletionSink, RecordCollector};
/// use checkpoint_simulator_core_rs::{CompletionRecord, Lane, Passenger, SimTime};
///
/// let mut collector = RecordCollector::new();
/// let p = Passenger::new(1, SimTime::ZERO, Lane::Regular, false);
/// collector.record(CompletionRecord::new(&p, SimTime::new(2.0), SimTime::new(12.0)));
///
/// assert_eq!(collector.len(), 1);
/// assert_eq!(collector.mean_wait(), Some(2.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordCollector {
    records: Vec<CompletionRecord>,
    total_wait: f64,
    expedited_count: usize,
    expedited_wait: f64,
}

impl RecordCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, in completion order.
    pub fn records(&self) -> &[CompletionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all wait times.
    pub fn total_wait(&self) -> f64 {
        self.total_wait
    }

    /// Mean wait across all records, or `None` when empty.
    pub fn mean_wait(&self) -> Option<f64> {
        if self.records.is_empty() {
            None
        } else {
            Some(self.total_wait / self.records.len() as f64)
        }
    }

    /// Mean wait for one lane, or `None` when that lane has no records.
    pub fn mean_wait_for(&self, lane: Lane) -> Option<f64> {
        let (count, wait) = match lane {
            Lane::Expedited => (self.expedited_count, self.expedited_wait),
            Lane::Regular => (
                self.records.len() - self.expedited_count,
                self.total_wait - self.expedited_wait,
            ),
        };
        if count == 0 {
            None
        } else {
            Some(wait / count as f64)
        }
    }
}

impl CompletionSink for RecordCollector {
    fn record(&mut self, record: CompletionRecord) {
        self.total_wait += record.wait_time;
        if record.lane == Lane::Expedited {
            self.expedited_count += 1;
            self.expedited_wait += record.wait_time;
        }
        self.records.push(record);
    }
}
