//! History service contract
//!
//! The selection code only hands records to a [`HistoryService`]; stack
//! mechanics belong to the service. [`HistoryLog`] is the plain ordered log
//! used when the host doesn't bring its own.

use std::ops::Range;

use crate::{Frame, HistoryRecord};

/// Receives replay records in the order operations happen
pub trait HistoryService {
    fn save_state(&mut self, record: HistoryRecord);
}

/// Append-only record log. Records are never reordered or merged.
#[derive(Debug, Default, Clone)]
pub struct HistoryLog {
    records: Vec<HistoryRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryRecord> {
        self.records.last()
    }

    /// Get description of the most recent operation
    pub fn last_description(&self) -> Option<String> {
        self.records.last().map(|r| r.entry.get_description())
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Re-applies the records in `range`, oldest first.
    ///
    /// This is how a snapshot based history re-derives state: restore the
    /// nearest snapshot, then replay everything recorded after it.
    pub fn replay_into(&self, frame: &mut dyn Frame, range: Range<usize>) {
        let end = range.end.min(self.records.len());
        let start = range.start.min(end);
        for record in &self.records[start..end] {
            log::debug!("replaying {}", record.entry.get_description());
            record.entry.apply(frame);
        }
    }
}

impl HistoryService for HistoryLog {
    fn save_state(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }
}
