use crate::types::{CaptureRecord, MessageType};
use std::collections::{BTreeMap, HashMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parsed records grouped by capture timestamp
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Track {
    pub points: BTreeMap<u64, Vec<CaptureRecord>>,
}

impl Track {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: CaptureRecord) {
        self.points.entry(record.capture_time).or_default().push(record);
    }

    /// Number of distinct capture timestamps
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Total number of records across all timestamps
    pub fn record_count(&self) -> usize {
        self.points.values().map(Vec::len).sum()
    }

    pub fn records_at(&self, capture_time: u64) -> Option<&[CaptureRecord]> {
        self.points.get(&capture_time).map(Vec::as_slice)
    }

    pub fn records_of_type(&self, message_type: MessageType) -> Vec<&CaptureRecord> {
        self.points
            .values()
            .flatten()
            .filter(|record| record.message_type() == message_type)
            .collect()
    }
}

/// Occurrence counts per message type, iterated in order of first appearance
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MessageStats {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

impl MessageStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, code: &str) {
        if !self.counts.contains_key(code) {
            self.order.push(code.to_string());
        }
        *self.counts.entry(code.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, code: &str) -> u64 {
        self.counts.get(code).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Counts in the order the message types were first seen
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(|code| (code.as_str(), self.counts[code]))
    }
}
