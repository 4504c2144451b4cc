use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::types::{MoodEntry, NewMoodEntry};

/// Number of entries kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 10;

/// Fixed-capacity mood log, newest entry first.
///
/// Entries only leave by eviction: once the log is full, every insert drops
/// the oldest entry from the tail.
#[derive(Debug, Clone)]
pub struct MoodHistory {
    entries: VecDeque<MoodEntry>,
    capacity: usize,
}

impl MoodHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Rebuild a history from previously recorded entries.
    ///
    /// Entries are sorted newest-first and cut down to `capacity`.
    pub fn from_entries(capacity: usize, entries: impl IntoIterator<Item = MoodEntry>) -> Self {
        let mut sorted: Vec<MoodEntry> = entries.into_iter().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted.truncate(capacity);
        Self {
            entries: sorted.into(),
            capacity,
        }
    }

    /// Stamp the entry with the current time and insert it at the head.
    ///
    /// Returns the stamped entry.
    pub fn add(&mut self, entry: NewMoodEntry) -> MoodEntry {
        self.add_at(entry, Utc::now())
    }

    /// Insert with an explicit timestamp.
    ///
    /// A timestamp older than the current head is raised to the head's, so
    /// timestamps never increase from head to tail.
    pub fn add_at(&mut self, entry: NewMoodEntry, timestamp: DateTime<Utc>) -> MoodEntry {
        let timestamp = match self.entries.front() {
            Some(head) if head.timestamp > timestamp => head.timestamp,
            _ => timestamp,
        };

        let stamped = entry.stamp(timestamp);
        self.entries.push_front(stamped.clone());
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                debug!("Evicted mood entry from {}", evicted.timestamp);
            }
        }
        stamped
    }

    /// Entries newest-first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &MoodEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<MoodEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<&MoodEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MoodHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
