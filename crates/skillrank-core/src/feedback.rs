//! User feedback on recommendations
//!
//! Feedback is bookkeeping only: it never influences the colony. The store
//! tracks per-course positive/total counters and a history of accuracy
//! snapshots, and is persisted as JSON inside the skillrank store.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SkillrankError};

/// Feedback values counted as positive (after trim + lowercase)
const POSITIVE_VALUES: &[&str] = &["1", "positive", "yes", "true"];

/// Interpret a raw feedback value
pub fn parse_feedback_value(raw: &str) -> bool {
    let value = raw.trim().to_lowercase();
    POSITIVE_VALUES.contains(&value.as_str())
}

/// Counters for a single course
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub positive: u64,
    pub total: u64,
}

/// One accuracy snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyPoint {
    pub at: DateTime<Utc>,
    /// Percentage in `[0, 100]`
    pub accuracy: f64,
}

/// Feedback counters and accuracy history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackStore {
    #[serde(default)]
    entries: BTreeMap<u64, FeedbackEntry>,
    #[serde(default)]
    history: Vec<AccuracyPoint>,
}

impl FeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `path`; a missing file yields an empty store
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| SkillrankError::io_operation("read feedback", path.display(), e))?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| SkillrankError::io_operation("write feedback", path.display(), e))?;
        Ok(())
    }

    /// Track a recommended course without counting any feedback.
    ///
    /// Returns `true` if the course was not tracked before.
    pub fn register(&mut self, course_id: u64) -> bool {
        let mut inserted = false;
        self.entries.entry(course_id).or_insert_with(|| {
            inserted = true;
            FeedbackEntry::default()
        });
        inserted
    }

    /// Count one piece of feedback for `course_id`
    pub fn record(&mut self, course_id: u64, positive: bool) -> FeedbackEntry {
        let entry = self.entries.entry(course_id).or_default();
        entry.total += 1;
        if positive {
            entry.positive += 1;
        }
        debug!(course_id, positive, total = entry.total, "record_feedback");
        *entry
    }

    pub fn get(&self, course_id: u64) -> Option<&FeedbackEntry> {
        self.entries.get(&course_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &BTreeMap<u64, FeedbackEntry> {
        &self.entries
    }

    pub fn history(&self) -> &[AccuracyPoint] {
        &self.history
    }

    /// Share of positive feedback as a percentage; `0` with no feedback
    pub fn accuracy(&self) -> f64 {
        let (positive, total) = self
            .entries
            .values()
            .fold((0u64, 0u64), |(p, t), e| (p + e.positive, t + e.total));
        if total == 0 {
            0.0
        } else {
            positive as f64 / total as f64 * 100.0
        }
    }

    /// Append the current accuracy to the history.
    ///
    /// Nothing is recorded while no course is tracked.
    pub fn snapshot(&mut self) -> Option<f64> {
        self.snapshot_at(Utc::now())
    }

    pub fn snapshot_at(&mut self, at: DateTime<Utc>) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let accuracy = self.accuracy();
        self.history.push(AccuracyPoint { at, accuracy });
        Some(accuracy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_feedback_value() {
        for raw in ["1", "positive", " YES ", "True"] {
            assert!(parse_feedback_value(raw), "{raw} should be positive");
        }
        for raw in ["0", "no", "negative", "", "maybe"] {
            assert!(!parse_feedback_value(raw), "{raw} should be negative");
        }
    }

    #[test]
    fn test_register_does_not_count() {
        let mut store = FeedbackStore::new();
        assert!(store.register(3));
        assert!(!store.register(3));
        assert_eq!(store.get(3), Some(&FeedbackEntry::default()));
        assert_eq!(store.accuracy(), 0.0);
    }

    #[test]
    fn test_record_and_accuracy() {
        let mut store = FeedbackStore::new();
        store.record(1, true);
        store.record(1, false);
        store.record(2, true);
        let entry = store.record(2, true);

        assert_eq!(entry, FeedbackEntry { positive: 2, total: 2 });
        assert_eq!(store.accuracy(), 75.0);
    }

    #[test]
    fn test_snapshot_requires_entries() {
        let mut store = FeedbackStore::new();
        assert_eq!(store.snapshot(), None);
        assert!(store.history().is_empty());

        store.register(9);
        assert_eq!(store.snapshot(), Some(0.0));
        store.record(9, true);
        assert_eq!(store.snapshot(), Some(100.0));

        let history: Vec<f64> = store.history().iter().map(|p| p.accuracy).collect();
        assert_eq!(history, vec![0.0, 100.0]);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("feedback.json");

        assert!(FeedbackStore::load(&path).unwrap().is_empty());

        let mut store = FeedbackStore::new();
        store.record(4, true);
        store.snapshot();
        store.save(&path).unwrap();

        let loaded = FeedbackStore::load(&path).unwrap();
        assert_eq!(loaded, store);
    }
}
