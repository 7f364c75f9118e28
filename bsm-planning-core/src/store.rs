//! Reconciliation store: load a persisted dataset, upsert freshly parsed
//! records by identity key, and write the result back in one step.
//!
//! The whole dataset lives in memory for the duration of a run. Output is
//! written once at the end or not at all; there are no partial writes.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::StoreError;
use crate::types::Match;

/// Load the persisted match array. A missing file is an empty dataset, not
/// an error — the first merge run starts from nothing. A file that exists
/// but doesn't deserialize as an array of records is fatal.
pub fn load_matches(path: &Path) -> Result<Vec<Match>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| StoreError::malformed(path, e))
}

/// Serialize records as a pretty-printed JSON array and overwrite `path` in
/// full, creating parent directories if needed. Pretty output keeps the
/// committed file human-diffable.
pub fn save_matches(path: &Path, matches: &[Match]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(path, e))?;
        }
    }
    let contents = serde_json::to_string_pretty(matches)?;
    fs::write(path, contents).map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

/// An insertion-ordered map from identity key to record.
///
/// Iteration order is first-insertion order: overwriting a key keeps its
/// original position, new keys append at the end. This is what guarantees
/// that a merge leaves prior records in their original relative order and
/// keeps re-runs diff-friendly.
#[derive(Debug, Default)]
pub struct MatchIndex {
    records: Vec<Match>,
    positions: HashMap<String, usize>,
}

impl MatchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a sequence of records into an index. Duplicate keys within the
    /// input are last-write-wins, at the first occurrence's position.
    pub fn from_records(records: impl IntoIterator<Item = Match>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.upsert(record);
        }
        index
    }

    /// Insert or overwrite the record at its identity key. The overwrite is
    /// wholesale — no field-level merging. Returns true when the key was new.
    pub fn upsert(&mut self, record: Match) -> bool {
        let key = record.key();
        match self.positions.get(&key) {
            Some(&pos) => {
                self.records[pos] = record;
                false
            }
            None => {
                self.positions.insert(key, self.records.len());
                self.records.push(record);
                true
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Match> {
        self.positions.get(key).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in iteration (first-insertion) order.
    pub fn records(&self) -> &[Match] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Match> {
        self.records
    }
}

/// Counts from a merge run, for CLI display.
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeStats {
    pub base: usize,
    pub incoming: usize,
    pub inserted: usize,
    pub updated: usize,
    pub total: usize,
}

/// Result of reconciling incoming records against a base dataset.
pub struct MergeOutcome {
    pub records: Vec<Match>,
    pub stats: MergeStats,
}

/// Reconcile `incoming` against `base` by identity key.
///
/// Re-running with the same incoming records is idempotent: the second run
/// overwrites every key with identical data and produces the same record
/// set in the same order.
pub fn merge(base: Vec<Match>, incoming: Vec<Match>) -> MergeOutcome {
    let mut stats = MergeStats {
        base: base.len(),
        incoming: incoming.len(),
        ..Default::default()
    };

    let mut index = MatchIndex::from_records(base);
    for record in incoming {
        if index.upsert(record) {
            stats.inserted += 1;
        } else {
            stats.updated += 1;
        }
    }

    stats.total = index.len();
    MergeOutcome {
        records: index.into_records(),
        stats,
    }
}
