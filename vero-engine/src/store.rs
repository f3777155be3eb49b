//! The record store — the one stateful entity in the engine.
//!
//! Owned by whatever host embeds the engine (UI layer, CLI, test harness);
//! there are no module-level globals. Records live in insertion order and
//! are mutated in place by explicit edit operations. Derived views are
//! recomputed from the current records on every read, so an edit can never
//! leave a stale classification behind.

use vero_kpi::Record;

/// Ordered, mutable collection of KPI records.
///
/// `(category, area)` pairs are expected to be unique, but the store does
/// not enforce it — a duplicate appended here collapses last-write-wins in
/// the heatmap builder, and `get` resolves to the last match for
/// consistency with that.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from an already-loaded dataset, preserving its order.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Append a record at the end of the store.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Edit the record matching `(category, area)` in place.
    ///
    /// Returns false when no record matches. With duplicate pairs present,
    /// the last match is edited, consistent with last-write-wins reads.
    pub fn update<F>(&mut self, category: &str, area: &str, edit: F) -> bool
    where
        F: FnOnce(&mut Record),
    {
        match self.position_of(category, area) {
            Some(idx) => {
                edit(&mut self.records[idx]);
                true
            }
            None => {
                log::warn!("update target not found: {}/{}", category, area);
                false
            }
        }
    }

    /// Remove every record matching `(category, area)`.
    ///
    /// Returns false when nothing was removed. Views and heatmaps derived
    /// after this call no longer see the record.
    pub fn remove(&mut self, category: &str, area: &str) -> bool {
        let before = self.records.len();
        self.records
            .retain(|r| !(r.category == category && r.area == area));
        self.records.len() < before
    }

    /// Last record matching `(category, area)`, if any.
    pub fn get(&self, category: &str, area: &str) -> Option<&Record> {
        self.position_of(category, area).map(|idx| &self.records[idx])
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position_of(&self, category: &str, area: &str) -> Option<usize> {
        self.records
            .iter()
            .rposition(|r| r.category == category && r.area == area)
    }
}
