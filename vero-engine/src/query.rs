//! Multi-field filtering and substring search over the record store.
//!
//! A predicate is a conjunction: every provided field-equality constraint
//! must hold, and the search text (when present) must appear in at least
//! one of the configured text fields. An omitted or empty-string
//! constraint means "All" — the universal convention of every filter
//! dropdown the boardroom views carry. Output preserves the store's
//! insertion order; nothing here sorts.

use serde::Serialize;

use vero_kpi::{classify, ClassifiedRecord, Record, Status, Thresholds};

/// Text fields the substring search can inspect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Category,
    Area,
    Owner,
    Note,
}

impl SearchField {
    fn value<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            SearchField::Category => &record.category,
            SearchField::Area => &record.area,
            SearchField::Owner => &record.owner,
            SearchField::Note => &record.note,
        }
    }
}

/// Conjunction of equality constraints plus an optional substring search.
#[derive(Clone, Debug)]
pub struct QueryPredicate {
    pub category: Option<String>,
    pub area: Option<String>,
    pub owner: Option<String>,
    /// Matched against the classified status, after thresholds are applied.
    pub status: Option<Status>,
    /// Case-insensitive substring, matched against `search_fields`.
    pub search_text: Option<String>,
    pub search_fields: Vec<SearchField>,
}

impl Default for QueryPredicate {
    fn default() -> Self {
        Self {
            category: None,
            area: None,
            owner: None,
            status: None,
            search_text: None,
            search_fields: vec![SearchField::Area, SearchField::Category, SearchField::Note],
        }
    }
}

impl QueryPredicate {
    fn matches_record(&self, record: &Record) -> bool {
        matches_equality(&self.category, &record.category)
            && matches_equality(&self.area, &record.area)
            && matches_equality(&self.owner, &record.owner)
            && self.matches_search(record)
    }

    fn matches_search(&self, record: &Record) -> bool {
        let needle = match &self.search_text {
            Some(text) if !text.is_empty() => text.to_lowercase(),
            _ => return true,
        };
        self.search_fields
            .iter()
            .any(|field| field.value(record).to_lowercase().contains(&needle))
    }

    fn matches_status(&self, status: Status) -> bool {
        self.status.map_or(true, |wanted| wanted == status)
    }
}

/// `None` and `""` both read as the "All" dropdown selection.
fn matches_equality(constraint: &Option<String>, value: &str) -> bool {
    match constraint {
        Some(wanted) if !wanted.is_empty() => wanted == value,
        _ => true,
    }
}

/// Filter records by the predicate and classify the survivors.
///
/// The view is a subsequence of the input in original order. Classification
/// happens on read, per record, so an edited record can never surface a
/// cached stale status here.
pub fn query(
    records: &[Record],
    predicate: &QueryPredicate,
    thresholds: Thresholds,
) -> Vec<ClassifiedRecord> {
    records
        .iter()
        .filter(|r| predicate.matches_record(r))
        .map(|r| classify(r, thresholds))
        .filter(|c| predicate.matches_status(c.status))
        .collect()
}
