use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One boardroom KPI row: a planned/actual pair with metadata.
///
/// `(category, area)` identifies the metric — e.g. ("Finance", "Budget
/// Adherence") or ("Youth Development", "U18 Court Hours"). The pair is
/// expected to be unique within a store; the heatmap builder collapses
/// duplicates last-write-wins.
#[derive(Clone, Debug, Serialize)]
pub struct Record {
    /// Top-level grouping (department, unit).
    pub category: String,
    /// Sub-grouping within the category (specific KPI or resource).
    pub area: String,
    /// Target/baseline value. Must be non-negative; a zero here makes the
    /// ratio undefined for non-inverted metrics.
    pub required: f64,
    /// Observed/achieved value. Negatives are permitted and treated
    /// arithmetically.
    pub actual: f64,
    /// True when a lower `actual` is better (cost, turnover, injury days).
    pub invert: bool,
    /// Short value history, oldest to newest. Used by the trend evaluator
    /// when no explicit delta is present.
    pub trend_history: Option<Vec<f64>>,
    /// Explicit change since the previous period. Takes precedence over
    /// `trend_history`.
    pub trend_delta: Option<f64>,
    /// Timestamp of the last audit/edit, for staleness detection.
    pub last_update: DateTime<Utc>,
    /// Accountable person. Metadata only, never used in computation.
    pub owner: String,
    /// Free-form annotation. Metadata only.
    pub note: String,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            category: String::new(),
            area: String::new(),
            required: 0.0,
            actual: 0.0,
            invert: false,
            trend_history: None,
            trend_delta: None,
            last_update: DateTime::<Utc>::UNIX_EPOCH,
            owner: String::new(),
            note: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Derived types
// ---------------------------------------------------------------------------

/// Traffic-light classification band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Critical,
    Warning,
    Ok,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Critical => "critical",
            Status::Warning => "warning",
            Status::Ok => "ok",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which direction a KPI is heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Flat => "flat",
        }
    }

    /// Arrow glyph for table/terminal rendering.
    pub fn arrow(&self) -> &'static str {
        match self {
            TrendDirection::Up => "\u{2191}",
            TrendDirection::Down => "\u{2193}",
            TrendDirection::Flat => "\u{2192}",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.arrow(), self.as_str())
    }
}

/// A record plus its derived fields, produced by `classify`.
///
/// `ratio_percent` is `None` exactly when the ratio is undefined
/// (`required == 0` on a non-inverted metric); the status is `Warning`
/// in that case, never a crash.
#[derive(Clone, Debug, Serialize)]
pub struct ClassifiedRecord {
    pub record: Record,
    pub ratio_percent: Option<i64>,
    pub status: Status,
    pub trend: TrendDirection,
}
