//! Centralized threshold conventions for KPI classification.
//!
//! The source dashboards disagree on band cutoffs (80/60 for 0-100 scored
//! metrics, 100/70 for coverage metrics, per-metric custom bands elsewhere),
//! so thresholds are always a parameter of `classify` — nothing in this
//! workspace hard-codes one convention. The named constants below cover the
//! two schemes every boardroom view uses.

use serde::Serialize;

/// Classification band cutoffs, in ratio-percent points.
///
/// `ratio >= ok_at` is `Ok`, `ratio >= warn_at` is `Warning`, anything
/// below is `Critical`. Boundaries are inclusive into the better band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    pub ok_at: i64,
    pub warn_at: i64,
}

impl Thresholds {
    /// Convention for 0-100 scored metrics (readiness scores, audit grades).
    pub const SCORED: Thresholds = Thresholds {
        ok_at: 80,
        warn_at: 60,
    };

    /// Convention for required/actual coverage metrics (staffing, court
    /// hours, license counts): full coverage is the bar.
    pub const COVERAGE: Thresholds = Thresholds {
        ok_at: 100,
        warn_at: 70,
    };

    pub fn new(ok_at: i64, warn_at: i64) -> Self {
        Self { ok_at, warn_at }
    }
}

/// Days without an audit before an operations dashboard flags a record.
pub const STALE_DAYS_OPERATIONS: i64 = 5;

/// Days without an audit before a board pack flags a record.
pub const STALE_DAYS_BOARD: i64 = 14;
