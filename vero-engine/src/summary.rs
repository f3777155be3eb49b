//! Board-level scalar KPIs over a (filtered) view.
//!
//! The summary feeds the KPI tiles at the top of every boardroom view:
//! traffic-light counts, a readiness percentage, the single most critical
//! record, and the list of records whose last audit is older than the
//! caller's staleness window. Totals are opt-in — they only make sense
//! when every record in the view shares a unit, which is the caller's
//! call to make.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use vero_kpi::{ClassifiedRecord, Status};

/// Planned/actual totals across a homogeneous view.
#[derive(Clone, Debug, Serialize)]
pub struct ViewTotals {
    pub total_required: f64,
    pub total_actual: f64,
    /// `round(100 * total_actual / total_required)`; `None` when the
    /// required total is zero.
    pub overall_efficiency: Option<i64>,
}

/// Scalar board KPIs derived from one view.
#[derive(Clone, Debug, Serialize)]
pub struct Summary {
    pub ok_count: usize,
    pub warning_count: usize,
    pub critical_count: usize,
    /// `round(100 * ok_count / total)`; zero for an empty view.
    pub ready_percent: i64,
    /// Lowest ratio among critical records, first-seen on ties. `None`
    /// when nothing is critical.
    pub most_critical: Option<ClassifiedRecord>,
    /// Records whose last audit is older than the staleness window.
    pub outdated: Vec<ClassifiedRecord>,
    /// Filled by `summarize_with_totals` only.
    pub totals: Option<ViewTotals>,
}

/// Summarize a view against a staleness window of `stale_days` days.
///
/// `now` is a parameter so the function stays pure; the binary passes
/// `Utc::now()` at its boundary. An empty view summarizes to zero counts
/// and `ready_percent = 0` — never a divide-by-zero.
pub fn summarize(view: &[ClassifiedRecord], stale_days: i64, now: DateTime<Utc>) -> Summary {
    let mut ok_count = 0;
    let mut warning_count = 0;
    let mut critical_count = 0;

    for classified in view {
        match classified.status {
            Status::Ok => ok_count += 1,
            Status::Warning => warning_count += 1,
            Status::Critical => critical_count += 1,
        }
    }

    let ready_percent = if view.is_empty() {
        0
    } else {
        (ok_count as f64 / view.len() as f64 * 100.0).round() as i64
    };

    // Strictly-less comparison keeps the first-seen record on ties.
    let mut most_critical: Option<&ClassifiedRecord> = None;
    for classified in view.iter().filter(|c| c.status == Status::Critical) {
        let ratio = classified.ratio_percent.unwrap_or(i64::MIN);
        let current_best = most_critical
            .map(|c| c.ratio_percent.unwrap_or(i64::MIN))
            .unwrap_or(i64::MAX);
        if ratio < current_best {
            most_critical = Some(classified);
        }
    }

    let stale_cutoff = Duration::days(stale_days);
    let outdated = view
        .iter()
        .filter(|c| now.signed_duration_since(c.record.last_update) > stale_cutoff)
        .cloned()
        .collect();

    Summary {
        ok_count,
        warning_count,
        critical_count,
        ready_percent,
        most_critical: most_critical.cloned(),
        outdated,
        totals: None,
    }
}

/// `summarize`, plus planned/actual totals.
///
/// Only request this for views whose records share a common unit.
pub fn summarize_with_totals(
    view: &[ClassifiedRecord],
    stale_days: i64,
    now: DateTime<Utc>,
) -> Summary {
    let total_required: f64 = view.iter().map(|c| c.record.required).sum();
    let total_actual: f64 = view.iter().map(|c| c.record.actual).sum();
    let overall_efficiency = if total_required == 0.0 {
        None
    } else {
        Some((total_actual / total_required * 100.0).round() as i64)
    };

    Summary {
        totals: Some(ViewTotals {
            total_required,
            total_actual,
            overall_efficiency,
        }),
        ..summarize(view, stale_days, now)
    }
}
