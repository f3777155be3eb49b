//! Planned/actual classification.
//!
//! Maps one record's planned/actual pair to an efficiency percentage and a
//! traffic-light status. Total over all inputs: an undefined ratio
//! (`required == 0` on a non-inverted metric) fails closed to `Warning`
//! with no percentage, never a divide-by-zero.

use crate::record::{ClassifiedRecord, Record, Status};
use crate::thresholds::Thresholds;
use crate::trend::trend;

/// Guard for inverted metrics when `actual` is zero or negative: the
/// denominator is floored here so the ratio reads as "best possible"
/// rather than dividing by zero.
const EPSILON: f64 = 1e-9;

/// Cap on the rounded percent of inverted ratios. A near-zero `actual` on
/// a lower-is-better metric would otherwise report an absurd percentage.
const INVERTED_RATIO_CAP: i64 = 999;

/// Derived efficiency ratio in rounded percent points.
///
/// Non-inverted: `round(100 * actual / required)`, `None` when
/// `required == 0`. Inverted: `round(100 * required / actual)` with the
/// denominator floored at `EPSILON` and the result capped at
/// `INVERTED_RATIO_CAP`.
pub fn ratio_percent(record: &Record) -> Option<i64> {
    if record.invert {
        let raw = record.required / record.actual.max(EPSILON);
        Some(((raw * 100.0).round() as i64).min(INVERTED_RATIO_CAP))
    } else if record.required == 0.0 {
        None
    } else {
        Some((record.actual / record.required * 100.0).round() as i64)
    }
}

/// Classify a record against the given threshold convention.
///
/// Ties at a boundary land in the better band (`>=`, not `>`). Negative
/// ratios are permitted and simply classify as `Critical`; producers are
/// responsible for domain validity.
pub fn classify(record: &Record, thresholds: Thresholds) -> ClassifiedRecord {
    let ratio = ratio_percent(record);
    let status = match ratio {
        None => Status::Warning,
        Some(p) if p >= thresholds.ok_at => Status::Ok,
        Some(p) if p >= thresholds.warn_at => Status::Warning,
        Some(_) => Status::Critical,
    };

    ClassifiedRecord {
        ratio_percent: ratio,
        status,
        trend: trend(record),
        record: record.clone(),
    }
}
