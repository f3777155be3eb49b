//! Trend direction evaluation.
//!
//! The boardroom views show a simple arrow per KPI, nothing more: an
//! explicit delta wins, otherwise the last two history points are compared,
//! otherwise the trend is flat. No smoothing, no regression.

use crate::record::{Record, TrendDirection};

/// Reduce a record's trend inputs to a direction.
pub fn trend(record: &Record) -> TrendDirection {
    if let Some(delta) = record.trend_delta {
        return direction_of(delta);
    }
    if let Some(history) = &record.trend_history {
        if history.len() >= 2 {
            return direction_of(history[history.len() - 1] - history[history.len() - 2]);
        }
    }
    TrendDirection::Flat
}

fn direction_of(delta: f64) -> TrendDirection {
    if delta > 0.0 {
        TrendDirection::Up
    } else if delta < 0.0 {
        TrendDirection::Down
    } else {
        TrendDirection::Flat
    }
}
