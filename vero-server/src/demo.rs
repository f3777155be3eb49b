//! Built-in demo dataset.
//!
//! Substituted when the records CSV cannot be loaded, so the digest always
//! has something to show. The numbers sketch a mid-table club with a
//! coaching gap and a sponsorship shortfall worth talking about.

use chrono::{DateTime, Duration, Utc};

use vero_kpi::Record;

/// A boardroom dataset across the club's departments. Audit dates hang off
/// `now` so staleness detection behaves the same on any day.
pub fn demo_records(now: DateTime<Utc>) -> Vec<Record> {
    vec![
        Record {
            category: "Finance".into(),
            area: "Budget Adherence".into(),
            required: 100.0,
            actual: 94.0,
            trend_delta: Some(2.0),
            last_update: now - Duration::days(3),
            owner: "CFO".into(),
            note: "Q2 forecast holding".into(),
            ..Record::default()
        },
        Record {
            category: "Finance".into(),
            area: "Sponsorship Revenue".into(),
            required: 100.0,
            actual: 58.0,
            trend_history: Some(vec![52.0, 55.0, 58.0]),
            last_update: now - Duration::days(9),
            owner: "Commercial Director".into(),
            note: "two renewals pending".into(),
            ..Record::default()
        },
        Record {
            category: "Finance".into(),
            area: "Cost Per Win".into(),
            required: 4000.0,
            actual: 4200.0,
            invert: true,
            trend_history: Some(vec![4350.0, 4280.0, 4200.0]),
            last_update: now - Duration::days(1),
            owner: "CFO".into(),
            ..Record::default()
        },
        Record {
            category: "Coaching".into(),
            area: "Licensed Coaches".into(),
            required: 12.0,
            actual: 7.0,
            trend_delta: Some(-1.0),
            last_update: now - Duration::days(21),
            owner: "Sporting Director".into(),
            note: "two senior roles open".into(),
            ..Record::default()
        },
        Record {
            category: "Coaching".into(),
            area: "Video Analysis Hours".into(),
            required: 20.0,
            actual: 17.0,
            last_update: now - Duration::days(4),
            owner: "Head Coach".into(),
            ..Record::default()
        },
        Record {
            category: "Youth Development".into(),
            area: "U18 Court Hours".into(),
            required: 40.0,
            actual: 30.0,
            trend_history: Some(vec![28.0, 30.0]),
            last_update: now - Duration::days(6),
            owner: "Academy Lead".into(),
            ..Record::default()
        },
        Record {
            category: "Youth Development".into(),
            area: "First-Team Debuts".into(),
            required: 3.0,
            actual: 4.0,
            trend_delta: Some(1.0),
            last_update: now - Duration::days(12),
            owner: "Academy Lead".into(),
            note: "ahead of season plan".into(),
            ..Record::default()
        },
        Record {
            category: "Facilities".into(),
            area: "Practice Courts".into(),
            required: 6.0,
            actual: 5.0,
            last_update: now - Duration::days(2),
            owner: "Operations".into(),
            ..Record::default()
        },
        Record {
            category: "Medical".into(),
            area: "Injury Days".into(),
            required: 60.0,
            actual: 45.0,
            invert: true,
            trend_delta: Some(-5.0),
            last_update: now - Duration::days(2),
            owner: "Head Physio".into(),
            ..Record::default()
        },
        Record {
            category: "Commercial".into(),
            area: "Season Tickets".into(),
            required: 5000.0,
            actual: 4650.0,
            trend_history: Some(vec![4400.0, 4520.0, 4650.0]),
            last_update: now - Duration::days(16),
            owner: "Commercial Director".into(),
            note: "renewal window closes soon".into(),
            ..Record::default()
        },
    ]
}
