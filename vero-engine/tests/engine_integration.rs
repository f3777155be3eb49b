use chrono::{DateTime, Duration, TimeZone, Utc};

use vero_engine::export::{default_columns, to_csv};
use vero_engine::heatmap::build_heatmap;
use vero_engine::query::{query, QueryPredicate};
use vero_engine::store::RecordStore;
use vero_engine::summary::{summarize, summarize_with_totals};
use vero_kpi::{Record, Status, Thresholds, TrendDirection};

// ---------------------------------------------------------------------------
// Test data fixtures
// ---------------------------------------------------------------------------

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 14, 9, 0, 0).unwrap()
}

/// A realistic boardroom dataset across club departments.
fn sample_records() -> Vec<Record> {
    vec![
        // Finance: on plan, trending up
        Record {
            category: "Finance".into(),
            area: "Budget Adherence".into(),
            required: 100.0,
            actual: 94.0,
            trend_delta: Some(2.0),
            last_update: fixed_now() - Duration::days(3),
            owner: "CFO".into(),
            note: "Q2 forecast holding".into(),
            ..Record::default()
        },
        // Finance: overspend on a lower-is-better metric
        Record {
            category: "Finance".into(),
            area: "Cost Per Win".into(),
            required: 4000.0,
            actual: 4200.0,
            invert: true,
            trend_history: Some(vec![4350.0, 4280.0, 4200.0]),
            last_update: fixed_now() - Duration::days(1),
            owner: "CFO".into(),
            ..Record::default()
        },
        // Coaching: badly understaffed
        Record {
            category: "Coaching".into(),
            area: "Licensed Coaches".into(),
            required: 12.0,
            actual: 7.0,
            trend_delta: Some(-1.0),
            last_update: fixed_now() - Duration::days(20),
            owner: "Sporting Director".into(),
            note: "two senior roles open".into(),
            ..Record::default()
        },
        // Youth: slightly short of the minutes target
        Record {
            category: "Youth Development".into(),
            area: "U18 Court Hours".into(),
            required: 40.0,
            actual: 30.0,
            trend_history: Some(vec![28.0, 30.0]),
            last_update: fixed_now() - Duration::days(6),
            owner: "Academy Lead".into(),
            ..Record::default()
        },
        // Medical: injury days, lower is better, well inside target
        Record {
            category: "Medical".into(),
            area: "Injury Days".into(),
            required: 60.0,
            actual: 45.0,
            invert: true,
            last_update: fixed_now() - Duration::days(2),
            owner: "Head Physio".into(),
            ..Record::default()
        },
    ]
}

// ---------------------------------------------------------------------------
// Store -> query -> summary, end to end
// ---------------------------------------------------------------------------

#[test]
fn full_view_classifies_every_record() {
    let store = RecordStore::from_records(sample_records());
    let view = query(
        store.records(),
        &QueryPredicate::default(),
        Thresholds::SCORED,
    );

    assert_eq!(view.len(), store.len());

    // Budget Adherence: 94% -> Ok under 80/60, trending up.
    let budget = &view[0];
    assert_eq!(budget.ratio_percent, Some(94));
    assert_eq!(budget.status, Status::Ok);
    assert_eq!(budget.trend, TrendDirection::Up);

    // Cost Per Win: round(100 * 4000/4200) = 95 -> Ok, trending down
    // (spend shrinking reads as a falling series).
    let cost = &view[1];
    assert_eq!(cost.ratio_percent, Some(95));
    assert_eq!(cost.status, Status::Ok);
    assert_eq!(cost.trend, TrendDirection::Down);

    // Licensed Coaches: round(100 * 7/12) = 58 -> Critical.
    let coaches = &view[2];
    assert_eq!(coaches.ratio_percent, Some(58));
    assert_eq!(coaches.status, Status::Critical);

    // Injury Days inverted: round(100 * 60/45) = 133 -> Ok.
    let injuries = &view[4];
    assert_eq!(injuries.ratio_percent, Some(133));
    assert_eq!(injuries.status, Status::Ok);
}

#[test]
fn readiness_scenario_matches_the_boardroom_numbers() {
    // The readiness dashboard scenario: two Finance records under 95/85.
    let records = vec![
        Record {
            category: "Finance".into(),
            area: "Budget".into(),
            required: 100.0,
            actual: 94.0,
            ..Record::default()
        },
        Record {
            category: "Finance".into(),
            area: "CostPerWin".into(),
            required: 4000.0,
            actual: 4200.0,
            invert: true,
            ..Record::default()
        },
    ];
    let view = query(
        &records,
        &QueryPredicate::default(),
        Thresholds::new(95, 85),
    );

    assert_eq!(view[0].ratio_percent, Some(94));
    assert_eq!(view[0].status, Status::Warning);
    assert_eq!(view[1].ratio_percent, Some(95));
    assert_eq!(view[1].status, Status::Ok);

    let summary = summarize(&view, 14, fixed_now());
    assert_eq!(summary.ok_count, 1);
    assert_eq!(summary.warning_count, 1);
    assert_eq!(summary.critical_count, 0);
    assert_eq!(summary.ready_percent, 50);
}

#[test]
fn summary_counts_are_consistent_for_any_filter() {
    let store = RecordStore::from_records(sample_records());
    let predicates = vec![
        QueryPredicate::default(),
        QueryPredicate {
            category: Some("Finance".into()),
            ..QueryPredicate::default()
        },
        QueryPredicate {
            search_text: Some("roles".into()),
            ..QueryPredicate::default()
        },
    ];
    for predicate in predicates {
        let view = query(store.records(), &predicate, Thresholds::SCORED);
        let summary = summarize(&view, 14, fixed_now());
        assert_eq!(
            summary.ok_count + summary.warning_count + summary.critical_count,
            view.len()
        );
    }
}

#[test]
fn most_critical_surfaces_the_coaching_gap() {
    let store = RecordStore::from_records(sample_records());
    let view = query(
        store.records(),
        &QueryPredicate::default(),
        Thresholds::SCORED,
    );
    let summary = summarize(&view, 14, fixed_now());
    let worst = summary.most_critical.expect("coaching gap should be critical");
    assert_eq!(worst.record.area, "Licensed Coaches");
}

#[test]
fn outdated_window_flags_the_stale_audit() {
    let store = RecordStore::from_records(sample_records());
    let view = query(
        store.records(),
        &QueryPredicate::default(),
        Thresholds::SCORED,
    );

    let board = summarize(&view, 14, fixed_now());
    assert_eq!(board.outdated.len(), 1);
    assert_eq!(board.outdated[0].record.area, "Licensed Coaches");

    let operations = summarize(&view, 5, fixed_now());
    let areas: Vec<&str> = operations
        .outdated
        .iter()
        .map(|c| c.record.area.as_str())
        .collect();
    assert_eq!(areas, vec!["Licensed Coaches", "U18 Court Hours"]);
}

#[test]
fn edits_are_visible_on_the_next_read() {
    let mut store = RecordStore::from_records(sample_records());

    // Coaching hires close the gap; the next view must see it.
    assert!(store.update("Coaching", "Licensed Coaches", |r| r.actual = 11.0));
    let view = query(
        store.records(),
        &QueryPredicate::default(),
        Thresholds::SCORED,
    );
    let coaches = view
        .iter()
        .find(|c| c.record.area == "Licensed Coaches")
        .unwrap();
    // round(100 * 11/12) = 92 -> Ok
    assert_eq!(coaches.ratio_percent, Some(92));
    assert_eq!(coaches.status, Status::Ok);

    // Deleting drops the record from every derived view.
    assert!(store.remove("Coaching", "Licensed Coaches"));
    let view = query(
        store.records(),
        &QueryPredicate::default(),
        Thresholds::SCORED,
    );
    assert!(view.iter().all(|c| c.record.area != "Licensed Coaches"));
    let heatmap = build_heatmap(store.records(), Thresholds::SCORED);
    assert!(!heatmap.categories.contains(&"Coaching".to_string()));
}

// ---------------------------------------------------------------------------
// Heatmap
// ---------------------------------------------------------------------------

#[test]
fn heatmap_covers_exactly_the_present_pairs() {
    let store = RecordStore::from_records(sample_records());
    let heatmap = build_heatmap(store.records(), Thresholds::SCORED);

    assert_eq!(heatmap.categories.len(), 4);
    assert_eq!(heatmap.areas.len(), 5);

    let mut occupied = 0;
    for (ci, category) in heatmap.categories.iter().enumerate() {
        for (ai, area) in heatmap.areas.iter().enumerate() {
            let cell = &heatmap.grid[ci][ai];
            let exists = store.get(category, area).is_some();
            assert_eq!(cell.classified.is_some(), exists);
            if exists {
                occupied += 1;
            }
        }
    }
    assert_eq!(occupied, store.len());
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[test]
fn filtered_view_exports_with_header_and_rows() {
    let store = RecordStore::from_records(sample_records());
    let predicate = QueryPredicate {
        category: Some("Finance".into()),
        ..QueryPredicate::default()
    };
    let view = query(store.records(), &predicate, Thresholds::SCORED);
    let columns = default_columns();
    let blob = to_csv(&view, &columns);

    let lines: Vec<&str> = blob.split('\n').collect();
    assert_eq!(lines.len(), view.len() + 1);
    assert_eq!(
        lines[0],
        columns
            .iter()
            .map(|c| c.header.as_str())
            .collect::<Vec<_>>()
            .join(",")
    );
    assert!(lines[1].starts_with("Finance,Budget Adherence,100,94,94,ok,up,CFO"));
}

// ---------------------------------------------------------------------------
// Totals
// ---------------------------------------------------------------------------

#[test]
fn homogeneous_view_totals_add_up() {
    // Court-hours style records sharing a unit.
    let records = vec![
        Record {
            category: "Facilities".into(),
            area: "Main Court".into(),
            required: 60.0,
            actual: 52.0,
            ..Record::default()
        },
        Record {
            category: "Facilities".into(),
            area: "Practice Court".into(),
            required: 40.0,
            actual: 38.0,
            ..Record::default()
        },
    ];
    let view = query(&records, &QueryPredicate::default(), Thresholds::COVERAGE);
    let summary = summarize_with_totals(&view, 14, fixed_now());
    let totals = summary.totals.unwrap();
    assert!((totals.total_required - 100.0).abs() < 0.01);
    assert!((totals.total_actual - 90.0).abs() < 0.01);
    assert_eq!(totals.overall_efficiency, Some(90));
}
