use std::env;
use std::fs::File;
use std::process;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use vero_engine::export::{csv_file_name, default_columns, to_csv};
use vero_engine::heatmap::{build_heatmap, Heatmap};
use vero_engine::loader::{load_records, load_resource_plan};
use vero_engine::query::{query, QueryPredicate};
use vero_engine::store::RecordStore;
use vero_engine::summary::{summarize, Summary};
use vero_kpi::thresholds::STALE_DAYS_BOARD;
use vero_kpi::{ClassifiedRecord, Record, Status, Thresholds};

mod demo;

const PRODUCT: &str = "CourtEvoVero";
const REPORT: &str = "Readiness";

// ---------------------------------------------------------------------------
// JSON output contract
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DigestJson {
    generated_at: String,
    /// "csv" or "demo-fallback" when the records file could not be read.
    source: String,
    thresholds: Thresholds,
    stale_days: i64,
    summary: Summary,
    records: Vec<ClassifiedRecord>,
    heatmap: Heatmap,
}

// ---------------------------------------------------------------------------
// Human-readable output
// ---------------------------------------------------------------------------

fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Critical => "!!",
        Status::Warning => "! ",
        Status::Ok => "  ",
    }
}

fn ratio_display(classified: &ClassifiedRecord) -> String {
    match classified.ratio_percent {
        Some(p) => format!("{}%", p),
        None => "n/a".into(),
    }
}

fn print_heatmap(heatmap: &Heatmap) {
    if heatmap.categories.is_empty() {
        return;
    }
    print!("  {:<20}", "");
    for area in &heatmap.areas {
        print!(" {:>10.10}", area);
    }
    println!();
    for (ci, category) in heatmap.categories.iter().enumerate() {
        print!("  {:<20.20}", category);
        for (ai, _) in heatmap.areas.iter().enumerate() {
            let code = match &heatmap.grid[ci][ai].classified {
                Some(cell) => match cell.status {
                    Status::Ok => "ok",
                    Status::Warning => "warn",
                    Status::Critical => "CRIT",
                },
                None => "\u{00b7}",
            };
            print!(" {:>10}", code);
        }
        println!();
    }
}

fn print_human(
    view: &[ClassifiedRecord],
    heatmap: &Heatmap,
    summary: &Summary,
    source: &str,
    now: DateTime<Utc>,
    load_ms: u128,
    compute_ms: u128,
) {
    println!();
    println!("  \u{2554}{:\u{2550}<62}\u{2557}", "");
    println!("  \u{2551}             COURTEVO VERO \u{2014} Boardroom KPI Digest             \u{2551}");
    println!("  \u{255a}{:\u{2550}<62}\u{255d}", "");
    println!();

    if source == "demo-fallback" {
        println!("  \u{26a0} records file unavailable \u{2014} showing the built-in demo dataset");
        println!();
    }

    println!(
        "  {} records in view  \u{00b7}  {} ok / {} warning / {} critical  \u{00b7}  {}% ready",
        view.len(),
        summary.ok_count,
        summary.warning_count,
        summary.critical_count,
        summary.ready_percent
    );
    println!();

    if view.is_empty() {
        println!("  Nothing matches the current filters.");
    } else {
        println!("  {:\u{2500}<64}", "");
        for classified in view {
            println!(
                "  {} {:<18.18} {:<24.24} {:>6}  {:<8} {}",
                status_icon(classified.status),
                classified.record.category,
                classified.record.area,
                ratio_display(classified),
                classified.status.as_str(),
                classified.trend.arrow(),
            );
        }
        println!("  {:\u{2500}<64}", "");
    }
    println!();

    print_heatmap(heatmap);
    println!();

    if let Some(worst) = &summary.most_critical {
        println!(
            "  Most critical: {} / {} at {} (owner: {})",
            worst.record.category,
            worst.record.area,
            ratio_display(worst),
            worst.record.owner
        );
    }

    if !summary.outdated.is_empty() {
        println!("  Outdated audits:");
        for stale in &summary.outdated {
            let age = now.signed_duration_since(stale.record.last_update).num_days();
            println!(
                "    - {} / {} last updated {} days ago",
                stale.record.category, stale.record.area, age
            );
        }
    }

    println!();
    println!(
        "  \u{23f1}  Records loaded in {}ms \u{00b7} Views computed in {}ms",
        load_ms, compute_ms
    );
    println!();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn usage() -> ! {
    eprintln!("Usage: vero-server <records.csv> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --category C       Only records in category C");
    eprintln!("  --owner O          Only records owned by O");
    eprintln!("  --search TEXT      Substring search over area/category/note");
    eprintln!("  --status S         Only records classified ok|warning|critical");
    eprintln!("  --thresholds OK,WARN   Band cutoffs in percent (default: 80,60)");
    eprintln!("  --stale-days N     Staleness window in days (default: 14)");
    eprintln!("  --resource-plan C  Read the minimal resource,planned,actual schema,");
    eprintln!("                     placing every row under category C");
    eprintln!("  --json             Output as JSON instead of formatted text");
    eprintln!("  --export [PATH]    Write the view as CSV (default name:");
    eprintln!("                     {}_{}_<date>.csv)", PRODUCT, REPORT);
    eprintln!();
    eprintln!("Example:");
    eprintln!("  vero-server fixtures/sample_records.csv");
    eprintln!("  vero-server fixtures/sample_records.csv --category Finance --json");
    process::exit(1);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage();
    }
    let csv_path = &args[1];

    let mut predicate = QueryPredicate::default();
    let mut thresholds = Thresholds::SCORED;
    let mut stale_days = STALE_DAYS_BOARD;
    let mut json_output = false;
    let mut export: Option<Option<String>> = None;
    let mut resource_plan: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--category" => {
                predicate.category = Some(take_value(&args, i));
                i += 2;
            }
            "--owner" => {
                predicate.owner = Some(take_value(&args, i));
                i += 2;
            }
            "--search" => {
                predicate.search_text = Some(take_value(&args, i));
                i += 2;
            }
            "--status" => {
                predicate.status = Some(parse_status(&take_value(&args, i)));
                i += 2;
            }
            "--thresholds" => {
                thresholds = parse_thresholds(&take_value(&args, i));
                i += 2;
            }
            "--stale-days" => {
                stale_days = take_value(&args, i).parse().unwrap_or_else(|_| {
                    eprintln!("Error: --stale-days requires a whole number of days");
                    process::exit(1);
                });
                i += 2;
            }
            "--resource-plan" => {
                resource_plan = Some(take_value(&args, i));
                i += 2;
            }
            "--json" => {
                json_output = true;
                i += 1;
            }
            "--export" => {
                // PATH is optional; the next flag-shaped argument is not a path.
                if i + 1 < args.len() && !args[i + 1].starts_with("--") {
                    export = Some(Some(args[i + 1].clone()));
                    i += 2;
                } else {
                    export = Some(None);
                    i += 1;
                }
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                usage();
            }
        }
    }

    let now = Utc::now();

    // Load records; a failed load substitutes the demo dataset so the
    // digest still renders, with a banner noting the substitution.
    let load_start = Instant::now();
    let loaded = File::open(csv_path)
        .map_err(vero_engine::EngineError::from)
        .and_then(|file| match &resource_plan {
            Some(category) => load_resource_plan(file, category, now),
            None => load_records(file, now),
        });
    let (records, source) = match loaded {
        Ok(records) if !records.is_empty() => (records, "csv"),
        Ok(_) => {
            log::warn!("'{}' contained no records, using demo dataset", csv_path);
            (demo::demo_records(now), "demo-fallback")
        }
        Err(e) => {
            log::warn!("failed to load '{}': {} \u{2014} using demo dataset", csv_path, e);
            (demo::demo_records(now), "demo-fallback")
        }
    };
    let load_ms = load_start.elapsed().as_millis();

    let compute_start = Instant::now();
    let store = RecordStore::from_records(records);
    let view = query(store.records(), &predicate, thresholds);
    let view_records: Vec<Record> = view.iter().map(|c| c.record.clone()).collect();
    let heatmap = build_heatmap(&view_records, thresholds);
    let summary = summarize(&view, stale_days, now);
    let compute_ms = compute_start.elapsed().as_millis();

    if json_output {
        let digest = DigestJson {
            generated_at: now.to_rfc3339(),
            source: source.to_string(),
            thresholds,
            stale_days,
            summary: summary.clone(),
            records: view.clone(),
            heatmap: heatmap.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&digest).unwrap());
    } else {
        print_human(&view, &heatmap, &summary, source, now, load_ms, compute_ms);
    }

    if let Some(path) = export {
        let file_name =
            path.unwrap_or_else(|| csv_file_name(PRODUCT, REPORT, now.date_naive()));
        let blob = to_csv(&view, &default_columns());
        if let Err(e) = std::fs::write(&file_name, blob) {
            eprintln!("Error writing export '{}': {}", file_name, e);
            process::exit(1);
        }
        println!("  Exported {} rows to {}", view.len(), file_name);
    }
}

fn take_value(args: &[String], i: usize) -> String {
    match args.get(i + 1) {
        Some(value) => value.clone(),
        None => {
            eprintln!("Error: {} requires a value", args[i]);
            process::exit(1);
        }
    }
}

fn parse_status(value: &str) -> Status {
    match value.to_lowercase().as_str() {
        "ok" => Status::Ok,
        "warning" => Status::Warning,
        "critical" => Status::Critical,
        other => {
            eprintln!("Error: unknown status '{}' (use ok|warning|critical)", other);
            process::exit(1);
        }
    }
}

fn parse_thresholds(value: &str) -> Thresholds {
    let parts: Vec<&str> = value.split(',').map(|s| s.trim()).collect();
    if parts.len() == 2 {
        if let (Ok(ok_at), Ok(warn_at)) = (parts[0].parse(), parts[1].parse()) {
            return Thresholds::new(ok_at, warn_at);
        }
    }
    eprintln!("Error: --thresholds expects OK,WARN (e.g. 80,60)");
    process::exit(1);
}
