//! CSV record ingestion.
//!
//! Two schemas feed the engine:
//! - the full boardroom schema
//!   `category,area,required,actual,invert,trend_delta,owner,note,last_update`
//! - the minimal `resource,planned,actual` schema some dashboards upload,
//!   adapter-renamed into canonical records here.
//!
//! This is the one boundary where bad data fails fast: malformed numerics
//! and negative targets are errors with line numbers. Everything past this
//! boundary is forgiving.

use std::io::Read;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

use vero_kpi::Record;

use crate::error::{EngineError, EngineResult};

/// Raw row of the full boardroom schema. Only `category`, `area`,
/// `required` and `actual` are mandatory columns.
#[derive(Debug, Clone, Deserialize)]
struct RecordRow {
    category: String,
    area: String,
    required: f64,
    actual: f64,
    #[serde(default, deserialize_with = "deserialize_bool")]
    invert: bool,
    #[serde(default)]
    trend_delta: Option<f64>,
    #[serde(default)]
    owner: String,
    #[serde(default)]
    note: String,
    #[serde(default)]
    last_update: String,
}

/// Raw row of the minimal upload schema.
#[derive(Debug, Clone, Deserialize)]
struct ResourcePlanRow {
    resource: String,
    planned: f64,
    actual: f64,
}

/// Load full-schema records from a CSV reader.
///
/// `now` fills `last_update` for rows that omit it, keeping the function
/// pure; the binary passes `Utc::now()` at its boundary.
pub fn load_records<R: Read>(reader: R, now: DateTime<Utc>) -> EngineResult<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, result) in csv_reader.deserialize().enumerate() {
        let line = idx + 2; // header is line 1
        let row: RecordRow = result.map_err(|e| EngineError::Csv {
            line,
            message: e.to_string(),
        })?;
        records.push(row_to_record(row, line, now)?);
    }

    log::info!("loaded {} records from CSV", records.len());
    Ok(records)
}

/// Load the minimal `resource,planned,actual` schema, placing every row
/// under `category`.
pub fn load_resource_plan<R: Read>(
    reader: R,
    category: &str,
    now: DateTime<Utc>,
) -> EngineResult<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, result) in csv_reader.deserialize().enumerate() {
        let line = idx + 2;
        let row: ResourcePlanRow = result.map_err(|e| EngineError::Csv {
            line,
            message: e.to_string(),
        })?;
        validate_required(row.planned, line)?;
        records.push(Record {
            category: category.to_string(),
            area: row.resource,
            required: row.planned,
            actual: row.actual,
            last_update: now,
            ..Record::default()
        });
    }

    log::info!(
        "loaded {} resource-plan rows into category '{}'",
        records.len(),
        category
    );
    Ok(records)
}

fn row_to_record(row: RecordRow, line: usize, now: DateTime<Utc>) -> EngineResult<Record> {
    validate_required(row.required, line)?;
    let last_update = if row.last_update.is_empty() {
        now
    } else {
        parse_timestamp(&row.last_update).ok_or_else(|| EngineError::InvalidRecord {
            line,
            reason: format!("unparseable last_update '{}'", row.last_update),
        })?
    };

    Ok(Record {
        category: row.category,
        area: row.area,
        required: row.required,
        actual: row.actual,
        invert: row.invert,
        trend_history: None,
        trend_delta: row.trend_delta,
        last_update,
        owner: row.owner,
        note: row.note,
    })
}

fn validate_required(required: f64, line: usize) -> EngineResult<()> {
    if required < 0.0 {
        return Err(EngineError::InvalidRecord {
            line,
            reason: format!("negative required value {}", required),
        });
    }
    Ok(())
}

/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates (read as
/// midnight UTC).
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

/// Flexible bool parser: handles "true"/"false", "1"/"0", "yes"/"no" and
/// blank cells.
fn deserialize_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.to_lowercase().trim() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected bool value, got '{}'",
            other
        ))),
    }
}
