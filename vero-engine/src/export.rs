//! CSV serialization of a classified view.
//!
//! Columns are caller-defined: a header plus an accessor closure per
//! column, so each dashboard exports exactly the fields it renders. Field
//! values containing a comma, quote or line break are quoted per RFC 4180;
//! the original dashboards emitted raw text and silently produced
//! malformed rows for comma-bearing notes.

use chrono::NaiveDate;

use vero_kpi::ClassifiedRecord;

/// One export column: header text plus a value accessor.
pub struct ColumnSpec {
    pub header: String,
    pub accessor: Box<dyn Fn(&ClassifiedRecord) -> String>,
}

impl ColumnSpec {
    pub fn new<F>(header: &str, accessor: F) -> Self
    where
        F: Fn(&ClassifiedRecord) -> String + 'static,
    {
        Self {
            header: header.to_string(),
            accessor: Box::new(accessor),
        }
    }
}

/// Serialize a view: one header row, one row per record, rows joined
/// by `\n`. Deterministic for a given view and column set.
pub fn to_csv(view: &[ClassifiedRecord], columns: &[ColumnSpec]) -> String {
    let mut rows = Vec::with_capacity(view.len() + 1);
    rows.push(
        columns
            .iter()
            .map(|c| quote_field(&c.header))
            .collect::<Vec<_>>()
            .join(","),
    );
    for classified in view {
        rows.push(
            columns
                .iter()
                .map(|c| quote_field(&(c.accessor)(classified)))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    rows.join("\n")
}

/// The column set every boardroom export shares.
pub fn default_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("Category", |c| c.record.category.clone()),
        ColumnSpec::new("Area", |c| c.record.area.clone()),
        ColumnSpec::new("Required", |c| c.record.required.to_string()),
        ColumnSpec::new("Actual", |c| c.record.actual.to_string()),
        ColumnSpec::new("Ratio %", |c| {
            c.ratio_percent.map(|p| p.to_string()).unwrap_or_default()
        }),
        ColumnSpec::new("Status", |c| c.status.as_str().to_string()),
        ColumnSpec::new("Trend", |c| c.trend.as_str().to_string()),
        ColumnSpec::new("Owner", |c| c.record.owner.clone()),
        ColumnSpec::new("Last Update", |c| {
            c.record.last_update.date_naive().to_string()
        }),
        ColumnSpec::new("Note", |c| c.record.note.clone()),
    ]
}

/// Download filename convention: `<Product>_<Report>_<ISODate>.csv`.
pub fn csv_file_name(product: &str, report: &str, date: NaiveDate) -> String {
    format!("{}_{}_{}.csv", product, report, date.format("%Y-%m-%d"))
}

/// RFC 4180 quoting: wrap in quotes and double embedded quotes when the
/// field contains a comma, quote or line break; pass everything else
/// through untouched.
fn quote_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
