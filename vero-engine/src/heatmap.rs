//! Category × area heatmap aggregation.
//!
//! Builds the cross-tab grid the boardroom heatmap renders: one row per
//! category, one column per area, a classified cell where a record exists
//! and an empty cell where none does. Areas form a single global axis, not
//! a per-category one — a category with no record for some area simply
//! yields an empty cell.

use std::collections::HashMap;

use serde::Serialize;

use vero_kpi::{classify, ClassifiedRecord, Record, Thresholds};

/// One grid cell. `classified` is `None` when no record exists for the
/// `(category, area)` pair.
#[derive(Clone, Debug, Serialize)]
pub struct HeatmapCell {
    pub category: String,
    pub area: String,
    pub classified: Option<ClassifiedRecord>,
}

/// The full cross-tab: axis labels in first-seen order plus the grid,
/// indexed `grid[category_index][area_index]`.
#[derive(Clone, Debug, Serialize)]
pub struct Heatmap {
    pub categories: Vec<String>,
    pub areas: Vec<String>,
    pub grid: Vec<Vec<HeatmapCell>>,
}

/// Aggregate records into the heatmap grid.
///
/// One O(N) pass builds a lookup keyed by `(category, area)` — a duplicate
/// pair overwrites its predecessor, so the last record wins — then the
/// O(C×A) fill classifies each occupied cell. Axis order is first-seen
/// record order on both axes.
pub fn build_heatmap(records: &[Record], thresholds: Thresholds) -> Heatmap {
    let mut categories: Vec<String> = Vec::new();
    let mut areas: Vec<String> = Vec::new();
    let mut index: HashMap<(&str, &str), &Record> = HashMap::new();

    for record in records {
        if !categories.iter().any(|c| c == &record.category) {
            categories.push(record.category.clone());
        }
        if !areas.iter().any(|a| a == &record.area) {
            areas.push(record.area.clone());
        }
        index.insert((record.category.as_str(), record.area.as_str()), record);
    }

    let grid = categories
        .iter()
        .map(|category| {
            areas
                .iter()
                .map(|area| HeatmapCell {
                    category: category.clone(),
                    area: area.clone(),
                    classified: index
                        .get(&(category.as_str(), area.as_str()))
                        .map(|&record| classify(record, thresholds)),
                })
                .collect()
        })
        .collect();

    Heatmap {
        categories,
        areas,
        grid,
    }
}
