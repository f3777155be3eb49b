//! Core KPI classification math for CourtEvo Vero boardroom dashboards.
//!
//! Every club KPI is a planned/actual pair. This crate turns one pair into
//! a traffic-light verdict:
//! - A `Record` carries the pair plus metadata (owner, audit date, trend).
//! - `classify` derives an efficiency percentage and a three-way status
//!   against caller-supplied thresholds.
//! - `trend` reduces a short history (or explicit delta) to a direction.
//!
//! Everything here is a total, synchronous function over in-memory data —
//! no I/O, no suspension, no failure modes. Undefined ratios fail closed
//! to `Warning`; missing trend data reads as `Flat`.

pub mod classify;
pub mod record;
pub mod thresholds;
pub mod trend;

pub use classify::{classify, ratio_percent};
pub use record::{ClassifiedRecord, Record, Status, TrendDirection};
pub use thresholds::Thresholds;
pub use trend::trend;
