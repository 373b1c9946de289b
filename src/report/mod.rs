//! Comparative reporting
//!
//! Combines frequency tables and group sentiment into the shapes the
//! rendering layer consumes: ranked keyword lists per culture group, word
//! cloud weights, and a culture-by-metric table.

pub mod comparative;
pub mod metrics;

pub use comparative::{report, ComparativeReport, GroupReport, Keyword};
pub use metrics::{Metric, MetricRow, MetricTable};
