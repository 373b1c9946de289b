//! Frequency statistics
//!
//! Token-count tables and the fold that builds them per speaker, per culture
//! group and globally.

pub mod aggregator;
pub mod table;

pub use aggregator::{aggregate, aggregate_tokens, Frequencies};
pub use table::FrequencyTable;
