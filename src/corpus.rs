//! Record store
//!
//! Holds the ordered, validated input records for one analysis run. The
//! store never cleans, relabels or deduplicates what the loader supplies;
//! malformed input is rejected with the index of the offending record.

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::errors::{AnalysisError, Result};
use crate::types::{RawRecord, Record};

/// Immutable, ordered record set with unique speakers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Corpus {
    records: Vec<Record>,
}

impl Corpus {
    /// Build a corpus from complete records, checking speaker uniqueness.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for (index, record) in records.iter().enumerate() {
            check_key(index, "speaker", &record.speaker)?;
            check_key(index, "culture", &record.culture)?;
            if !seen.insert(record.speaker.as_str()) {
                return Err(AnalysisError::DuplicateSpeaker {
                    index,
                    speaker: record.speaker.clone(),
                });
            }
        }
        Ok(Self { records })
    }

    /// Validate loader output, failing on the first record with a missing field.
    ///
    /// Empty text is accepted (it scores neutral); empty speaker or culture
    /// keys are treated as missing.
    pub fn from_raw(raw: Vec<RawRecord>) -> Result<Self> {
        let records = raw
            .into_iter()
            .enumerate()
            .map(|(index, r)| {
                let speaker = r.speaker.ok_or(AnalysisError::MissingField {
                    index,
                    field: "speaker",
                })?;
                let culture = r.culture.ok_or(AnalysisError::MissingField {
                    index,
                    field: "culture",
                })?;
                let text = r.text.ok_or(AnalysisError::MissingField {
                    index,
                    field: "text",
                })?;
                Ok(Record {
                    speaker,
                    culture,
                    text,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(records)
    }

    /// Parse a JSON array of raw records and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawRecord> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct culture labels in first-appearance order.
    pub fn cultures(&self) -> Vec<&str> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        self.records
            .iter()
            .map(|r| r.culture.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

fn check_key(index: usize, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(AnalysisError::MissingField { index, field })
    } else {
        Ok(())
    }
}
