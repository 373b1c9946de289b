//! Frequency aggregation
//!
//! Folds normalized token sequences into per-speaker, per-culture and global
//! [`FrequencyTable`]s. Speaker tables are built in parallel; the fold into
//! culture and global tables runs in record order, which makes the
//! first-occurrence order of every table reproducible.

use indexmap::IndexMap;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;

use super::table::FrequencyTable;
use crate::corpus::Corpus;
use crate::errors::{AnalysisError, Result};
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::artifacts::TokenizedCorpus;
use crate::pipeline::traits::AlphabeticNormalizer;

/// Token counts at three granularities.
///
/// Maps iterate in first-appearance order of their keys. A culture with no
/// records never appears in `per_culture`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Frequencies {
    pub per_speaker: IndexMap<String, FrequencyTable>,
    pub per_culture: IndexMap<String, FrequencyTable>,
    pub global: FrequencyTable,
}

impl Frequencies {
    /// Table of one culture group, if it has records.
    pub fn culture(&self, culture: &str) -> Option<&FrequencyTable> {
        self.per_culture.get(culture)
    }

    /// Table of one speaker.
    pub fn speaker(&self, speaker: &str) -> Option<&FrequencyTable> {
        self.per_speaker.get(speaker)
    }
}

/// Normalize a validated corpus with the default normalizer and fold the
/// results.
pub fn aggregate(corpus: &Corpus, stopwords: &StopwordFilter) -> Frequencies {
    let tokenized =
        TokenizedCorpus::from_records(corpus.records(), &AlphabeticNormalizer, stopwords);
    fold(&tokenized)
}

/// Fold an already-normalized corpus into fresh frequency tables.
///
/// A `TokenizedCorpus` can be assembled by hand, so speaker uniqueness is
/// checked here: a repeated speaker fails with `DuplicateSpeaker` instead of
/// replacing the earlier speaker's table.
pub fn aggregate_tokens(corpus: &TokenizedCorpus) -> Result<Frequencies> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for (index, record) in corpus.records().iter().enumerate() {
        if !seen.insert(record.speaker.as_str()) {
            return Err(AnalysisError::DuplicateSpeaker {
                index,
                speaker: record.speaker.clone(),
            });
        }
    }
    Ok(fold(corpus))
}

// Speakers must be unique.
fn fold(corpus: &TokenizedCorpus) -> Frequencies {
    let speaker_tables: Vec<FrequencyTable> = corpus
        .records()
        .par_iter()
        .map(|r| FrequencyTable::from_tokens(&r.tokens))
        .collect();

    let mut out = Frequencies::default();
    for (record, table) in corpus.records().iter().zip(speaker_tables) {
        out.per_culture
            .entry(record.culture.clone())
            .or_default()
            .merge(&table);
        out.global.merge(&table);
        out.per_speaker.insert(record.speaker.clone(), table);
    }
    out
}
