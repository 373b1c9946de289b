//! First-class pipeline artifacts.
//!
//! Each type is a typed intermediate result flowing between pipeline stages.
//! Every stage returns a fresh artifact; nothing is mutated after it has been
//! handed downstream.

use rayon::prelude::*;
use serde::Serialize;

use crate::frequency::Frequencies;
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::traits::Normalizer;
use crate::report::ComparativeReport;
use crate::sentiment::GroupSentiment;
use crate::types::Record;

/// One record's normalized token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenizedRecord {
    pub speaker: String,
    pub culture: String,
    pub tokens: Vec<String>,
}

/// Normalized token sequences for a whole corpus, in record order.
///
/// Produced by the normalize stage and consumed by the aggregate stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenizedCorpus {
    records: Vec<TokenizedRecord>,
}

impl TokenizedCorpus {
    /// Normalize every record independently (in parallel); output keeps
    /// record order.
    pub fn from_records<N: Normalizer>(
        records: &[Record],
        normalizer: &N,
        stopwords: &StopwordFilter,
    ) -> Self {
        let records = records
            .par_iter()
            .map(|r| TokenizedRecord {
                speaker: r.speaker.clone(),
                culture: r.culture.clone(),
                tokens: normalizer.normalize(&r.text, stopwords),
            })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[TokenizedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total tokens across all records
    pub fn num_tokens(&self) -> usize {
        self.records.iter().map(|r| r.tokens.len()).sum()
    }
}

impl FromIterator<TokenizedRecord> for TokenizedCorpus {
    fn from_iter<I: IntoIterator<Item = TokenizedRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutput {
    pub tokens: TokenizedCorpus,
    pub frequencies: Frequencies,
    pub sentiment: GroupSentiment,
    pub report: ComparativeReport,
}
