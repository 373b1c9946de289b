//! Sentiment scoring
//!
//! Scoring a text is an injected capability: anything implementing
//! [`SentimentScorer`] (including plain closures) can be plugged into the
//! pipeline. This module owns the numeric contract around it, namely the
//! neutral score for blank text and the per-group mean.

pub mod lexicon;

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Serialize;

use crate::corpus::Corpus;
use crate::types::SentimentScore;

pub use lexicon::{LexiconEntry, LexiconScorer};

/// Computes polarity and subjectivity for one text.
///
/// Implementations should return values in `[-1, 1]` and `[0, 1]`;
/// [`score_text`] clamps whatever they return.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentScore;
}

impl<F> SentimentScorer for F
where
    F: Fn(&str) -> SentimentScore + Send + Sync,
{
    fn score(&self, text: &str) -> SentimentScore {
        self(text)
    }
}

/// Score `text`, returning the neutral score for empty or whitespace-only
/// input without consulting the scorer.
pub fn score_text<S: SentimentScorer + ?Sized>(scorer: &S, text: &str) -> SentimentScore {
    if text.trim().is_empty() {
        return SentimentScore::neutral();
    }
    let raw = scorer.score(text);
    SentimentScore::new(
        raw.polarity.clamp(-1.0, 1.0),
        raw.subjectivity.clamp(0.0, 1.0),
    )
}

/// Unweighted mean of polarity and of subjectivity.
///
/// An empty slice yields [`SentimentScore::undefined`] (NaN), never zero.
pub fn aggregate_group(scores: &[SentimentScore]) -> SentimentScore {
    if scores.is_empty() {
        return SentimentScore::undefined();
    }
    let n = scores.len() as f64;
    let polarity = scores.iter().map(|s| s.polarity).sum::<f64>() / n;
    let subjectivity = scores.iter().map(|s| s.subjectivity).sum::<f64>() / n;
    SentimentScore::new(polarity, subjectivity)
}

/// Per-speaker scores and their per-culture means.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupSentiment {
    pub per_speaker: IndexMap<String, SentimentScore>,
    pub per_culture: IndexMap<String, SentimentScore>,
    /// Number of scored speakers per culture
    pub members: IndexMap<String, usize>,
}

impl GroupSentiment {
    /// Mean score of a culture group, if it has records.
    pub fn culture(&self, culture: &str) -> Option<SentimentScore> {
        self.per_culture.get(culture).copied()
    }

    pub fn speaker(&self, speaker: &str) -> Option<SentimentScore> {
        self.per_speaker.get(speaker).copied()
    }

    /// Speakers scored for `culture` (0 if unknown)
    pub fn speaker_count(&self, culture: &str) -> usize {
        self.members.get(culture).copied().unwrap_or(0)
    }
}

/// Score every record (in parallel) and average the scores per culture.
///
/// Takes a validated [`Corpus`], so every speaker key is unique and each
/// record keeps its own entry in `per_speaker`.
pub fn score_corpus<S: SentimentScorer + ?Sized>(corpus: &Corpus, scorer: &S) -> GroupSentiment {
    let records = corpus.records();
    let scores: Vec<SentimentScore> = records
        .par_iter()
        .map(|r| score_text(scorer, &r.text))
        .collect();

    let mut members: IndexMap<&str, Vec<SentimentScore>> = IndexMap::new();
    let mut out = GroupSentiment::default();
    for (record, score) in records.iter().zip(scores) {
        members.entry(record.culture.as_str()).or_default().push(score);
        out.per_speaker.insert(record.speaker.clone(), score);
    }
    for (culture, scores) in members {
        out.members.insert(culture.to_string(), scores.len());
        out.per_culture
            .insert(culture.to_string(), aggregate_group(&scores));
    }
    out
}
