//! Comparative lexical and sentiment analysis of speeches grouped by culture.
//!
//! Each [`Record`] is one speaker's text tagged with a culture label. The
//! pipeline normalizes every text into lowercase alphabetic tokens, drops
//! stopwords, counts tokens per speaker, per culture and globally, scores
//! sentiment per speaker and averages it per culture, then assembles a
//! [`ComparativeReport`] with each culture's top keywords and mean
//! sentiment.
//!
//! ```
//! use culture_lexicon::{analyze, AnalysisConfig, Record};
//!
//! let records = vec![
//!     Record::new("Amara", "Nigeria: West African", "Unity is strength, unity is hope."),
//!     Record::new("Lena", "Germany: Western", "We need fair and careful regulation."),
//! ];
//! let out = analyze(records, &AnalysisConfig::default().with_top_n(3)).unwrap();
//! let nigeria = out.report.group("Nigeria: West African").unwrap();
//! assert_eq!(nigeria.keywords[0].token, "unity");
//! assert!(out.report.group("Mars").is_err());
//! ```
//!
//! Configuration can also come from JSON through
//! [`pipeline::spec::AnalysisSpec`], which is validated before use.

pub mod corpus;
pub mod errors;
pub mod frequency;
pub mod nlp;
pub mod pipeline;
pub mod report;
pub mod sentiment;
pub mod types;

pub use corpus::Corpus;
pub use errors::{AnalysisError, Result};
pub use frequency::{Frequencies, FrequencyTable};
pub use nlp::stopwords::StopwordFilter;
pub use pipeline::artifacts::AnalysisOutput;
pub use pipeline::observer::{NoopObserver, PipelineObserver, StageTimingObserver};
pub use pipeline::runner::{Pipeline, PipelineBuilder, StandardPipeline};
pub use pipeline::spec::AnalysisSpec;
pub use report::{ComparativeReport, GroupReport, Keyword};
pub use sentiment::{GroupSentiment, LexiconScorer, SentimentScorer};
pub use types::{AnalysisConfig, RawRecord, Record, SentimentScore};

/// Run the standard pipeline over `records`.
///
/// Validates the records first (see [`Corpus::new`]), then normalizes,
/// aggregates, scores and reports with the built-in lexicon scorer.
pub fn analyze(records: Vec<Record>, cfg: &AnalysisConfig) -> Result<AnalysisOutput> {
    let corpus = Corpus::new(records)?;
    StandardPipeline::standard().run(&corpus, cfg, &mut NoopObserver)
}
