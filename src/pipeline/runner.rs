//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of stages.
//! Calling [`Pipeline::run`] executes them in order, threading artifacts
//! between stages and notifying a [`PipelineObserver`] at each boundary.
//!
//! # Stages
//!
//! 1. Normalize every record's text into tokens
//! 2. Aggregate token counts per speaker, culture and globally
//! 3. Score sentiment per speaker and average per culture
//! 4. Build the comparative report
//!
//! Normalization and scoring are independent per record and run on the
//! rayon pool; aggregation folds in record order, so results do not depend
//! on scheduling.

use crate::corpus::Corpus;
use crate::errors::{AnalysisError, Result};
use crate::frequency::aggregate_tokens;
use crate::pipeline::artifacts::{AnalysisOutput, TokenizedCorpus};
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_AGGREGATE,
    STAGE_NORMALIZE, STAGE_REPORT, STAGE_SCORE,
};
use crate::pipeline::traits::{AlphabeticNormalizer, Normalizer};
use crate::report::report;
use crate::sentiment::{score_corpus, LexiconScorer, SentimentScorer};
use crate::types::AnalysisConfig;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Emit a debug event summarizing a finished stage.
macro_rules! trace_report {
    ($name:expr, $report:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            stage = $name,
            elapsed_us = $report.elapsed().as_micros() as u64,
            records = ?$report.records(),
            tokens = ?$report.tokens(),
            groups = ?$report.groups(),
            "stage finished"
        );
    };
}

// ============================================================================
// Pipeline: statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `N`   | [`Normalizer`] | [`AlphabeticNormalizer`] |
/// | `S`   | [`SentimentScorer`] | [`LexiconScorer`] |
#[derive(Debug, Clone)]
pub struct Pipeline<N, S> {
    pub normalizer: N,
    pub scorer: S,
}

/// Type alias for the default pipeline.
pub type StandardPipeline = Pipeline<AlphabeticNormalizer, LexiconScorer>;

impl StandardPipeline {
    /// Alphabetic normalizer and the built-in lexicon scorer.
    pub fn standard() -> Self {
        Pipeline {
            normalizer: AlphabeticNormalizer,
            scorer: LexiconScorer::new(),
        }
    }
}

impl Default for StandardPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Pipeline::run: execute stages in order
// ============================================================================

impl<N, S> Pipeline<N, S>
where
    N: Normalizer,
    S: SentimentScorer,
{
    /// Execute the pipeline over `corpus`.
    ///
    /// Fails before any work is done if `cfg.top_n` is 0.
    pub fn run(
        &self,
        corpus: &Corpus,
        cfg: &AnalysisConfig,
        observer: &mut impl PipelineObserver,
    ) -> Result<AnalysisOutput> {
        if cfg.top_n == 0 {
            return Err(AnalysisError::InvalidTopN(cfg.top_n));
        }

        // Stage 1: Normalize
        trace_stage!(STAGE_NORMALIZE);
        observer.on_stage_start(STAGE_NORMALIZE);
        let clock = StageClock::start();
        let tokens = TokenizedCorpus::from_records(corpus.records(), &self.normalizer, &cfg.stopwords);
        let stage = StageReportBuilder::new(clock.elapsed())
            .records(tokens.len())
            .tokens(tokens.num_tokens())
            .build();
        trace_report!(STAGE_NORMALIZE, stage);
        observer.on_stage_end(STAGE_NORMALIZE, &stage);
        observer.on_tokens(&tokens);

        // Stage 2: Aggregate
        trace_stage!(STAGE_AGGREGATE);
        observer.on_stage_start(STAGE_AGGREGATE);
        let clock = StageClock::start();
        let frequencies = aggregate_tokens(&tokens)?;
        let stage = StageReportBuilder::new(clock.elapsed())
            .tokens(frequencies.global.len())
            .groups(frequencies.per_culture.len())
            .build();
        trace_report!(STAGE_AGGREGATE, stage);
        observer.on_stage_end(STAGE_AGGREGATE, &stage);
        observer.on_frequencies(&frequencies);

        // Stage 3: Score
        trace_stage!(STAGE_SCORE);
        observer.on_stage_start(STAGE_SCORE);
        let clock = StageClock::start();
        let sentiment = score_corpus(corpus, &self.scorer);
        let stage = StageReportBuilder::new(clock.elapsed())
            .records(sentiment.per_speaker.len())
            .groups(sentiment.per_culture.len())
            .build();
        trace_report!(STAGE_SCORE, stage);
        observer.on_stage_end(STAGE_SCORE, &stage);
        observer.on_sentiment(&sentiment);

        // Stage 4: Report
        trace_stage!(STAGE_REPORT);
        observer.on_stage_start(STAGE_REPORT);
        let clock = StageClock::start();
        let comparative =
            report(&frequencies.per_culture, &sentiment, cfg.top_n)?.with_global(&frequencies.global);
        let stage = StageReport::new(clock.elapsed());
        trace_report!(STAGE_REPORT, stage);
        observer.on_stage_end(STAGE_REPORT, &stage);
        observer.on_report(&comparative);

        Ok(AnalysisOutput {
            tokens,
            frequencies,
            sentiment,
            report: comparative,
        })
    }
}

// ============================================================================
// PipelineBuilder: fluent construction with custom stages
// ============================================================================

/// Fluent builder for a [`Pipeline`] with custom stages.
///
/// Starts from the standard stages and allows overriding each one.
///
/// ```
/// # use culture_lexicon::pipeline::runner::PipelineBuilder;
/// # use culture_lexicon::pipeline::traits::MinLengthNormalizer;
/// # use culture_lexicon::SentimentScore;
/// let pipeline = PipelineBuilder::new()
///     .normalizer(MinLengthNormalizer { min_len: 3 })
///     .scorer(|_: &str| SentimentScore::neutral())
///     .build();
/// ```
pub struct PipelineBuilder<N = AlphabeticNormalizer, S = LexiconScorer> {
    normalizer: N,
    scorer: S,
}

impl PipelineBuilder {
    /// Start building from the standard stages.
    pub fn new() -> Self {
        PipelineBuilder {
            normalizer: AlphabeticNormalizer,
            scorer: LexiconScorer::new(),
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, S> PipelineBuilder<N, S> {
    /// Override the normalizer stage.
    pub fn normalizer<N2: Normalizer>(self, normalizer: N2) -> PipelineBuilder<N2, S> {
        PipelineBuilder {
            normalizer,
            scorer: self.scorer,
        }
    }

    /// Override the sentiment scorer.
    pub fn scorer<S2: SentimentScorer>(self, scorer: S2) -> PipelineBuilder<N, S2> {
        PipelineBuilder {
            normalizer: self.normalizer,
            scorer,
        }
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<N, S> {
        Pipeline {
            normalizer: self.normalizer,
            scorer: self.scorer,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
