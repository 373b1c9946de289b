//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic: timing stages, capturing intermediate artifacts, emitting
//! structured telemetry.

use std::time::{Duration, Instant};

use crate::frequency::Frequencies;
use crate::pipeline::artifacts::TokenizedCorpus;
use crate::report::ComparativeReport;
use crate::sentiment::GroupSentiment;

pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_AGGREGATE: &str = "aggregate";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_REPORT: &str = "report";

/// Measures one stage's wall-clock time.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Summary of one finished stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    elapsed: Duration,
    records: Option<usize>,
    tokens: Option<usize>,
    groups: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Records processed, when the stage reports it
    pub fn records(&self) -> Option<usize> {
        self.records
    }

    /// Tokens produced or counted
    pub fn tokens(&self) -> Option<usize> {
        self.tokens
    }

    /// Culture groups produced
    pub fn groups(&self) -> Option<usize> {
        self.groups
    }
}

/// Fluent construction of a [`StageReport`] with optional counters.
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn records(mut self, n: usize) -> Self {
        self.report.records = Some(n);
        self
    }

    pub fn tokens(mut self, n: usize) -> Self {
        self.report.tokens = Some(n);
        self
    }

    pub fn groups(mut self, n: usize) -> Self {
        self.report.groups = Some(n);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Callbacks fired by [`super::runner::Pipeline::run`].
///
/// Every method has an empty default, so observers implement only what
/// they need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
    fn on_tokens(&mut self, _tokens: &TokenizedCorpus) {}
    fn on_frequencies(&mut self, _frequencies: &Frequencies) {}
    fn on_sentiment(&mut self, _sentiment: &GroupSentiment) {}
    fn on_report(&mut self, _report: &ComparativeReport) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records every stage's report in order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Sum of all stage durations
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
