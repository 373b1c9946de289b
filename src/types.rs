//! Core data types shared across the analysis stages.

use serde::{Deserialize, Serialize};

use crate::nlp::stopwords::StopwordFilter;

/// Default number of keywords kept per culture group.
pub const DEFAULT_TOP_N: usize = 20;

/// One delegate's attributed text.
///
/// `culture` is an opaque grouping key: it is compared verbatim and never
/// split into region/category parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub speaker: String,
    pub culture: String,
    pub text: String,
}

impl Record {
    pub fn new(
        speaker: impl Into<String>,
        culture: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            speaker: speaker.into(),
            culture: culture.into(),
            text: text.into(),
        }
    }
}

/// Loader-facing record shape with every field optional.
///
/// Converted into [`Record`]s by [`crate::corpus::Corpus::from_raw`], which
/// rejects missing fields instead of coercing them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default, alias = "name")]
    pub speaker: Option<String>,
    #[serde(default)]
    pub culture: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Polarity in `[-1, 1]` and subjectivity in `[0, 1]`.
///
/// Group-level scores of an empty group are NaN in both fields; use
/// [`SentimentScore::is_defined`] before plotting or comparing them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentScore {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
        }
    }

    /// Score of text with no sentiment signal.
    pub fn neutral() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Score of a group with no members.
    pub fn undefined() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    /// Returns `false` if either component is NaN.
    pub fn is_defined(&self) -> bool {
        !self.polarity.is_nan() && !self.subjectivity.is_nan()
    }
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Configuration accepted by the analysis core.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Words excluded from every frequency table
    pub stopwords: StopwordFilter,
    /// Number of keywords reported per culture group
    pub top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stopwords: StopwordFilter::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AnalysisConfig {
    /// Set the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Set the number of keywords per group
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_accepts_name_alias() {
        let raw: RawRecord = serde_json::from_str(
            r#"{ "name": "Fatima", "culture": "Egypt: Middle Eastern", "text": "Peace" }"#,
        )
        .unwrap();
        assert_eq!(raw.speaker.as_deref(), Some("Fatima"));
        assert_eq!(raw.culture.as_deref(), Some("Egypt: Middle Eastern"));
    }

    #[test]
    fn test_raw_record_missing_fields_are_none() {
        let raw: RawRecord = serde_json::from_str(r#"{ "speaker": "Chen" }"#).unwrap();
        assert!(raw.culture.is_none());
        assert!(raw.text.is_none());
    }

    #[test]
    fn test_undefined_score_is_not_defined() {
        assert!(!SentimentScore::undefined().is_defined());
        assert!(SentimentScore::neutral().is_defined());
        assert_eq!(SentimentScore::default(), SentimentScore::new(0.0, 0.0));
    }

    #[test]
    fn test_config_defaults() {
        let cfg = AnalysisConfig::default();
        assert_eq!(cfg.top_n, DEFAULT_TOP_N);
        assert!(cfg.stopwords.is_stopword("the"));

        let cfg = cfg.with_top_n(5);
        assert_eq!(cfg.top_n, 5);
    }
}
