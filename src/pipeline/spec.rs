//! Analysis specification types.
//!
//! An [`AnalysisSpec`] is the JSON form of the analysis configuration. It is
//! the input to the [`super::validation::ValidationEngine`] and, once valid,
//! is turned into an [`AnalysisConfig`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "stopwords": { "language": "en", "extra": ["conference"], "remove": [] },
//!   "top_n": 20,
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::validation::ValidationEngine;
use crate::errors::{AnalysisError, Result};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{AnalysisConfig, DEFAULT_TOP_N};

/// Spec version understood by this crate.
pub const SPEC_VERSION: u32 = 1;

/// Top-level analysis specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Stopword list selection.
    #[serde(default)]
    pub stopwords: StopwordSpec,

    /// Keywords reported per culture group; defaults to 20.
    #[serde(default)]
    pub top_n: Option<usize>,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Which stopwords to filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopwordSpec {
    /// Bundled list to start from (e.g. `"en"`); defaults to English.
    #[serde(default)]
    pub language: Option<String>,

    /// If `true`, start from an empty list instead of a bundled one.
    #[serde(default)]
    pub disabled: bool,

    /// Words added to the list.
    #[serde(default)]
    pub extra: Vec<String>,

    /// Words removed from the list.
    #[serde(default)]
    pub remove: Vec<String>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl StopwordSpec {
    /// Build the filter this spec describes.
    pub fn build(&self) -> StopwordFilter {
        let mut filter = if self.disabled {
            StopwordFilter::empty()
        } else {
            StopwordFilter::new(self.language.as_deref().unwrap_or("en"))
        };
        filter.add_stopwords(&self.extra);
        filter.remove_stopwords(&self.remove);
        filter
    }
}

impl Default for AnalysisSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            stopwords: StopwordSpec::default(),
            top_n: None,
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl AnalysisSpec {
    /// Parse a spec from JSON without validating it.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate with the default rules and build the configuration.
    ///
    /// Warnings are logged and tolerated; any error rejects the spec with
    /// the full report attached.
    pub fn into_config(self) -> Result<AnalysisConfig> {
        let report = ValidationEngine::with_defaults().validate(&self);
        if report.has_errors() {
            return Err(AnalysisError::InvalidSpec(report));
        }
        #[cfg(feature = "tracing")]
        for warning in report.warnings() {
            tracing::warn!(%warning, "analysis spec warning");
        }
        Ok(AnalysisConfig {
            stopwords: self.stopwords.build(),
            top_n: self.top_n.unwrap_or(DEFAULT_TOP_N),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_spec() {
        let spec = AnalysisSpec::from_json(r#"{ "v": 1 }"#).unwrap();
        assert_eq!(spec.v, 1);
        assert!(spec.top_n.is_none());
        assert!(!spec.strict);
        assert!(spec.stopwords.language.is_none());
    }

    #[test]
    fn test_deserialize_full_spec() {
        let spec = AnalysisSpec::from_json(
            r#"{
                "v": 1,
                "stopwords": { "language": "en", "extra": ["conference", "Role"], "remove": ["all"] },
                "top_n": 10,
                "strict": true
            }"#,
        )
        .unwrap();
        assert_eq!(spec.stopwords.language.as_deref(), Some("en"));
        assert_eq!(spec.stopwords.extra.len(), 2);
        assert_eq!(spec.top_n, Some(10));
        assert!(spec.strict);
    }

    #[test]
    fn test_unknown_fields_captured() {
        let spec = AnalysisSpec::from_json(
            r#"{ "v": 1, "bogus": 42, "stopwords": { "lang": "en" } }"#,
        )
        .unwrap();
        assert!(spec.unknown_fields.contains_key("bogus"));
        assert!(spec.stopwords.unknown_fields.contains_key("lang"));
    }

    #[test]
    fn test_stopword_spec_build() {
        let spec = StopwordSpec {
            extra: vec!["Conference".into()],
            remove: vec!["all".into()],
            ..Default::default()
        };
        let filter = spec.build();
        assert!(filter.is_stopword("conference"));
        assert!(filter.is_stopword("the"));
        assert!(!filter.is_stopword("all"));
    }

    #[test]
    fn test_disabled_stopwords() {
        let spec = StopwordSpec {
            disabled: true,
            extra: vec!["and".into()],
            ..Default::default()
        };
        let filter = spec.build();
        assert_eq!(filter.len(), 1);
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn test_into_config_defaults() {
        let cfg = AnalysisSpec::default().into_config().unwrap();
        assert_eq!(cfg.top_n, DEFAULT_TOP_N);
        assert!(cfg.stopwords.is_stopword("the"));
    }

    #[test]
    fn test_into_config_rejects_zero_top_n() {
        let spec = AnalysisSpec::from_json(r#"{ "v": 1, "top_n": 0 }"#).unwrap();
        match spec.into_config() {
            Err(AnalysisError::InvalidSpec(report)) => assert_eq!(report.errors().count(), 1),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_into_config_tolerates_warnings() {
        let spec = AnalysisSpec::from_json(r#"{ "v": 1, "top_n": 3, "colour": "blue" }"#).unwrap();
        assert_eq!(spec.into_config().unwrap().top_n, 3);
    }

    #[test]
    fn test_serde_roundtrip() {
        let spec = AnalysisSpec::from_json(r#"{"v":1,"top_n":5,"stopwords":{"language":"de"}}"#)
            .unwrap();
        let back = serde_json::to_value(&spec).unwrap();
        assert_eq!(back["top_n"], 5);
        assert_eq!(back["stopwords"]["language"], "de");
    }
}
