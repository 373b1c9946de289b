//! Validation engine for analysis specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against an
//! [`AnalysisSpec`] and collects every diagnostic into a
//! [`ValidationReport`]; it never short-circuits on the first error, so
//! users see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use culture_lexicon::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::SpecError;
use super::spec::{AnalysisSpec, SPEC_VERSION};
use crate::nlp::stopwords::{StopwordFilter, SUPPORTED_LANGUAGES};

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding attached to a [`SpecError`].
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects an [`AnalysisSpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so one engine can be shared
/// across threads.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"top_n"`).
    fn name(&self) -> &str;

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against an [`AnalysisSpec`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(TopNRule));
        engine.add_rule(Box::new(StopwordLanguageRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `spec` and return the collected report.
    pub fn validate(&self, spec: &AnalysisSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Spec version must be understood ─────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint(format!("Set \"v\": {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. top_n must be positive when set ─────────────────────────────────────

struct TopNRule;

impl ValidationRule for TopNRule {
    fn name(&self) -> &str {
        "top_n"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        if spec.top_n != Some(0) {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(ErrorCode::InvalidValue, "/top_n", "top_n must be greater than 0")
                .with_hint("Remove top_n to use the default, or set it to a positive value"),
        )]
    }
}

// ─── 3. Stopword language must be bundled ───────────────────────────────────

struct StopwordLanguageRule;

impl ValidationRule for StopwordLanguageRule {
    fn name(&self) -> &str {
        "stopword_language"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        let Some(language) = spec.stopwords.language.as_deref() else {
            return vec![];
        };
        if StopwordFilter::is_supported(language) {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::InvalidValue,
                "/stopwords/language",
                format!("no stopword list for language \"{language}\""),
            )
            .with_hint(format!("Use one of: {}", SUPPORTED_LANGUAGES.join(", "))),
        )]
    }
}

// ─── 4. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from a `HashMap` of extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &std::collections::HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &spec.unknown_fields, spec.strict));
        out.extend(Self::check_unknowns(
            "/stopwords",
            &spec.stopwords.unknown_fields,
            spec.strict,
        ));
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: build an AnalysisSpec from JSON.
    fn spec(json: &str) -> AnalysisSpec {
        serde_json::from_str(json).unwrap()
    }

    fn engine() -> ValidationEngine {
        ValidationEngine::with_defaults()
    }

    // ─── Valid specs ────────────────────────────────────────────────────

    #[test]
    fn test_minimal_spec_is_valid() {
        let report = engine().validate(&spec(r#"{ "v": 1 }"#));
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_full_spec_is_valid() {
        let report = engine().validate(&spec(
            r#"{
                "v": 1,
                "stopwords": { "language": "fr", "extra": ["x"], "remove": ["y"] },
                "top_n": 15,
                "strict": true
            }"#,
        ));
        assert!(report.is_empty());
    }

    // ─── Rule: version ──────────────────────────────────────────────────

    #[test]
    fn test_unknown_version_fails() {
        let report = engine().validate(&spec(r#"{ "v": 2 }"#));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].code, ErrorCode::UnsupportedVersion);
        assert_eq!(errs[0].path, "/v");
    }

    // ─── Rule: top_n ────────────────────────────────────────────────────

    #[test]
    fn test_zero_top_n_fails() {
        let report = engine().validate(&spec(r#"{ "v": 1, "top_n": 0 }"#));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].code, ErrorCode::InvalidValue);
        assert_eq!(errs[0].path, "/top_n");
    }

    #[test]
    fn test_absent_top_n_is_fine() {
        let report = engine().validate(&spec(r#"{ "v": 1 }"#));
        assert!(report.is_valid());
    }

    // ─── Rule: stopword_language ────────────────────────────────────────

    #[test]
    fn test_unsupported_language_fails() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "stopwords": { "language": "tlh" } }"#,
        ));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path, "/stopwords/language");
        assert!(errs[0].hint.as_deref().unwrap().contains("en"));
    }

    // ─── Rule: unknown_fields (strict mode) ─────────────────────────────

    #[test]
    fn test_unknown_fields_non_strict_are_warnings() {
        let report = engine().validate(&spec(r#"{ "v": 1, "strict": false, "bogus": 42 }"#));
        assert!(report.is_valid());
        let warns: Vec<_> = report.warnings().collect();
        assert_eq!(warns.len(), 1);
        assert_eq!(warns[0].code, ErrorCode::UnknownField);
        assert_eq!(warns[0].path, "/bogus");
    }

    #[test]
    fn test_unknown_fields_strict_are_errors() {
        let report = engine().validate(&spec(r#"{ "v": 1, "strict": true, "bogus": 42 }"#));
        assert!(report.has_errors());
        assert_eq!(report.errors().count(), 1);
    }

    #[test]
    fn test_unknown_stopword_field_strict() {
        let report = engine().validate(&spec(
            r#"{ "v": 1, "strict": true, "stopwords": { "words": ["a"] } }"#,
        ));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path, "/stopwords/words");
    }

    #[test]
    fn test_unknown_fields_reported_in_sorted_order() {
        let report = engine().validate(&spec(r#"{ "v": 1, "zeta": 1, "alpha": 2 }"#));
        let paths: Vec<_> = report.warnings().map(|w| w.path.as_str()).collect();
        assert_eq!(paths, vec!["/alpha", "/zeta"]);
    }

    // ─── Report helpers ─────────────────────────────────────────────────

    #[test]
    fn test_multiple_rules_fire_independently() {
        let report = engine().validate(&spec(
            r#"{
                "v": 3,
                "strict": true,
                "bogus": true,
                "top_n": 0,
                "stopwords": { "language": "xx" }
            }"#,
        ));
        assert_eq!(report.errors().count(), 4);
        assert_eq!(report.len(), 4);
    }

    #[test]
    fn test_default_rule_names() {
        assert_eq!(
            engine().rule_names(),
            vec!["version", "top_n", "stopword_language", "unknown_fields"]
        );
    }

    // ─── Engine: custom rules ───────────────────────────────────────────

    #[test]
    fn test_custom_rule() {
        struct AlwaysWarnRule;
        impl ValidationRule for AlwaysWarnRule {
            fn name(&self) -> &str {
                "always_warn"
            }
            fn validate(&self, _spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
                vec![ValidationDiagnostic::warning(SpecError::new(
                    ErrorCode::ValidationFailed,
                    "",
                    "custom warning",
                ))]
            }
        }

        let mut eng = ValidationEngine::new();
        eng.add_rule(Box::new(AlwaysWarnRule));
        let report = eng.validate(&spec(r#"{ "v": 1 }"#));
        assert!(report.is_valid());
        assert_eq!(report.warnings().count(), 1);
    }

    // ─── Serialization ──────────────────────────────────────────────────

    #[test]
    fn test_report_serializes_to_json() {
        let report = engine().validate(&spec(r#"{ "v": 1, "top_n": 0 }"#));
        let json = serde_json::to_value(&report).unwrap();
        let diags = json["diagnostics"].as_array().unwrap();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0]["severity"], "error");
        assert_eq!(diags[0]["code"], "invalid_value");
    }
}
