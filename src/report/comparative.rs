//! Per-group keyword ranking
//!
//! Selection is delegated to [`FrequencyTable::top_n`], so equal counts are
//! always ordered by first appearance across the group's records and never
//! by map iteration order.

use indexmap::IndexMap;
use serde::Serialize;

use super::metrics::{Metric, MetricRow, MetricTable};
use crate::errors::{AnalysisError, Result};
use crate::frequency::FrequencyTable;
use crate::sentiment::GroupSentiment;
use crate::types::SentimentScore;

/// One ranked keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyword {
    pub token: String,
    pub count: u64,
}

impl From<(String, u64)> for Keyword {
    fn from((token, count): (String, u64)) -> Self {
        Self { token, count }
    }
}

/// Report for one culture group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub culture: String,
    /// Top keywords by descending count
    pub keywords: Vec<Keyword>,
    /// Mean sentiment of the group's speakers; NaN when unknown
    pub sentiment: SentimentScore,
    pub speakers: usize,
    pub total_tokens: u64,
    pub distinct_tokens: usize,
}

impl GroupReport {
    fn build(
        culture: &str,
        table: &FrequencyTable,
        sentiment: SentimentScore,
        speakers: usize,
        top_n: usize,
    ) -> Self {
        Self {
            culture: culture.to_string(),
            keywords: table.top_n(top_n).into_iter().map(Keyword::from).collect(),
            sentiment,
            speakers,
            total_tokens: table.total(),
            distinct_tokens: table.len(),
        }
    }

    /// Keywords as `(token, count)` pairs.
    pub fn pairs(&self) -> Vec<(&str, u64)> {
        self.keywords
            .iter()
            .map(|k| (k.token.as_str(), k.count))
            .collect()
    }

    /// Word-cloud weights: each keyword's count relative to the most
    /// frequent one, in `(0, 1]`.
    pub fn cloud_weights(&self) -> Vec<(&str, f64)> {
        let max = self.keywords.iter().map(|k| k.count).max().unwrap_or(0);
        if max == 0 {
            return Vec::new();
        }
        self.keywords
            .iter()
            .map(|k| (k.token.as_str(), k.count as f64 / max as f64))
            .collect()
    }
}

/// Read-only comparative output handed to the rendering layer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComparativeReport {
    pub top_n: usize,
    /// Groups in first-appearance order of their culture label
    pub groups: IndexMap<String, GroupReport>,
    /// Top keywords of the global table, when it was supplied
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub global_keywords: Vec<Keyword>,
}

impl ComparativeReport {
    /// Report of one culture group.
    pub fn group(&self, culture: &str) -> Result<&GroupReport> {
        self.groups
            .get(culture)
            .ok_or_else(|| AnalysisError::GroupNotFound(culture.to_string()))
    }

    pub fn cultures(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Attach the global top-N list.
    pub fn with_global(mut self, global: &FrequencyTable) -> Self {
        self.global_keywords = global
            .top_n(self.top_n)
            .into_iter()
            .map(Keyword::from)
            .collect();
        self
    }

    /// Culture-by-metric table, one row per group.
    pub fn metric_table(&self) -> MetricTable {
        let rows = self
            .groups
            .values()
            .map(|g| MetricRow {
                culture: g.culture.clone(),
                values: vec![
                    g.sentiment.polarity,
                    g.sentiment.subjectivity,
                    g.speakers as f64,
                    g.total_tokens as f64,
                    g.distinct_tokens as f64,
                ],
            })
            .collect();
        MetricTable {
            columns: Metric::ALL.to_vec(),
            rows,
        }
    }

    /// Serialize for the rendering boundary. Undefined sentiment becomes `null`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the comparative report.
///
/// `top_n` must be positive. A group missing from `group_sentiment` gets an
/// undefined (NaN) score rather than a fabricated neutral one.
pub fn report(
    per_culture: &IndexMap<String, FrequencyTable>,
    group_sentiment: &GroupSentiment,
    top_n: usize,
) -> Result<ComparativeReport> {
    if top_n == 0 {
        return Err(AnalysisError::InvalidTopN(top_n));
    }

    let groups = per_culture
        .iter()
        .map(|(culture, table)| {
            let sentiment = group_sentiment
                .culture(culture)
                .unwrap_or_else(SentimentScore::undefined);
            let n = group_sentiment.speaker_count(culture);
            (
                culture.clone(),
                GroupReport::build(culture, table, sentiment, n, top_n),
            )
        })
        .collect();

    Ok(ComparativeReport {
        top_n,
        groups,
        global_keywords: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::frequency::aggregate;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::sentiment::score_corpus;
    use crate::types::Record;

    fn scenario() -> (IndexMap<String, FrequencyTable>, GroupSentiment, FrequencyTable) {
        let records = Corpus::new(vec![
            Record::new("A", "X", "Peace and justice. Justice for all."),
            Record::new("B", "Y", "Justice and peace for peace."),
        ])
        .unwrap();
        let stop = StopwordFilter::from_list(&["and", "for", "all"]);
        let freq = aggregate(&records, &stop);
        let scorer = |t: &str| {
            if t.starts_with("Peace") {
                SentimentScore::new(0.4, 0.2)
            } else {
                SentimentScore::new(-0.2, 0.8)
            }
        };
        let sentiment = score_corpus(&records, &scorer);
        (freq.per_culture, sentiment, freq.global)
    }

    #[test]
    fn test_top_one_per_group() {
        let (per_culture, sentiment, _) = scenario();
        let report = report(&per_culture, &sentiment, 1).unwrap();

        assert_eq!(report.group("X").unwrap().pairs(), vec![("justice", 2)]);
        assert_eq!(report.group("Y").unwrap().pairs(), vec![("peace", 2)]);
        assert_eq!(report.group("X").unwrap().sentiment, SentimentScore::new(0.4, 0.2));
    }

    #[test]
    fn test_missing_group_is_an_error() {
        let (per_culture, sentiment, _) = scenario();
        let report = report(&per_culture, &sentiment, 5).unwrap();
        match report.group("Z") {
            Err(AnalysisError::GroupNotFound(c)) => assert_eq!(c, "Z"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_zero_top_n_rejected() {
        let (per_culture, sentiment, _) = scenario();
        assert!(matches!(
            report(&per_culture, &sentiment, 0),
            Err(AnalysisError::InvalidTopN(0))
        ));
    }

    #[test]
    fn test_top_n_larger_than_vocabulary() {
        let (per_culture, sentiment, _) = scenario();
        let report = report(&per_culture, &sentiment, 50).unwrap();
        assert_eq!(
            report.group("X").unwrap().pairs(),
            vec![("justice", 2), ("peace", 1)]
        );
    }

    #[test]
    fn test_tie_break_uses_first_occurrence() {
        let (per_culture, sentiment, global) = scenario();
        let report = report(&per_culture, &sentiment, 2).unwrap().with_global(&global);
        // peace and justice both have 3; peace appears first in record order.
        let global: Vec<_> = report.global_keywords.iter().map(|k| k.token.as_str()).collect();
        assert_eq!(global, vec!["peace", "justice"]);
    }

    #[test]
    fn test_unknown_sentiment_is_nan() {
        let (per_culture, _, _) = scenario();
        let report = report(&per_culture, &GroupSentiment::default(), 1).unwrap();
        let group = report.group("X").unwrap();
        assert!(!group.sentiment.is_defined());
        assert_eq!(group.speakers, 0);
    }

    #[test]
    fn test_group_statistics() {
        let (per_culture, sentiment, _) = scenario();
        let report = report(&per_culture, &sentiment, 1).unwrap();
        let y = report.group("Y").unwrap();
        assert_eq!(y.speakers, 1);
        assert_eq!(y.total_tokens, 3);
        assert_eq!(y.distinct_tokens, 2);
    }

    #[test]
    fn test_cloud_weights() {
        let (per_culture, sentiment, _) = scenario();
        let report = report(&per_culture, &sentiment, 2).unwrap();
        assert_eq!(
            report.group("X").unwrap().cloud_weights(),
            vec![("justice", 1.0), ("peace", 0.5)]
        );
    }

    #[test]
    fn test_metric_table_rows_follow_group_order() {
        let (per_culture, sentiment, _) = scenario();
        let table = report(&per_culture, &sentiment, 1).unwrap().metric_table();
        assert_eq!(table.columns.len(), 5);
        assert_eq!(table.rows[0].culture, "X");
        assert_eq!(table.rows[1].culture, "Y");
        assert_eq!(table.value("Y", Metric::Polarity), Some(-0.2));
        assert_eq!(table.value("Y", Metric::TotalTokens), Some(3.0));
    }

    #[test]
    fn test_report_does_not_mutate_inputs() {
        let (per_culture, sentiment, _) = scenario();
        let before = per_culture.clone();
        let _ = report(&per_culture, &sentiment, 1).unwrap();
        assert_eq!(before, per_culture);
        assert_eq!(per_culture["X"].first_position("peace"), Some(0));
    }

    #[test]
    fn test_to_json_shape() {
        let (per_culture, _, _) = scenario();
        let report = report(&per_culture, &GroupSentiment::default(), 1).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["top_n"], 1);
        assert_eq!(value["groups"]["X"]["keywords"][0]["token"], "justice");
        assert!(value["groups"]["X"]["sentiment"]["polarity"].is_null());
        assert!(value.get("global_keywords").is_none());
    }
}
