//! Culture-by-metric table
//!
//! The tabular shape behind comparison charts: one row per culture group,
//! one column per [`Metric`].

use serde::Serialize;

/// Column of a [`MetricTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Polarity,
    Subjectivity,
    Speakers,
    TotalTokens,
    DistinctTokens,
}

impl Metric {
    /// Every metric, in column order.
    pub const ALL: [Metric; 5] = [
        Metric::Polarity,
        Metric::Subjectivity,
        Metric::Speakers,
        Metric::TotalTokens,
        Metric::DistinctTokens,
    ];

    /// Returns the user-facing name used in JSON and chart labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Polarity => "polarity",
            Self::Subjectivity => "subjectivity",
            Self::Speakers => "speakers",
            Self::TotalTokens => "total_tokens",
            Self::DistinctTokens => "distinct_tokens",
        }
    }
}

/// One culture's metric values, aligned with [`MetricTable::columns`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub culture: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricTable {
    pub columns: Vec<Metric>,
    pub rows: Vec<MetricRow>,
}

impl MetricTable {
    /// Value of `metric` for `culture`, if both exist.
    pub fn value(&self, culture: &str, metric: Metric) -> Option<f64> {
        let col = self.columns.iter().position(|&m| m == metric)?;
        self.rows
            .iter()
            .find(|r| r.culture == culture)
            .and_then(|r| r.values.get(col).copied())
    }

    /// One metric across all cultures, in row order (a chart series).
    pub fn column(&self, metric: Metric) -> Vec<(&str, f64)> {
        let Some(col) = self.columns.iter().position(|&m| m == metric) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter_map(|r| r.values.get(col).map(|&v| (r.culture.as_str(), v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MetricTable {
        MetricTable {
            columns: vec![Metric::Polarity, Metric::Speakers],
            rows: vec![
                MetricRow {
                    culture: "Egypt: Middle Eastern".into(),
                    values: vec![0.12, 1.0],
                },
                MetricRow {
                    culture: "USA: Western".into(),
                    values: vec![0.05, 1.0],
                },
            ],
        }
    }

    #[test]
    fn test_value_lookup() {
        let t = table();
        assert_eq!(t.value("USA: Western", Metric::Polarity), Some(0.05));
        assert_eq!(t.value("USA: Western", Metric::Subjectivity), None);
        assert_eq!(t.value("Japan: East Asian", Metric::Polarity), None);
    }

    #[test]
    fn test_column_series() {
        let t = table();
        assert_eq!(
            t.column(Metric::Polarity),
            vec![("Egypt: Middle Eastern", 0.12), ("USA: Western", 0.05)]
        );
        assert!(t.column(Metric::TotalTokens).is_empty());
    }

    #[test]
    fn test_metric_names_match_serde() {
        for m in Metric::ALL {
            assert_eq!(serde_json::to_value(m).unwrap(), m.as_str());
        }
    }
}
