//! Token-count table
//!
//! A [`FrequencyTable`] maps tokens to counts and also remembers the order in
//! which tokens were first inserted. That order drives the deterministic
//! tie-break of [`FrequencyTable::top_n`]; it is not part of equality.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::ser::{Serialize, Serializer};

/// Token → count mapping with first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Insertion order is first-occurrence order
    counts: IndexMap<String, u64, FxBuildHasher>,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of a sequence, in order.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token.as_ref(), 1);
        }
        table
    }

    /// Add `count` occurrences of `token`.
    pub fn add(&mut self, token: &str, count: u64) {
        match self.counts.get_mut(token) {
            Some(c) => *c += count,
            None => {
                self.counts.insert(token.to_string(), count);
            }
        }
    }

    /// Fold `other` into this table.
    ///
    /// Tokens new to this table are appended in `other`'s first-occurrence
    /// order, so merging record tables in record order yields the
    /// corpus-wide first-occurrence order.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (token, count) in other.iter() {
            self.add(token, count);
        }
    }

    /// Count for `token` (0 if absent)
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Position of `token` in first-occurrence order
    pub fn first_position(&self, token: &str) -> Option<usize> {
        self.counts.get_index_of(token)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate `(token, count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// The `n` most frequent tokens, by descending count.
    ///
    /// Ties keep first-occurrence order. `n` larger than the number of
    /// distinct tokens returns all of them.
    pub fn top_n(&self, n: usize) -> Vec<(String, u64)> {
        let mut ranked: Vec<(&str, u64)> = self.iter().collect();
        // Stable sort: equal counts stay in first-occurrence order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(t, c)| (t.to_string(), c))
            .collect()
    }
}

impl PartialEq for FrequencyTable {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(t, c)| other.get(t) == c)
    }
}

impl Eq for FrequencyTable {}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (token, count) in iter {
            table.add(token.as_ref(), count);
        }
        table
    }
}
