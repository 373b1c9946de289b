//! Text normalization
//!
//! Splits raw text on every run of non-alphabetic characters, so
//! punctuation, digits, whitespace and typographic quotes all act as
//! separators. Segments are lowercased and stopwords dropped.

use super::stopwords::StopwordFilter;

/// Iterate over the maximal alphabetic runs of `text`, in order.
///
/// Segments keep their original case; no segment is empty.
pub fn segments(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|s| !s.is_empty())
}

/// Normalize `text` into lowercase alphabetic tokens with stopwords removed.
///
/// Order is preserved and duplicates are kept; counting happens downstream.
/// Any input, including the empty string, yields a (possibly empty) sequence.
pub fn normalize(text: &str, stopwords: &StopwordFilter) -> Vec<String> {
    segments(text)
        .map(str::to_lowercase)
        .filter(|token| !stopwords.is_stopword(token))
        .collect()
}

/// Lowercased segments with no stopword filtering.
///
/// Used by sentiment scoring, where negations and intensifiers such as
/// "not" or "very" must survive.
pub fn words(text: &str) -> Vec<String> {
    segments(text).map(str::to_lowercase).collect()
}
