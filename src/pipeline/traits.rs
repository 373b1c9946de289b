//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. The runner is
//! generic over them, so implementations are statically dispatched; trait
//! objects work too.

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer;

// ============================================================================
// Normalizer: raw text to tokens (stage 1)
// ============================================================================

/// Turns one record's raw text into its token sequence.
///
/// # Contract
///
/// - **Input**: raw text and the run's stopword filter.
/// - **Output**: tokens in left-to-right order, duplicates retained, no
///   token present in `stopwords`.
/// - **Pure**: no side effects, never fails. Records are normalized in
///   parallel, hence the `Send + Sync` bound.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str, stopwords: &StopwordFilter) -> Vec<String>;
}

/// Default normalizer: alphabetic runs, lowercased, stopwords removed.
///
/// See [`tokenizer::normalize`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphabeticNormalizer;

impl Normalizer for AlphabeticNormalizer {
    #[inline]
    fn normalize(&self, text: &str, stopwords: &StopwordFilter) -> Vec<String> {
        tokenizer::normalize(text, stopwords)
    }
}

/// Drops tokens shorter than `min_len` characters after base normalization.
///
/// Word clouds built from the raw normalizer are dominated by fragments
/// such as the "s" of "Japan's"; this variant filters them.
#[derive(Debug, Clone, Copy)]
pub struct MinLengthNormalizer {
    pub min_len: usize,
}

impl Default for MinLengthNormalizer {
    fn default() -> Self {
        Self { min_len: 2 }
    }
}

impl Normalizer for MinLengthNormalizer {
    fn normalize(&self, text: &str, stopwords: &StopwordFilter) -> Vec<String> {
        let mut tokens = tokenizer::normalize(text, stopwords);
        tokens.retain(|t| t.chars().count() >= self.min_len);
        tokens
    }
}
