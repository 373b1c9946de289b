//! Natural Language Processing components
//!
//! This module provides text normalization and stopword filtering.

pub mod stopwords;
pub mod tokenizer;
