//! Lexicon-based polarity and subjectivity
//!
//! A pattern-style scorer: every lexicon word found in the text contributes
//! one assessment of `(polarity, subjectivity)`, optionally modified by the
//! words just before it:
//!
//! - an intensifier ("very", "deeply", ...) multiplies the next assessment
//!   by its intensity;
//! - a negation ("not", "never", "can't", ...) flips the next assessment's
//!   polarity and halves it.
//!
//! The text's score is the mean of its assessments. Text without any
//! lexicon hit is neutral.

use rustc_hash::FxHashMap;

use super::SentimentScorer;
use crate::nlp::tokenizer;
use crate::types::SentimentScore;

/// How many words a pending negation or intensifier reaches forward.
const MODIFIER_REACH: usize = 3;

/// Polarity multiplier applied by a negation.
const NEGATION_FACTOR: f64 = -0.5;

const NEGATIONS: &[&str] = &["not", "no", "never", "nor", "without", "cannot"];

/// One lexicon word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    /// Multiplier applied to the next sentiment word; `None` for ordinary words
    pub intensity: Option<f64>,
}

impl LexiconEntry {
    pub fn word(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
            intensity: None,
        }
    }

    pub fn intensifier(intensity: f64) -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
            intensity: Some(intensity),
        }
    }
}

// (word, polarity, subjectivity)
const DEFAULT_WORDS: &[(&str, f64, f64)] = &[
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("positive", 0.23, 0.55),
    ("successful", 0.75, 0.95),
    ("hopeful", 0.5, 0.8),
    ("inclusive", 0.3, 0.5),
    ("pragmatic", 0.2, 0.3),
    ("practical", 0.2, 0.4),
    ("progressive", 0.3, 0.6),
    ("innovative", 0.5, 0.7),
    ("principled", 0.4, 0.6),
    ("fearless", 0.5, 0.7),
    ("empathetic", 0.5, 0.6),
    ("charismatic", 0.6, 0.8),
    ("visionary", 0.5, 0.7),
    ("diplomatic", 0.3, 0.4),
    ("calm", 0.3, 0.75),
    ("fair", 0.5, 0.7),
    ("free", 0.4, 0.8),
    ("open", 0.1, 0.5),
    ("peaceful", 0.5, 0.6),
    ("sustainable", 0.3, 0.5),
    ("transparent", 0.3, 0.5),
    ("shared", 0.1, 0.2),
    ("common", -0.3, 0.5),
    ("renowned", 0.5, 0.6),
    ("precise", 0.4, 0.6),
    ("reflective", 0.2, 0.5),
    ("bold", 0.35, 0.7),
    ("urgent", 0.1, 0.6),
    ("new", 0.14, 0.45),
    ("important", 0.4, 1.0),
    ("bad", -0.7, 0.67),
    ("poor", -0.4, 0.6),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("negative", -0.3, 0.4),
    ("hard", -0.3, 0.54),
    ("complex", -0.1, 0.4),
    ("controversial", -0.2, 0.6),
    ("hollow", -0.3, 0.5),
    ("fiery", -0.1, 0.6),
    ("stark", -0.2, 0.6),
    ("heated", -0.2, 0.7),
    ("polarized", -0.3, 0.6),
    ("authoritarian", -0.4, 0.6),
    ("abstract", -0.1, 0.4),
    ("systemic", -0.1, 0.3),
    ("violent", -0.8, 0.9),
    ("hateful", -0.9, 0.9),
    ("fake", -0.5, 1.0),
    ("silenced", -0.4, 0.5),
    ("starving", -0.5, 0.6),
    ("unfinished", -0.2, 0.4),
    ("uncompromising", -0.1, 0.6),
    ("inflammatory", -0.5, 0.7),
    ("unconventional", 0.1, 0.6),
    ("extremist", -0.6, 0.7),
    ("sharp", -0.1, 0.5),
    ("blunt", -0.2, 0.6),
];

// (word, intensity)
const DEFAULT_INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("deeply", 1.3),
    ("fiercely", 1.4),
    ("actively", 1.1),
    ("often", 1.1),
    ("particularly", 1.2),
    ("slightly", 0.6),
    ("somewhat", 0.7),
];

/// Lexicon-driven [`SentimentScorer`].
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: FxHashMap<String, LexiconEntry>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    /// Create a scorer with the built-in English lexicon
    pub fn new() -> Self {
        let mut lexicon: FxHashMap<String, LexiconEntry> = DEFAULT_WORDS
            .iter()
            .map(|&(w, p, s)| (w.to_string(), LexiconEntry::word(p, s)))
            .collect();
        lexicon.extend(
            DEFAULT_INTENSIFIERS
                .iter()
                .map(|&(w, i)| (w.to_string(), LexiconEntry::intensifier(i))),
        );
        Self { lexicon }
    }

    /// Create a scorer with a custom lexicon (keys are lowercased)
    pub fn with_lexicon(lexicon: FxHashMap<String, LexiconEntry>) -> Self {
        Self {
            lexicon: lexicon
                .into_iter()
                .map(|(w, e)| (w.to_lowercase(), e))
                .collect(),
        }
    }

    /// Add or replace a lexicon entry
    pub fn add_entry(&mut self, word: &str, entry: LexiconEntry) {
        self.lexicon.insert(word.to_lowercase(), entry);
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.lexicon.get(word)
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    /// Per-word `(polarity, subjectivity)` assessments of `text`, in order.
    pub fn assessments(&self, text: &str) -> Vec<(f64, f64)> {
        let mut out = Vec::new();
        let mut negated: Option<usize> = None;
        let mut intensity: Option<(f64, usize)> = None;

        let words = tokenizer::words(text);
        for (i, word) in words.iter().enumerate() {
            if negated.is_some_and(|at| i - at > MODIFIER_REACH) {
                negated = None;
            }
            if intensity.is_some_and(|(_, at)| i - at > MODIFIER_REACH) {
                intensity = None;
            }

            let previous = i.checked_sub(1).map(|p| words[p].as_str());
            if is_negation(word, previous) {
                negated = Some(i);
                continue;
            }

            let Some(entry) = self.lexicon.get(word.as_str()) else {
                continue;
            };

            if let Some(factor) = entry.intensity {
                let current = intensity.map(|(f, _)| f).unwrap_or(1.0);
                intensity = Some((current * factor, i));
                continue;
            }

            let factor = intensity.take().map(|(f, _)| f).unwrap_or(1.0);
            let mut polarity = entry.polarity * factor;
            let subjectivity = entry.subjectivity * factor;
            if negated.take().is_some() {
                polarity *= NEGATION_FACTOR;
            }
            out.push((polarity, subjectivity));
        }
        out
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let assessments = self.assessments(text);
        if assessments.is_empty() {
            return SentimentScore::neutral();
        }
        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.0).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|a| a.1).sum::<f64>() / n;
        SentimentScore::new(polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0))
    }
}

// The normalizer splits "can't" into "can" + "t" and "don't" into "don" + "t",
// so a lone "t" is a contracted negation only right after a word ending in 'n'.
fn is_negation(word: &str, previous: Option<&str>) -> bool {
    NEGATIONS.contains(&word) || (word == "t" && previous.is_some_and(|p| p.ends_with('n')))
}
