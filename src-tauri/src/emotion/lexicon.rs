//! Word-lexicon sentiment scoring.
//!
//! Provides two loading methods:
//! - `default_lexicon()` - Loads the word list compiled into the binary
//! - `load_lexicon(path)` - Loads a custom word list from a file path

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use super::types::SentimentAnalysis;
use crate::error::MoodPupError;

/// Default word list embedded in the binary at compile time.
/// Loaded from `src-tauri/config/lexicon.toml`.
const DEFAULT_LEXICON: &str = include_str!("../../config/lexicon.toml");

/// Largest absolute weight a lexicon word may carry.
const MAX_WEIGHT: i32 = 5;

/// Anything that can turn text into a polarity score.
///
/// The classifier only depends on this trait, so the word list (or the whole
/// scoring approach) can be swapped without touching the thresholds.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> f64;

    /// Full analysis of the text. Scorers that only produce a number can
    /// rely on the default, which leaves the word lists empty.
    fn analyze(&self, text: &str) -> SentimentAnalysis {
        let tokens = tokenize(text);
        let score = self.score(text);
        SentimentAnalysis {
            score,
            comparative: comparative(score, tokens.len()),
            positive: Vec::new(),
            negative: Vec::new(),
        }
    }
}

/// Lexicon file layout.
#[derive(Debug, Clone, Deserialize)]
pub struct Lexicon {
    /// Tokens that flip the sign of the word right after them
    #[serde(default)]
    pub negators: Vec<String>,
    /// Word weights keyed by lowercase word
    pub words: HashMap<String, i32>,
}

impl Lexicon {
    /// Reject weights outside the AFINN range.
    pub fn validate(&self) -> Result<(), MoodPupError> {
        if let Some((word, weight)) = self
            .words
            .iter()
            .find(|(_, w)| w.abs() > MAX_WEIGHT)
        {
            return Err(MoodPupError::Lexicon(format!(
                "weight {} for '{}' is outside -{}..={}",
                weight, word, MAX_WEIGHT, MAX_WEIGHT
            )));
        }
        Ok(())
    }
}

/// Parse and validate a lexicon from TOML text.
pub fn parse_lexicon(content: &str) -> Result<Lexicon> {
    let lexicon: Lexicon = toml::from_str(content)?;
    lexicon.validate()?;
    Ok(lexicon)
}

/// Load a lexicon from a TOML file at the given path.
///
/// # Returns
/// * `Ok(Lexicon)` - Parsed and validated lexicon
/// * `Err` - If the file cannot be read, the TOML is invalid, or a weight is out of range
pub fn load_lexicon(path: &Path) -> Result<Lexicon> {
    let content = std::fs::read_to_string(path)?;
    parse_lexicon(&content)
}

/// Get the default lexicon embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_lexicon() -> Lexicon {
    parse_lexicon(DEFAULT_LEXICON).expect("embedded lexicon.toml must be a valid lexicon")
}

/// Bag-of-words scorer backed by a [`Lexicon`].
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: HashMap<String, i32>,
    negators: HashSet<String>,
}

impl LexiconScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            words: lexicon
                .words
                .into_iter()
                .map(|(w, v)| (w.to_lowercase(), v))
                .collect(),
            negators: lexicon
                .negators
                .into_iter()
                .map(|n| n.to_lowercase())
                .collect(),
        }
    }

    /// Weight of a single token after applying negation from the token before it.
    fn weight_at(&self, tokens: &[String], index: usize) -> Option<i32> {
        let weight = *self.words.get(&tokens[index])?;
        let negated = index > 0 && self.negators.contains(&tokens[index - 1]);
        Some(if negated { -weight } else { weight })
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new(default_lexicon())
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        (0..tokens.len())
            .filter_map(|i| self.weight_at(&tokens, i))
            .map(f64::from)
            .sum()
    }

    fn analyze(&self, text: &str) -> SentimentAnalysis {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return SentimentAnalysis::empty();
        }

        let mut analysis = SentimentAnalysis::empty();
        for i in 0..tokens.len() {
            let Some(weight) = self.weight_at(&tokens, i) else {
                continue;
            };
            analysis.score += f64::from(weight);
            if weight > 0 {
                analysis.positive.push(tokens[i].clone());
            } else if weight < 0 {
                analysis.negative.push(tokens[i].clone());
            }
        }
        analysis.comparative = comparative(analysis.score, tokens.len());
        analysis
    }
}

/// Lowercase, drop punctuation (keeping apostrophes and hyphens inside words),
/// split on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .map(|c| if c == '\u{2019}' { '\'' } else { c })
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '\'' || *c == '-')
        .collect::<String>()
        .to_lowercase();

    cleaned
        .split_whitespace()
        .map(|t| t.trim_matches(|c| c == '\'' || c == '-'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn comparative(score: f64, token_count: usize) -> f64 {
    if token_count == 0 {
        0.0
    } else {
        score / token_count as f64
    }
}
