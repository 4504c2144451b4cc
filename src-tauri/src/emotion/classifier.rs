//! Sentiment score to emotion mapping.

use tracing::debug;

use super::lexicon::{LexiconScorer, SentimentScorer};
use super::types::{Classification, Emotion};

/// Scores above this read as excited.
const EXCITED_ABOVE: f64 = 3.0;
/// Scores above this read as happy.
const HAPPY_ABOVE: f64 = 0.5;
/// Scores below this read as sad.
const SAD_BELOW: f64 = -3.0;
/// Scores below this read as anxious.
const ANXIOUS_BELOW: f64 = -0.5;

/// Map a sentiment score to an emotion.
///
/// Tiers are checked in order and the first match wins. All comparisons are
/// strict, so a score sitting exactly on a threshold falls through to the
/// next tier. A zero score only counts as calm when the text has content.
pub fn classify_score(score: f64, text: &str) -> Emotion {
    if score > EXCITED_ABOVE {
        Emotion::Excited
    } else if score > HAPPY_ABOVE {
        Emotion::Happy
    } else if score < SAD_BELOW {
        Emotion::Sad
    } else if score < ANXIOUS_BELOW {
        Emotion::Anxious
    } else if score == 0.0 && !text.trim().is_empty() {
        Emotion::Calm
    } else {
        Emotion::Neutral
    }
}

/// Classifies free text into an [`Emotion`] using a pluggable scorer.
pub struct EmotionClassifier<S = LexiconScorer> {
    scorer: S,
}

impl<S: SentimentScorer> EmotionClassifier<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Classify text. Never fails; empty or blank input is neutral.
    pub fn classify(&self, text: &str) -> Emotion {
        if text.trim().is_empty() {
            return Emotion::Neutral;
        }
        classify_score(self.scorer.score(text), text)
    }

    /// Classify text and keep the scorer's analysis alongside the result.
    pub fn classify_detailed(&self, text: &str) -> Classification {
        let analysis = self.scorer.analyze(text);
        let emotion = if text.trim().is_empty() {
            Emotion::Neutral
        } else {
            classify_score(analysis.score, text)
        };
        debug!(
            "Classified text as {} (score {}, comparative {:.3})",
            emotion, analysis.score, analysis.comparative
        );
        Classification {
            emotion,
            score: analysis.score,
            comparative: analysis.comparative,
            positive: analysis.positive,
            negative: analysis.negative,
        }
    }
}

impl EmotionClassifier<LexiconScorer> {
    /// Classifier backed by the embedded word list.
    pub fn with_default_lexicon() -> Self {
        Self::new(LexiconScorer::default())
    }
}
