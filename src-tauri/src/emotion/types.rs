//! Emotion categories and classification results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six discrete moods the dog can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Calm,
    Excited,
    Anxious,
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Calm,
        Emotion::Excited,
        Emotion::Anxious,
        Emotion::Neutral,
    ];

    /// Vertical position of this emotion on the trend chart.
    ///
    /// This table is the only ordering between emotions.
    pub fn plot_score(self) -> f64 {
        match self {
            Emotion::Excited => 3.0,
            Emotion::Happy => 2.0,
            Emotion::Calm => 1.0,
            Emotion::Neutral => 0.0,
            Emotion::Anxious => -1.0,
            Emotion::Sad => -2.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Calm => "calm",
            Emotion::Excited => "excited",
            Emotion::Anxious => "anxious",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown emotion: {}", s))
    }
}

/// Scorer output for one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentAnalysis {
    /// Sum of matched word weights (after negation)
    pub score: f64,
    /// Score divided by the number of tokens
    pub comparative: f64,
    /// Words that contributed a positive weight
    pub positive: Vec<String>,
    /// Words that contributed a negative weight
    pub negative: Vec<String>,
}

impl SentimentAnalysis {
    pub fn empty() -> Self {
        Self {
            score: 0.0,
            comparative: 0.0,
            positive: Vec::new(),
            negative: Vec::new(),
        }
    }
}

/// An emotion together with the analysis that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub emotion: Emotion,
    pub score: f64,
    pub comparative: f64,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}
