//! Text-to-emotion classification.
//!
//! A lexicon scorer turns text into a polarity score and a fixed threshold
//! table maps that score to one of six emotions.
//!
//! # Example
//!
//! ```ignore
//! use moodpup_tauri::emotion::{EmotionClassifier, Emotion};
//!
//! let classifier = EmotionClassifier::with_default_lexicon();
//! assert_eq!(classifier.classify("thrilled and happy"), Emotion::Excited);
//! ```

mod classifier;
mod lexicon;
mod types;

pub use classifier::{classify_score, EmotionClassifier};
pub use lexicon::{
    default_lexicon, load_lexicon, parse_lexicon, tokenize, Lexicon, LexiconScorer,
    SentimentScorer,
};
pub use types::*;
