use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;
use crate::error::MoodPupError;

/// A recorded mood submission. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub text: String,
    pub emotion: Emotion,
    pub timestamp: DateTime<Utc>,
}

/// A submission waiting to be stamped by the history.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMoodEntry {
    text: String,
    emotion: Emotion,
}

impl NewMoodEntry {
    /// Fails with [`MoodPupError::EmptyText`] when the text is blank.
    pub fn new(text: impl Into<String>, emotion: Emotion) -> Result<Self, MoodPupError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(MoodPupError::EmptyText);
        }
        Ok(Self { text, emotion })
    }

    pub(crate) fn stamp(self, timestamp: DateTime<Utc>) -> MoodEntry {
        MoodEntry {
            text: self.text,
            emotion: self.emotion,
            timestamp,
        }
    }
}
