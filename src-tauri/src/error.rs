use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoodPupError {
    #[error("Mood text is empty")]
    EmptyText,

    #[error("Config error: {0}")]
    Config(String),

    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("Journal error: {0}")]
    Journal(String),

    #[error("Preferences error: {0}")]
    Preferences(String),
}

impl From<MoodPupError> for String {
    fn from(err: MoodPupError) -> Self {
        err.to_string()
    }
}
