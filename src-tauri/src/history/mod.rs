//! Mood history: the bounded in-memory log the chart is drawn from, plus the
//! SQLite journal it is restored from on startup.

mod buffer;
mod store;
mod types;

pub use buffer::{MoodHistory, DEFAULT_CAPACITY};
pub use store::MoodJournal;
pub use types::{MoodEntry, NewMoodEntry};
