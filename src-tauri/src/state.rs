use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::{info, warn};

use crate::emotion::{default_lexicon, load_lexicon, EmotionClassifier, LexiconScorer};
use crate::history::{MoodHistory, MoodJournal};
use crate::settings::{default_settings, load_settings, Settings};
use crate::trend::ChartConfig;

/// File name of the SQLite journal inside the app data directory.
pub const JOURNAL_FILE: &str = "mood_journal.db";
/// Optional settings override inside the app config directory.
pub const SETTINGS_FILE: &str = "settings.toml";
/// Optional lexicon override inside the app config directory.
pub const LEXICON_FILE: &str = "lexicon.toml";

/// Shared state for mood tracking.
pub struct MoodState {
    pub classifier: EmotionClassifier,
    pub chart: ChartConfig,
    history: Mutex<MoodHistory>,
    journal_path: Option<PathBuf>,
}

impl MoodState {
    pub fn new(settings: &Settings, classifier: EmotionClassifier) -> Self {
        Self {
            classifier,
            chart: settings.chart,
            history: Mutex::new(MoodHistory::new(settings.history.capacity)),
            journal_path: None,
        }
    }

    /// Build the state from the app directories.
    ///
    /// Overrides in `config_dir` replace the embedded settings and lexicon, and
    /// the newest journal entries in `data_dir` seed the history. Any failure
    /// along the way is logged and the defaults are used instead.
    pub fn initialize(config_dir: Option<&Path>, data_dir: Option<&Path>) -> Self {
        let settings = config_dir
            .map(|dir| settings_or_default(&dir.join(SETTINGS_FILE)))
            .unwrap_or_else(default_settings);
        let lexicon = config_dir
            .map(|dir| lexicon_or_default(&dir.join(LEXICON_FILE)))
            .unwrap_or_else(default_lexicon);

        let mut state = Self::new(&settings, EmotionClassifier::new(LexiconScorer::new(lexicon)));

        if let Some(dir) = data_dir {
            let path = dir.join(JOURNAL_FILE);
            let capacity = settings.history.capacity;
            match MoodJournal::new(&path).and_then(|j| j.recent(capacity)) {
                Ok(entries) => {
                    info!("Restored {} mood entries from journal", entries.len());
                    state.history = Mutex::new(MoodHistory::from_entries(capacity, entries));
                }
                Err(e) => warn!("Starting with empty history, journal unavailable: {}", e),
            }
            state.journal_path = Some(path);
        }

        state
    }

    pub fn history(&self) -> Result<MutexGuard<'_, MoodHistory>, String> {
        self.history
            .lock()
            .map_err(|e| format!("History lock poisoned: {}", e))
    }

    pub fn journal_path(&self) -> Option<&Path> {
        self.journal_path.as_deref()
    }
}

fn settings_or_default(path: &Path) -> Settings {
    if !path.exists() {
        return default_settings();
    }
    match load_settings(path) {
        Ok(settings) => {
            info!("Loaded settings override from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("Ignoring invalid settings at {:?}: {}", path, e);
            default_settings()
        }
    }
}

fn lexicon_or_default(path: &Path) -> crate::emotion::Lexicon {
    if !path.exists() {
        return default_lexicon();
    }
    match load_lexicon(path) {
        Ok(lexicon) => {
            info!(
                "Loaded lexicon override from {:?} ({} words)",
                path,
                lexicon.words.len()
            );
            lexicon
        }
        Err(e) => {
            warn!("Ignoring invalid lexicon at {:?}: {}", path, e);
            default_lexicon()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use tempfile::TempDir;

    use super::*;
    use crate::emotion::{Emotion, SentimentScorer};
    use crate::history::MoodEntry;

    #[test]
    fn test_initialize_without_dirs_uses_defaults() {
        let state = MoodState::initialize(None, None);
        assert_eq!(state.chart, ChartConfig::default());
        assert_eq!(state.history().unwrap().capacity(), 10);
        assert!(state.journal_path().is_none());
    }

    #[test]
    fn test_initialize_applies_overrides() {
        let config = TempDir::new().unwrap();
        std::fs::write(config.path().join(SETTINGS_FILE), "[history]\ncapacity = 3\n").unwrap();
        std::fs::write(config.path().join(LEXICON_FILE), "[words]\nzoomies = 4\n").unwrap();

        let state = MoodState::initialize(Some(config.path()), None);
        assert_eq!(state.history().unwrap().capacity(), 3);
        assert_eq!(state.classifier.scorer().score("zoomies"), 4.0);
        assert_eq!(state.classifier.classify("zoomies!"), Emotion::Excited);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = TempDir::new().unwrap();
        std::fs::write(config.path().join(SETTINGS_FILE), "[history]\ncapacity = 0\n").unwrap();
        std::fs::write(config.path().join(LEXICON_FILE), "not toml at all [").unwrap();

        let state = MoodState::initialize(Some(config.path()), None);
        assert_eq!(state.history().unwrap().capacity(), 10);
        assert_eq!(state.classifier.classify("happy"), Emotion::Happy);
    }

    #[test]
    fn test_oversized_capacity_override_falls_back() {
        let config = TempDir::new().unwrap();
        std::fs::write(
            config.path().join(SETTINGS_FILE),
            "[history]\ncapacity = 9223372036854775807\n",
        )
        .unwrap();

        let state = MoodState::initialize(Some(config.path()), None);
        assert_eq!(state.history().unwrap().capacity(), 10);
        assert_eq!(state.chart, ChartConfig::default());
    }

    #[test]
    fn test_initialize_restores_journal() {
        let data = TempDir::new().unwrap();
        let journal = MoodJournal::new(&data.path().join(JOURNAL_FILE)).unwrap();
        for i in 0..12 {
            journal
                .record(&MoodEntry {
                    text: format!("e{}", i),
                    emotion: Emotion::Calm,
                    timestamp: Utc::now() + chrono::Duration::seconds(i),
                })
                .unwrap();
        }

        let state = MoodState::initialize(None, Some(data.path()));
        let history = state.history().unwrap();
        assert_eq!(history.len(), 10);
        assert_eq!(history.latest().unwrap().text, "e11");
        assert_eq!(state.journal_path(), Some(data.path().join(JOURNAL_FILE).as_path()));
    }
}
