//! Application settings loaded from TOML.
//!
//! Provides two loading methods:
//! - `default_settings()` - Settings embedded in the binary
//! - `load_settings(path)` - Settings from a file path, validated

use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::error::MoodPupError;
use crate::history::DEFAULT_CAPACITY;
use crate::trend::ChartConfig;

/// Default settings embedded in the binary at compile time.
/// Loaded from `src-tauri/config/settings.toml`.
const DEFAULT_SETTINGS: &str = include_str!("../config/settings.toml");

/// Largest history a settings file may ask for.
pub const MAX_CAPACITY: usize = 1000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub history: HistorySettings,
    #[serde(default)]
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistorySettings {
    /// Number of entries kept in the mood history
    pub capacity: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), MoodPupError> {
        let capacity = self.history.capacity;
        if capacity == 0 || capacity > MAX_CAPACITY {
            return Err(MoodPupError::Config(format!(
                "history.capacity must be between 1 and {}, got {}",
                MAX_CAPACITY, capacity
            )));
        }
        self.chart
            .validate()
            .map_err(|e| MoodPupError::Config(format!("invalid chart settings: {}", e)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        default_settings()
    }
}

/// Parse and validate settings from TOML text.
pub fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from a TOML file at the given path.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)?;
    parse_settings(&content)
}

/// Get the default settings embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_settings() -> Settings {
    parse_settings(DEFAULT_SETTINGS).expect("embedded settings.toml must be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_load() {
        let settings = default_settings();
        assert_eq!(settings.history.capacity, 10);
        assert_eq!(settings.chart, ChartConfig::default());
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings = parse_settings("[history]\ncapacity = 25\n").unwrap();
        assert_eq!(settings.history.capacity, 25);
        assert_eq!(settings.chart, ChartConfig::default());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = parse_settings("[history]\ncapacity = 0\n").unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    fn test_oversized_capacity_rejected() {
        let err = parse_settings("[history]\ncapacity = 9223372036854775807\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MoodPupError>(),
            Some(MoodPupError::Config(_))
        ));

        let at_limit = format!("[history]\ncapacity = {}\n", MAX_CAPACITY);
        assert_eq!(parse_settings(&at_limit).unwrap().history.capacity, MAX_CAPACITY);
    }

    #[test]
    fn test_partial_chart_uses_defaults() {
        let settings = parse_settings("[history]\ncapacity = 4\n[chart]\nheight = 120.0\n").unwrap();
        assert_eq!(settings.history.capacity, 4);
        assert_eq!(
            settings.chart,
            ChartConfig {
                height: 120.0,
                ..ChartConfig::default()
            }
        );
    }

    #[test]
    fn test_inverted_score_range_rejected() {
        let toml = r#"
            [chart]
            padding = 10.0
            point_spacing = 50.0
            width = 300.0
            height = 80.0
            min_score = 3.0
            max_score = -2.0
        "#;
        let err = parse_settings(toml).unwrap_err();
        assert!(err.to_string().contains("max_score"));
    }

    #[test]
    fn test_load_settings_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[history]\ncapacity = 5\n").unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.history.capacity, 5);
    }
}
