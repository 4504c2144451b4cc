//! Tauri commands for mood submission and the trend chart.

use serde::Serialize;
use tauri::State;
use tracing::{info, warn};

use crate::emotion::Classification;
use crate::history::{MoodEntry, MoodJournal, NewMoodEntry};
use crate::state::MoodState;
use crate::trend::{project_trend, PlotPoint, Tone, TrendProjection};

/// Result of a submitted mood.
#[derive(Debug, Clone, Serialize)]
pub struct MoodSubmission {
    pub entry: MoodEntry,
    pub classification: Classification,
}

/// A plotted point together with the tone it is colored by.
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    #[serde(flatten)]
    pub point: PlotPoint,
    pub tone: Tone,
}

impl From<PlotPoint> for TrendPoint {
    fn from(point: PlotPoint) -> Self {
        Self {
            tone: point.tone(),
            point,
        }
    }
}

/// Trend chart as the frontend draws it.
#[derive(Debug, Clone, Serialize)]
pub struct TrendView {
    pub points: Vec<TrendPoint>,
    /// SVG path data, absent with fewer than two points
    pub path: Option<String>,
    pub width: f64,
    pub height: f64,
}

impl From<TrendProjection> for TrendView {
    fn from(projection: TrendProjection) -> Self {
        Self {
            path: projection.path.as_ref().map(|p| p.to_string()),
            points: projection.points.into_iter().map(TrendPoint::from).collect(),
            width: projection.width,
            height: projection.height,
        }
    }
}

/// Classify text, add it to the history and journal it.
///
/// Blank text is rejected. A journal failure is logged and does not affect
/// the returned result.
#[tauri::command]
pub async fn submit_mood(
    state: State<'_, MoodState>,
    text: String,
) -> Result<MoodSubmission, String> {
    let classification = state.classifier.classify_detailed(&text);
    let new_entry = NewMoodEntry::new(text, classification.emotion)?;

    let entry = state.history()?.add(new_entry);
    info!(
        "Mood submitted: {} (score {})",
        entry.emotion, classification.score
    );

    if let Some(path) = state.journal_path().map(|p| p.to_path_buf()) {
        let to_record = entry.clone();
        let recorded = tauri::async_runtime::spawn_blocking(move || {
            MoodJournal::new(&path)?.record(&to_record)
        })
        .await;
        match recorded {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => warn!("Failed to journal mood entry: {}", e),
            Err(e) => warn!("Journal task failed: {}", e),
        }
    }

    Ok(MoodSubmission {
        entry,
        classification,
    })
}

/// Classify text without recording it.
#[tauri::command]
pub fn classify_text(state: State<'_, MoodState>, text: String) -> Classification {
    state.classifier.classify_detailed(&text)
}

/// Current history, newest first.
#[tauri::command]
pub fn get_mood_history(state: State<'_, MoodState>) -> Result<Vec<MoodEntry>, String> {
    Ok(state.history()?.to_vec())
}

/// Chart coordinates for the current history.
#[tauri::command]
pub fn get_mood_trend(state: State<'_, MoodState>) -> Result<TrendView, String> {
    let history = state.history()?;
    let projection = project_trend(history.entries(), &state.chart);
    Ok(projection.into())
}
