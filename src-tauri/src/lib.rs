pub mod commands;
pub mod customization;
pub mod emotion;
mod error;
pub mod history;
pub mod settings;
pub mod state;
pub mod trend;

pub use emotion::{Emotion, EmotionClassifier};
pub use error::MoodPupError;
pub use history::{MoodEntry, MoodHistory, NewMoodEntry};
pub use trend::{project_trend, ChartConfig, TrendProjection};

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            commands::config::get_preference,
            commands::config::set_preference,
            commands::config::get_customization,
            commands::config::save_customization,
            commands::mood::submit_mood,
            commands::mood::classify_text,
            commands::mood::get_mood_history,
            commands::mood::get_mood_trend,
        ])
        .setup(|app| {
            use tauri::Manager;

            let config_dir = app
                .path()
                .app_config_dir()
                .map_err(|e| tracing::warn!("No app config dir: {}", e))
                .ok();
            let data_dir = app
                .path()
                .app_data_dir()
                .map_err(|e| tracing::warn!("No app data dir: {}", e))
                .ok();

            let state = state::MoodState::initialize(config_dir.as_deref(), data_dir.as_deref());
            app.manage(state);
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
