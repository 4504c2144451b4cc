use serde_json::Value;
use tauri::AppHandle;
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use crate::customization::{self, DogCustomization, STORE_KEY};
use crate::error::MoodPupError;

/// Store file holding user preferences.
pub const PREFERENCES_STORE: &str = "preferences.json";

#[tauri::command]
pub fn get_preference(app: AppHandle, key: &str) -> Result<Option<String>, String> {
    info!("Getting preference: {}", key);
    let store = app.store(PREFERENCES_STORE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    let value = store.get(key).and_then(|v| v.as_str().map(|s| s.to_string()));
    Ok(value)
}

#[tauri::command]
pub fn set_preference(app: AppHandle, key: &str, value: &str) -> Result<(), String> {
    info!("Setting preference: {} = {}", key, value);
    let store = app.store(PREFERENCES_STORE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    store.set(key, serde_json::json!(value));
    store.save().map_err(|e| {
        warn!("Failed to save store: {}", e);
        e.to_string()
    })
}

/// Load the dog customization.
///
/// A stored value is sanitized field by field. With nothing stored, a random
/// look is generated and saved right away. If the store cannot be opened the
/// fallback look is returned.
#[tauri::command]
pub fn get_customization(app: AppHandle) -> DogCustomization {
    let store = match app.store(PREFERENCES_STORE) {
        Ok(store) => store,
        Err(e) => {
            warn!("Failed to open store, using fallback customization: {}", e);
            return DogCustomization::fallback();
        }
    };

    let stored = store.get(STORE_KEY).map(unwrap_json_string);
    let (custom, needs_save) = customization::resolve(stored.as_ref(), &mut rand::rng());

    if needs_save {
        match serde_json::to_value(&custom) {
            Ok(value) => {
                store.set(STORE_KEY, value);
                if let Err(e) = store.save() {
                    warn!("Failed to save randomized customization: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize customization: {}", e),
        }
    }

    custom
}

#[tauri::command]
pub fn save_customization(app: AppHandle, customization: DogCustomization) -> Result<(), String> {
    info!(
        "Saving customization for {} ({:?})",
        customization.name, customization.breed
    );
    let value = serde_json::to_value(&customization)
        .map_err(|e| MoodPupError::Preferences(e.to_string()))?;
    let store = app
        .store(PREFERENCES_STORE)
        .map_err(|e| MoodPupError::Preferences(e.to_string()))?;
    store.set(STORE_KEY, value);
    store
        .save()
        .map_err(|e| MoodPupError::Preferences(e.to_string()).into())
}

/// Values written through `set_preference` arrive as JSON text; decode them
/// so both storage shapes sanitize the same way.
fn unwrap_json_string(value: Value) -> Value {
    match value {
        Value::String(text) => serde_json::from_str(&text).unwrap_or(Value::Null),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_unwrap_json_string() {
        let encoded = Value::String(r#"{"name":"Pip"}"#.to_string());
        assert_eq!(unwrap_json_string(encoded), json!({ "name": "Pip" }));
        assert_eq!(unwrap_json_string(json!({ "a": 1 })), json!({ "a": 1 }));
        assert_eq!(unwrap_json_string(Value::String("{oops".into())), Value::Null);
    }
}
