use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};
use tracing::{info, warn};

use super::types::MoodEntry;
use crate::emotion::Emotion;
use crate::error::MoodPupError;

/// SQLite journal of every mood submission.
/// All operations are synchronous (rusqlite is blocking).
/// Callers in async contexts should use `tauri::async_runtime::spawn_blocking`.
pub struct MoodJournal {
    conn: Connection,
}

impl MoodJournal {
    /// Create or open the journal database.
    /// Typically called with: app.path().app_data_dir()?.join("mood_journal.db")
    pub fn new(db_path: &Path) -> Result<Self, MoodPupError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| MoodPupError::Journal(format!("Failed to create data dir: {}", e)))?;
        }

        let conn = Connection::open(db_path)
            .map_err(|e| MoodPupError::Journal(format!("Failed to open journal db: {}", e)))?;
        let journal = Self::init(conn)?;
        info!("Opened mood journal database at {:?}", db_path);
        Ok(journal)
    }

    /// Journal that lives only as long as the value.
    pub fn in_memory() -> Result<Self, MoodPupError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| MoodPupError::Journal(format!("Failed to open in-memory journal: {}", e)))?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, MoodPupError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS mood_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                text TEXT NOT NULL,
                emotion TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| MoodPupError::Journal(format!("Failed to create table: {}", e)))?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_mood_created ON mood_entries(created_at DESC)",
            [],
        )
        .map_err(|e| MoodPupError::Journal(format!("Failed to create date index: {}", e)))?;

        Ok(Self { conn })
    }

    /// Record an entry. Returns the row ID.
    pub fn record(&self, entry: &MoodEntry) -> Result<i64, MoodPupError> {
        self.conn
            .execute(
                "INSERT INTO mood_entries (text, emotion, created_at) VALUES (?1, ?2, ?3)",
                params![
                    entry.text,
                    entry.emotion.as_str(),
                    entry.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
                ],
            )
            .map_err(|e| MoodPupError::Journal(format!("Failed to insert entry: {}", e)))?;

        let id = self.conn.last_insert_rowid();
        info!("Recorded mood entry {} ({})", id, entry.emotion);
        Ok(id)
    }

    /// The most recent `limit` entries, newest first.
    ///
    /// Rows with an unreadable emotion or timestamp are skipped with a warning.
    pub fn recent(&self, limit: usize) -> Result<Vec<MoodEntry>, MoodPupError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT text, emotion, created_at
             FROM mood_entries
             ORDER BY created_at DESC, id DESC
             LIMIT ?1",
            )
            .map_err(|e| MoodPupError::Journal(format!("Failed to prepare query: {}", e)))?;

        let rows = stmt
            .query_map(params![limit as i64], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(|e| MoodPupError::Journal(format!("Failed to query entries: {}", e)))?;

        let mut entries = Vec::new();
        for row in rows {
            let (text, emotion, created_at) =
                row.map_err(|e| MoodPupError::Journal(format!("Failed to read entry: {}", e)))?;
            match parse_row(text, &emotion, &created_at) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!("Skipping journal row: {}", e),
            }
        }
        Ok(entries)
    }
}

fn parse_row(text: String, emotion: &str, created_at: &str) -> Result<MoodEntry, String> {
    let emotion: Emotion = emotion.parse()?;
    let timestamp = DateTime::parse_from_rfc3339(created_at)
        .map_err(|e| format!("Bad timestamp '{}': {}", created_at, e))?
        .with_timezone(&Utc);
    Ok(MoodEntry {
        text,
        emotion,
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    use super::*;

    fn create_test_journal() -> (MoodJournal, TempDir) {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("test_journal.db");
        let journal = MoodJournal::new(&db_path).unwrap();
        (journal, dir)
    }

    fn entry(text: &str, emotion: Emotion, minutes: i64) -> MoodEntry {
        MoodEntry {
            text: text.to_string(),
            emotion,
            timestamp: Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
                + Duration::minutes(minutes),
        }
    }

    #[test]
    fn test_record_and_read_back() {
        let (journal, _dir) = create_test_journal();

        let original = entry("what a lovely day", Emotion::Happy, 0);
        let id = journal.record(&original).unwrap();
        assert!(id > 0);

        let entries = journal.recent(10).unwrap();
        assert_eq!(entries, vec![original]);
    }

    #[test]
    fn test_recent_is_newest_first_and_limited() {
        let (journal, _dir) = create_test_journal();
        for i in 0..5 {
            journal
                .record(&entry(&format!("e{}", i), Emotion::Calm, i))
                .unwrap();
        }

        let entries = journal.recent(3).unwrap();
        let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["e4", "e3", "e2"]);
        assert_eq!(journal.recent(100).unwrap().len(), 5);
    }

    #[test]
    fn test_recent_empty() {
        let journal = MoodJournal::in_memory().unwrap();
        assert!(journal.recent(10).unwrap().is_empty());
    }

    #[test]
    fn test_journal_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("nested").join("journal.db");

        {
            let journal = MoodJournal::new(&db_path).unwrap();
            journal.record(&entry("rainy and gloomy", Emotion::Anxious, 0)).unwrap();
        }

        let reopened = MoodJournal::new(&db_path).unwrap();
        let entries = reopened.recent(10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].emotion, Emotion::Anxious);
    }

    #[test]
    fn test_unopenable_path_is_journal_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();

        let result = MoodJournal::new(&blocker.join("journal.db"));
        assert!(matches!(result, Err(MoodPupError::Journal(_))));
    }

    #[test]
    fn test_corrupt_row_skipped() {
        let journal = MoodJournal::in_memory().unwrap();
        journal.record(&entry("fine", Emotion::Happy, 0)).unwrap();
        journal
            .conn
            .execute(
                "INSERT INTO mood_entries (text, emotion, created_at) VALUES ('x', 'grumpy', '2026-10-19T13:00:00+00:00')",
                [],
            )
            .unwrap();

        let entries = journal.recent(10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "fine");
    }
}
