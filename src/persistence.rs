//! # Persistence — Saving and Loading the Consultation History
//!
//! Serializes the [`History`] as JSON at `data/riwayat.json`.
//!
//! ## Storage Format
//!
//! The history is saved pretty-printed so the file stays inspectable by
//! hand. Only consultation records are persisted — the rule table, the
//! axis vocabularies and the destination catalog are compiled-in
//! constants and never touch disk.
//!
//! ## When Is It Saved?
//!
//! - After each consultation submitted on the Konsultasi page
//! - After each deletion or reset on the Riwayat page
//!
//! ## Atomicity
//!
//! The write is **not atomic** — a crash mid-write can corrupt the
//! file. `main` treats an unreadable file as an empty history (with a
//! warning), so a corrupt file costs past records, never a failed boot.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::RwLock;

use crate::history::History;

/// History file path, relative to the project root.
const HISTORY_PATH: &str = "data/riwayat.json";

/// Saves the history to disk as pretty-printed JSON.
///
/// Creates the `data/` directory if missing. Takes a read lock on the
/// history — concurrent readers are fine.
///
/// # Errors
///
/// Fails if the directory cannot be created, serialization fails, or
/// the file cannot be written.
pub fn save_history(history: &Arc<RwLock<History>>) -> Result<()> {
    save_history_to(Path::new(HISTORY_PATH), &history.read())
}

/// Loads the history from disk, or returns an empty one if no file exists.
///
/// # Errors
///
/// Fails if the file exists but cannot be read or deserialized.
pub fn load_history() -> Result<History> {
    load_history_from(Path::new(HISTORY_PATH))
}

/// Path-parameterized save, shared by [`save_history`] and the tests.
pub fn save_history_to(path: &Path, history: &History) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    let json =
        serde_json::to_string_pretty(history).context("failed to serialize history")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Path-parameterized load, shared by [`load_history`] and the tests.
pub fn load_history_from(path: &Path) -> Result<History> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no history file found, starting empty");
        return Ok(History::new());
    }
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let history: History = serde_json::from_str(&json)
        .with_context(|| format!("failed to deserialize {}", path.display()))?;
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::core::DestinationId;
    use crate::history::{RecordInputs, RecordResult};
    use crate::inference::ConsultationInput;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("riwayat.json");

        let mut history = History::new();
        history.add(
            RecordInputs::from_input(&ConsultationInput::from_codes("G05", "I03", "J02")),
            RecordResult::from_destination(catalog::get(DestinationId::H05)),
        );
        save_history_to(&path, &history).unwrap();

        let loaded = load_history_from(&path).unwrap();
        assert_eq!(loaded.records(), history.records());
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_history_from(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("riwayat.json");
        std::fs::write(&path, "not json at all").unwrap();
        assert!(load_history_from(&path).is_err());
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/riwayat.json");
        save_history_to(&path, &History::new()).unwrap();
        assert!(path.exists());
    }
}
