//! JSONL file writer for the decision journal.
//!
//! Each [`JournalEvent`] becomes one JSON line carrying its payload fields
//! plus `type` and an RFC3339 `timestamp`. The file is opened in append
//! mode so one journal can span several runs.

use council_application::ports::decision_journal::{DecisionJournal, JournalEvent};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Append-only JSONL decision journal.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every event and
/// on `Drop`.
pub struct JsonlDecisionJournal {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlDecisionJournal {
    /// Open (or create) the journal at `path`.
    ///
    /// Creates parent directories as needed. Returns `None` if the file
    /// cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create journal directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open journal file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn line(event: JournalEvent) -> Option<String> {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut record = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        record.insert(
            "type".to_string(),
            Value::String(event.event_type.to_string()),
        );
        record.insert("timestamp".to_string(), Value::String(timestamp));

        serde_json::to_string(&Value::Object(record)).ok()
    }
}

impl DecisionJournal for JsonlDecisionJournal {
    fn record(&self, event: JournalEvent) {
        let Some(line) = Self::line(event) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
                warn!("Journal write to {} failed: {}", self.path.display(), e);
            }
        }
    }
}

impl Drop for JsonlDecisionJournal {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
