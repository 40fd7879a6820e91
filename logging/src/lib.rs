#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

//! Structured JSONL event logging shared by the Feymantec tooling layers.
//!
//! The engine itself is pure and never logs; the CLI and any future service
//! wrappers append one JSON record per line through a [`Telemetry`] handle.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Result;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Log severity level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Debug information.
    Debug,
    /// Informational events.
    Info,
    /// Warning indicator.
    Warn,
    /// Error indicator.
    Error,
}

/// One structured event record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// Timestamp in ISO8601.
    pub timestamp: DateTime<Utc>,
    /// Tool or layer emitting the record.
    pub module: String,
    /// Severity.
    pub level: LogLevel,
    /// Dotted event name, e.g. `card.generated`.
    pub event: String,
    /// Arbitrary JSON fields attached to the event.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub fields: serde_json::Map<String, Value>,
}

impl LogRecord {
    /// Creates a record with empty fields.
    #[must_use]
    pub fn new(module: impl Into<String>, level: LogLevel, event: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            module: module.into(),
            level,
            event: event.into(),
            fields: serde_json::Map::new(),
        }
    }
}

/// Append-only JSONL sink behind a mutex, safe to share across threads.
#[derive(Debug)]
pub struct JsonLogger {
    path: PathBuf,
    writer: Mutex<File>,
}

impl JsonLogger {
    /// Creates or opens a log file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be created or opened.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        Ok(Self {
            path,
            writer: Mutex::new(file),
        })
    }

    /// Appends one record as a JSON line.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the write fails.
    pub fn log(&self, record: &LogRecord) -> Result<()> {
        let mut writer = self.writer.lock();
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Returns the underlying file path (useful for tests).
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Cloneable telemetry handle bound to a module label. A handle without a
/// sink swallows records, so callers can log unconditionally.
#[derive(Debug, Clone)]
pub struct Telemetry {
    module: String,
    logger: Option<Arc<JsonLogger>>,
}

impl Telemetry {
    /// Creates a handle writing to `log_path`, or a disabled handle when no
    /// path is given.
    ///
    /// # Errors
    ///
    /// Returns an error when the log file cannot be opened.
    pub fn new(module: impl Into<String>, log_path: Option<&Path>) -> Result<Self> {
        let logger = match log_path {
            Some(path) => Some(Arc::new(JsonLogger::new(path)?)),
            None => None,
        };
        Ok(Self {
            module: module.into(),
            logger,
        })
    }

    /// Creates a handle that discards every record.
    #[must_use]
    pub fn disabled(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            logger: None,
        }
    }

    /// Emits one event. `fields` should be a JSON object; other values are
    /// dropped silently.
    ///
    /// # Errors
    ///
    /// Returns an error when the sink write fails.
    pub fn log(&self, level: LogLevel, event: &str, fields: Value) -> Result<()> {
        if let Some(logger) = &self.logger {
            let mut record = LogRecord::new(&self.module, level, event);
            if let Some(object) = fields.as_object() {
                record.fields = object.clone();
            }
            logger.log(&record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn logger_writes_json_lines() {
        let dir = tempdir().unwrap();
        let logger = JsonLogger::new(dir.path().join("events.jsonl")).unwrap();
        logger
            .log(&LogRecord::new("feyn", LogLevel::Info, "card.generated"))
            .unwrap();
        let content = fs::read_to_string(logger.path()).unwrap();
        assert!(content.contains("\"event\":\"card.generated\""));
        assert!(content.contains("\"level\":\"INFO\""));
    }

    #[test]
    fn telemetry_attaches_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let telemetry = Telemetry::new("feyn", Some(path.as_path())).unwrap();
        telemetry
            .log(LogLevel::Info, "card.generated", json!({ "score": 63 }))
            .unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"score\":63"));
    }

    #[test]
    fn disabled_telemetry_swallows_records() {
        let telemetry = Telemetry::disabled("feyn");
        telemetry
            .log(LogLevel::Warn, "card.rejected", json!({ "reason": "nsfw" }))
            .unwrap();
    }

    #[test]
    fn logger_appends_across_handles() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        for event in ["first.event", "second.event"] {
            let logger = JsonLogger::new(&path).unwrap();
            logger
                .log(&LogRecord::new("feyn", LogLevel::Debug, event))
                .unwrap();
        }
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
