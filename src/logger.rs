//! Logging capability handed to every converter.
//!
//! Converters never touch a global logger. They receive a
//! `&dyn ConversionLogger`, which is [`TracingLogger`] in the CLI and a
//! [`RecordingLogger`] in tests that assert on emitted messages.

use std::sync::Mutex;

/// Sink for the informational and warning messages of a conversion
pub trait ConversionLogger {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Forwards messages to `tracing` under the `jdl_json::converter` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ConversionLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "jdl_json::converter", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "jdl_json::converter", "{}", message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
}

/// Keeps every message in memory, in emission order
#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages(LogLevel::Info)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(LogLevel::Warn)
    }

    fn messages(&self, level: LogLevel) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .map(|r| r.message)
            .collect()
    }

    fn push(&self, level: LogLevel, message: &str) {
        let record = LogRecord {
            level,
            message: message.to_string(),
        };
        match self.records.lock() {
            Ok(mut guard) => guard.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}

impl ConversionLogger for RecordingLogger {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }
}
