//! Structured logging with session context.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::SessionId;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    #[serde(alias = "warning")]
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    #[serde(alias = "text")]
    Human,
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Session ID for correlation.
    pub session_id: String,
    /// Component that emitted the entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
    /// Microseconds since the session started.
    pub elapsed_us: u64,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {} ({}us)", self.level, self.message, self.elapsed_us);

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }
}

/// Destination for emitted entries.
#[derive(Debug, Clone, Default)]
pub enum LogSink {
    /// Write formatted entries to stderr.
    #[default]
    Stderr,
    /// Keep entries in memory.
    Memory(Arc<Mutex<Vec<LogEntry>>>),
}

impl LogSink {
    /// Create an in-memory sink and a handle to read it back.
    pub fn memory() -> (Self, MemoryLog) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        (Self::Memory(Arc::clone(&buffer)), MemoryLog(buffer))
    }
}

/// Read handle for a [`LogSink::Memory`] buffer.
#[derive(Debug, Clone)]
pub struct MemoryLog(Arc<Mutex<Vec<LogEntry>>>);

impl MemoryLog {
    /// Snapshot of the entries captured so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.0.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Messages of the captured entries, in order.
    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|e| e.message).collect()
    }
}

/// Structured logger with session context.
///
/// Every entry carries the session id, the emitting component and the time
/// elapsed since the logger was created.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    session_id: SessionId,
    component: Option<String>,
    start_time: Instant,
    min_level: LogLevel,
    format: LogFormat,
    sink: LogSink,
}

impl StructuredLogger {
    /// Create a new logger for a session.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            component: None,
            start_time: Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            sink: LogSink::Stderr,
        }
    }

    /// Set the component name.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the sink.
    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    /// Log at trace level.
    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message, BTreeMap::new());
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    /// Check whether entries at `level` would be emitted.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if !self.enabled(level) {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            session_id: self.session_id.to_string(),
            component: self.component.clone(),
            fields,
            elapsed_us: self.elapsed_us(),
        };

        match &self.sink {
            LogSink::Stderr => {
                let output = match self.format {
                    LogFormat::Json => entry.to_json(),
                    LogFormat::Human => entry.to_human(),
                };
                eprintln!("{}", output);
            }
            LogSink::Memory(buffer) => {
                if let Ok(mut entries) = buffer.lock() {
                    entries.push(entry);
                }
            }
        }
    }

    /// Get the session ID.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Get elapsed time since logger creation.
    pub fn elapsed_us(&self) -> u64 {
        u64::try_from(self.start_time.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a float field.
    pub fn field_f64(mut self, key: &str, value: f64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building an error log entry.
    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}
