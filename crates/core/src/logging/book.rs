use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;

pub const DEFAULT_CAPACITY: usize = 500;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<tracing::Level> for LogLevel {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => LogLevel::Trace,
            tracing::Level::DEBUG => LogLevel::Debug,
            tracing::Level::INFO => LogLevel::Info,
            tracing::Level::WARN => LogLevel::Warn,
            tracing::Level::ERROR => LogLevel::Error,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            target: target.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelCounts {
    pub errors: usize,
    pub warnings: usize,
    pub other: usize,
}

/// Bounded, shared ring of captured log entries. Clones share the same buffer.
#[derive(Debug, Clone)]
pub struct LogBook {
    inner: Arc<Mutex<VecDeque<LogEntry>>>,
    capacity: usize,
}

impl LogBook {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn push(&self, entry: LogEntry) {
        let mut entries = self.inner.lock();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// The newest `limit` entries, oldest first.
    pub fn recent(&self, limit: usize) -> Vec<LogEntry> {
        let entries = self.inner.lock();
        let skip = entries.len().saturating_sub(limit);
        entries.iter().skip(skip).cloned().collect()
    }

    pub fn counts(&self) -> LevelCounts {
        let entries = self.inner.lock();
        entries
            .iter()
            .fold(LevelCounts::default(), |mut counts, entry| {
                match entry.level {
                    LogLevel::Error => counts.errors += 1,
                    LogLevel::Warn => counts.warnings += 1,
                    _ => counts.other += 1,
                }
                counts
            })
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Default for LogBook {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn messages(entries: &[LogEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.message.as_str()).collect()
    }

    #[test]
    fn drops_oldest_when_full() {
        let book = LogBook::new(2);
        for message in ["one", "two", "three"] {
            book.push(LogEntry::new(LogLevel::Info, "test", message));
        }
        assert_eq!(book.len(), 2);
        assert_eq!(messages(&book.recent(10)), vec!["two", "three"]);
    }

    #[test]
    fn recent_returns_tail_in_order() {
        let book = LogBook::default();
        for message in ["a", "b", "c", "d"] {
            book.push(LogEntry::new(LogLevel::Debug, "test", message));
        }
        assert_eq!(messages(&book.recent(2)), vec!["c", "d"]);
    }

    #[test]
    fn clones_share_entries() {
        let book = LogBook::default();
        let writer = book.clone();
        writer.push(LogEntry::new(LogLevel::Warn, "test", "shared"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn clear_empties_shared_buffer() {
        let book = LogBook::new(4);
        assert!(book.is_empty());
        book.push(LogEntry::new(LogLevel::Info, "t", "kept until cleared"));
        assert!(!book.is_empty());

        book.clone().clear();
        assert!(book.is_empty());
    }

    #[test]
    fn counts_by_severity() {
        let book = LogBook::default();
        book.push(LogEntry::new(LogLevel::Error, "t", "e"));
        book.push(LogEntry::new(LogLevel::Warn, "t", "w"));
        book.push(LogEntry::new(LogLevel::Warn, "t", "w2"));
        book.push(LogEntry::new(LogLevel::Info, "t", "i"));
        assert_eq!(
            book.counts(),
            LevelCounts {
                errors: 1,
                warnings: 2,
                other: 1
            }
        );
    }
}
