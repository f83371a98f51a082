//! Diagnostics feeding the logging overlay: which logger version is bound, and the
//! shared buffer of captured tracing events the loggers render from.

mod book;
mod layer;
mod version;

pub use book::{LevelCounts, LogBook, LogEntry, LogLevel, DEFAULT_CAPACITY};
pub use layer::LogBookLayer;
pub use version::{LoggerVersion, ParseLoggerVersionError};
