//! Toolkit-agnostic composition machinery: slots, fragment producers, the composition
//! root, and the diagnostics buffer that feeds the logging overlay.

pub mod config;
pub mod fragment;
pub mod logging;
pub mod root;
pub mod slot;
pub mod tree;

pub use config::AppConfig;
pub use fragment::{BoxedProducer, FragmentProducer};
pub use logging::{LogBook, LogBookLayer, LogEntry, LogLevel, LoggerVersion};
pub use root::{CompositionError, CompositionRoot, CompositionRootBuilder};
pub use slot::Slot;
pub use tree::CompositionTree;
