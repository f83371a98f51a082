pub use runsim_tui::cli;
pub use runsim_tui::commands;
pub use runsim_tui::config;
pub use runsim_tui::telemetry;
pub use runsim_tui::tui;
pub use runsim_tui::views;
pub use runsim_tui::{AppConfig, Fragment};

pub use runsim_core as core;
pub use runsim_core::logging;
pub use runsim_core::{CompositionRoot, CompositionTree, LogBook, LoggerVersion, Slot};
