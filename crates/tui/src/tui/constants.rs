use std::time::Duration;

pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) const TICK_RATE: Duration = Duration::from_millis(200);

pub(crate) const NAV_SECTIONS: [&str; 3] = ["Overview", "Simulation", "Diagnostics"];
pub(crate) const KEY_HINTS: &str = "q quit • l swap logger • c clear logs";

pub(crate) const LOG_LINES: usize = 8;
pub(crate) const LOG_EMPTY: &str = "No log entries yet";
