//! Implementations of the logging slot. Only one is ever bound into a composition root.

mod v1;
mod v2;

pub use v1::LoggerV1;
pub use v2::LoggerV2;

use ratatui::layout::Constraint;

use crate::tui::constants::LOG_LINES;

fn default_height() -> Constraint {
    Constraint::Length(LOG_LINES as u16 + 2)
}
