use anyhow::Result;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::{FragmentProducer, LogBook};
use crate::fragment::Fragment;
use crate::tui::constants::{LOG_EMPTY, LOG_LINES};

/// Retired logger: bare messages, newest last.
#[derive(Debug, Clone)]
pub struct LoggerV1 {
    book: LogBook,
}

impl LoggerV1 {
    pub fn new(book: LogBook) -> Self {
        Self { book }
    }
}

impl FragmentProducer<Fragment> for LoggerV1 {
    fn produce(&self) -> Result<Fragment> {
        let entries = self.book.recent(LOG_LINES);
        let fragment = Fragment::new("Logger", super::default_height()).no_wrap();
        if entries.is_empty() {
            return Ok(fragment.line(Span::styled(
                LOG_EMPTY,
                Style::default().fg(Color::DarkGray),
            )));
        }
        Ok(fragment.lines(entries.into_iter().map(|entry| Line::from(entry.message))))
    }
}
