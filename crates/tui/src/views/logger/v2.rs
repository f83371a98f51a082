use anyhow::Result;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::{FragmentProducer, LogBook, LogEntry};
use crate::fragment::Fragment;
use crate::tui::constants::{LOG_EMPTY, LOG_LINES};
use crate::tui::helpers::{format_clock, level_style, plural};

/// Timestamped, level-coloured log overlay with severity counts in the title.
#[derive(Debug, Clone)]
pub struct LoggerV2 {
    book: LogBook,
}

impl LoggerV2 {
    pub fn new(book: LogBook) -> Self {
        Self { book }
    }

    fn title(&self) -> String {
        let counts = self.book.counts();
        format!(
            "Logs · {} · {}",
            plural(counts.errors, "error"),
            plural(counts.warnings, "warning")
        )
    }
}

fn entry_line(entry: LogEntry) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format_clock(&entry.timestamp),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(" "),
        Span::styled(format!("{:<5}", entry.level.as_str()), level_style(entry.level)),
        Span::raw(" "),
        Span::styled(entry.target, Style::default().fg(Color::DarkGray)),
        Span::raw(": "),
        Span::raw(entry.message),
    ])
}

impl FragmentProducer<Fragment> for LoggerV2 {
    fn produce(&self) -> Result<Fragment> {
        let fragment = Fragment::new(self.title(), super::default_height()).no_wrap();
        let entries = self.book.recent(LOG_LINES);
        if entries.is_empty() {
            return Ok(fragment.line(Span::styled(
                LOG_EMPTY,
                Style::default().fg(Color::DarkGray),
            )));
        }
        Ok(fragment.lines(entries.into_iter().map(entry_line)))
    }
}
