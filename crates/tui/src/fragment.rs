//! The concrete view fragment every terminal collaborator produces.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use serde::Serialize;

use crate::tui::helpers::{accent_title, BG_PANEL};

/// A bordered, titled block of styled lines plus the height it asks the host for.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    title: String,
    lines: Vec<Line<'static>>,
    height: Constraint,
    wrap: bool,
}

impl Fragment {
    pub fn new(title: impl Into<String>, height: Constraint) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            height,
            wrap: true,
        }
    }

    /// Keep every line on a single row, clipping at the right edge.
    pub fn no_wrap(mut self) -> Self {
        self.wrap = false;
        self
    }

    pub fn line(mut self, line: impl Into<Line<'static>>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn lines<I, L>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Line<'static>>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn height(&self) -> Constraint {
        self.height
    }

    /// Line contents with styling stripped.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn snapshot(&self) -> FragmentSnapshot {
        FragmentSnapshot {
            title: self.title.clone(),
            lines: self.plain_lines(),
        }
    }
}

impl Widget for Fragment {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(accent_title(&self.title))
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(BG_PANEL));
        let paragraph = Paragraph::new(self.lines).block(block);
        if self.wrap {
            paragraph.wrap(Wrap { trim: false }).render(area, buf);
        } else {
            paragraph.render(area, buf);
        }
    }
}

/// Style-free copy of a [`Fragment`] for headless output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FragmentSnapshot {
    pub title: String,
    pub lines: Vec<String>,
}
