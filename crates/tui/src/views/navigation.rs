use anyhow::Result;
use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::FragmentProducer;
use crate::fragment::Fragment;
use crate::tui::constants::{KEY_HINTS, NAV_SECTIONS};

/// Static section strip. The first section is always the highlighted one.
#[derive(Debug, Clone)]
pub struct NavigationView {
    sections: Vec<&'static str>,
}

impl NavigationView {
    pub fn new(sections: Vec<&'static str>) -> Self {
        Self { sections }
    }
}

impl Default for NavigationView {
    fn default() -> Self {
        Self::new(NAV_SECTIONS.to_vec())
    }
}

impl FragmentProducer<Fragment> for NavigationView {
    fn produce(&self) -> Result<Fragment> {
        let mut spans = Vec::with_capacity(self.sections.len() * 2 + 2);
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            let style = if index == 0 {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(section.to_string(), style));
        }
        spans.push(Span::raw("   "));
        spans.push(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)));

        Ok(Fragment::new("runsim", Constraint::Length(3)).line(Line::from(spans)))
    }
}
