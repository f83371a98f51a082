use std::path::PathBuf;

use anyhow::Result;
use ratatui::layout::Constraint;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::config::AppConfig;
use crate::core::FragmentProducer;
use crate::fragment::Fragment;
use crate::tui::constants::APP_VERSION;

#[derive(Debug, Clone)]
pub struct MainContentView {
    data_dir: PathBuf,
    log_path: PathBuf,
}

impl MainContentView {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            data_dir: config.data_dir().to_path_buf(),
            log_path: config.log_path().to_path_buf(),
        }
    }
}

fn entry(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

impl FragmentProducer<Fragment> for MainContentView {
    fn produce(&self) -> Result<Fragment> {
        Ok(Fragment::new("Overview", Constraint::Min(5)).lines([
            entry("version", format!("v{}", APP_VERSION)),
            entry("data dir", self.data_dir.display().to_string()),
            entry("log file", self.log_path.display().to_string()),
        ]))
    }
}
