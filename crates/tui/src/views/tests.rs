use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{compose_root, rebind_logger, LoggerV1, LoggerV2};
use crate::config::AppConfig;
use crate::core::{FragmentProducer, LogBook, LogEntry, LogLevel, LoggerVersion, Slot};
use crate::tui::constants::{LOG_EMPTY, LOG_LINES};

fn config(version: LoggerVersion) -> AppConfig {
    AppConfig::from_data_dir(PathBuf::from("/tmp/runsim-test")).with_logger_version(version)
}

fn titles(root: &crate::core::CompositionRoot<crate::fragment::Fragment>) -> Vec<String> {
    root.render()
        .unwrap()
        .iter()
        .map(|(_, fragment)| fragment.title().to_string())
        .collect()
}

#[rstest]
#[case(LoggerVersion::V1, "Logger")]
#[case(LoggerVersion::V2, "Logs · 0 errors · 0 warnings")]
fn compose_root_binds_configured_logger(#[case] version: LoggerVersion, #[case] title: &str) {
    let book = LogBook::default();
    let root = compose_root(&config(version), &book).unwrap();

    assert_eq!(root.logger_version(), version);
    assert_eq!(
        titles(&root),
        vec!["runsim".to_string(), "Overview".to_string(), title.to_string()]
    );
}

#[test]
fn rebinding_leaves_navigation_and_main_content_untouched() {
    let book = LogBook::default();
    let root = compose_root(&config(LoggerVersion::V2), &book).unwrap();
    let before = root.render().unwrap().map(|_, fragment| fragment.snapshot());

    let root = rebind_logger(root, LoggerVersion::V1, &book);
    let after = root.render().unwrap().map(|_, fragment| fragment.snapshot());

    assert_eq!(root.logger_version(), LoggerVersion::V1);
    assert_eq!(before.get(Slot::Navigation), after.get(Slot::Navigation));
    assert_eq!(before.get(Slot::MainContent), after.get(Slot::MainContent));
    assert_eq!(after.get(Slot::Logging).title, "Logger");
}

#[test]
fn main_content_lists_paths() {
    let book = LogBook::default();
    let root = compose_root(&config(LoggerVersion::V2), &book).unwrap();
    let tree = root.render().unwrap();
    let lines = tree.get(Slot::MainContent).plain_lines();

    assert!(lines.iter().any(|line| line.contains("/tmp/runsim-test")));
    assert!(lines.iter().any(|line| line.ends_with("runsim.log")));
}

#[test]
fn loggers_show_placeholder_when_empty() {
    let book = LogBook::default();
    for fragment in [
        LoggerV1::new(book.clone()).produce().unwrap(),
        LoggerV2::new(book.clone()).produce().unwrap(),
    ] {
        assert_eq!(fragment.plain_lines(), vec![LOG_EMPTY.to_string()]);
    }
}

#[test]
fn v1_prints_bare_messages() {
    let book = LogBook::default();
    book.push(LogEntry::new(LogLevel::Warn, "runsim::host", "slow frame"));

    let fragment = LoggerV1::new(book).produce().unwrap();
    assert_eq!(fragment.plain_lines(), vec!["slow frame".to_string()]);
}

#[test]
fn v2_prints_level_target_and_counts() {
    let book = LogBook::default();
    book.push(LogEntry::new(LogLevel::Error, "runsim::host", "render failed"));
    book.push(LogEntry::new(LogLevel::Info, "runsim::host", "session started"));

    let fragment = LoggerV2::new(book).produce().unwrap();
    let lines = fragment.plain_lines();

    assert_eq!(fragment.title(), "Logs · 1 error · 0 warnings");
    assert!(lines[0].contains("ERROR runsim::host: render failed"));
    assert!(lines[1].contains("INFO  runsim::host: session started"));
}

#[test]
fn loggers_show_only_the_newest_entries() {
    let book = LogBook::default();
    for index in 0..(LOG_LINES + 3) {
        book.push(LogEntry::new(LogLevel::Info, "t", format!("entry {}", index)));
    }

    let lines = LoggerV1::new(book).produce().unwrap().plain_lines();
    assert_eq!(lines.len(), LOG_LINES);
    assert_eq!(lines.last().map(String::as_str), Some("entry 10"));
}
