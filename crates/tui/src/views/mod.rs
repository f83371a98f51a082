//! Terminal collaborators for each slot, and the one place that decides which logger is bound.

mod logger;
mod main_content;
mod navigation;

use anyhow::Result;

use crate::config::AppConfig;
use crate::core::{CompositionRoot, LogBook, LoggerVersion};
use crate::fragment::Fragment;

pub use logger::{LoggerV1, LoggerV2};
pub use main_content::MainContentView;
pub use navigation::NavigationView;

pub fn compose_root(config: &AppConfig, book: &LogBook) -> Result<CompositionRoot<Fragment>> {
    let builder = CompositionRoot::builder()
        .navigation(NavigationView::default())
        .main_content(MainContentView::from_config(config));
    let root = match config.logger_version() {
        LoggerVersion::V1 => builder.logging(LoggerVersion::V1, LoggerV1::new(book.clone())),
        LoggerVersion::V2 => builder.logging(LoggerVersion::V2, LoggerV2::new(book.clone())),
    }
    .build()?;
    Ok(root)
}

/// Swap the bound logger for `version`, releasing the previous one.
pub fn rebind_logger(
    root: CompositionRoot<Fragment>,
    version: LoggerVersion,
    book: &LogBook,
) -> CompositionRoot<Fragment> {
    match version {
        LoggerVersion::V1 => root.rebind_logging(version, LoggerV1::new(book.clone())),
        LoggerVersion::V2 => root.rebind_logging(version, LoggerV2::new(book.clone())),
    }
}

#[cfg(test)]
mod tests;
