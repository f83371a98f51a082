//! Tracing setup: one filter shared by the session log file and the in-app log overlay.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::core::{LogBook, LogBookLayer};

pub fn init_tracing(filter: Option<String>, log_path: &Path, book: LogBook) -> Result<()> {
    let env_filter = build_filter(filter.as_deref())?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .compact(),
        )
        .with(LogBookLayer::new(book))
        .try_init();
    Ok(())
}

/// A `--log` value takes precedence over `RUST_LOG`; either may list several
/// comma-separated directives.
fn build_filter(filter: Option<&str>) -> Result<EnvFilter> {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::INFO.into());
    match filter {
        Some(filter) => builder
            .parse(filter)
            .with_context(|| format!("invalid log directive `{}`", filter)),
        None => Ok(builder.from_env_lossy()),
    }
}
