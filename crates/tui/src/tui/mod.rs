//! Interactive rendering host: owns the terminal and asks the composition root for one
//! tree per cycle.

use std::io;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use crate::config::AppConfig;
use crate::core::{CompositionRoot, LogBook, LoggerVersion};
use crate::fragment::Fragment;
use crate::views::{compose_root, rebind_logger};

pub(crate) mod constants;
pub(crate) mod helpers;
mod input;
mod render;

use constants::TICK_RATE;
use input::HostAction;
use render::draw_tree;

pub fn run(config: AppConfig, book: LogBook) -> Result<()> {
    // Bind collaborators before touching the terminal.
    let root = compose_root(&config, &book)?;
    tracing::info!(
        logger = %root.logger_version(),
        data_dir = %config.data_dir().display(),
        "session started"
    );

    let mut stdout = io::stdout();
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to initialize terminal")?;
    terminal.hide_cursor().context("failed to hide cursor")?;

    let result = run_host(&mut terminal, root, &book);

    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;

    match &result {
        Ok(()) => tracing::info!("session ended"),
        Err(err) => tracing::warn!(error = %err, "session aborted by render failure"),
    }
    result
}

/// Render and draw until quit. A render failure ends the loop before any input is read.
fn run_host<B: Backend>(
    terminal: &mut Terminal<B>,
    mut root: CompositionRoot<Fragment>,
    book: &LogBook,
) -> Result<()> {
    loop {
        let tree = root.render()?;
        terminal.draw(|f| draw_tree(f, tree))?;

        // Returns after one tick without input, so the log overlay keeps refreshing.
        if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match HostAction::from_event(&key) {
                        Some(HostAction::Quit) => break,
                        Some(HostAction::SwapLogger) => {
                            let next = alternate(root.logger_version());
                            root = rebind_logger(root, next, book);
                            tracing::info!(logger = %next, "logger swapped");
                        }
                        Some(HostAction::ClearLogs) => book.clear(),
                        None => {}
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    Ok(())
}

fn alternate(version: LoggerVersion) -> LoggerVersion {
    match version {
        LoggerVersion::V1 => LoggerVersion::V2,
        LoggerVersion::V2 => LoggerVersion::V1,
    }
}
