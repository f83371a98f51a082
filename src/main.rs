use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = runsim::cli::Cli::parse();
    let config = runsim::config::from_cli(&cli)?;

    let book = runsim::LogBook::default();
    runsim::telemetry::init_tracing(cli.log_filter.clone(), config.log_path(), book.clone())?;

    match cli.command.clone() {
        Some(runsim::cli::CliCommand::Tui) | None => {
            runsim::tui::run(config, book)?;
        }
        Some(command) => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            runsim::commands::execute(&config, &book, command, &mut handle)?;
        }
    }

    Ok(())
}
