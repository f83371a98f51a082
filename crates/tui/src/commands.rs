use std::io::Write;

use anyhow::{anyhow, Result};

use crate::cli::{CliCommand, RenderArgs};
use crate::config::AppConfig;
use crate::core::{CompositionTree, LogBook};
use crate::fragment::Fragment;
use crate::views::compose_root;

pub fn execute<W: Write>(
    config: &AppConfig,
    book: &LogBook,
    command: CliCommand,
    mut writer: W,
) -> Result<()> {
    match command {
        CliCommand::Render(args) => handle_render(config, book, &args, &mut writer),
        CliCommand::Tui => Err(anyhow!("launch interactive surfaces directly")),
    }
}

fn handle_render<W: Write>(
    config: &AppConfig,
    book: &LogBook,
    args: &RenderArgs,
    mut writer: W,
) -> Result<()> {
    let root = compose_root(config, book)?;
    let tree = root.render()?;
    if args.json {
        write_json(tree, &mut writer)
    } else {
        write_text(tree, &mut writer)
    }
}

fn write_json<W: Write>(tree: CompositionTree<Fragment>, mut writer: W) -> Result<()> {
    let snapshot = tree.map(|_, fragment| fragment.snapshot());
    serde_json::to_writer_pretty(&mut writer, &snapshot)?;
    writeln!(writer)?;
    Ok(())
}

fn write_text<W: Write>(tree: CompositionTree<Fragment>, mut writer: W) -> Result<()> {
    for (slot, fragment) in tree {
        writeln!(writer, "[{}] {}", slot, fragment.title())?;
        for line in fragment.plain_lines() {
            writeln!(writer, "  {}", line)?;
        }
    }
    Ok(())
}
