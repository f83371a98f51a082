use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear, Widget};
use ratatui::Frame;

use crate::core::CompositionTree;
use crate::fragment::Fragment;
use crate::tui::helpers::BG_BASE;

pub(crate) fn draw_tree(f: &mut Frame<'_>, tree: CompositionTree<Fragment>) {
    let area = f.size();
    render_tree(tree, area, f.buffer_mut());
}

/// Stack the fragments top to bottom, each sized by the constraint it asked for.
pub(crate) fn render_tree(tree: CompositionTree<Fragment>, area: Rect, buf: &mut Buffer) {
    Clear.render(area, buf);
    Block::default()
        .style(Style::default().bg(BG_BASE))
        .render(area, buf);

    let constraints: Vec<Constraint> = tree.fragments().iter().map(|f| f.height()).collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for ((_, fragment), chunk) in tree.into_iter().zip(chunks.iter()) {
        fragment.render(*chunk, buf);
    }
}
