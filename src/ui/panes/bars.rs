//! Bar chart of the sequence

use crate::engine::Highlight;
use crate::sequence::Value;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Width and gap for `count` bars in `inner_width` columns.
///
/// A one-column gap is kept as long as every bar still gets at least two
/// columns; past that the bars touch.
pub fn bar_geometry(inner_width: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let per_bar = (inner_width as usize / count).min(u16::MAX as usize) as u16;
    if per_bar >= 3 {
        (per_bar - 1, 1)
    } else {
        (per_bar.max(1), 0)
    }
}

/// Render the sequence as vertical bars
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[Value],
    highlight: &Highlight,
    is_running: bool,
) {
    let block = Block::default()
        .title(format!(" Sequence ({} bars) ", values.len()))
        .borders(Borders::ALL)
        .border_style(super::border_style(is_running));

    if values.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let marked: FxHashSet<usize> = highlight.iter().collect();
    let (bar_width, bar_gap) = bar_geometry(area.width.saturating_sub(2), values.len());

    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = if marked.contains(&i) {
                DEFAULT_THEME.bar_highlight
            } else {
                DEFAULT_THEME.bar
            };
            Bar::default()
                .value(u64::from(value))
                .text_value(String::new())
                .style(Style::default().fg(color))
        })
        .collect();

    let max = values.iter().copied().max().map_or(1, u64::from);

    let chart = BarChart::default()
        .block(block)
        .style(Style::default().bg(DEFAULT_THEME.panel_bg))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(max)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_geometry() {
        assert_eq!(bar_geometry(100, 10), (9, 1));
        assert_eq!(bar_geometry(100, 50), (2, 0));
        assert_eq!(bar_geometry(100, 200), (1, 0));
        assert_eq!(bar_geometry(100, 0), (1, 0));
    }
}
