//! Algorithm selection menu

use crate::algorithms::Algorithm;
use crate::controller::Command;
use crate::ui::hit::HitMap;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Rows the menu needs including its borders
pub const MENU_HEIGHT: u16 = Algorithm::ALL.len() as u16 + 2;

/// Render the algorithm list and register a hit region per entry
pub fn render_menu_pane(
    frame: &mut Frame,
    area: Rect,
    selection: Option<Algorithm>,
    hits: &mut HitMap,
) {
    let block = Block::default()
        .title(" Algorithm ")
        .borders(Borders::ALL)
        .border_style(super::border_style(false));
    let inner = block.inner(area);

    let items: Vec<ListItem> = Algorithm::ALL
        .iter()
        .enumerate()
        .map(|(i, &algorithm)| {
            let is_selected = selection == Some(algorithm);
            let style = if is_selected {
                Style::default()
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", i + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(format!("{:<width$}", algorithm.name(), width = 15), style),
            ]))
        })
        .collect();

    for (i, &algorithm) in Algorithm::ALL.iter().enumerate() {
        let row = i as u16;
        if row >= inner.height {
            break;
        }
        hits.register(
            Rect::new(inner.x, inner.y + row, inner.width, 1),
            Command::Select(algorithm),
        );
    }

    frame.render_widget(List::new(items).block(block), area);
}
