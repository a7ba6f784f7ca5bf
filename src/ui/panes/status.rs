//! Status bar rendering with keybindings and state indicators

use crate::controller::RunState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    run_state: RunState,
    has_error: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: state badge and message
    let (badge, badge_bg) = if has_error {
        (" ABORTED ", DEFAULT_THEME.error)
    } else {
        match run_state {
            RunState::Running => (" ▶ SORTING ", DEFAULT_THEME.secondary),
            RunState::Idle => (" IDLE ", DEFAULT_THEME.primary),
        }
    };

    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.panel_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default().bg(DEFAULT_THEME.panel_bg).fg(if has_error {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.panel_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.panel_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.panel_bg)
        .fg(DEFAULT_THEME.comment);

    let right_spans = vec![
        Span::styled(" 1-5 ", key_style),
        Span::styled(" pick ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" sort ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" r ", key_style),
        Span::styled(" reshuffle ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.panel_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
