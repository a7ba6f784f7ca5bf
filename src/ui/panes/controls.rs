//! Control buttons and run summary

use crate::controller::{Command, RunState, RunStats};
use crate::ui::hit::HitMap;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows one button needs including its borders
pub const BUTTON_HEIGHT: u16 = 3;

/// Render the Sort and Reload buttons stacked in `sort_area` and `reload_area`
pub fn render_controls(
    frame: &mut Frame,
    sort_area: Rect,
    reload_area: Rect,
    run_state: RunState,
    can_start: bool,
    hits: &mut HitMap,
) {
    let sort_color = match run_state {
        RunState::Running => DEFAULT_THEME.secondary,
        RunState::Idle if can_start => DEFAULT_THEME.primary,
        RunState::Idle => DEFAULT_THEME.comment,
    };
    let sort_label = if run_state == RunState::Running {
        "Sorting..."
    } else {
        "Sort"
    };

    render_button(frame, sort_area, sort_label, sort_color);
    render_button(frame, reload_area, "Reload", DEFAULT_THEME.primary);

    hits.register(sort_area, Command::Start);
    hits.register(reload_area, Command::Reset);
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let paragraph = Paragraph::new(Span::styled(
        label.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(paragraph, area);
}

/// Render counters for the current run, or for the last finished one
pub fn render_summary_pane(
    frame: &mut Frame,
    area: Rect,
    elements: usize,
    current: Option<&RunStats>,
    last: Option<&RunStats>,
) {
    let block = Block::default()
        .title(" Run ")
        .borders(Borders::ALL)
        .border_style(super::border_style(current.is_some()));

    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let value_style = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = vec![Line::from(vec![
        Span::styled("bars   ", label_style),
        Span::styled(elements.to_string(), value_style),
    ])];

    let (heading, stats, name_color) = match (current, last) {
        (Some(stats), _) => ("running", Some(stats), DEFAULT_THEME.secondary),
        (None, Some(stats)) => ("last", Some(stats), DEFAULT_THEME.success),
        (None, None) => ("", None, DEFAULT_THEME.fg),
    };

    match stats {
        Some(stats) => {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<7}", heading), label_style),
                Span::styled(stats.algorithm.name(), Style::default().fg(name_color)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("steps  ", label_style),
                Span::styled(stats.steps.to_string(), value_style),
            ]));
            lines.push(Line::from(vec![
                Span::styled("cues   ", label_style),
                Span::styled(stats.cues.to_string(), value_style),
            ]));
        }
        None => lines.push(Line::from(Span::styled("(no runs yet)", label_style))),
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
