//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: the sequence as a bar chart with highlighted positions
//! - [`menu`]: algorithm list, registers one hit region per entry
//! - [`controls`]: Sort and Reload buttons plus the run summary box
//! - [`status`]: status bar with keybindings and run state
//!
//! Every pane is a free `render_*` function over borrowed state; panes that
//! contain clickable elements also receive the frame's [`HitMap`].
//!
//! [`HitMap`]: crate::ui::hit::HitMap

pub mod bars;
pub mod controls;
pub mod menu;
pub mod status;

pub use bars::render_bars_pane;
pub use controls::{render_controls, render_summary_pane};
pub use menu::render_menu_pane;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by all boxed panes
pub(crate) fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
