// TUI widget modules for each dashboard panel.

pub mod comparison;
pub mod help_bar;
pub mod selector;
pub mod status_bar;
pub mod team_summary;

use ratatui::style::{Color, Style};

/// Border style for a panel, highlighted when it has keyboard focus.
pub fn focused_border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}
