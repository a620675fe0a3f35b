// Help bar: keyboard shortcut hints.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Render the one-row help bar. The hints change while typing a filter.
pub fn render(frame: &mut Frame, area: Rect, filter_mode: bool) {
    let text = if filter_mode {
        " type to filter | Enter:Select | Esc:Cancel filter"
    } else {
        " q:Quit | 1-3:Tabs | Tab:Next panel | Up/Down:Move | Enter:Select | /:Filter players"
    };
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
