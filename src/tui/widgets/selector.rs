// Selector widget: a scrollable pick-one list.
//
// The terminal stand-in for the original dropdowns: a bordered list with a
// cursor, the committed choice marked with `*`, and an optional substring
// filter shown in the title.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use super::focused_border_style;

/// Everything the selector needs to draw one list.
pub struct SelectorView<'a> {
    pub title: &'a str,
    pub items: &'a [String],
    /// Cursor position within `items`.
    pub cursor: usize,
    /// The committed choice, if any (matched by value, not index, so a
    /// filtered list still marks it).
    pub selected: Option<&'a str>,
    pub focused: bool,
    /// Active substring filter, shown in the title.
    pub filter: Option<&'a str>,
}

/// First visible index so the cursor stays inside a window of
/// `visible` rows.
pub fn scroll_offset(cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        return cursor;
    }
    cursor.saturating_sub(visible - 1)
}

/// Render the selector into the given area.
pub fn render(frame: &mut Frame, area: Rect, view: &SelectorView) {
    let border = focused_border_style(view.focused);
    let title = match view.filter {
        Some(filter) => format!("{} ({}) /{}", view.title, view.items.len(), filter),
        None => format!("{} ({})", view.title, view.items.len()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title);

    if view.items.is_empty() {
        let paragraph = Paragraph::new("  nothing to choose")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let visible = (area.height as usize).saturating_sub(2);
    let cursor = view.cursor.min(view.items.len() - 1);
    let offset = scroll_offset(cursor, visible);

    let items: Vec<ListItem> = view
        .items
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible.max(1))
        .map(|(i, item)| {
            let is_cursor = i == cursor;
            let is_selected = view.selected == Some(item.as_str());

            let marker = match (is_cursor && view.focused, is_selected) {
                (true, true) => ">*",
                (true, false) => "> ",
                (false, true) => " *",
                (false, false) => "  ",
            };
            let mut style = Style::default();
            if is_selected {
                style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
            }
            if is_cursor && view.focused {
                style = style.bg(Color::DarkGray);
            }
            ListItem::new(Line::from(vec![
                Span::styled(marker.to_string(), style),
                Span::styled(format!(" {item}"), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_offset_keeps_cursor_visible() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(5, 5), 1);
        assert_eq!(scroll_offset(12, 5), 8);
    }

    #[test]
    fn scroll_offset_zero_height() {
        assert_eq!(scroll_offset(3, 0), 3);
    }

    fn draw(view: &SelectorView) {
        let backend = ratatui::backend::TestBackend::new(30, 10);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), view))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_empty() {
        draw(&SelectorView {
            title: "Team",
            items: &[],
            cursor: 0,
            selected: None,
            focused: false,
            filter: None,
        });
    }

    #[test]
    fn render_does_not_panic_with_items() {
        let items = vec!["Boston Red Sox".to_string(), "New York Yankees".to_string()];
        draw(&SelectorView {
            title: "Team",
            items: &items,
            cursor: 1,
            selected: Some("New York Yankees"),
            focused: true,
            filter: None,
        });
    }

    #[test]
    fn render_does_not_panic_with_out_of_range_cursor() {
        let items = vec!["1927".to_string()];
        draw(&SelectorView {
            title: "Year",
            items: &items,
            cursor: 99,
            selected: None,
            focused: true,
            filter: Some("19"),
        });
    }

    #[test]
    fn render_does_not_panic_long_list() {
        let items: Vec<String> = (1900..2000).map(|y| y.to_string()).collect();
        draw(&SelectorView {
            title: "Year",
            items: &items,
            cursor: 80,
            selected: Some("1980"),
            focused: true,
            filter: None,
        });
    }
}
