// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones for the stats browser:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +-----------------+--------------------------------+
// | Selectors (30%) | Chart (50% of content height)   |
// |                 +--------------------------------+
// |                 | Table / Series (rest)           |
// +-----------------+--------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: active tab and current selections.
    pub status_bar: Rect,
    /// Left column: the stacked selector lists for the active tab.
    pub sidebar: Rect,
    /// Content top: bar chart of summary totals.
    pub chart: Rect,
    /// Content bottom: row table, or the year-series chart on the
    /// comparison tab.
    pub table: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: status(1) | body(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(10),   // body (sidebar + content)
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let status_bar = vertical[0];
    let body = vertical[1];
    let help_bar = vertical[2];

    // Horizontal: selectors (30%) | content (70%)
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(body);

    let sidebar = horizontal[0];
    let content = horizontal[1];

    // Content vertical: chart (50%) | table (50%)
    let content_sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content);

    AppLayout {
        status_bar,
        sidebar,
        chart: content_sections[0],
        table: content_sections[1],
        help_bar,
    }
}

/// Split an area into `n` evenly sized vertical slots, for the selector
/// stack. `n` is 2 on the team/year tabs and 3 on the comparison tab.
pub fn split_stack(area: Rect, n: usize) -> Vec<Rect> {
    let constraints: Vec<Constraint> =
        (0..n).map(|_| Constraint::Ratio(1, n as u32)).collect();
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
