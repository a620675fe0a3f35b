// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` with purely presentational state (panel focus,
// list cursors, filter text). Selections live in `AppState`; every frame
// re-renders from the current selections, and committing a selection simply
// mutates `AppState` so the next frame shows the recomputed view.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{self, Event};
use ratatui::Frame;

use crate::app::{AppState, TabId};
use crate::career::CareerStat;
use layout::{build_layout, split_stack};
use widgets::selector::{self, SelectorView};
use widgets::{comparison, help_bar, status_bar, team_summary};

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state. Everything here is presentation: which panel has
/// focus, where each list cursor sits, and the player filter text.
#[derive(Debug, Default)]
pub struct ViewState {
    /// Focused selector panel within the active tab (0-based).
    pub focus: usize,
    pub batting_team_cursor: usize,
    pub batting_year_cursor: usize,
    pub pitching_team_cursor: usize,
    pub pitching_year_cursor: usize,
    pub player1_cursor: usize,
    pub player2_cursor: usize,
    pub stat_cursor: usize,
    /// Substring filter for the focused player list.
    pub filter_text: String,
    /// Whether keystrokes currently edit the filter.
    pub filter_mode: bool,
}

/// Actions the input layer hands back to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Quit,
}

/// Number of selector panels on a tab.
pub fn panel_count(tab: TabId) -> usize {
    match tab {
        TabId::Batting | TabId::Pitching => 2,
        TabId::Comparison => 3,
    }
}

// ---------------------------------------------------------------------------
// Selector item lists
// ---------------------------------------------------------------------------

/// Team display names, aligned index-for-index with `app.teams`.
pub fn team_items(app: &AppState) -> Vec<String> {
    app.teams.iter().map(|t| t.name.clone()).collect()
}

/// Years offered on the batting tab: empty until a team is chosen.
pub fn batting_year_items(app: &AppState) -> Vec<u16> {
    app.batting_sel
        .team_id
        .as_deref()
        .map(|team_id| app.batting_years(team_id))
        .unwrap_or_default()
}

/// Years offered on the pitching tab: empty until a team is chosen.
pub fn pitching_year_items(app: &AppState) -> Vec<u16> {
    app.pitching_sel
        .team_id
        .as_deref()
        .map(|team_id| app.pitching_years(team_id))
        .unwrap_or_default()
}

/// Player names matching the filter, case-insensitive substring.
pub fn filtered_player_items(app: &AppState, filter: &str) -> Vec<String> {
    let needle = filter.to_lowercase();
    app.player_names
        .iter()
        .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

fn team_name_for_id<'a>(app: &'a AppState, team_id: Option<&str>) -> Option<&'a str> {
    let team_id = team_id?;
    app.teams
        .iter()
        .find(|t| t.team_id == team_id)
        .map(|t| t.name.as_str())
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, view: &ViewState, app: &AppState) {
    let layout = build_layout(frame.area());

    status_bar::render(frame, layout.status_bar, app);

    match app.active_tab {
        TabId::Batting => {
            let slots = split_stack(layout.sidebar, 2);
            let teams = team_items(app);
            selector::render(
                frame,
                slots[0],
                &SelectorView {
                    title: "Team",
                    items: &teams,
                    cursor: view.batting_team_cursor,
                    selected: team_name_for_id(app, app.batting_sel.team_id.as_deref()),
                    focused: view.focus == 0,
                    filter: None,
                },
            );
            let years: Vec<String> = batting_year_items(app)
                .iter()
                .map(u16::to_string)
                .collect();
            let selected_year = app.batting_sel.year.map(|y| y.to_string());
            selector::render(
                frame,
                slots[1],
                &SelectorView {
                    title: "Year",
                    items: &years,
                    cursor: view.batting_year_cursor,
                    selected: selected_year.as_deref(),
                    focused: view.focus == 1,
                    filter: None,
                },
            );

            let heading = match (
                team_name_for_id(app, app.batting_sel.team_id.as_deref()),
                app.batting_sel.year,
            ) {
                (Some(team), Some(year)) => format!("Batting Stats for {team} in {year}"),
                _ => "Batting".to_string(),
            };
            let summary = app.batting_view();
            team_summary::render_batting(
                frame,
                layout.chart,
                layout.table,
                &heading,
                summary.as_ref(),
            );
        }
        TabId::Pitching => {
            let slots = split_stack(layout.sidebar, 2);
            let teams = team_items(app);
            selector::render(
                frame,
                slots[0],
                &SelectorView {
                    title: "Team",
                    items: &teams,
                    cursor: view.pitching_team_cursor,
                    selected: team_name_for_id(app, app.pitching_sel.team_id.as_deref()),
                    focused: view.focus == 0,
                    filter: None,
                },
            );
            let years: Vec<String> = pitching_year_items(app)
                .iter()
                .map(u16::to_string)
                .collect();
            let selected_year = app.pitching_sel.year.map(|y| y.to_string());
            selector::render(
                frame,
                slots[1],
                &SelectorView {
                    title: "Year",
                    items: &years,
                    cursor: view.pitching_year_cursor,
                    selected: selected_year.as_deref(),
                    focused: view.focus == 1,
                    filter: None,
                },
            );

            let heading = match (
                team_name_for_id(app, app.pitching_sel.team_id.as_deref()),
                app.pitching_sel.year,
            ) {
                (Some(team), Some(year)) => format!("Pitching Stats for {team} in {year}"),
                _ => "Pitching".to_string(),
            };
            let summary = app.pitching_view();
            team_summary::render_pitching(
                frame,
                layout.chart,
                layout.table,
                &heading,
                summary.as_ref(),
            );
        }
        TabId::Comparison => {
            let slots = split_stack(layout.sidebar, 3);

            let filter_for = |panel: usize| -> &str {
                if view.focus == panel && !view.filter_text.is_empty() {
                    view.filter_text.as_str()
                } else {
                    ""
                }
            };
            let shown_filter = |panel: usize| -> Option<&str> {
                if view.focus == panel && view.filter_mode {
                    Some(view.filter_text.as_str())
                } else {
                    None
                }
            };

            let players1 = filtered_player_items(app, filter_for(0));
            selector::render(
                frame,
                slots[0],
                &SelectorView {
                    title: "Player 1",
                    items: &players1,
                    cursor: view.player1_cursor,
                    selected: app.compare_sel.player1.as_deref(),
                    focused: view.focus == 0,
                    filter: shown_filter(0),
                },
            );
            let players2 = filtered_player_items(app, filter_for(1));
            selector::render(
                frame,
                slots[1],
                &SelectorView {
                    title: "Player 2",
                    items: &players2,
                    cursor: view.player2_cursor,
                    selected: app.compare_sel.player2.as_deref(),
                    focused: view.focus == 1,
                    filter: shown_filter(1),
                },
            );
            let stats: Vec<String> = CareerStat::ALL
                .iter()
                .map(|s| s.label().to_string())
                .collect();
            selector::render(
                frame,
                slots[2],
                &SelectorView {
                    title: "Stat",
                    items: &stats,
                    cursor: view.stat_cursor,
                    selected: app.compare_sel.stat.map(|s| s.label()),
                    focused: view.focus == 2,
                    filter: None,
                },
            );

            let stat_label = app.compare_sel.stat.map(|s| s.label()).unwrap_or("Stat");
            let pair = app.comparison_view();
            comparison::render(frame, layout.chart, layout.table, stat_label, pair.as_ref());
        }
    }

    help_bar::render(frame, layout.help_bar, view.filter_mode);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// Initializes the terminal, installs a panic hook that restores it on
/// crash, then alternates between drawing the current state and handling
/// keyboard input until the user quits. Fully synchronous: each keypress is
/// handled, the state updated, and the next frame drawn from scratch.
pub fn run(app: &mut AppState) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Restore the terminal before the default hook prints the panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view = ViewState::default();

    loop {
        terminal.draw(|frame| render_frame(frame, &view, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if input::handle_key(key, &mut view, app) == Some(UserAction::Quit) {
                    break;
                }
            }
        }
    }

    ratatui::restore();
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
