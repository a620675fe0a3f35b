// Keyboard input handling.
//
// Translates crossterm key events into ViewState/AppState mutations. Only
// quitting surfaces as a `UserAction`; everything else is handled by
// mutating state and letting the next frame re-render.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, TabId};
use crate::career::CareerStat;

use super::{
    batting_year_items, filtered_player_items, panel_count, pitching_year_items, UserAction,
    ViewState,
};

/// Handle a keyboard event.
///
/// Returns `Some(UserAction::Quit)` when the user asked to leave; `None`
/// when the key was handled (or ignored) locally.
pub fn handle_key(
    key_event: KeyEvent,
    view: &mut ViewState,
    app: &mut AppState,
) -> Option<UserAction> {
    // On Windows, crossterm emits both Press and Release events for each
    // physical keypress; ignoring non-Press events prevents
    // double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode.
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserAction::Quit);
    }

    if view.filter_mode {
        return handle_filter_mode(key_event, view, app);
    }

    match key_event.code {
        KeyCode::Char('q') => Some(UserAction::Quit),

        // Tab switching
        KeyCode::Char('1') => {
            switch_tab(view, app, TabId::Batting);
            None
        }
        KeyCode::Char('2') => {
            switch_tab(view, app, TabId::Pitching);
            None
        }
        KeyCode::Char('3') => {
            switch_tab(view, app, TabId::Comparison);
            None
        }

        // Panel focus
        KeyCode::Tab => {
            view.focus = (view.focus + 1) % panel_count(app.active_tab);
            clear_filter(view);
            None
        }
        KeyCode::BackTab => {
            let count = panel_count(app.active_tab);
            view.focus = (view.focus + count - 1) % count;
            clear_filter(view);
            None
        }

        // List navigation
        KeyCode::Up => {
            move_cursor(view, app, -1);
            None
        }
        KeyCode::Down => {
            move_cursor(view, app, 1);
            None
        }

        KeyCode::Enter => {
            commit_selection(view, app);
            None
        }

        // Filter only applies to the player lists.
        KeyCode::Char('/') => {
            if app.active_tab == TabId::Comparison && view.focus <= 1 {
                view.filter_mode = true;
                view.filter_text.clear();
                reset_focused_cursor(view, app.active_tab);
            }
            None
        }

        KeyCode::Esc => {
            clear_filter(view);
            None
        }

        _ => None,
    }
}

/// Filter mode: printable characters edit the filter, navigation and
/// selection stay available.
fn handle_filter_mode(
    key_event: KeyEvent,
    view: &mut ViewState,
    app: &mut AppState,
) -> Option<UserAction> {
    match key_event.code {
        KeyCode::Esc => {
            clear_filter(view);
        }
        KeyCode::Enter => {
            commit_selection(view, app);
        }
        KeyCode::Backspace => {
            view.filter_text.pop();
            reset_focused_cursor(view, app.active_tab);
        }
        KeyCode::Up => move_cursor(view, app, -1),
        KeyCode::Down => move_cursor(view, app, 1),
        KeyCode::Char(c) => {
            view.filter_text.push(c);
            reset_focused_cursor(view, app.active_tab);
        }
        _ => {}
    }
    None
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn switch_tab(view: &mut ViewState, app: &mut AppState, tab: TabId) {
    app.active_tab = tab;
    view.focus = 0;
    clear_filter(view);
}

fn clear_filter(view: &mut ViewState) {
    view.filter_mode = false;
    view.filter_text.clear();
}

/// Length of the list in the focused panel.
fn focused_len(view: &ViewState, app: &AppState) -> usize {
    match (app.active_tab, view.focus) {
        (TabId::Batting, 0) | (TabId::Pitching, 0) => app.teams.len(),
        (TabId::Batting, 1) => batting_year_items(app).len(),
        (TabId::Pitching, 1) => pitching_year_items(app).len(),
        (TabId::Comparison, 0) | (TabId::Comparison, 1) => {
            filtered_player_items(app, &view.filter_text).len()
        }
        (TabId::Comparison, 2) => CareerStat::ALL.len(),
        _ => 0,
    }
}

fn focused_cursor_mut<'a>(view: &'a mut ViewState, tab: TabId) -> &'a mut usize {
    match (tab, view.focus) {
        (TabId::Batting, 0) => &mut view.batting_team_cursor,
        (TabId::Batting, _) => &mut view.batting_year_cursor,
        (TabId::Pitching, 0) => &mut view.pitching_team_cursor,
        (TabId::Pitching, _) => &mut view.pitching_year_cursor,
        (TabId::Comparison, 0) => &mut view.player1_cursor,
        (TabId::Comparison, 1) => &mut view.player2_cursor,
        (TabId::Comparison, _) => &mut view.stat_cursor,
    }
}

fn reset_focused_cursor(view: &mut ViewState, tab: TabId) {
    *focused_cursor_mut(view, tab) = 0;
}

fn move_cursor(view: &mut ViewState, app: &AppState, delta: isize) {
    let len = focused_len(view, app);
    if len == 0 {
        return;
    }
    let cursor = focused_cursor_mut(view, app.active_tab);
    let current = (*cursor).min(len - 1);
    *cursor = if delta < 0 {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        (current + delta.unsigned_abs()).min(len - 1)
    };
}

/// Commit the focused panel's cursor as a selection.
fn commit_selection(view: &mut ViewState, app: &mut AppState) {
    let len = focused_len(view, app);
    if len == 0 {
        return;
    }
    let cursor = (*focused_cursor_mut(view, app.active_tab)).min(len - 1);

    match (app.active_tab, view.focus) {
        (TabId::Batting, 0) => {
            app.select_batting_team(app.teams[cursor].team_id.clone());
            view.batting_year_cursor = 0;
        }
        (TabId::Batting, 1) => {
            app.select_batting_year(batting_year_items(app)[cursor]);
        }
        (TabId::Pitching, 0) => {
            app.select_pitching_team(app.teams[cursor].team_id.clone());
            view.pitching_year_cursor = 0;
        }
        (TabId::Pitching, 1) => {
            app.select_pitching_year(pitching_year_items(app)[cursor]);
        }
        (TabId::Comparison, 0) => {
            let items = filtered_player_items(app, &view.filter_text);
            app.compare_sel.player1 = Some(items[cursor].clone());
            clear_filter(view);
        }
        (TabId::Comparison, 1) => {
            let items = filtered_player_items(app, &view.filter_text);
            app.compare_sel.player2 = Some(items[cursor].clone());
            clear_filter(view);
        }
        (TabId::Comparison, 2) => {
            app.compare_sel.stat = Some(CareerStat::ALL[cursor]);
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
