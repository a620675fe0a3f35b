// Status bar: active tab and the current selections at a glance.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, TabId};

fn tab_name(tab: TabId) -> &'static str {
    match tab {
        TabId::Batting => "Batting",
        TabId::Pitching => "Pitching",
        TabId::Comparison => "Player Comparison",
    }
}

/// Format the active tab's selections, with "--" placeholders while the
/// user is still choosing.
fn selection_summary(app: &AppState) -> String {
    let team_name = |team_id: Option<&str>| -> String {
        team_id
            .and_then(|id| app.teams.iter().find(|t| t.team_id == id))
            .map(|t| t.name.clone())
            .unwrap_or_else(|| "--".to_string())
    };
    let year = |year: Option<u16>| -> String {
        year.map(|y| y.to_string()).unwrap_or_else(|| "--".to_string())
    };

    match app.active_tab {
        TabId::Batting => format!(
            "Team: {} | Year: {}",
            team_name(app.batting_sel.team_id.as_deref()),
            year(app.batting_sel.year)
        ),
        TabId::Pitching => format!(
            "Team: {} | Year: {}",
            team_name(app.pitching_sel.team_id.as_deref()),
            year(app.pitching_sel.year)
        ),
        TabId::Comparison => format!(
            "{} vs {} | Stat: {}",
            app.compare_sel.player1.as_deref().unwrap_or("--"),
            app.compare_sel.player2.as_deref().unwrap_or("--"),
            app.compare_sel
                .stat
                .map(|s| s.label())
                .unwrap_or("--")
        ),
    }
}

/// Render the one-row status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &AppState) {
    let text = format!(
        " dugout | {} | {}",
        tab_name(app.active_tab),
        selection_summary(app)
    );
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default().fg(Color::White),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::CareerStat;
    use crate::datasets::Tables;

    fn empty_state() -> AppState {
        AppState::new(&Tables {
            players: vec![],
            teams: vec![],
            batting: vec![],
            pitching: vec![],
        })
    }

    #[test]
    fn summary_uses_placeholders_before_selection() {
        let app = empty_state();
        assert_eq!(selection_summary(&app), "Team: -- | Year: --");
    }

    #[test]
    fn summary_shows_comparison_selections() {
        let mut app = empty_state();
        app.active_tab = TabId::Comparison;
        app.compare_sel.player1 = Some("Babe Ruth".into());
        app.compare_sel.stat = Some(CareerStat::Avg);
        assert_eq!(selection_summary(&app), "Babe Ruth vs -- | Stat: AVG");
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(80, 3);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let app = empty_state();
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();
    }
}
