// Session state: the loaded tables plus the user's current selections.
//
// The selections live in one explicit struct per tab instead of ambient
// widget state. View accessors recompute from the tables on every call and
// return `None` while a selection is incomplete; that is the normal
// intermediate state before the user has picked everything, not an error.

use tracing::info;

use crate::career::{compare_career, CareerStat, CareerSummary};
use crate::datasets::{Tables, Team};
use crate::enrich::{enrich_batting, enrich_pitching, name_index, EnrichedBatting, EnrichedPitching};
use crate::summary::{batting_team_year, pitching_team_year, TeamYearBatting, TeamYearPitching};

// ---------------------------------------------------------------------------
// Tabs and selections
// ---------------------------------------------------------------------------

/// The three dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Batting,
    Pitching,
    Comparison,
}

/// Team and season chosen on a batting or pitching tab. The year only
/// makes sense relative to a team, so changing the team clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamYearSelection {
    pub team_id: Option<String>,
    pub year: Option<u16>,
}

/// Players and stat chosen on the comparison tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompareSelection {
    pub player1: Option<String>,
    pub player2: Option<String>,
    pub stat: Option<CareerStat>,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete session state: immutable loaded data plus mutable
/// selections.
pub struct AppState {
    /// Teams sorted by display name, deduplicated (the source table carries
    /// one row per team-season).
    pub teams: Vec<Team>,
    pub batting: Vec<EnrichedBatting>,
    pub pitching: Vec<EnrichedPitching>,
    /// Unique batting display names, sorted, for the comparison selectors.
    pub player_names: Vec<String>,
    pub active_tab: TabId,
    pub batting_sel: TeamYearSelection,
    pub pitching_sel: TeamYearSelection,
    pub compare_sel: CompareSelection,
}

impl AppState {
    /// Build the session from freshly loaded tables: enrich both record
    /// tables with names and precompute the selector lists.
    pub fn new(tables: &Tables) -> Self {
        let index = name_index(&tables.players);
        let batting = enrich_batting(&tables.batting, &index);
        let pitching = enrich_pitching(&tables.pitching, &index);

        let mut teams = tables.teams.clone();
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        teams.dedup_by(|a, b| a.name == b.name);

        let mut player_names: Vec<String> =
            batting.iter().filter_map(|row| row.display_name()).collect();
        player_names.sort();
        player_names.dedup();

        info!(
            "Session ready: {} teams, {} batting rows, {} pitching rows, {} player names",
            teams.len(),
            batting.len(),
            pitching.len(),
            player_names.len()
        );

        AppState {
            teams,
            batting,
            pitching,
            player_names,
            active_tab: TabId::Batting,
            batting_sel: TeamYearSelection::default(),
            pitching_sel: TeamYearSelection::default(),
            compare_sel: CompareSelection::default(),
        }
    }

    // -- Selector data ------------------------------------------------------

    /// Seasons in which the team has batting rows, ascending and unique.
    pub fn batting_years(&self, team_id: &str) -> Vec<u16> {
        let mut years: Vec<u16> = self
            .batting
            .iter()
            .filter(|row| row.rec.team_id == team_id)
            .map(|row| row.rec.year)
            .collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Seasons in which the team has pitching rows, ascending and unique.
    pub fn pitching_years(&self, team_id: &str) -> Vec<u16> {
        let mut years: Vec<u16> = self
            .pitching
            .iter()
            .filter(|row| row.rec.team_id == team_id)
            .map(|row| row.rec.year)
            .collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    // -- Selection mutators -------------------------------------------------

    /// Choose the batting tab's team. A new team invalidates the year.
    pub fn select_batting_team(&mut self, team_id: String) {
        if self.batting_sel.team_id.as_deref() != Some(team_id.as_str()) {
            self.batting_sel = TeamYearSelection {
                team_id: Some(team_id),
                year: None,
            };
        }
    }

    pub fn select_batting_year(&mut self, year: u16) {
        self.batting_sel.year = Some(year);
    }

    /// Choose the pitching tab's team. A new team invalidates the year.
    pub fn select_pitching_team(&mut self, team_id: String) {
        if self.pitching_sel.team_id.as_deref() != Some(team_id.as_str()) {
            self.pitching_sel = TeamYearSelection {
                team_id: Some(team_id),
                year: None,
            };
        }
    }

    pub fn select_pitching_year(&mut self, year: u16) {
        self.pitching_sel.year = Some(year);
    }

    // -- Views --------------------------------------------------------------

    /// The batting tab's summary, `None` until both team and year are
    /// chosen. Recomputed from the tables on every call.
    pub fn batting_view(&self) -> Option<TeamYearBatting> {
        let team_id = self.batting_sel.team_id.as_deref()?;
        let year = self.batting_sel.year?;
        Some(batting_team_year(&self.batting, team_id, year))
    }

    /// The pitching tab's summary, `None` until both team and year are
    /// chosen.
    pub fn pitching_view(&self) -> Option<TeamYearPitching> {
        let team_id = self.pitching_sel.team_id.as_deref()?;
        let year = self.pitching_sel.year?;
        Some(pitching_team_year(&self.pitching, team_id, year))
    }

    /// The comparison tab's paired career summaries, `None` until both
    /// players and a stat are chosen.
    pub fn comparison_view(&self) -> Option<(CareerSummary, CareerSummary)> {
        let player1 = self.compare_sel.player1.as_deref()?;
        let player2 = self.compare_sel.player2.as_deref()?;
        let stat = self.compare_sel.stat?;
        Some(compare_career(&self.batting, player1, player2, stat))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::{BattingRecord, PitchingRecord, Player};

    fn player(id: &str, first: &str, last: &str) -> Player {
        Player {
            player_id: id.into(),
            name_first: first.into(),
            name_last: last.into(),
        }
    }

    fn team(id: &str, name: &str) -> Team {
        Team {
            team_id: id.into(),
            name: name.into(),
        }
    }

    fn bat(player_id: &str, team: &str, year: u16, ab: u32, h: u32) -> BattingRecord {
        BattingRecord {
            player_id: player_id.into(),
            team_id: team.into(),
            year,
            g: 10,
            ab,
            h,
            r: 2,
            hr: 1,
            doubles: 1,
            triples: 0,
            rbi: 3,
            sb: 0,
            cs: 0,
            bb: 1,
            so: 2,
        }
    }

    fn pitch(player_id: &str, team: &str, year: u16, ip_outs: u32) -> PitchingRecord {
        PitchingRecord {
            player_id: player_id.into(),
            team_id: team.into(),
            year,
            ip_outs,
            w: 1,
            l: 1,
            g: 3,
            sv: 0,
            h: 10,
            hr: 1,
            er: 4,
            so: 12,
        }
    }

    fn test_tables() -> Tables {
        Tables {
            players: vec![
                player("ruthba01", "Babe", "Ruth"),
                player("gehrilo01", "Lou", "Gehrig"),
                player("johnswa01", "Walter", "Johnson"),
            ],
            // One row per team-season, as in the source table.
            teams: vec![
                team("NYA", "New York Yankees"),
                team("NYA", "New York Yankees"),
                team("BOS", "Boston Red Sox"),
            ],
            batting: vec![
                bat("ruthba01", "NYA", 1927, 540, 192),
                bat("ruthba01", "NYA", 1926, 495, 184),
                bat("gehrilo01", "NYA", 1927, 584, 218),
            ],
            pitching: vec![
                pitch("johnswa01", "WS1", 1913, 1038),
                pitch("johnswa01", "WS1", 1914, 1036),
            ],
        }
    }

    #[test]
    fn teams_sorted_and_deduplicated() {
        let state = AppState::new(&test_tables());
        let names: Vec<&str> = state.teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Boston Red Sox", "New York Yankees"]);
    }

    #[test]
    fn player_names_sorted_and_unique() {
        let state = AppState::new(&test_tables());
        assert_eq!(state.player_names, vec!["Babe Ruth", "Lou Gehrig"]);
    }

    #[test]
    fn batting_years_ascending_unique() {
        let state = AppState::new(&test_tables());
        assert_eq!(state.batting_years("NYA"), vec![1926, 1927]);
        assert!(state.batting_years("SLN").is_empty());
    }

    #[test]
    fn pitching_years_ascending_unique() {
        let state = AppState::new(&test_tables());
        assert_eq!(state.pitching_years("WS1"), vec![1913, 1914]);
    }

    #[test]
    fn views_none_until_selection_complete() {
        let mut state = AppState::new(&test_tables());
        assert!(state.batting_view().is_none());
        assert!(state.pitching_view().is_none());
        assert!(state.comparison_view().is_none());

        state.select_batting_team("NYA".into());
        assert!(state.batting_view().is_none());

        state.select_batting_year(1927);
        assert!(state.batting_view().is_some());
    }

    #[test]
    fn changing_team_resets_year() {
        let mut state = AppState::new(&test_tables());
        state.select_batting_team("NYA".into());
        state.select_batting_year(1927);
        state.select_batting_team("BOS".into());
        assert_eq!(state.batting_sel.year, None);

        // Re-selecting the same team keeps the year.
        state.select_batting_team("BOS".into());
        state.select_batting_year(1930);
        state.select_batting_team("BOS".into());
        assert_eq!(state.batting_sel.year, Some(1930));
    }

    #[test]
    fn batting_view_recomputes_identically() {
        let mut state = AppState::new(&test_tables());
        state.select_batting_team("NYA".into());
        state.select_batting_year(1927);
        let first = state.batting_view().unwrap();
        let second = state.batting_view().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.lines.len(), 2);
    }

    #[test]
    fn comparison_view_requires_all_three_selections() {
        let mut state = AppState::new(&test_tables());
        state.compare_sel.player1 = Some("Babe Ruth".into());
        state.compare_sel.player2 = Some("Lou Gehrig".into());
        assert!(state.comparison_view().is_none());

        state.compare_sel.stat = Some(CareerStat::Hits);
        let (ruth, gehrig) = state.comparison_view().unwrap();
        assert_eq!(ruth.name, "Babe Ruth");
        assert_eq!(gehrig.name, "Lou Gehrig");
    }

    #[test]
    fn tab_errors_stay_local() {
        // A nonsense selection on one tab leaves the others computable.
        let mut state = AppState::new(&test_tables());
        state.select_batting_team("NOPE".into());
        state.select_batting_year(1800);
        let empty = state.batting_view().unwrap();
        assert!(empty.lines.is_empty());

        state.select_pitching_team("WS1".into());
        state.select_pitching_year(1913);
        assert_eq!(state.pitching_view().unwrap().lines.len(), 1);
    }
}
