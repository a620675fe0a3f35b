// Team-year summaries: filter a season's roster rows for one team, drop
// non-participants, and fold the counting stats into labeled totals plus a
// display table.
//
// Participation thresholds: batters need at least one at-bat, pitchers at
// least one recorded out. Multiple rows for the same player (mid-season
// trades) are summed, never deduplicated.

use crate::enrich::{EnrichedBatting, EnrichedPitching};

// ---------------------------------------------------------------------------
// Shared types
// ---------------------------------------------------------------------------

/// One labeled total for the summary chart. Labels are fixed per kind and
/// always emitted in the same order, even when the total is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTotal {
    pub label: &'static str,
    pub value: f64,
}

/// Human-readable column headers for the batting table, aligned with
/// `BattingLine::cells`.
pub const BATTING_TABLE_HEADERS: [&str; 13] = [
    "Name",
    "Games",
    "At Bats",
    "Hits",
    "Runs",
    "Home Runs",
    "Doubles",
    "Triples",
    "RBIs",
    "Stolen Bases",
    "Caught Stealing",
    "Walks",
    "Strikeouts",
];

/// Human-readable column headers for the pitching table, aligned with
/// `PitchingLine::cells`.
pub const PITCHING_TABLE_HEADERS: [&str; 10] = [
    "Name",
    "Strikeouts",
    "Wins",
    "Losses",
    "Games",
    "Saves",
    "Hits",
    "Home Runs",
    "Earned Runs",
    "Innings Pitched",
];

// ---------------------------------------------------------------------------
// Batting
// ---------------------------------------------------------------------------

/// One row of the batting display table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattingLine {
    /// Display name; blank when the id had no People row.
    pub name: String,
    pub g: u32,
    pub ab: u32,
    pub h: u32,
    pub r: u32,
    pub hr: u32,
    pub doubles: u32,
    pub triples: u32,
    pub rbi: u32,
    pub sb: u32,
    pub cs: u32,
    pub bb: u32,
    pub so: u32,
}

impl BattingLine {
    /// Render the line as table cells, aligned with
    /// `BATTING_TABLE_HEADERS`.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.g.to_string(),
            self.ab.to_string(),
            self.h.to_string(),
            self.r.to_string(),
            self.hr.to_string(),
            self.doubles.to_string(),
            self.triples.to_string(),
            self.rbi.to_string(),
            self.sb.to_string(),
            self.cs.to_string(),
            self.bb.to_string(),
            self.so.to_string(),
        ]
    }
}

/// A team-year batting summary: chart totals plus the participant table,
/// sorted by hits descending.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamYearBatting {
    pub totals: Vec<StatTotal>,
    pub lines: Vec<BattingLine>,
}

/// Summarize one team's batting for one season.
///
/// Filters to the team/year, drops rows with zero at-bats, stable-sorts the
/// rest by hits descending (ties keep source order), and sums the chart
/// stats over exactly those rows. An empty match is a valid result: zero
/// totals, no lines.
pub fn batting_team_year(rows: &[EnrichedBatting], team_id: &str, year: u16) -> TeamYearBatting {
    let mut selected: Vec<&EnrichedBatting> = rows
        .iter()
        .filter(|row| row.rec.team_id == team_id && row.rec.year == year && row.rec.ab > 0)
        .collect();
    selected.sort_by(|a, b| b.rec.h.cmp(&a.rec.h));

    let sum = |f: fn(&EnrichedBatting) -> u32| -> f64 {
        selected.iter().map(|row| u64::from(f(row))).sum::<u64>() as f64
    };

    let totals = vec![
        StatTotal { label: "Hits", value: sum(|r| r.rec.h) },
        StatTotal { label: "Home Runs", value: sum(|r| r.rec.hr) },
        StatTotal { label: "Runs", value: sum(|r| r.rec.r) },
        StatTotal { label: "RBIs", value: sum(|r| r.rec.rbi) },
        StatTotal { label: "Doubles", value: sum(|r| r.rec.doubles) },
        StatTotal { label: "Triples", value: sum(|r| r.rec.triples) },
        StatTotal { label: "Strikeouts", value: sum(|r| r.rec.so) },
    ];

    let lines = selected
        .iter()
        .map(|row| BattingLine {
            name: row.display_name().unwrap_or_default(),
            g: row.rec.g,
            ab: row.rec.ab,
            h: row.rec.h,
            r: row.rec.r,
            hr: row.rec.hr,
            doubles: row.rec.doubles,
            triples: row.rec.triples,
            rbi: row.rec.rbi,
            sb: row.rec.sb,
            cs: row.rec.cs,
            bb: row.rec.bb,
            so: row.rec.so,
        })
        .collect();

    TeamYearBatting { totals, lines }
}

// ---------------------------------------------------------------------------
// Pitching
// ---------------------------------------------------------------------------

/// One row of the pitching display table.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchingLine {
    pub name: String,
    pub so: u32,
    pub w: u32,
    pub l: u32,
    pub g: u32,
    pub sv: u32,
    pub h: u32,
    pub hr: u32,
    pub er: u32,
    /// Derived innings pitched (`ip_outs / 3`).
    pub ip: f64,
}

impl PitchingLine {
    /// Render the line as table cells, aligned with
    /// `PITCHING_TABLE_HEADERS`.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.so.to_string(),
            self.w.to_string(),
            self.l.to_string(),
            self.g.to_string(),
            self.sv.to_string(),
            self.h.to_string(),
            self.hr.to_string(),
            self.er.to_string(),
            format!("{:.1}", self.ip),
        ]
    }
}

/// A team-year pitching summary, sorted by strikeouts descending.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamYearPitching {
    pub totals: Vec<StatTotal>,
    pub lines: Vec<PitchingLine>,
}

/// Summarize one team's pitching for one season.
///
/// Rows with zero recorded outs (derived innings exactly 0) are excluded;
/// `ip_outs` is integral so the comparison needs no epsilon.
pub fn pitching_team_year(
    rows: &[EnrichedPitching],
    team_id: &str,
    year: u16,
) -> TeamYearPitching {
    let mut selected: Vec<&EnrichedPitching> = rows
        .iter()
        .filter(|row| {
            row.rec.team_id == team_id && row.rec.year == year && row.rec.innings() > 0.0
        })
        .collect();
    selected.sort_by(|a, b| b.rec.so.cmp(&a.rec.so));

    let sum = |f: fn(&EnrichedPitching) -> u32| -> f64 {
        selected.iter().map(|row| u64::from(f(row))).sum::<u64>() as f64
    };
    let ip_total: f64 = selected.iter().map(|row| row.rec.innings()).sum();

    let totals = vec![
        StatTotal { label: "Strikeouts", value: sum(|r| r.rec.so) },
        StatTotal { label: "Wins", value: sum(|r| r.rec.w) },
        StatTotal { label: "Losses", value: sum(|r| r.rec.l) },
        StatTotal { label: "Games", value: sum(|r| r.rec.g) },
        StatTotal { label: "Saves", value: sum(|r| r.rec.sv) },
        StatTotal { label: "Hits", value: sum(|r| r.rec.h) },
        StatTotal { label: "Home Runs", value: sum(|r| r.rec.hr) },
        StatTotal { label: "ER", value: sum(|r| r.rec.er) },
        StatTotal { label: "IP", value: ip_total },
    ];

    let lines = selected
        .iter()
        .map(|row| PitchingLine {
            name: row.display_name().unwrap_or_default(),
            so: row.rec.so,
            w: row.rec.w,
            l: row.rec.l,
            g: row.rec.g,
            sv: row.rec.sv,
            h: row.rec.h,
            hr: row.rec.hr,
            er: row.rec.er,
            ip: row.rec.innings(),
        })
        .collect();

    TeamYearPitching { totals, lines }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
