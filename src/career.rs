// Career comparisons: one player's batting rows across all teams and
// seasons, reduced to a scalar total and a year-indexed series.
//
// Identity is the display name, because that is what the selector exposes.
// Two players sharing a full name are merged indistinguishably; a known
// limitation of the name-based interaction model.

use std::collections::BTreeMap;

use crate::datasets::BattingRecord;
use crate::enrich::EnrichedBatting;

// ---------------------------------------------------------------------------
// Stat selection
// ---------------------------------------------------------------------------

/// The career stats offered by the comparison view, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareerStat {
    Avg,
    Hits,
    Rbi,
    Runs,
    HomeRuns,
}

impl CareerStat {
    pub const ALL: [CareerStat; 5] = [
        CareerStat::Avg,
        CareerStat::Hits,
        CareerStat::Rbi,
        CareerStat::Runs,
        CareerStat::HomeRuns,
    ];

    /// Short label as shown in the stat selector and chart axes.
    pub fn label(self) -> &'static str {
        match self {
            CareerStat::Avg => "AVG",
            CareerStat::Hits => "H",
            CareerStat::Rbi => "RBI",
            CareerStat::Runs => "R",
            CareerStat::HomeRuns => "HR",
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A career total: either a summed counting stat or the derived batting
/// average. An average over zero at-bats is `NaN` and renders as
/// unavailable rather than crashing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CareerTotal {
    Counting(u64),
    Average(f64),
}

impl CareerTotal {
    /// Numeric value for charting. `NaN` marks an undefined average; chart
    /// code skips non-finite values.
    pub fn value(self) -> f64 {
        match self {
            CareerTotal::Counting(n) => n as f64,
            CareerTotal::Average(v) => v,
        }
    }

    /// Text form for labels: integers plain, averages with three decimals,
    /// undefined averages as "unavailable".
    pub fn display(self) -> String {
        match self {
            CareerTotal::Counting(n) => n.to_string(),
            CareerTotal::Average(v) if v.is_finite() => format!("{v:.3}"),
            CareerTotal::Average(_) => "unavailable".to_string(),
        }
    }
}

/// One point of the year-indexed series. Years appear only when the player
/// has at least one row; gap years are never zero-filled. An AVG point for
/// a season with zero at-bats is `NaN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonPoint {
    pub year: u16,
    pub value: f64,
}

/// One player's career reduction for a chosen stat.
#[derive(Debug, Clone, PartialEq)]
pub struct CareerSummary {
    pub name: String,
    pub total: CareerTotal,
    /// Year-ascending series.
    pub seasons: Vec<SeasonPoint>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Round to three decimal places, the display precision for batting
/// averages. `NaN` passes through.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Reduce one player's career (matched by exact display name) to a total
/// and a year series for the chosen stat.
///
/// Per-year averages divide per-year hit and at-bat sums; averaging
/// row-level ratios would bias toward short stints.
pub fn career_summary(rows: &[EnrichedBatting], name: &str, stat: CareerStat) -> CareerSummary {
    let selected: Vec<&EnrichedBatting> = rows
        .iter()
        .filter(|row| row.display_name().as_deref() == Some(name))
        .collect();

    let (total, seasons) = match stat {
        CareerStat::Avg => {
            let hits: u64 = selected.iter().map(|r| u64::from(r.rec.h)).sum();
            let at_bats: u64 = selected.iter().map(|r| u64::from(r.rec.ab)).sum();
            let total = if at_bats == 0 {
                f64::NAN
            } else {
                round3(hits as f64 / at_bats as f64)
            };

            let mut by_year: BTreeMap<u16, (u64, u64)> = BTreeMap::new();
            for row in &selected {
                let entry = by_year.entry(row.rec.year).or_insert((0, 0));
                entry.0 += u64::from(row.rec.h);
                entry.1 += u64::from(row.rec.ab);
            }
            let seasons = by_year
                .into_iter()
                .map(|(year, (h, ab))| SeasonPoint {
                    year,
                    value: if ab == 0 { f64::NAN } else { h as f64 / ab as f64 },
                })
                .collect();

            (CareerTotal::Average(total), seasons)
        }
        CareerStat::Hits | CareerStat::Rbi | CareerStat::Runs | CareerStat::HomeRuns => {
            let pick = |rec: &BattingRecord| -> u64 {
                u64::from(match stat {
                    CareerStat::Hits => rec.h,
                    CareerStat::Rbi => rec.rbi,
                    CareerStat::Runs => rec.r,
                    CareerStat::HomeRuns => rec.hr,
                    CareerStat::Avg => 0, // handled in the arm above
                })
            };

            let total: u64 = selected.iter().map(|r| pick(&r.rec)).sum();

            let mut by_year: BTreeMap<u16, u64> = BTreeMap::new();
            for row in &selected {
                *by_year.entry(row.rec.year).or_insert(0) += pick(&row.rec);
            }
            let seasons = by_year
                .into_iter()
                .map(|(year, sum)| SeasonPoint {
                    year,
                    value: sum as f64,
                })
                .collect();

            (CareerTotal::Counting(total), seasons)
        }
    };

    CareerSummary {
        name: name.to_string(),
        total,
        seasons,
    }
}

/// Reduce two players side by side for the comparison view.
pub fn compare_career(
    rows: &[EnrichedBatting],
    name1: &str,
    name2: &str,
    stat: CareerStat,
) -> (CareerSummary, CareerSummary) {
    (
        career_summary(rows, name1, stat),
        career_summary(rows, name2, stat),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
