// Dataset loading for the Lahman-style CSV exports.
//
// Four tables: People (player names), Teams (franchise names), Batting and
// Pitching (one row per player per team per season). Each table loads
// all-or-nothing; a missing file or a header row without the required
// columns fails the load for that table.

use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::warn;

use crate::config::DataPaths;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A row of the People table. Name halves may be empty in the source data;
/// they are kept verbatim and the join layer decides how to present them.
#[derive(Debug, Clone)]
pub struct Player {
    pub player_id: String,
    pub name_first: String,
    pub name_last: String,
}

/// A row of the Teams table. `team_id` and `name` are a bijection: the UI
/// selects by display name and the aggregators filter by id.
#[derive(Debug, Clone)]
pub struct Team {
    pub team_id: String,
    pub name: String,
}

/// One player-team-season batting line. A player traded mid-season has one
/// row per team; aggregations sum over every matching row, never a
/// deduplicated set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattingRecord {
    pub player_id: String,
    pub team_id: String,
    pub year: u16,
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

/// One player-team-season pitching line. `ip_outs` is outs recorded;
/// innings pitched is the fractional `ip_outs / 3`.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchingRecord {
    pub player_id: String,
    pub team_id: String,
    pub year: u16,
    pub ip_outs: u32,
    pub w: u32,
    pub l: u32,
    pub g: u32,
    pub sv: u32,
    pub h: u32,
    pub hr: u32,
    pub er: u32,
    pub so: u32,
}

impl PitchingRecord {
    /// Innings pitched as a fraction (three outs per inning).
    pub fn innings(&self) -> f64 {
        f64::from(self.ip_outs) / 3.0
    }
}

/// All four tables loaded and ready for a browsing session.
#[derive(Debug, Clone)]
pub struct Tables {
    pub players: Vec<Player>,
    pub teams: Vec<Team>,
    pub batting: Vec<BattingRecord>,
    pub pitching: Vec<PitchingRecord>,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{path} is missing required columns: {}", .columns.join(", "))]
    MissingColumns { path: String, columns: Vec<String> },
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private), Lahman column names
// ---------------------------------------------------------------------------

/// People row. Extra columns (birth data, debut dates, ...) are absorbed
/// via `#[serde(flatten)]`.
#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawPlayer {
    playerID: String,
    #[serde(default)]
    nameFirst: String,
    #[serde(default)]
    nameLast: String,
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

/// Teams row. The table carries dozens of season-stat columns; only the
/// id/name pair matters here.
#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawTeam {
    teamID: String,
    name: String,
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

/// Batting row. Counting columns are `Option<u32>` because early-era
/// exports leave some of them empty; an empty cell counts as zero, which
/// matches how the sums behave downstream.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawBatting {
    playerID: String,
    teamID: String,
    yearID: u16,
    G: Option<u32>,
    AB: Option<u32>,
    H: Option<u32>,
    R: Option<u32>,
    HR: Option<u32>,
    #[serde(rename = "2B")]
    doubles: Option<u32>,
    #[serde(rename = "3B")]
    triples: Option<u32>,
    RBI: Option<u32>,
    SB: Option<u32>,
    CS: Option<u32>,
    BB: Option<u32>,
    SO: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawPitching {
    playerID: String,
    teamID: String,
    yearID: u16,
    IPouts: Option<u32>,
    W: Option<u32>,
    L: Option<u32>,
    G: Option<u32>,
    SV: Option<u32>,
    H: Option<u32>,
    HR: Option<u32>,
    ER: Option<u32>,
    SO: Option<u32>,
}

// ---------------------------------------------------------------------------
// Required columns per table
// ---------------------------------------------------------------------------

const PEOPLE_COLUMNS: &[&str] = &["playerID", "nameFirst", "nameLast"];

const TEAMS_COLUMNS: &[&str] = &["teamID", "name"];

const BATTING_COLUMNS: &[&str] = &[
    "playerID", "teamID", "yearID", "G", "AB", "H", "R", "HR", "2B", "3B", "RBI", "SB", "CS",
    "BB", "SO",
];

const PITCHING_COLUMNS: &[&str] = &[
    "playerID", "teamID", "yearID", "IPouts", "W", "L", "G", "SV", "H", "HR", "ER", "SO",
];

/// Internal failure from a reader-based loader, tagged with the path by the
/// public path-based wrappers.
#[derive(Debug)]
enum LoadFailure {
    Csv(csv::Error),
    MissingColumns(Vec<String>),
}

/// Verify that every required column appears in the header row.
///
/// `Option` fields would otherwise silently deserialize as `None` when their
/// column is absent, turning a malformed file into a table of zeros.
fn check_headers<R: Read>(
    reader: &mut csv::Reader<R>,
    required: &[&str],
) -> Result<(), LoadFailure> {
    let headers = reader.headers().map_err(LoadFailure::Csv)?;
    let missing: Vec<String> = required
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadFailure::MissingColumns(missing))
    }
}

// ---------------------------------------------------------------------------
// Reader-based loaders (private, enable testing without temp files)
// ---------------------------------------------------------------------------

fn load_players_from_reader<R: Read>(rdr: R) -> Result<Vec<Player>, LoadFailure> {
    let mut reader = csv::Reader::from_reader(rdr);
    check_headers(&mut reader, PEOPLE_COLUMNS)?;

    let mut players = Vec::new();
    for result in reader.deserialize::<RawPlayer>() {
        match result {
            Ok(raw) => players.push(Player {
                player_id: raw.playerID.trim().to_string(),
                name_first: raw.nameFirst.trim().to_string(),
                name_last: raw.nameLast.trim().to_string(),
            }),
            Err(e) => warn!("skipping malformed People row: {}", e),
        }
    }
    Ok(players)
}

fn load_teams_from_reader<R: Read>(rdr: R) -> Result<Vec<Team>, LoadFailure> {
    let mut reader = csv::Reader::from_reader(rdr);
    check_headers(&mut reader, TEAMS_COLUMNS)?;

    let mut teams = Vec::new();
    for result in reader.deserialize::<RawTeam>() {
        match result {
            Ok(raw) => teams.push(Team {
                team_id: raw.teamID.trim().to_string(),
                name: raw.name.trim().to_string(),
            }),
            Err(e) => warn!("skipping malformed Teams row: {}", e),
        }
    }
    Ok(teams)
}

fn load_batting_from_reader<R: Read>(rdr: R) -> Result<Vec<BattingRecord>, LoadFailure> {
    let mut reader = csv::Reader::from_reader(rdr);
    check_headers(&mut reader, BATTING_COLUMNS)?;

    let mut records = Vec::new();
    for result in reader.deserialize::<RawBatting>() {
        match result {
            Ok(raw) => records.push(BattingRecord {
                player_id: raw.playerID.trim().to_string(),
                team_id: raw.teamID.trim().to_string(),
                year: raw.yearID,
                g: raw.G.unwrap_or(0),
                ab: raw.AB.unwrap_or(0),
                h: raw.H.unwrap_or(0),
                r: raw.R.unwrap_or(0),
                hr: raw.HR.unwrap_or(0),
                doubles: raw.doubles.unwrap_or(0),
                triples: raw.triples.unwrap_or(0),
                rbi: raw.RBI.unwrap_or(0),
                sb: raw.SB.unwrap_or(0),
                cs: raw.CS.unwrap_or(0),
                bb: raw.BB.unwrap_or(0),
                so: raw.SO.unwrap_or(0),
            }),
            Err(e) => warn!("skipping malformed Batting row: {}", e),
        }
    }
    Ok(records)
}

fn load_pitching_from_reader<R: Read>(rdr: R) -> Result<Vec<PitchingRecord>, LoadFailure> {
    let mut reader = csv::Reader::from_reader(rdr);
    check_headers(&mut reader, PITCHING_COLUMNS)?;

    let mut records = Vec::new();
    for result in reader.deserialize::<RawPitching>() {
        match result {
            Ok(raw) => records.push(PitchingRecord {
                player_id: raw.playerID.trim().to_string(),
                team_id: raw.teamID.trim().to_string(),
                year: raw.yearID,
                ip_outs: raw.IPouts.unwrap_or(0),
                w: raw.W.unwrap_or(0),
                l: raw.L.unwrap_or(0),
                g: raw.G.unwrap_or(0),
                sv: raw.SV.unwrap_or(0),
                h: raw.H.unwrap_or(0),
                hr: raw.HR.unwrap_or(0),
                er: raw.ER.unwrap_or(0),
                so: raw.SO.unwrap_or(0),
            }),
            Err(e) => warn!("skipping malformed Pitching row: {}", e),
        }
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Public path-based loaders
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<std::fs::File, DatasetError> {
    std::fs::File::open(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

fn tag_failure(path: &Path, failure: LoadFailure) -> DatasetError {
    match failure {
        LoadFailure::Csv(source) => DatasetError::Csv {
            path: path.display().to_string(),
            source,
        },
        LoadFailure::MissingColumns(columns) => DatasetError::MissingColumns {
            path: path.display().to_string(),
            columns,
        },
    }
}

/// Load the People table from a CSV file.
pub fn load_players(path: &Path) -> Result<Vec<Player>, DatasetError> {
    load_players_from_reader(open(path)?).map_err(|f| tag_failure(path, f))
}

/// Load the Teams table from a CSV file.
pub fn load_teams(path: &Path) -> Result<Vec<Team>, DatasetError> {
    load_teams_from_reader(open(path)?).map_err(|f| tag_failure(path, f))
}

/// Load the Batting table from a CSV file.
pub fn load_batting(path: &Path) -> Result<Vec<BattingRecord>, DatasetError> {
    load_batting_from_reader(open(path)?).map_err(|f| tag_failure(path, f))
}

/// Load the Pitching table from a CSV file.
pub fn load_pitching(path: &Path) -> Result<Vec<PitchingRecord>, DatasetError> {
    load_pitching_from_reader(open(path)?).map_err(|f| tag_failure(path, f))
}

/// Load all four tables using the configured paths. Each table is
/// all-or-nothing; the first failure aborts the load.
pub fn load_all(paths: &DataPaths) -> Result<Tables, DatasetError> {
    let players = load_players(Path::new(&paths.people))?;
    let teams = load_teams(Path::new(&paths.teams))?;
    let batting = load_batting(Path::new(&paths.batting))?;
    let pitching = load_pitching(Path::new(&paths.pitching))?;

    Ok(Tables {
        players,
        teams,
        batting,
        pitching,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- People --

    #[test]
    fn people_rows_parsed_and_trimmed() {
        let csv_data = "\
playerID,nameFirst,nameLast
ruthba01,Babe,Ruth
  cobbty01 , Ty , Cobb ";

        let players = load_players_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].player_id, "ruthba01");
        assert_eq!(players[0].name_first, "Babe");
        assert_eq!(players[0].name_last, "Ruth");
        assert_eq!(players[1].player_id, "cobbty01");
        assert_eq!(players[1].name_first, "Ty");
    }

    #[test]
    fn people_extra_columns_ignored() {
        let csv_data = "\
playerID,birthYear,nameFirst,nameLast,debut
ruthba01,1895,Babe,Ruth,1914-07-11";

        let players = load_players_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name_last, "Ruth");
    }

    #[test]
    fn people_empty_name_halves_kept() {
        let csv_data = "\
playerID,nameFirst,nameLast
mystery01,,Smith";

        let players = load_players_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(players[0].name_first, "");
        assert_eq!(players[0].name_last, "Smith");
    }

    #[test]
    fn people_missing_column_rejected() {
        let csv_data = "\
playerID,nameFirst
ruthba01,Babe";

        let err = load_players_from_reader(csv_data.as_bytes()).unwrap_err();
        match err {
            LoadFailure::MissingColumns(columns) => {
                assert_eq!(columns, vec!["nameLast".to_string()]);
            }
            LoadFailure::Csv(e) => panic!("expected MissingColumns, got CSV error: {e}"),
        }
    }

    // -- Teams --

    #[test]
    fn teams_rows_parsed() {
        let csv_data = "\
teamID,lgID,name,W,L
NYA,AL,New York Yankees,110,44
BOS,AL,Boston Red Sox,92,62";

        let teams = load_teams_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].team_id, "NYA");
        assert_eq!(teams[0].name, "New York Yankees");
    }

    #[test]
    fn teams_missing_name_column_rejected() {
        let csv_data = "\
teamID,lgID
NYA,AL";

        let err = load_teams_from_reader(csv_data.as_bytes()).unwrap_err();
        match err {
            LoadFailure::MissingColumns(columns) => {
                assert_eq!(columns, vec!["name".to_string()]);
            }
            LoadFailure::Csv(e) => panic!("expected MissingColumns, got CSV error: {e}"),
        }
    }

    // -- Batting --

    #[test]
    fn batting_rows_parsed() {
        let csv_data = "\
playerID,teamID,yearID,G,AB,H,R,HR,2B,3B,RBI,SB,CS,BB,SO
ruthba01,NYA,1927,151,540,192,158,60,29,8,165,7,6,137,89";

        let records = load_batting_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.player_id, "ruthba01");
        assert_eq!(rec.team_id, "NYA");
        assert_eq!(rec.year, 1927);
        assert_eq!(rec.g, 151);
        assert_eq!(rec.ab, 540);
        assert_eq!(rec.h, 192);
        assert_eq!(rec.hr, 60);
        assert_eq!(rec.doubles, 29);
        assert_eq!(rec.triples, 8);
        assert_eq!(rec.rbi, 165);
        assert_eq!(rec.sb, 7);
        assert_eq!(rec.cs, 6);
        assert_eq!(rec.bb, 137);
        assert_eq!(rec.so, 89);
    }

    #[test]
    fn batting_empty_counting_cells_are_zero() {
        // Early-era exports leave RBI/SO/CS blank.
        let csv_data = "\
playerID,teamID,yearID,G,AB,H,R,HR,2B,3B,RBI,SB,CS,BB,SO
ansonca01,CHN,1876,66,309,110,63,2,9,7,,,,,";

        let records = load_batting_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rbi, 0);
        assert_eq!(records[0].so, 0);
        assert_eq!(records[0].h, 110);
    }

    #[test]
    fn batting_extra_columns_ignored() {
        let csv_data = "\
playerID,teamID,yearID,stint,lgID,G,AB,H,R,HR,2B,3B,RBI,SB,CS,BB,SO,IBB,HBP
ruthba01,NYA,1927,1,AL,151,540,192,158,60,29,8,165,7,6,137,89,0,0";

        let records = load_batting_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].hr, 60);
    }

    #[test]
    fn batting_malformed_rows_skipped() {
        let csv_data = "\
playerID,teamID,yearID,G,AB,H,R,HR,2B,3B,RBI,SB,CS,BB,SO
ruthba01,NYA,1927,151,540,192,158,60,29,8,165,7,6,137,89
badrow01,NYA,not_a_year,1,1,1,1,1,1,1,1,1,1,1,1
negrow01,NYA,1927,1,-5,1,1,1,1,1,1,1,1,1,1
gehrilo01,NYA,1927,155,584,218,149,47,52,18,175,10,8,109,84";

        let records = load_batting_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].player_id, "ruthba01");
        assert_eq!(records[1].player_id, "gehrilo01");
    }

    #[test]
    fn batting_missing_columns_listed() {
        let csv_data = "\
playerID,teamID,yearID,G,AB,H,R,HR,RBI,SB,CS,BB,SO
ruthba01,NYA,1927,151,540,192,158,60,165,7,6,137,89";

        let err = load_batting_from_reader(csv_data.as_bytes()).unwrap_err();
        match err {
            LoadFailure::MissingColumns(columns) => {
                assert_eq!(columns, vec!["2B".to_string(), "3B".to_string()]);
            }
            LoadFailure::Csv(e) => panic!("expected MissingColumns, got CSV error: {e}"),
        }
    }

    #[test]
    fn batting_empty_table_is_ok() {
        let csv_data = "\
playerID,teamID,yearID,G,AB,H,R,HR,2B,3B,RBI,SB,CS,BB,SO";

        let records = load_batting_from_reader(csv_data.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    // -- Pitching --

    #[test]
    fn pitching_rows_parsed_and_innings_derived() {
        let csv_data = "\
playerID,teamID,yearID,IPouts,W,L,G,SV,H,HR,ER,SO
johnswa01,WS1,1913,1038,36,7,47,2,232,9,44,243";

        let records = load_pitching_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.ip_outs, 1038);
        assert_eq!(rec.w, 36);
        assert_eq!(rec.so, 243);
        assert!((rec.innings() - 346.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pitching_fractional_innings() {
        let csv_data = "\
playerID,teamID,yearID,IPouts,W,L,G,SV,H,HR,ER,SO
short01,NYA,1950,2,0,0,1,0,3,1,2,0";

        let records = load_pitching_from_reader(csv_data.as_bytes()).unwrap();
        assert!((records[0].innings() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn pitching_missing_ipouts_column_rejected() {
        let csv_data = "\
playerID,teamID,yearID,W,L,G,SV,H,HR,ER,SO
johnswa01,WS1,1913,36,7,47,2,232,9,44,243";

        let err = load_pitching_from_reader(csv_data.as_bytes()).unwrap_err();
        match err {
            LoadFailure::MissingColumns(columns) => {
                assert_eq!(columns, vec!["IPouts".to_string()]);
            }
            LoadFailure::Csv(e) => panic!("expected MissingColumns, got CSV error: {e}"),
        }
    }

    // -- Path-based loaders --

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_players(Path::new("/nonexistent/People.csv")).unwrap_err();
        match err {
            DatasetError::Io { path, .. } => assert!(path.contains("People.csv")),
            other => panic!("expected Io error, got: {other}"),
        }
    }
}
