// Name enrichment: left join of batting/pitching rows with the People table.
//
// Unmatched player ids keep their rows with `None` name fields; downstream
// display code renders a blank name instead of dropping the line.

use std::collections::HashMap;

use crate::datasets::{BattingRecord, PitchingRecord, Player};

// ---------------------------------------------------------------------------
// Name index
// ---------------------------------------------------------------------------

/// Build a player-id keyed index of name halves.
///
/// Duplicate ids keep the last occurrence, mirroring how a keyed merge
/// resolves them.
pub fn name_index(players: &[Player]) -> HashMap<String, (String, String)> {
    players
        .iter()
        .map(|p| {
            (
                p.player_id.clone(),
                (p.name_first.clone(), p.name_last.clone()),
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Enriched rows
// ---------------------------------------------------------------------------

/// A batting record joined with the player's name halves.
#[derive(Debug, Clone)]
pub struct EnrichedBatting {
    pub rec: BattingRecord,
    pub name_first: Option<String>,
    pub name_last: Option<String>,
}

/// A pitching record joined with the player's name halves.
#[derive(Debug, Clone)]
pub struct EnrichedPitching {
    pub rec: PitchingRecord,
    pub name_first: Option<String>,
    pub name_last: Option<String>,
}

/// Concatenate name halves into a "First Last" display name.
///
/// `None` when the join found no player row; a name with one empty half is
/// trimmed rather than carrying a stray space. Returns `None` for an
/// entirely blank name so callers can treat it like an unmatched row.
fn join_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let (first, last) = (first?, last?);
    let joined = format!("{first} {last}");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl EnrichedBatting {
    /// The player's display name, `None` when the id had no People row or
    /// the name is blank.
    pub fn display_name(&self) -> Option<String> {
        join_name(self.name_first.as_deref(), self.name_last.as_deref())
    }
}

impl EnrichedPitching {
    pub fn display_name(&self) -> Option<String> {
        join_name(self.name_first.as_deref(), self.name_last.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Left joins
// ---------------------------------------------------------------------------

/// Attach names to every batting row. Left join: rows with unknown ids are
/// kept, with `None` name fields.
pub fn enrich_batting(
    records: &[BattingRecord],
    index: &HashMap<String, (String, String)>,
) -> Vec<EnrichedBatting> {
    records
        .iter()
        .map(|rec| {
            let name = index.get(&rec.player_id);
            EnrichedBatting {
                rec: rec.clone(),
                name_first: name.map(|(first, _)| first.clone()),
                name_last: name.map(|(_, last)| last.clone()),
            }
        })
        .collect()
}

/// Attach names to every pitching row (left join, as for batting).
pub fn enrich_pitching(
    records: &[PitchingRecord],
    index: &HashMap<String, (String, String)>,
) -> Vec<EnrichedPitching> {
    records
        .iter()
        .map(|rec| {
            let name = index.get(&rec.player_id);
            EnrichedPitching {
                rec: rec.clone(),
                name_first: name.map(|(first, _)| first.clone()),
                name_last: name.map(|(_, last)| last.clone()),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
