//! The match record persisted to the site's JSON files.

use serde::{Deserialize, Serialize};

/// Joins the date and team halves of an identity key.
pub const KEY_SEPARATOR: &str = "__";

/// One scheduled game. Field order here is the serialization order the site
/// expects, so keep new fields at the end.
///
/// Optional fields are either a non-empty trimmed string or `null`, never an
/// empty string. `result` holds the home/away score pair and stays empty for
/// unplayed (or unparseable) games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Canonical `dd/mm/yyyy`, or `""` when the source cell was unreadable.
    pub date: String,
    pub team: String,
    pub group: String,
    #[serde(rename = "isDomicile")]
    pub is_domicile: bool,
    /// Time-of-day as written in the spreadsheet, not reparsed.
    pub time_start: String,
    pub time_meetup: Option<String>,
    pub opponent: Option<String>,
    pub location: Option<String>,
    /// Assigned personnel in column order, duplicates kept. The legacy
    /// one-shot exporter wrote this field as `family_duety`.
    #[serde(default, alias = "family_duety")]
    pub board_official: Vec<String>,
    #[serde(default)]
    pub referees: Vec<String>,
    pub bar: Option<String>,
    #[serde(default)]
    pub result: Vec<u32>,
}

impl Match {
    /// Identity key used for deduplication and upsert: date and team joined
    /// by [`KEY_SEPARATOR`]. Exactly one record per key exists in a dataset.
    pub fn key(&self) -> String {
        format!("{}{KEY_SEPARATOR}{}", self.date, self.team)
    }
}
