//! Column layouts for the two spreadsheet exports.
//!
//! The season planning sheet and the one-shot `bsm` export carry the same
//! data but shuffle columns starting at the venue block, and they signal
//! home games differently. Everything layout-specific lives in a
//! [`RowLayout`] so the record builder stays a single piece of code.

/// How a row decides home vs. away, and where the venue columns live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenueRule {
    /// Home iff the trimmed cell equals a literal marker. Location and
    /// opponent columns are fixed regardless of the outcome.
    Marker {
        cell: usize,
        token: &'static str,
        location: usize,
        opponent: usize,
    },
    /// Home iff the home-location cell is non-empty; the venue column pair
    /// depends on the branch.
    HomeVenue {
        home_location: usize,
        home_opponent: usize,
        away_location: usize,
        away_opponent: usize,
    },
}

/// Named column offsets for one spreadsheet variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    pub date: usize,
    pub team: usize,
    pub group: usize,
    pub time_start: usize,
    pub time_meetup: usize,
    /// Personnel columns, in the order their entries should survive.
    pub officials: &'static [usize],
    pub referees: &'static [usize],
    pub bar: usize,
    pub result: usize,
    pub venue: VenueRule,
}

/// Season planning sheet: an explicit `DOMICILE` marker in column 3, fixed
/// venue columns after it.
pub const PLANNING: RowLayout = RowLayout {
    date: 0,
    team: 1,
    group: 2,
    time_start: 6,
    time_meetup: 7,
    officials: &[10, 11],
    referees: &[12, 13],
    bar: 14,
    result: 15,
    venue: VenueRule::Marker {
        cell: 3,
        token: "DOMICILE",
        location: 4,
        opponent: 5,
    },
};

/// One-shot `bsm` export: a filled column 3 means a home game at that venue;
/// away games carry their venue and opponent further right.
pub const BSM: RowLayout = RowLayout {
    date: 0,
    team: 1,
    group: 2,
    time_start: 5,
    time_meetup: 6,
    officials: &[9, 10, 11],
    referees: &[12, 13],
    bar: 14,
    result: 15,
    venue: VenueRule::HomeVenue {
        home_location: 3,
        home_opponent: 4,
        away_location: 8,
        away_opponent: 7,
    },
};
