//! Row-level parsing: schedule-row detection, column extraction, date
//! normalization, and assembly of a [`Match`] from one spreadsheet row.
//!
//! Everything here is lenient by design. Rows that don't look like schedule
//! entries are filtered, not rejected; out-of-range columns default; a date
//! or score segment that won't parse degrades to its empty value. The
//! spreadsheet is human-edited and one bad cell must never block the batch.

use crate::layout::{RowLayout, VenueRule};
use crate::types::Match;

/// Weekday abbreviations that open a schedule row (games are played on
/// weekends only).
const WEEKDAY_MARKERS: &[&str] = &["Sam", "Dim"];

/// Returns true iff the row looks like a schedule entry: its first cell,
/// trimmed, starts with a weekday marker (case-insensitive) at a word
/// boundary. Headers, blank rows, and decorative rows fail this test.
pub fn is_schedule_row(cells: &[String]) -> bool {
    let first = match cells.first() {
        Some(cell) => cell.trim(),
        None => return false,
    };

    WEEKDAY_MARKERS.iter().any(|marker| {
        if first.len() < marker.len() || !first.is_char_boundary(marker.len()) {
            return false;
        }
        let (head, rest) = first.split_at(marker.len());
        head.eq_ignore_ascii_case(marker)
            && !rest.chars().next().is_some_and(|c| c.is_alphanumeric())
    })
}

/// The one defensive primitive used throughout: the trimmed cell at `index`
/// when present and non-empty after trimming, else `None`. Out-of-range
/// indices are expected (exports have ragged trailing columns), not errors.
pub fn column(cells: &[String], index: usize) -> Option<&str> {
    let cell = cells.get(index)?.trim();
    if cell.is_empty() { None } else { Some(cell) }
}

/// Normalize a date cell like `"Sam 25/1"` (or `"Sam\n25/1"`) into
/// zero-padded `dd/mm/{year}`. The source never encodes a year, so the
/// caller injects one.
///
/// Best-effort: fewer than two whitespace-separated tokens, a day/month
/// segment without a `/`, or a non-numeric day or month all yield `None`.
/// Day and month are not range-checked, and any segment past the month
/// (a hand-written year) is ignored.
pub fn normalize_date(raw: &str, year: i32) -> Option<String> {
    let day_month = raw.split_whitespace().nth(1)?;
    let mut parts = day_month.split('/');
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    Some(format!("{day:02}/{month:02}/{year}"))
}

/// Split a score cell like `"78-65"` into its numeric segments. Segments
/// that fail to parse are dropped, not defaulted: `"78-x"` yields `[78]`.
pub fn split_scores(cell: &str) -> Vec<u32> {
    cell.split('-')
        .filter_map(|segment| segment.trim().parse().ok())
        .collect()
}

/// Collect the non-empty cells at `indices`, in column order.
pub fn collect_names(cells: &[String], indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .filter_map(|&i| column(cells, i))
        .map(str::to_string)
        .collect()
}

/// Assemble one [`Match`] from a schedule row under the given layout.
///
/// `year` fills in the calendar year the spreadsheet omits. A date cell the
/// normalizer cannot read is stored as the empty string so the record still
/// makes it into the output; the fallback is logged so runs can measure it.
pub fn build_match(cells: &[String], layout: &RowLayout, year: i32) -> Match {
    let raw_date = column(cells, layout.date).unwrap_or("");
    let date = match normalize_date(raw_date, year) {
        Some(date) => date,
        None => {
            log::warn!("unreadable date cell {raw_date:?}, storing empty date");
            String::new()
        }
    };

    let (is_domicile, location, opponent) = match layout.venue {
        VenueRule::Marker {
            cell,
            token,
            location,
            opponent,
        } => {
            let home = column(cells, cell) == Some(token);
            (home, column(cells, location), column(cells, opponent))
        }
        VenueRule::HomeVenue {
            home_location,
            home_opponent,
            away_location,
            away_opponent,
        } => match column(cells, home_location) {
            Some(venue) => (true, Some(venue), column(cells, home_opponent)),
            None => (
                false,
                column(cells, away_location),
                column(cells, away_opponent),
            ),
        },
    };

    Match {
        date,
        team: column(cells, layout.team).unwrap_or_default().to_string(),
        group: column(cells, layout.group).unwrap_or_default().to_string(),
        is_domicile,
        time_start: column(cells, layout.time_start)
            .unwrap_or_default()
            .to_string(),
        time_meetup: column(cells, layout.time_meetup).map(str::to_string),
        opponent: opponent.map(str::to_string),
        location: location.map(str::to_string),
        board_official: collect_names(cells, layout.officials),
        referees: collect_names(cells, layout.referees),
        bar: column(cells, layout.bar).map(str::to_string),
        result: column(cells, layout.result)
            .map(split_scores)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{BSM, PLANNING};

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn schedule_row_weekday_prefixes() {
        assert!(is_schedule_row(&row(&["Sam 25/1", "U15"])));
        assert!(is_schedule_row(&row(&["Dim 26/1"])));
        assert!(is_schedule_row(&row(&["  sam 25/1"])));
        assert!(is_schedule_row(&row(&["DIM 2/2"])));
    }

    #[test]
    fn schedule_row_rejects_headers_and_blanks() {
        assert!(!is_schedule_row(&row(&["Date", "Equipe"])));
        assert!(!is_schedule_row(&row(&[""])));
        assert!(!is_schedule_row(&row(&[])));
        assert!(!is_schedule_row(&row(&["Lundi 3/2"])));
        // Marker must sit at a word boundary
        assert!(!is_schedule_row(&row(&["Samedi 25/1"])));
        assert!(!is_schedule_row(&row(&["Dimanche"])));
    }

    #[test]
    fn schedule_row_accepts_newline_separator() {
        assert!(is_schedule_row(&row(&["Sam\n25/1"])));
    }

    #[test]
    fn column_never_panics() {
        let cells = row(&[" a ", "", "  "]);
        assert_eq!(column(&cells, 0), Some("a"));
        assert_eq!(column(&cells, 1), None);
        assert_eq!(column(&cells, 2), None);
        assert_eq!(column(&cells, 3), None);
        assert_eq!(column(&cells, usize::MAX), None);
    }

    #[test]
    fn normalize_date_zero_pads() {
        assert_eq!(normalize_date("Sam 25/1", 2025).as_deref(), Some("25/01/2025"));
        assert_eq!(normalize_date("Dim 5/11", 2025).as_deref(), Some("05/11/2025"));
        assert_eq!(normalize_date("Sam 1/1", 2026).as_deref(), Some("01/01/2026"));
    }

    #[test]
    fn normalize_date_newline_variant() {
        assert_eq!(normalize_date("Sam\n25/1", 2025).as_deref(), Some("25/01/2025"));
    }

    #[test]
    fn normalize_date_ignores_trailing_segments() {
        assert_eq!(
            normalize_date("Sam 25/1/2024", 2025).as_deref(),
            Some("25/01/2025")
        );
    }

    #[test]
    fn normalize_date_rejects_malformed_input() {
        assert_eq!(normalize_date("Sam", 2025), None);
        assert_eq!(normalize_date("", 2025), None);
        assert_eq!(normalize_date("Sam 25", 2025), None);
        assert_eq!(normalize_date("Sam 25abc/1", 2025), None);
        assert_eq!(normalize_date("Sam x/y", 2025), None);
    }

    #[test]
    fn normalize_date_does_not_range_check() {
        // Tolerance over correctness: garbage in, well-formed garbage out.
        assert_eq!(normalize_date("Sam 99/99", 2025).as_deref(), Some("99/99/2025"));
    }

    #[test]
    fn scores_parse_and_drop_bad_segments() {
        assert_eq!(split_scores("78-65"), vec![78, 65]);
        assert_eq!(split_scores("78-x"), vec![78]);
        assert_eq!(split_scores(" 78 - 65 "), vec![78, 65]);
        assert_eq!(split_scores(""), Vec::<u32>::new());
        assert_eq!(split_scores("abandon"), Vec::<u32>::new());
    }

    #[test]
    fn names_keep_column_order_and_drop_empties() {
        let cells = row(&["", "Dupont", "", "Martin"]);
        assert_eq!(collect_names(&cells, &[0, 1, 2]), vec!["Dupont"]);
        assert_eq!(collect_names(&cells, &[3, 1]), vec!["Martin", "Dupont"]);
        assert_eq!(collect_names(&cells, &[0, 2, 7]), Vec::<String>::new());
    }

    #[test]
    fn planning_row_builds_home_match() {
        let cells = row(&[
            "Sam 25/1", "U15", "Poule A", "DOMICILE", "Gymnase X", "Team B", "20:00", "19:00",
            "", "", "Martin", "", "Leroy", "Dubois", "Le Central", "78-65",
        ]);
        let m = build_match(&cells, &PLANNING, 2025);
        assert_eq!(m.date, "25/01/2025");
        assert_eq!(m.team, "U15");
        assert_eq!(m.group, "Poule A");
        assert!(m.is_domicile);
        assert_eq!(m.location.as_deref(), Some("Gymnase X"));
        assert_eq!(m.opponent.as_deref(), Some("Team B"));
        assert_eq!(m.time_start, "20:00");
        assert_eq!(m.time_meetup.as_deref(), Some("19:00"));
        assert_eq!(m.board_official, vec!["Martin"]);
        assert_eq!(m.referees, vec!["Leroy", "Dubois"]);
        assert_eq!(m.bar.as_deref(), Some("Le Central"));
        assert_eq!(m.result, vec![78, 65]);
    }

    #[test]
    fn planning_row_without_marker_is_away() {
        let cells = row(&[
            "Dim 2/2", "U18", "Poule B", "", "Gymnase Y", "Team C", "15:30",
        ]);
        let m = build_match(&cells, &PLANNING, 2025);
        assert!(!m.is_domicile);
        // Marker layout keeps fixed venue columns either way
        assert_eq!(m.location.as_deref(), Some("Gymnase Y"));
        assert_eq!(m.opponent.as_deref(), Some("Team C"));
        assert_eq!(m.time_meetup, None);
        assert!(m.board_official.is_empty());
        assert!(m.result.is_empty());
    }

    #[test]
    fn bsm_row_home_branch() {
        let cells = row(&[
            "Sam\n25/1", "Seniors", "R2", "Salle Bleue", "Team D", "20:30", "19:30", "", "",
            "Durand", "", "Petit", "Roux", "", "Buvette", "80-74",
        ]);
        let m = build_match(&cells, &BSM, 2025);
        assert!(m.is_domicile);
        assert_eq!(m.location.as_deref(), Some("Salle Bleue"));
        assert_eq!(m.opponent.as_deref(), Some("Team D"));
        assert_eq!(m.time_start, "20:30");
        assert_eq!(m.time_meetup.as_deref(), Some("19:30"));
        assert_eq!(m.board_official, vec!["Durand", "Petit"]);
        assert_eq!(m.referees, vec!["Roux"]);
        assert_eq!(m.result, vec![80, 74]);
    }

    #[test]
    fn bsm_row_away_branch_reads_shifted_columns() {
        let cells = row(&[
            "Dim\n26/1", "Seniors", "R2", "", "", "13:00", "", "Team E", "Salle Rouge",
        ]);
        let m = build_match(&cells, &BSM, 2025);
        assert!(!m.is_domicile);
        assert_eq!(m.location.as_deref(), Some("Salle Rouge"));
        assert_eq!(m.opponent.as_deref(), Some("Team E"));
        assert_eq!(m.time_start, "13:00");
        assert_eq!(m.time_meetup, None);
    }

    #[test]
    fn unreadable_date_stores_empty_sentinel() {
        let cells = row(&["Sam", "U15", "Poule A"]);
        let m = build_match(&cells, &PLANNING, 2025);
        assert_eq!(m.date, "");
        assert_eq!(m.team, "U15");
    }
}
