//! Offline data tools for the club website.
//!
//! This crate owns the JSON files the site consumes: it parses human-edited
//! spreadsheet exports of the game schedule into typed [`Match`] records,
//! reconciles them against a previously persisted dataset keyed by
//! date + team, and generates the photo-gallery image list. The site itself
//! (views, styling) lives elsewhere and reads these files as-is.

pub mod error;
pub mod gallery;
pub mod import;
pub mod layout;
pub mod row;
pub mod store;
pub mod types;

pub use error::{ImportError, StoreError};
pub use gallery::{scan_gallery, write_image_list};
pub use import::{parse_schedule_csv, parse_schedule_file};
pub use layout::{BSM, PLANNING, RowLayout, VenueRule};
pub use store::{MatchIndex, MergeOutcome, MergeStats, load_matches, merge, save_matches};
pub use types::{KEY_SEPARATOR, Match};
