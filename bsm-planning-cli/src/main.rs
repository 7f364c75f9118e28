//! bsm-planning CLI
//!
//! Command-line interface for the club's offline data tools: convert
//! spreadsheet exports of the game schedule into the JSON the site reads,
//! merge fresh exports into the persisted dataset, and regenerate the
//! gallery image list.

use std::path::PathBuf;

use chrono::Datelike;
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use bsm_planning_core::{
    BSM, PLANNING, RowLayout, load_matches, merge, parse_schedule_file, save_matches,
    scan_gallery, write_image_list,
};

#[derive(Parser)]
#[command(name = "bsm-planning")]
#[command(about = "Club website data tools: schedule import and gallery generation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a spreadsheet export into a fresh match JSON file
    Transform {
        /// CSV export to read
        #[arg(short, long, default_value = "src/scripts/bsm.csv")]
        input: PathBuf,

        /// JSON file to write (overwritten in full)
        #[arg(short, long, default_value = "src/scripts/output.json")]
        output: PathBuf,

        /// Column layout of the export
        #[arg(long, value_enum, default_value_t = Layout::Bsm)]
        layout: Layout,

        /// Year for match dates (the spreadsheet never carries one; defaults
        /// to the current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Merge a spreadsheet export into the persisted match dataset
    Merge {
        /// CSV export to read
        #[arg(short, long, default_value = "src/scripts/planning.csv")]
        input: PathBuf,

        /// Existing dataset to reconcile against (missing file = empty)
        #[arg(short, long, default_value = "src/assets/storage_json/matchs.json")]
        base: PathBuf,

        /// Where to write the merged dataset (defaults to the base file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column layout of the export
        #[arg(long, value_enum, default_value_t = Layout::Planning)]
        layout: Layout,

        /// Year for match dates (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Regenerate the gallery image list
    Gallery {
        /// Directory to scan for images
        #[arg(short, long, default_value = "public/gallery")]
        dir: PathBuf,

        /// JSON file to write
        #[arg(short, long, default_value = "public/gallery-images.json")]
        output: PathBuf,
    },
}

/// Which spreadsheet variant the input follows.
#[derive(Clone, Copy, ValueEnum)]
enum Layout {
    /// One-shot export: home iff the venue column is filled
    Bsm,
    /// Season planning sheet: explicit DOMICILE marker
    Planning,
}

impl Layout {
    fn row_layout(self) -> &'static RowLayout {
        match self {
            Layout::Bsm => &BSM,
            Layout::Planning => &PLANNING,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Transform {
            input,
            output,
            layout,
            year,
        } => run_transform(&input, &output, layout, resolve_year(year)),
        Commands::Merge {
            input,
            base,
            output,
            layout,
            year,
        } => {
            let output = output.unwrap_or_else(|| base.clone());
            run_merge(&input, &base, &output, layout, resolve_year(year));
        }
        Commands::Gallery { dir, output } => run_gallery(&dir, &output),
    }
}

fn resolve_year(year: Option<i32>) -> i32 {
    year.unwrap_or_else(|| chrono::Local::now().year())
}

/// Run the transform command: one-shot CSV to JSON, full overwrite.
fn run_transform(input: &PathBuf, output: &PathBuf, layout: Layout, year: i32) {
    let matches = match parse_schedule_file(input, layout.row_layout(), year) {
        Ok(matches) => matches,
        Err(e) => fatal(&e.to_string()),
    };

    if let Err(e) = save_matches(output, &matches) {
        fatal(&e.to_string());
    }

    println!(
        "{} Wrote {} matches to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        matches.len(),
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
}

/// Run the merge command: reconcile a fresh export against the base dataset.
fn run_merge(input: &PathBuf, base: &PathBuf, output: &PathBuf, layout: Layout, year: i32) {
    let base_matches = match load_matches(base) {
        Ok(matches) => matches,
        Err(e) => fatal(&e.to_string()),
    };
    println!("Base matches: {}", base_matches.len());

    let incoming = match parse_schedule_file(input, layout.row_layout(), year) {
        Ok(matches) => matches,
        Err(e) => fatal(&e.to_string()),
    };
    println!("Parsed matches: {}", incoming.len());

    let outcome = merge(base_matches, incoming);

    if let Err(e) = save_matches(output, &outcome.records) {
        fatal(&e.to_string());
    }

    let stats = outcome.stats;
    println!(
        "{} {} inserted, {} updated, {} total. Saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        stats.inserted,
        stats.updated,
        stats.total,
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
}

/// Run the gallery command: rebuild the image list from disk.
fn run_gallery(dir: &PathBuf, output: &PathBuf) {
    let images = match scan_gallery(dir) {
        Ok(images) => images,
        Err(e) => fatal(&format!("Error scanning {}: {}", dir.display(), e)),
    };

    if let Err(e) = write_image_list(output, &images) {
        fatal(&e.to_string());
    }

    println!(
        "{} Listed {} images in {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        images.len(),
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
}

/// Print a diagnostic and terminate non-zero. Nothing has been written when
/// this runs: every command writes its output file in one final step.
fn fatal(message: &str) -> ! {
    eprintln!(
        "{} {}",
        "\u{2718}".if_supports_color(Stdout, |t| t.red()),
        message,
    );
    std::process::exit(1);
}
