//! CLI argument definitions using clap
//!
//! Usage:
//! - udon-deckgen <define_csv> <image_dir> <output_dir> [-n NAME]
//! - udon-deckgen --output-template

use clap::Parser;
use std::path::PathBuf;

/// Build a tabletop deck archive from a CSV card definition
#[derive(Parser, Debug)]
#[command(name = "udon-deckgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// CSV file defining the cards of every deck
    pub define_csv: Option<PathBuf>,

    /// Directory holding the images referenced by define_csv
    pub image_dir: Option<PathBuf>,

    /// Directory the archive is written to (created if absent)
    pub output_dir: Option<PathBuf>,

    /// Archive file name; defaults to the generation time (YYMMDD_HHMMSS)
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Write a blank define_csv template to the current directory and exit
    #[arg(long)]
    pub output_template: bool,

    /// Path to an optional JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Usage line printed when positional arguments are missing
pub const USAGE: &str = "usage: udon-deckgen [-h] [--output-template] [-n NAME] [--config PATH] define_csv image_dir output_dir";
