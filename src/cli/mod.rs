//! CLI module for udon-deckgen
//!
//! Provides:
//! - template: `--output-template` writes a blank definition CSV
//! - generate: `<define_csv> <image_dir> <output_dir> [-n NAME]` writes a
//!   room archive

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, USAGE};
pub use commands::{
    archive_file_name, build_room, generate, output_template, run, run_command, slot_position,
    GenerateRequest,
};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
