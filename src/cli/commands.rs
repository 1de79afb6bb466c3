//! CLI command implementations
//!
//! A run is one of:
//! - template: write a blank definition CSV and stop
//! - generate: definition CSV + image directory -> room archive
//!
//! Generation is all-or-nothing. The first error aborts the run and no
//! archive is left behind.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use clap::Parser;

use crate::catalog::{CatalogError, DeckCatalog};
use crate::image::{ImageDirectory, ImageLoader};
use crate::observability::{Event, Logger};
use crate::schema::{ColumnSchema, DECK};
use crate::table::{generate_template, TableLoader};
use crate::tabletop::{ArchiveSummary, GameTable, Room, TableBackground};

use super::args::{Cli, USAGE};
use super::config::Config;
use super::errors::{CliError, CliResult};

const ARCHIVE_EXTENSION: &str = ".zip";
const TIMESTAMP_FORMAT: &str = "%y%m%d_%H%M%S";

/// Inputs of a generate run
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub define_csv: PathBuf,
    pub image_dir: PathBuf,
    pub output_dir: PathBuf,
    pub name: Option<String>,
}

impl GenerateRequest {
    /// Build from parsed arguments. All three positionals are required.
    pub fn from_cli(cli: &Cli) -> CliResult<Self> {
        let given = |p: &Option<PathBuf>| p.clone().filter(|p| !p.as_os_str().is_empty());

        match (given(&cli.define_csv), given(&cli.image_dir), given(&cli.output_dir)) {
            (Some(define_csv), Some(image_dir), Some(output_dir)) => Ok(Self {
                define_csv,
                image_dir,
                output_dir,
                name: cli.name.clone(),
            }),
            _ => Err(CliError::missing_arguments(USAGE)),
        }
    }
}

/// Parse arguments and run
pub fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let result = run_command(cli);

    if let Err(ref e) = result {
        Logger::error(Event::RunFailed, &[("code", e.code_str())]);
    }

    result
}

/// Run with already parsed arguments
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    Logger::set_min_severity(config.log_level);

    if let Some(path) = &cli.config {
        let path = path.display().to_string();
        Logger::info(Event::ConfigLoaded, &[("path", path.as_str())]);
    }

    if cli.output_template {
        let current_dir = std::env::current_dir()?;
        let path = output_template(&current_dir, &config)?;
        println!("The define template file generated at {}", path.display());
        return Ok(());
    }

    let request = GenerateRequest::from_cli(&cli)?;
    generate(&request, &config, Local::now())?;

    Ok(())
}

/// Write the blank definition template into `dir`.
///
/// Returns the path written.
pub fn output_template(dir: &Path, config: &Config) -> CliResult<PathBuf> {
    let path = dir.join(&config.template_file_name);

    let file = File::create(&path)?;
    generate_template().write_csv(file)?;

    let path_str = path.display().to_string();
    Logger::info(Event::TemplateWritten, &[("path", path_str.as_str())]);

    Ok(path)
}

/// Generate a room archive.
///
/// Steps, in order:
/// 1. Create `output_dir` (with parents)
/// 2. Load and validate the definition CSV
/// 3. Build every deck, resolving images
/// 4. Write the archive
pub fn generate(
    request: &GenerateRequest,
    config: &Config,
    now: DateTime<Local>,
) -> CliResult<ArchiveSummary> {
    fs::create_dir_all(&request.output_dir)?;

    let schema = ColumnSchema::catalog();
    let table = TableLoader::new(&schema).load(&request.define_csv)?;
    let catalog = DeckCatalog::new(table)?;

    let rows = catalog.table().len().to_string();
    let decks = catalog.unique_deck_names().len().to_string();
    Logger::info(Event::CatalogLoaded, &[("decks", decks.as_str()), ("rows", rows.as_str())]);

    let unassigned = catalog.unassigned_rows();
    if let Some(first) = unassigned.first() {
        let first_row = first.to_string();
        let count = unassigned.len().to_string();
        Logger::warn(
            Event::RowsSkipped,
            &[("column", DECK), ("first_row", first_row.as_str()), ("rows", count.as_str())],
        );
    }

    let images = ImageDirectory::new(&request.image_dir);
    let room = build_room(&catalog, &images, config)?;

    let path = request
        .output_dir
        .join(archive_file_name(request.name.as_deref(), &now));
    let summary = room.write_zip(&path)?;

    let path_str = summary.path.display().to_string();
    let cards = summary.card_count.to_string();
    let image_count = summary.image_count.to_string();
    let bytes = summary.size_bytes.to_string();
    Logger::info(
        Event::ArchiveWritten,
        &[
            ("bytes", bytes.as_str()),
            ("cards", cards.as_str()),
            ("images", image_count.as_str()),
            ("path", path_str.as_str()),
        ],
    );

    Ok(summary)
}

/// Build a room with one deck per deck name, placed left to right.
///
/// `config.background_image`, when set, is loaded through `images` like any
/// card image.
pub fn build_room<L: ImageLoader + ?Sized>(
    catalog: &DeckCatalog,
    images: &L,
    config: &Config,
) -> CliResult<Room> {
    let background = match &config.background_image {
        Some(reference) => {
            TableBackground::Custom(images.load(reference).map_err(CatalogError::from)?)
        }
        None => TableBackground::Default,
    };
    let mut room = Room::new(GameTable::new(config.table_name.clone(), background));

    for (slot, deck_name) in catalog.unique_deck_names().iter().enumerate() {
        let x = slot_position(slot, config.deck_spacing)?;
        let deck = catalog.get_deck_with_size(deck_name, images, config.card_size)?;

        let cards = deck.len().to_string();
        let x_str = x.to_string();
        Logger::info(
            Event::DeckBuilt,
            &[("cards", cards.as_str()), ("deck", deck_name.as_str()), ("x", x_str.as_str())],
        );

        room.add_deck(deck, x, 0);
    }

    Ok(room)
}

/// Horizontal position of deck slot `slot`.
///
/// Fails when the position does not fit the table's `i32` coordinates.
pub fn slot_position(slot: usize, deck_spacing: i32) -> CliResult<i32> {
    i32::try_from(slot)
        .ok()
        .and_then(|slot| slot.checked_mul(deck_spacing))
        .ok_or_else(|| {
            CliError::config_error(format!(
                "deck_spacing {} puts deck slot {} outside the table coordinates",
                deck_spacing, slot
            ))
        })
}

/// Archive file name: `name` with `.zip` appended when missing, or the
/// local generation time when no name is given.
pub fn archive_file_name(name: Option<&str>, now: &DateTime<Local>) -> String {
    match name.filter(|n| !n.is_empty()) {
        Some(name) if name.ends_with(ARCHIVE_EXTENSION) => name.to_string(),
        Some(name) => format!("{}{}", name, ARCHIVE_EXTENSION),
        None => format!("{}{}", now.format(TIMESTAMP_FORMAT), ARCHIVE_EXTENSION),
    }
}
