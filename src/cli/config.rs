//! Optional JSON configuration
//!
//! Every field has a default, so an absent config file and `{}` behave the
//! same.
//!
//! ```json
//! {
//!   "card_size": 2,
//!   "deck_spacing": 100,
//!   "table_name": "Table",
//!   "template_file_name": "define_template.csv",
//!   "background_image": "table.png",
//!   "log_level": "info"
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observability::Severity;
use crate::tabletop::DEFAULT_CARD_SIZE;

use super::errors::{CliError, CliResult};

/// Run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Size given to every card
    #[serde(default = "default_card_size")]
    pub card_size: u32,

    /// Horizontal distance between deck slots
    #[serde(default = "default_deck_spacing")]
    pub deck_spacing: i32,

    /// Name of the game table
    #[serde(default = "default_table_name")]
    pub table_name: String,

    /// File name of the blank template
    #[serde(default = "default_template_file_name")]
    pub template_file_name: String,

    /// Table background, resolved under the image directory.
    /// Unset means the tabletop's built-in background.
    #[serde(default)]
    pub background_image: Option<String>,

    /// Minimum severity that is logged
    #[serde(default = "default_log_level")]
    pub log_level: Severity,
}

fn default_card_size() -> u32 {
    DEFAULT_CARD_SIZE
}
fn default_deck_spacing() -> i32 {
    100
}
fn default_table_name() -> String {
    "Table".to_string()
}
fn default_template_file_name() -> String {
    "define_template.csv".to_string()
}
fn default_log_level() -> Severity {
    Severity::Info
}

impl Default for Config {
    fn default() -> Self {
        Self {
            card_size: default_card_size(),
            deck_spacing: default_deck_spacing(),
            table_name: default_table_name(),
            template_file_name: default_template_file_name(),
            background_image: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.card_size == 0 {
            return Err(CliError::config_error("card_size must be > 0"));
        }

        if self.deck_spacing < 0 {
            return Err(CliError::config_error("deck_spacing must be >= 0"));
        }

        if self.table_name.trim().is_empty() {
            return Err(CliError::config_error("table_name must not be empty"));
        }

        if let Some(background) = &self.background_image {
            if background.trim().is_empty() {
                return Err(CliError::config_error("background_image must not be empty"));
            }
        }

        let template = Path::new(&self.template_file_name);
        if self.template_file_name.is_empty() || template.components().count() != 1 {
            return Err(CliError::config_error(format!(
                "template_file_name must be a plain file name, got '{}'",
                self.template_file_name
            )));
        }

        Ok(())
    }
}
