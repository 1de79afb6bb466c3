//! CLI-specific error types
//!
//! Every error is fatal to the run and maps to a process exit code:
//! - 1: missing arguments
//! - 2: define file or image not found
//! - 3: anything else (schema, parse, config, archive, I/O)

use std::fmt;
use std::io;

use crate::catalog::CatalogError;
use crate::schema::SchemaError;
use crate::table::TableError;
use crate::tabletop::ArchiveError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Required positional arguments missing
    MissingArguments,
    /// Definition CSV not found
    DefineFileNotFound,
    /// Referenced image not found
    ImageNotFound,
    /// Definition table violates the schema
    SchemaError,
    /// Definition CSV could not be read
    InvalidDefinition,
    /// Configuration file error
    ConfigError,
    /// I/O error
    IoError,
    /// Archive could not be written
    ArchiveFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingArguments => "DECKGEN_CLI_MISSING_ARGUMENTS",
            Self::DefineFileNotFound => "DECKGEN_DEFINE_FILE_NOT_FOUND",
            Self::ImageNotFound => "DECKGEN_IMAGE_NOT_FOUND",
            Self::SchemaError => "DECKGEN_SCHEMA_ERROR",
            Self::InvalidDefinition => "DECKGEN_INVALID_DEFINITION",
            Self::ConfigError => "DECKGEN_CLI_CONFIG_ERROR",
            Self::IoError => "DECKGEN_CLI_IO_ERROR",
            Self::ArchiveFailed => "DECKGEN_ARCHIVE_FAILED",
        }
    }

    /// Process exit code
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArguments => 1,
            Self::DefineFileNotFound | Self::ImageNotFound => 2,
            _ => 3,
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Missing positional arguments
    pub fn missing_arguments(usage: &str) -> Self {
        Self::new(
            CliErrorCode::MissingArguments,
            format!(
                "{}\nerror: the following arguments are required: define_csv, image_dir, output_dir",
                usage
            ),
        )
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Process exit code
    pub fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<TableError> for CliError {
    fn from(e: TableError) -> Self {
        match e {
            TableError::NotFound(_) => Self::new(
                CliErrorCode::DefineFileNotFound,
                format!("The define file is not found.\n{}", e),
            ),
            TableError::Io { .. } => Self::io_error(e.to_string()),
            _ => Self::new(CliErrorCode::InvalidDefinition, e.to_string()),
        }
    }
}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        Self::new(CliErrorCode::SchemaError, e.to_string())
    }
}

impl From<CatalogError> for CliError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Schema(e) => e.into(),
            CatalogError::ImageNotFound(e) => Self::new(
                CliErrorCode::ImageNotFound,
                format!(
                    "The image file with specified name is not found. Check the image directory path.\n{}",
                    e
                ),
            ),
            CatalogError::Image(e) => Self::io_error(e.to_string()),
        }
    }
}

impl From<ArchiveError> for CliError {
    fn from(e: ArchiveError) -> Self {
        Self::new(CliErrorCode::ArchiveFailed, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
