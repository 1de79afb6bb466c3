//! Column schema subsystem
//!
//! Schemas describe the columns a deck definition table must carry.
//!
//! # Design Principles
//!
//! - Exact column set, no extra or missing columns
//! - Exact type match, no coercion
//! - Order-insensitive comparison
//! - Deterministic validation

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, TypeMap};
pub use types::{ColumnSchema, ColumnType, DECK, IMAGE_BOTTOM, IMAGE_TOP, NAME, NUMBER_OF};
pub use validator::{validate, ColumnSource, SchemaValidator};
