//! JSON ingestion
//!
//! External data arrives as JSON arrays of objects; this module turns it
//! into records and back.
//!
//! - `converter.rs` - JSON to record conversion
//! - `error.rs` - Domain-specific errors

mod converter;
mod error;

pub use converter::{JsonToValueConverter, records_from_json, records_to_json, value_from_literal};
pub use error::{JsonError, JsonResult};
