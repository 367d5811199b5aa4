//! File-based transfer of the exploration collection.
//!
//! Exports wrap the collection in a versioned document; imports accept that
//! document or the bare array written by earlier releases. Import is
//! all-or-nothing: an unrecognized shape or a single invalid record rejects
//! the whole file and leaves the caller's state untouched.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::exploration::Exploration;

/// Version tag written into every export document.
pub const SCHEMA_VERSION: u32 = 1;

/// The downloadable document shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: u32,
    pub data: Vec<Exploration>,
    /// RFC 3339 stamp of when the export was produced.
    pub exported_at: String,
}

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unrecognized file structure; expected an array or an object with a `data` array")]
    UnrecognizedShape,
    #[error("file contains invalid exploration data: {0}")]
    InvalidRecord(#[source] serde_json::Error),
}

/// Wrap a collection for export.
#[must_use]
pub fn export_document(explorations: &[Exploration]) -> ExportDocument {
    ExportDocument {
        version: SCHEMA_VERSION,
        data: explorations.to_vec(),
        exported_at: Utc::now().to_rfc3339(),
    }
}

/// Serialize a collection to the pretty-printed export document.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized.
pub fn export_json(explorations: &[Exploration]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&export_document(explorations))
}

/// File name offered for a download produced on `today`.
#[must_use]
pub fn export_file_name(today: NaiveDate) -> String {
    format!("climate-explorations-{}.json", today.format("%Y-%m-%d"))
}

/// Parse the text of an import file into a collection.
///
/// Accepts the versioned document shape or a bare legacy array. Every
/// record is schema-checked field by field; the first violation rejects
/// the file.
///
/// # Errors
///
/// Returns [`TransferError`] if the text is not JSON, the top-level shape
/// is unrecognized, or any element is not a valid exploration.
pub fn parse_import(text: &str) -> Result<Vec<Exploration>, TransferError> {
    let value: Value = serde_json::from_str(text)?;

    let data = match value {
        items @ Value::Array(_) => items,
        Value::Object(mut fields) => match fields.remove("data") {
            Some(data @ Value::Array(_)) => data,
            _ => return Err(TransferError::UnrecognizedShape),
        },
        _ => return Err(TransferError::UnrecognizedShape),
    };

    serde_json::from_value(data).map_err(TransferError::InvalidRecord)
}
