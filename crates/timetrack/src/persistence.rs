//! Versioned JSON persistence for person records.
//!
//! The file holds `{ "schema_version": 1, "records": [...] }` with dates as
//! `YYYY-MM-DD`. Writes go to a temporary file in the target directory that
//! is then renamed over the target.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use timetrack_core::record::PersonRecord;

/// Current schema version of the record file.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("cannot access record file: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON, or a record that fails validation.
    #[error("malformed record file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record file has no usable `schema_version`")]
    MissingSchemaVersion,

    #[error("record file uses schema version {found}, this build reads up to {supported}")]
    UnsupportedSchema { found: u64, supported: u32 },
}

#[derive(Debug, Serialize, Deserialize)]
struct RecordFile<R> {
    schema_version: u32,
    records: R,
}

/// Saves `records` to `path`, replacing any previous content.
///
/// # Errors
///
/// Returns [`PersistenceError::Io`] if the temporary file cannot be written
/// or renamed, leaving an existing file at `path` untouched.
pub fn save(path: &Path, records: &[PersonRecord]) -> Result<(), PersistenceError> {
    info!(path:? = path, records = records.len(); "Saving records");

    let file = RecordFile {
        schema_version: CURRENT_SCHEMA_VERSION,
        records,
    };
    let json = serde_json::to_string_pretty(&file)?;
    atomic_write(path, json.as_bytes())?;

    debug!("Records saved");
    Ok(())
}

/// Loads records from `path`.
///
/// Returns `Ok(None)` when the file does not exist yet.
///
/// # Errors
///
/// Returns an error for unreadable files, malformed JSON, a schema version
/// newer than [`CURRENT_SCHEMA_VERSION`], or an invalid record.
pub fn load(path: &Path) -> Result<Option<Vec<PersonRecord>>, PersistenceError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path:? = path; "No record file yet");
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    // Version first, so a newer layout is reported as such and not as bad records
    let raw: serde_json::Value = serde_json::from_str(&content)?;
    let found = raw["schema_version"]
        .as_u64()
        .ok_or(PersistenceError::MissingSchemaVersion)?;
    if found > u64::from(CURRENT_SCHEMA_VERSION) {
        return Err(PersistenceError::UnsupportedSchema {
            found,
            supported: CURRENT_SCHEMA_VERSION,
        });
    }

    let file: RecordFile<Vec<PersonRecord>> = serde_json::from_value(raw)?;
    info!(path:? = path, records = file.records.len(); "Records loaded");
    Ok(Some(file.records))
}

/// Write content atomically using a sibling temp file and a rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
