//! Error types for TimeTrack operations.
//!
//! [`TimetrackError`] wraps the error types of every layer: record
//! validation, CSV diagnostics, persistence and export.

use std::io;

use thiserror::Error;

use timetrack_core::record::RecordError;
use timetrack_parser::error::ParseError;

use crate::persistence::PersistenceError;

/// The main error type for TimeTrack operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the CSV source next to the diagnostics so
/// that spans can be rendered against it.
#[derive(Debug, Error)]
pub enum TimetrackError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid record: {0}")]
    Record(#[from] RecordError),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<crate::export::Error> for TimetrackError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl TimetrackError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
