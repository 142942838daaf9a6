//! Timeline and record export.
//!
//! [`svg`] draws a [`TimelineLayout`]. [`csv`] writes records in the format
//! `timetrack-parser` reads back. Failures are reported as [`Error`], which
//! becomes [`TimetrackError::Export`](crate::TimetrackError::Export) at the
//! crate boundary.

pub mod csv;
pub mod svg;

use std::{
    fmt,
    io::{self, Write},
};

use crate::layout::TimelineLayout;

/// A format a laid out timeline can be written in.
pub trait Exporter {
    /// # Errors
    ///
    /// Returns [`Error::Io`] when writing to `out` fails.
    fn export_timeline(&self, layout: &TimelineLayout<'_>, out: &mut dyn Write)
    -> Result<(), Error>;
}

#[derive(Debug)]
pub enum Error {
    /// The layout cannot be drawn, e.g. an invalid style color or an
    /// unknown focus name.
    Render(String),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(message) => write!(f, "cannot render timeline: {message}"),
            Self::Io(err) => write!(f, "cannot write export: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Render(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
