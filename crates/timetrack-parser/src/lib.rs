//! CSV reader for TimeTrack person records.
//!
//! The format is one header line followed by one record per line:
//!
//! ```text
//! Nom;DateNaissance;DateMort;Description
//! "Ada Lovelace";1815-12-10;1852-11-27;"Mathematician"
//! "Jane Goodall";1934-04-03;;"Primatologist"
//! ```
//!
//! Parsing never fails as a whole. Rows that cannot become a
//! [`PersonRecord`] are reported as [`Diagnostic`]s with byte spans into the
//! source, and the remaining rows are still returned.
//!
//! ```
//! let doc = timetrack_parser::parse(
//!     "Nom;DateNaissance;DateMort;Description\n\"Ada\";1815-12-10;;\"\"\nbroken\n",
//! );
//! assert_eq!(doc.rows().len(), 1);
//! assert_eq!(doc.diagnostics().len(), 1);
//! ```

pub mod error;

mod fields;
mod rows;
mod span;

use log::{debug, info, trace};
use timetrack_core::record::PersonRecord;

pub use fields::{RawField, split_fields};
pub use span::Span;

use crate::error::{Diagnostic, ErrorCode, ParseError};

/// The header line written on export and expected on import.
pub const HEADER: &str = "Nom;DateNaissance;DateMort;Description";

/// A successfully parsed data row.
#[derive(Debug, Clone)]
pub struct CsvRow {
    line: usize,
    span: Span,
    record: PersonRecord,
}

impl CsvRow {
    /// The 1-based line number of the row in the source.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The byte span of the row in the source, without line terminator.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn record(&self) -> &PersonRecord {
        &self.record
    }

    pub fn into_record(self) -> PersonRecord {
        self.record
    }
}

/// The result of parsing a CSV document.
#[derive(Debug, Default)]
pub struct CsvDocument {
    rows: Vec<CsvRow>,
    diagnostics: Vec<Diagnostic>,
}

impl CsvDocument {
    /// Rows that produced a valid record, in source order.
    pub fn rows(&self) -> &[CsvRow] {
        &self.rows
    }

    /// Warnings and errors, in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` when at least one row was rejected.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity().is_error())
    }

    pub fn into_parts(self) -> (Vec<CsvRow>, Vec<Diagnostic>) {
        (self.rows, self.diagnostics)
    }

    /// Converts the document into its rows, failing if any row was rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] carrying every diagnostic, warnings included.
    pub fn into_result(self) -> Result<Vec<CsvRow>, ParseError> {
        if self.has_errors() {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(self.rows)
        }
    }
}

/// Parse a CSV document.
///
/// The first line is always treated as the header and skipped; a header
/// other than [`HEADER`] yields a warning. Blank lines are ignored. Both
/// `\n` and `\r\n` line endings are accepted.
pub fn parse(source: &str) -> CsvDocument {
    info!(bytes = source.len(); "Parsing CSV document");

    let mut diagnostics = Vec::new();
    let mut rows = Vec::new();
    let mut offset = 0;

    for (index, raw_line) in source.split_inclusive('\n').enumerate() {
        let line_offset = offset;
        offset += raw_line.len();
        let line = raw_line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(raw_line);
        let line_no = index + 1;

        if index == 0 {
            diagnostics.extend(check_header(line, line_offset));
            continue;
        }

        if line.trim().is_empty() {
            trace!(line = line_no; "Skipping blank line");
            continue;
        }

        let parsed = rows::parse_row(line, line_offset);
        diagnostics.extend(parsed.warnings);

        match parsed.record {
            Ok(record) => {
                trace!(line = line_no, record:?; "Row parsed");
                rows.push(CsvRow {
                    line: line_no,
                    span: Span::new(line_offset..line_offset + line.len()),
                    record,
                });
            }
            Err(diagnostic) => {
                debug!(line = line_no, diagnostic:%; "Row rejected");
                diagnostics.push(diagnostic);
            }
        }
    }

    let doc = CsvDocument { rows, diagnostics };
    info!(rows = doc.rows.len(), has_errors = doc.has_errors(); "CSV document parsed");
    doc
}

fn check_header(line: &str, offset: usize) -> Option<Diagnostic> {
    let bom_len = if line.starts_with('\u{feff}') {
        '\u{feff}'.len_utf8()
    } else {
        0
    };
    let header = &line[bom_len..];

    if header.trim() == HEADER {
        return None;
    }

    debug!(header; "Unexpected CSV header");
    Some(
        Diagnostic::new(ErrorCode::E002, "unexpected header, first line skipped")
            .with_label(
                Span::new(offset + bom_len..offset + line.len()),
                format!("expected `{HEADER}`"),
            )
            .with_help("the first line of a CSV file is always treated as the header"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let doc = parse("");
        assert!(doc.rows().is_empty());
        assert!(doc.diagnostics().is_empty());
    }

    #[test]
    fn test_header_only() {
        let doc = parse("Nom;DateNaissance;DateMort;Description\n");
        assert!(doc.rows().is_empty());
        assert!(doc.diagnostics().is_empty());
    }

    #[test]
    fn test_bom_and_crlf_header_accepted() {
        let doc = parse("\u{feff}Nom;DateNaissance;DateMort;Description\r\nA;1900-01-01;;\r\n");
        assert!(doc.diagnostics().is_empty());
        assert_eq!(doc.rows().len(), 1);
        assert_eq!(doc.rows()[0].record().name(), "A");
    }

    #[test]
    fn test_unexpected_header_is_skipped_with_warning() {
        let doc = parse("A;1900-01-01;;\nB;1901-01-01;;\n");
        assert_eq!(doc.rows().len(), 1);
        assert_eq!(doc.rows()[0].record().name(), "B");
        assert_eq!(doc.diagnostics().len(), 1);
        assert_eq!(doc.diagnostics()[0].code(), ErrorCode::E002);
        assert!(!doc.has_errors());
    }

    #[test]
    fn test_row_line_numbers_and_spans() {
        let source = "Nom;DateNaissance;DateMort;Description\n\nA;1900-01-01;;\n";
        let doc = parse(source);
        let row = &doc.rows()[0];

        assert_eq!(row.line(), 3);
        assert_eq!(row.span().slice(source), "A;1900-01-01;;");
    }

    #[test]
    fn test_into_result_fails_on_rejected_row() {
        let doc = parse("Nom;DateNaissance;DateMort;Description\nnope\n");
        let err = doc.into_result().unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), ErrorCode::E100);
    }
}
