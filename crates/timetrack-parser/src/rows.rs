//! Conversion of a split CSV line into a validated [`PersonRecord`].

use chrono::NaiveDate;
use timetrack_core::record::{DATE_FORMAT, PersonRecord, RecordError};

use crate::{
    error::{Diagnostic, ErrorCode},
    fields::{RawField, split_fields},
    span::Span,
};

const ROW_SHAPE_HELP: &str =
    "rows look like `\"name\";YYYY-MM-DD;YYYY-MM-DD;\"description\"`, death and description may be empty";
const DATE_HELP: &str = "dates use the ISO format, e.g. `1900-06-15`";

/// Outcome of reading one data line.
pub(crate) struct ParsedRow {
    pub record: Result<PersonRecord, Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

/// Parse a data line starting at byte `offset` of the document.
pub(crate) fn parse_row(line: &str, offset: usize) -> ParsedRow {
    let fields: Vec<RawField> = split_fields(line)
        .into_iter()
        .map(|field| field.offset(offset))
        .collect();

    let warnings = fields
        .iter()
        .filter_map(|field| field.unterminated_quote().map(|pos| (field, pos)))
        .map(|(field, pos)| {
            Diagnostic::new(ErrorCode::E001, "unterminated quoted field")
                .with_label(
                    Span::new(pos..field.span().end()),
                    "quote opened here runs to the end of the line",
                )
                .with_help("add a closing `\"`")
        })
        .collect();

    let line_span = Span::new(offset..offset + line.len());

    ParsedRow {
        record: build_record(&fields, line_span),
        warnings,
    }
}

fn build_record(fields: &[RawField], line_span: Span) -> Result<PersonRecord, Diagnostic> {
    let [name, birth, death, rest @ ..] = fields else {
        return Err(Diagnostic::new(
            ErrorCode::E100,
            format!("expected at least 3 fields, found {}", fields.len()),
        )
        .with_label(line_span, ErrorCode::E100.description())
        .with_help(ROW_SHAPE_HELP));
    };

    let birth_date = parse_date(birth.value()).ok_or_else(|| {
        Diagnostic::new(
            ErrorCode::E101,
            format!("invalid birth date `{}`", birth.value().trim()),
        )
        .with_label(birth.span(), "expected YYYY-MM-DD")
        .with_help(DATE_HELP)
    })?;

    let death_value = death.value().trim();
    let death_date = if death_value.is_empty() {
        None
    } else {
        Some(parse_date(death_value).ok_or_else(|| {
            Diagnostic::new(ErrorCode::E102, format!("invalid death date `{death_value}`"))
                .with_label(death.span(), "expected YYYY-MM-DD or nothing")
                .with_help(DATE_HELP)
        })?)
    };

    let description = rest.first().map(RawField::value).unwrap_or_default();

    PersonRecord::new(name.value(), birth_date, death_date, description).map_err(|err| match &err {
        RecordError::EmptyName => Diagnostic::new(ErrorCode::E200, err.to_string())
            .with_label(name.span(), ErrorCode::E200.description()),
        RecordError::DeathBeforeBirth { .. } => Diagnostic::new(ErrorCode::E201, err.to_string())
            .with_label(death.span(), "died here")
            .with_context(birth.span(), "born here")
            .with_help("check the order of the date columns"),
    })
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}
