//! CSV writer for person records.

use std::io::Write;

use log::{debug, info};

use timetrack_core::record::{DATE_FORMAT, PersonRecord};
use timetrack_parser::HEADER;

use crate::export;

/// Writes `records` as a CSV document with header.
///
/// Names and descriptions are quoted, and every `;` in a description is
/// written as `,`.
///
/// # Errors
///
/// Returns [`export::Error::Io`] if writing to `out` fails.
pub fn write_records<'a>(
    records: impl IntoIterator<Item = &'a PersonRecord>,
    out: &mut dyn Write,
) -> Result<(), export::Error> {
    info!("Writing CSV records");

    writeln!(out, "{HEADER}")?;

    let mut count = 0usize;
    for record in records {
        writeln!(out, "{}", format_row(record))?;
        count += 1;
    }

    debug!(count; "CSV records written");
    Ok(())
}

/// Renders `records` to a CSV string.
pub fn to_csv_string<'a>(records: impl IntoIterator<Item = &'a PersonRecord>) -> String {
    let mut buffer = Vec::new();
    write_records(records, &mut buffer).expect("writing to a Vec cannot fail");
    String::from_utf8(buffer).expect("CSV rows are built from strings")
}

fn format_row(record: &PersonRecord) -> String {
    let death = record
        .death_date()
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default();

    format!(
        "\"{}\";{};{};\"{}\"",
        record.name(),
        record.birth_date().format(DATE_FORMAT),
        death,
        record.description().replace(';', ","),
    )
}
