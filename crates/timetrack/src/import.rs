//! CSV import with deduplication.

use log::{debug, info};

use timetrack_parser::error::Diagnostic;

use crate::store::RecordStore;

/// Summary of one CSV import.
#[derive(Debug, Default)]
pub struct ImportReport {
    added: usize,
    duplicates: usize,
    diagnostics: Vec<Diagnostic>,
}

impl ImportReport {
    /// Records appended to the store.
    pub fn added(&self) -> usize {
        self.added
    }

    /// Valid rows skipped because `(name, birth_date)` already existed.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Warnings and rejected rows, with spans into the imported source.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of rows that were rejected.
    pub fn rejected(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity().is_error())
            .count()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Parses `source` and appends every new record to `store`.
///
/// A row is new when no record in the store, including the ones added
/// earlier by this import, has the same name and birth date.
pub fn import_csv(store: &mut RecordStore, source: &str) -> ImportReport {
    let (rows, diagnostics) = timetrack_parser::parse(source).into_parts();
    let mut report = ImportReport {
        diagnostics,
        ..ImportReport::default()
    };

    for row in rows {
        let record = row.into_record();
        if store.contains(record.name(), record.birth_date()) {
            debug!(name = record.name(), birth:% = record.birth_date(); "Duplicate record skipped");
            report.duplicates += 1;
            continue;
        }
        store.add(record);
        report.added += 1;
    }

    info!(
        added = report.added,
        duplicates = report.duplicates,
        rejected = report.rejected();
        "CSV import finished"
    );
    report
}
