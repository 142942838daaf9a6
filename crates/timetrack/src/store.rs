//! In-memory record collection with change notifications.
//!
//! The store keeps records in insertion order and never enforces uniqueness
//! on [`RecordStore::add`]. Deduplication is the job of the importer.

use std::fmt;

use chrono::NaiveDate;
use log::{debug, trace};

use timetrack_core::record::PersonRecord;

/// A mutation that happened to a [`RecordStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// A record was appended at `index`.
    Added { index: usize },
    /// All records were removed.
    Cleared,
    /// The content was replaced by `count` loaded records.
    Replaced { count: usize },
}

/// Callback invoked after each mutation.
pub type Observer = Box<dyn FnMut(&StoreEvent)>;

/// Ordered collection of person records.
#[derive(Default)]
pub struct RecordStore {
    records: Vec<PersonRecord>,
    observers: Vec<Observer>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer notified after every mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&StoreEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Appends a record and returns its index.
    pub fn add(&mut self, record: PersonRecord) -> usize {
        let index = self.records.len();
        trace!(index, record:%; "Adding record");
        self.records.push(record);
        self.notify(StoreEvent::Added { index });
        index
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        debug!(count = self.records.len(); "Clearing store");
        self.records.clear();
        self.notify(StoreEvent::Cleared);
    }

    /// Replaces the whole content, as done when loading from disk.
    pub fn replace_all(&mut self, records: Vec<PersonRecord>) {
        let count = records.len();
        debug!(count; "Replacing store content");
        self.records = records;
        self.notify(StoreEvent::Replaced { count });
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[PersonRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` if a record with this exact name and birth date exists.
    pub fn contains(&self, name: &str, birth_date: NaiveDate) -> bool {
        self.records
            .iter()
            .any(|record| record.has_identity(name, birth_date))
    }

    fn notify(&mut self, event: StoreEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("records", &self.records)
            .field("observers", &self.observers.len())
            .finish()
    }
}
