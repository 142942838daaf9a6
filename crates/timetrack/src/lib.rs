//! TimeTrack - historical figures on a horizontal timeline.
//!
//! Records are kept in a [`store::RecordStore`], laid out by
//! [`layout::LayoutEngine`] into non-colliding rows and exported as SVG.
//! Records move in and out through versioned JSON files and a
//! semicolon separated CSV format.

pub mod config;
pub mod export;
pub mod import;
pub mod layout;
pub mod persistence;
pub mod store;

mod error;
mod palette;

pub use timetrack_core::{color, draw, geometry, record};

pub use error::TimetrackError;
pub use import::ImportReport;

use std::{fs, path::Path};

use chrono::NaiveDate;
use log::{debug, info, trace};

use timetrack_core::record::PersonRecord;

use config::AppConfig;
use export::{
    Exporter,
    svg::{Svg, SvgBuilder, Viewport},
};
use layout::{LayoutEngine, TimelineLayout};
use store::{RecordStore, StoreEvent};

/// Crop of the rendered timeline around one person.
#[derive(Debug, Clone, Copy)]
pub struct Focus<'a> {
    name: &'a str,
    viewport_width: f32,
}

impl<'a> Focus<'a> {
    pub fn new(name: &'a str, viewport_width: f32) -> Self {
        Self {
            name,
            viewport_width,
        }
    }
}

/// Facade over the record store, layout, rendering and file formats.
///
/// # Examples
///
/// ```rust,no_run
/// use chrono::NaiveDate;
/// use timetrack::{Timeline, config::AppConfig};
///
/// let mut timeline = Timeline::new(AppConfig::default());
/// let born = NaiveDate::from_ymd_opt(1815, 12, 10).unwrap();
/// let died = NaiveDate::from_ymd_opt(1852, 11, 27).unwrap();
///
/// timeline
///     .add("Ada Lovelace", born, Some(died), "Mathematician")
///     .expect("Invalid record");
///
/// let svg = timeline.render_svg(None).expect("Failed to render");
/// timeline.save().expect("Failed to save");
/// ```
#[derive(Debug, Default)]
pub struct Timeline {
    config: AppConfig,
    store: RecordStore,
    today: Option<NaiveDate>,
}

impl Timeline {
    /// Create an empty timeline with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            store: RecordStore::new(),
            today: None,
        }
    }

    /// Fix the date used as "today" for open-ended lifespans.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[PersonRecord] {
        self.store.all()
    }

    /// Registers an observer of store mutations.
    pub fn subscribe(&mut self, observer: impl FnMut(&StoreEvent) + 'static) {
        self.store.subscribe(observer);
    }

    /// Validate and append a record.
    ///
    /// # Errors
    ///
    /// Returns [`TimetrackError::Record`] when the name is empty or the
    /// death date precedes the birth date. The store is left unchanged.
    pub fn add(
        &mut self,
        name: &str,
        birth_date: NaiveDate,
        death_date: Option<NaiveDate>,
        description: &str,
    ) -> Result<&PersonRecord, TimetrackError> {
        let record = PersonRecord::new(name, birth_date, death_date, description)?;
        info!(record:%; "Adding record");
        let index = self.store.add(record);
        Ok(&self.store.all()[index])
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        info!("Clearing records");
        self.store.clear();
    }

    /// Compute the layout of the current records.
    pub fn layout(&self) -> TimelineLayout<'_> {
        let mut engine = LayoutEngine::new(self.config.layout());
        if let Some(today) = self.today {
            engine = engine.with_today(today);
        }
        engine.layout(self.store.all())
    }

    /// Render the timeline to an SVG string, optionally cropped around a person.
    ///
    /// # Errors
    ///
    /// Returns [`TimetrackError::Export`] for invalid style colors or an
    /// unknown focus name.
    pub fn render_svg(&self, focus: Option<Focus<'_>>) -> Result<String, TimetrackError> {
        let layout = self.layout();
        let svg = self.svg(&layout, focus)?;

        let mut buffer = Vec::new();
        svg.export_timeline(&layout, &mut buffer)?;

        info!(bytes = buffer.len(); "SVG rendered successfully");
        String::from_utf8(buffer).map_err(|err| TimetrackError::Export(Box::new(err)))
    }

    /// Render the timeline to an SVG file.
    ///
    /// # Errors
    ///
    /// As [`Timeline::render_svg`], plus I/O errors writing `path`.
    pub fn write_svg(&self, path: &Path, focus: Option<Focus<'_>>) -> Result<(), TimetrackError> {
        let layout = self.layout();
        let svg = self.svg(&layout, focus)?;

        let doc = svg.render_timeline(&layout);
        svg.write_document(&doc, path)?;
        Ok(())
    }

    /// Import CSV text, skipping records already present.
    pub fn import_csv(&mut self, source: &str) -> ImportReport {
        import::import_csv(&mut self.store, source)
    }

    /// Export all records as CSV text.
    pub fn export_csv(&self) -> String {
        export::csv::to_csv_string(self.store.all())
    }

    /// Export all records to a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`TimetrackError::Io`] if the file cannot be created and
    /// [`TimetrackError::Export`] if writing to it fails.
    pub fn export_csv_file(&self, path: &Path) -> Result<(), TimetrackError> {
        info!(path:? = path; "Exporting CSV");
        let mut file = fs::File::create(path)?;
        export::csv::write_records(self.store.all(), &mut file)?;
        Ok(())
    }

    /// Load records from the configured data file.
    ///
    /// Returns `false` when there is no file yet, leaving the store as is.
    ///
    /// # Errors
    ///
    /// Returns [`TimetrackError::Persistence`] for unreadable or invalid
    /// files; the store is left unchanged.
    pub fn load(&mut self) -> Result<bool, TimetrackError> {
        let path = self.config.storage().data_file().to_path_buf();
        self.load_from(&path)
    }

    /// Load records from `path`, replacing the current ones.
    ///
    /// # Errors
    ///
    /// See [`Timeline::load`].
    pub fn load_from(&mut self, path: &Path) -> Result<bool, TimetrackError> {
        match persistence::load(path)? {
            Some(records) => {
                self.store.replace_all(records);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Save records to the configured data file.
    ///
    /// # Errors
    ///
    /// Returns [`TimetrackError::Persistence`] if writing fails.
    pub fn save(&self) -> Result<(), TimetrackError> {
        self.save_to(self.config.storage().data_file())
    }

    /// Save records to `path`.
    ///
    /// # Errors
    ///
    /// See [`Timeline::save`].
    pub fn save_to(&self, path: &Path) -> Result<(), TimetrackError> {
        persistence::save(path, self.store.all())?;
        Ok(())
    }

    fn svg(
        &self,
        layout: &TimelineLayout<'_>,
        focus: Option<Focus<'_>>,
    ) -> Result<Svg, TimetrackError> {
        let svg = SvgBuilder::new()
            .with_style(self.config.style())
            .with_viewport(Self::viewport(layout, focus)?)
            .build()?;
        Ok(svg)
    }

    fn viewport(
        layout: &TimelineLayout<'_>,
        focus: Option<Focus<'_>>,
    ) -> Result<Option<Viewport>, TimetrackError> {
        let Some(focus) = focus else {
            return Ok(None);
        };

        let offset = layout
            .find_by_name(focus.name)
            .and_then(|placement| layout.focus_offset(placement.record(), focus.viewport_width))
            .ok_or_else(|| {
                export::Error::Render(format!("no record named `{}` on the timeline", focus.name))
            })?;

        debug!(name = focus.name, offset; "Focus offset computed");
        trace!(viewport_width = focus.viewport_width; "Viewport");
        Ok(Some(Viewport::new(offset, focus.viewport_width)))
    }
}
