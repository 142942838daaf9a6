//! Timeline layout engine.
//!
//! Turns a set of [`PersonRecord`]s into horizontal positions from a
//! linear year scale and vertical rows that never collide.
//!
//! # Pipeline
//!
//! ```text
//! records
//!     ↓ sort by birth date (stable)
//!     ↓ scale years to x
//!     ↓ drop spans outside the canvas
//!     ↓ allocate rows, pick colors
//! TimelineLayout
//! ```

mod rows;
mod scale;

pub use rows::RowAllocator;
pub use scale::{YearScale, YearTick};

use chrono::{Datelike, Local, NaiveDate};
use log::{debug, info, trace};

use timetrack_core::{
    color::Color,
    geometry::{Extent, Size},
    record::PersonRecord,
};

use crate::{config::LayoutConfig, palette::Palette};

/// Canvas height when no record was placed.
const EMPTY_CANVAS_HEIGHT: f32 = 200.0;
/// Space kept below the lowest row.
const BOTTOM_MARGIN: f32 = 30.0;

/// The position of one record on the timeline.
#[derive(Debug, Clone)]
pub struct Placement<'a> {
    record: &'a PersonRecord,
    x_birth: f32,
    x_end: f32,
    row: f32,
    color: Color,
}

impl<'a> Placement<'a> {
    pub fn record(&self) -> &'a PersonRecord {
        self.record
    }

    /// X coordinate of the birth year.
    pub fn x_birth(&self) -> f32 {
        self.x_birth
    }

    /// X coordinate of the death year, or of the current year for the living.
    pub fn x_end(&self) -> f32 {
        self.x_end
    }

    /// Y coordinate assigned to this record.
    pub fn row(&self) -> f32 {
        self.row
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Horizontal range covered by the lifespan.
    pub fn extent(&self) -> Extent {
        Extent::new(self.x_birth, self.x_end)
    }
}

/// Positioned records plus the axis they are drawn against.
#[derive(Debug, Clone)]
pub struct TimelineLayout<'a> {
    placements: Vec<Placement<'a>>,
    scale: Option<YearScale>,
    ticks: Vec<YearTick>,
    axis_y: f32,
    canvas_size: Size,
}

impl<'a> TimelineLayout<'a> {
    /// Placements in birth-date order.
    pub fn placements(&self) -> &[Placement<'a>] {
        &self.placements
    }

    /// Returns `true` when there is nothing to draw, not even an axis.
    pub fn is_empty(&self) -> bool {
        self.scale.is_none()
    }

    pub fn scale(&self) -> Option<&YearScale> {
        self.scale.as_ref()
    }

    /// The visible `(year_min, year_max)` range.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        self.scale.map(|s| (s.year_min(), s.year_max()))
    }

    pub fn ticks(&self) -> &[YearTick] {
        &self.ticks
    }

    pub fn axis_y(&self) -> f32 {
        self.axis_y
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Finds the placement of the first record with this name.
    pub fn find_by_name(&self, name: &str) -> Option<&Placement<'a>> {
        self.placements.iter().find(|p| p.record.name() == name)
    }

    /// Horizontal scroll offset that centers `record` in a viewport.
    ///
    /// Returns `max(0, x_birth - viewport_width / 2)`, or `None` when the
    /// record was not placed.
    pub fn focus_offset(&self, record: &PersonRecord, viewport_width: f32) -> Option<f32> {
        self.placements
            .iter()
            .find(|p| p.record.has_identity(record.name(), record.birth_date()))
            .map(|p| (p.x_birth - viewport_width / 2.0).max(0.0))
    }
}

/// Computes [`TimelineLayout`]s from records.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use timetrack::{config::LayoutConfig, layout::LayoutEngine};
/// # use timetrack_core::record::PersonRecord;
/// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let born = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
/// let records = [PersonRecord::new("A", born, None, "").unwrap()];
///
/// let engine = LayoutEngine::new(&LayoutConfig::default()).with_today(today);
/// let layout = engine.layout(&records);
///
/// assert_eq!(layout.year_range(), Some((1895, 2029)));
/// assert_eq!(layout.placements()[0].row(), 120.0);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    config: LayoutConfig,
    today: NaiveDate,
}

impl LayoutEngine {
    /// Creates an engine that treats the local date as today.
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            config: config.clone(),
            today: Local::now().date_naive(),
        }
    }

    /// Overrides the date used for the current year.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Lays out `records`.
    pub fn layout<'a>(&self, records: &'a [PersonRecord]) -> TimelineLayout<'a> {
        info!(records = records.len(); "Calculating timeline layout");

        let config = &self.config;
        let current_year = self.today.year();

        let Some(scale) = YearScale::from_records(
            records,
            current_year,
            config.year_padding(),
            config.origin_x(),
            config.pixels_per_year(),
        ) else {
            debug!("No records, empty layout");
            return TimelineLayout {
                placements: Vec::new(),
                scale: None,
                ticks: Vec::new(),
                axis_y: config.axis_y(),
                canvas_size: Size::new(2.0 * config.origin_x(), EMPTY_CANVAS_HEIGHT),
            };
        };

        let canvas_width = scale.canvas_width();
        debug!(
            year_min = scale.year_min(),
            year_max = scale.year_max(),
            canvas_width;
            "Year range computed"
        );

        let mut sorted: Vec<&PersonRecord> = records.iter().collect();
        sorted.sort_by_key(|record| record.birth_date());

        let mut rows = RowAllocator::new(config.base_row_y(), config.row_spacing());
        let mut palette = Palette::new(config.seed());
        let mut placements = Vec::with_capacity(sorted.len());

        for record in sorted {
            let x_birth = scale.x(record.birth_date().year());
            let x_end = scale.x(scale::end_year(record, current_year));

            let before_origin = x_birth < config.origin_x() || x_end < config.origin_x();
            let beyond_canvas = x_birth > canvas_width && x_end > canvas_width;
            if before_origin || beyond_canvas {
                debug!(name = record.name(), x_birth, x_end; "Record outside canvas, skipped");
                continue;
            }

            let row = rows.allocate();
            trace!(name = record.name(), x_birth, x_end, row; "Record placed");

            placements.push(Placement {
                record,
                x_birth,
                x_end,
                row,
                color: palette.next_color(),
            });
        }

        let canvas_height = rows
            .max_row()
            .map_or(EMPTY_CANVAS_HEIGHT, |row| row + BOTTOM_MARGIN);

        info!(placements = placements.len(), canvas_height; "Layout calculated");

        TimelineLayout {
            placements,
            ticks: scale.ticks(config.tick_interval()),
            scale: Some(scale),
            axis_y: config.axis_y(),
            canvas_size: Size::new(canvas_width, canvas_height),
        }
    }
}
