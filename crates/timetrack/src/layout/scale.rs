//! Mapping between calendar years and horizontal pixels.

use chrono::{Datelike, NaiveDate};

use timetrack_core::record::PersonRecord;

/// A labeled tick on the time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearTick {
    year: i32,
    x: f32,
}

impl YearTick {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn x(&self) -> f32 {
        self.x
    }
}

/// Linear year-to-pixel scale over the visible year range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearScale {
    year_min: i32,
    year_max: i32,
    origin_x: f32,
    pixels_per_year: f32,
}

impl YearScale {
    /// Computes the visible range for `records`, or `None` when there are none.
    ///
    /// The range starts `padding` years before the earliest birth and ends
    /// `padding` years after the latest of `current_year` and every end
    /// year, where living people end in `current_year`.
    pub fn from_records(
        records: &[PersonRecord],
        current_year: i32,
        padding: i32,
        origin_x: f32,
        pixels_per_year: f32,
    ) -> Option<Self> {
        let earliest_birth = records.iter().map(|r| r.birth_date().year()).min()?;
        let latest_end = records
            .iter()
            .map(|r| end_year(r, current_year))
            .fold(current_year, i32::max);

        // Years no date can carry are never drawn.
        let clamp = |year: i32| year.clamp(NaiveDate::MIN.year(), NaiveDate::MAX.year());

        Some(Self {
            year_min: clamp(earliest_birth.saturating_sub(padding)),
            year_max: clamp(latest_end.saturating_add(padding)),
            origin_x,
            pixels_per_year,
        })
    }

    pub fn year_min(&self) -> i32 {
        self.year_min
    }

    pub fn year_max(&self) -> i32 {
        self.year_max
    }

    /// X coordinate of the start of `year`.
    pub fn x(&self, year: i32) -> f32 {
        self.origin_x + (year - self.year_min) as f32 * self.pixels_per_year
    }

    /// Canvas width: the scaled range plus the origin margin on both sides.
    pub fn canvas_width(&self) -> f32 {
        2.0 * self.origin_x + (self.year_max - self.year_min) as f32 * self.pixels_per_year
    }

    /// Ticks every `interval` years from `year_min` to `year_max` inclusive.
    pub fn ticks(&self, interval: i32) -> Vec<YearTick> {
        let step = usize::try_from(interval.max(1)).unwrap_or(1);
        (self.year_min..=self.year_max)
            .step_by(step)
            .map(|year| YearTick {
                year,
                x: self.x(year),
            })
            .collect()
    }
}

/// Year a lifespan ends: death year, or `current_year` for the living.
pub fn end_year(record: &PersonRecord, current_year: i32) -> i32 {
    record
        .death_date()
        .map(|date| date.year())
        .unwrap_or(current_year)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use float_cmp::assert_approx_eq;

    use super::*;

    fn person(born: i32, died: Option<i32>) -> PersonRecord {
        let date = |y| NaiveDate::from_ymd_opt(y, 6, 1).unwrap();
        PersonRecord::new("P", date(born), died.map(date), "").unwrap()
    }

    #[test]
    fn test_empty_records_have_no_scale() {
        assert!(YearScale::from_records(&[], 2024, 5, 50.0, 10.0).is_none());
    }

    #[test]
    fn test_range_padding_and_current_year() {
        let records = [person(1900, None), person(1905, Some(1950))];
        let scale = YearScale::from_records(&records, 2024, 5, 50.0, 10.0).unwrap();

        assert_eq!(scale.year_min(), 1895);
        assert_eq!(scale.year_max(), 2029);
    }

    #[test]
    fn test_range_covers_current_year_for_old_deaths() {
        let records = [person(1500, Some(1560))];
        let scale = YearScale::from_records(&records, 2024, 5, 50.0, 10.0).unwrap();
        assert_eq!(scale.year_max(), 2029);
    }

    #[test]
    fn test_extreme_padding_stays_in_date_range() {
        let records = [person(1900, Some(1950))];
        let scale = YearScale::from_records(&records, 2024, i32::MAX, 50.0, 10.0).unwrap();

        assert_eq!(scale.year_min(), NaiveDate::MIN.year());
        assert_eq!(scale.year_max(), NaiveDate::MAX.year());
        assert!(scale.canvas_width().is_finite());
        assert!(scale.x(1900) > 50.0);
    }

    #[test]
    fn test_x_is_linear() {
        let records = [person(1900, Some(1950))];
        let scale = YearScale::from_records(&records, 2000, 5, 50.0, 10.0).unwrap();

        assert_approx_eq!(f32, scale.x(1895), 50.0);
        assert_approx_eq!(f32, scale.x(1900), 100.0);
        assert_approx_eq!(f32, scale.canvas_width(), 100.0 + 110.0 * 10.0);
    }

    #[test]
    fn test_ticks_inclusive_range() {
        let records = [person(1905, Some(1950))];
        let scale = YearScale::from_records(&records, 1980, 5, 50.0, 10.0).unwrap();
        let years: Vec<_> = scale.ticks(10).iter().map(YearTick::year).collect();

        assert_eq!(years, [1900, 1910, 1920, 1930, 1940, 1950, 1960, 1970, 1980]);
        assert_approx_eq!(f32, scale.ticks(10)[1].x(), 150.0);
    }
}
