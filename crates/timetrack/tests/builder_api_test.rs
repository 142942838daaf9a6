//! Integration tests for the Timeline API

use std::{cell::Cell, rc::Rc};

use chrono::NaiveDate;
use float_cmp::assert_approx_eq;
use proptest::prelude::*;

use timetrack::{
    Focus, Timeline, TimetrackError,
    config::{AppConfig, LayoutConfig, StorageConfig, StyleConfig},
    layout::LayoutEngine,
    record::PersonRecord,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2024, 6, 1)
}

fn seeded_config() -> AppConfig {
    AppConfig::new(
        LayoutConfig::default().with_seed(Some(42)),
        StyleConfig::default(),
    )
}

#[test]
fn test_timeline_api_exists() {
    let timeline = Timeline::default();
    assert!(timeline.records().is_empty());
    assert!(timeline.layout().is_empty());
}

#[test]
fn test_living_and_dead_get_separate_rows() {
    let mut timeline = Timeline::new(seeded_config()).with_today(today());
    timeline.add("A", date(1900, 1, 1), None, "").unwrap();
    timeline
        .add("B", date(1905, 1, 1), Some(date(1950, 1, 1)), "")
        .unwrap();

    let layout = timeline.layout();

    assert_eq!(layout.year_range(), Some((1895, 2029)));
    let placements = layout.placements();
    assert_eq!(placements.len(), 2);
    assert_eq!(placements[0].record().name(), "A");
    assert_approx_eq!(f32, placements[0].row(), 120.0);
    assert_approx_eq!(f32, placements[1].row(), 145.0);
    assert_approx_eq!(f32, placements[1].x_birth(), 150.0);
    assert_approx_eq!(f32, placements[1].x_end(), 600.0);
}

#[test]
fn test_invalid_record_leaves_store_unchanged() {
    let mut timeline = Timeline::default();

    let result = timeline.add("Backwards", date(1900, 1, 1), Some(date(1899, 1, 1)), "");
    assert!(matches!(result, Err(TimetrackError::Record(_))));

    let result = timeline.add("   ", date(1900, 1, 1), None, "");
    assert!(matches!(result, Err(TimetrackError::Record(_))));

    assert!(timeline.records().is_empty());
}

#[test]
fn test_render_simple_timeline() {
    let mut timeline = Timeline::new(seeded_config()).with_today(today());
    timeline
        .add("Ada Lovelace", date(1815, 12, 10), Some(date(1852, 11, 27)), "Mathematician")
        .unwrap();

    let svg = timeline.render_svg(None).expect("Failed to render");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("Ada Lovelace"));
}

#[test]
fn test_render_empty_timeline() {
    let timeline = Timeline::default();
    let svg = timeline.render_svg(None).expect("Failed to render");
    assert!(svg.contains("<svg"));
}

#[test]
fn test_render_focused_on_person() {
    let mut timeline = Timeline::new(seeded_config()).with_today(today());
    timeline.add("Early", date(1800, 1, 1), Some(date(1850, 1, 1)), "").unwrap();
    timeline.add("Late", date(1990, 1, 1), None, "").unwrap();

    // Late: x_birth = 50 + (1990 - 1795) * 10 = 2000
    let svg = timeline
        .render_svg(Some(Focus::new("Late", 800.0)))
        .expect("Failed to render");
    assert!(svg.contains("viewBox=\"1600 0 800"));

    let err = timeline.render_svg(Some(Focus::new("Nobody", 800.0)));
    assert!(matches!(err, Err(TimetrackError::Export(_))));
}

#[test]
fn test_written_svg_matches_rendered() {
    let mut timeline = Timeline::new(seeded_config()).with_today(today());
    timeline.add("Early", date(1800, 1, 1), Some(date(1850, 1, 1)), "").unwrap();
    timeline.add("Late", date(1990, 1, 1), None, "").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timeline.svg");
    let focus = Some(Focus::new("Late", 800.0));
    timeline.write_svg(&path, focus).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, timeline.render_svg(focus).unwrap());
    assert!(written.contains("viewBox=\"1600 0 800"));

    let missing = dir.path().join("missing.svg");
    let err = timeline.write_svg(&missing, Some(Focus::new("Nobody", 800.0)));
    assert!(matches!(err, Err(TimetrackError::Export(_))));
    assert!(!missing.exists());
}

#[test]
fn test_csv_roundtrip_into_empty_timeline() {
    let mut source = Timeline::default();
    source
        .add("Marie Curie", date(1867, 11, 7), Some(date(1934, 7, 4)), "Chemist; physicist")
        .unwrap();
    source.add("Jane Goodall", date(1934, 4, 3), None, "Primatologist").unwrap();

    let csv = source.export_csv();
    let mut target = Timeline::default();
    let report = target.import_csv(&csv);

    assert_eq!(report.added(), 2);
    assert!(report.diagnostics().is_empty());
    assert_eq!(target.records()[0].description(), "Chemist, physicist");
    assert_eq!(target.records()[1], source.records()[1]);
}

#[test]
fn test_import_does_not_duplicate() {
    let mut timeline = Timeline::default();
    timeline.add("A", date(1900, 1, 1), None, "").unwrap();

    let csv = timeline.export_csv();
    let report = timeline.import_csv(&csv);

    assert_eq!(report.added(), 0);
    assert_eq!(report.duplicates(), 1);
    assert_eq!(timeline.records().len(), 1);
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.json");
    let config = AppConfig::default().with_storage(StorageConfig::new(&path));

    let mut timeline = Timeline::new(config.clone());
    assert!(!timeline.load().unwrap(), "No file yet");
    timeline.add("A", date(1900, 1, 1), Some(date(1950, 2, 3)), "d").unwrap();
    timeline.save().unwrap();

    let mut reloaded = Timeline::new(config);
    assert!(reloaded.load().unwrap());
    assert_eq!(reloaded.records(), timeline.records());
}

#[test]
fn test_failed_load_keeps_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.json");
    std::fs::write(&path, "garbage").unwrap();

    let mut timeline = Timeline::default();
    timeline.add("A", date(1900, 1, 1), None, "").unwrap();

    assert!(matches!(
        timeline.load_from(&path),
        Err(TimetrackError::Persistence(_))
    ));
    assert_eq!(timeline.records().len(), 1);
}

#[test]
fn test_observer_sees_mutations() {
    let dirty = Rc::new(Cell::new(0));
    let mut timeline = Timeline::default();
    let counter = Rc::clone(&dirty);
    timeline.subscribe(move |_| counter.set(counter.get() + 1));

    timeline.add("A", date(1900, 1, 1), None, "").unwrap();
    timeline.import_csv("Nom;DateNaissance;DateMort;Description\nB;1901-01-01;;\n");
    timeline.clear();

    assert_eq!(dirty.get(), 3);
}

#[test]
fn test_age_at_death_boundaries() {
    let born = date(1900, 6, 15);
    let before = PersonRecord::new("X", born, Some(date(1980, 6, 14)), "").unwrap();
    let on = PersonRecord::new("X", born, Some(date(1980, 6, 15)), "").unwrap();

    assert_eq!(before.age_at_death(), Some(79));
    assert_eq!(on.age_at_death(), Some(80));
}

fn arb_record() -> impl Strategy<Value = PersonRecord> {
    (1500i32..2020, 1u32..=12, 1u32..=28, proptest::option::of(0i32..100)).prop_map(
        |(year, month, day, lifespan)| {
            let born = date(year, month, day);
            let died = lifespan.map(|years| date((year + years).min(2024), month, day));
            PersonRecord::new("P", born, died, "").unwrap()
        },
    )
}

proptest! {
    #[test]
    fn overlapping_spans_never_share_a_row(
        records in proptest::collection::vec(arb_record(), 1..40),
    ) {
        let config = LayoutConfig::default().with_seed(Some(0));
        let engine = LayoutEngine::new(&config).with_today(today());
        let layout = engine.layout(&records);
        let placements = layout.placements();

        prop_assert_eq!(placements.len(), records.len());

        for (i, a) in placements.iter().enumerate() {
            for b in &placements[i + 1..] {
                if a.extent().overlaps(b.extent()) {
                    prop_assert!((a.row() - b.row()).abs() >= 25.0);
                }
            }
        }
    }
}
