use chrono::NaiveDate;
use proptest::prelude::*;
use timetrack_parser::{HEADER, error::ErrorCode, parse, split_fields};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_exported_document_parses() {
    let source = format!(
        "{HEADER}\n\
         \"Ada Lovelace\";1815-12-10;1852-11-27;\"Mathematician, first programmer\"\n\
         \"Jane Goodall\";1934-04-03;;\"Primatologist\"\n"
    );

    let doc = parse(&source);

    assert!(doc.diagnostics().is_empty());
    assert_eq!(doc.rows().len(), 2);

    let ada = doc.rows()[0].record();
    assert_eq!(ada.name(), "Ada Lovelace");
    assert_eq!(ada.birth_date(), date(1815, 12, 10));
    assert_eq!(ada.death_date(), Some(date(1852, 11, 27)));
    assert_eq!(ada.description(), "Mathematician, first programmer");

    let jane = doc.rows()[1].record();
    assert!(jane.is_living());
    assert_eq!(doc.rows()[1].line(), 3);
}

#[test]
fn test_malformed_rows_do_not_stop_parsing() {
    let source = format!(
        "{HEADER}\n\
         \"Good One\";1900-01-01;;\"\"\n\
         \"Missing\";1900-01-01\n\
         \"Bad Birth\";01/01/1900;;\"\"\n\
         \"Bad Death\";1900-01-01;tomorrow;\"\"\n\
         \"\";1900-01-01;;\"\"\n\
         \"Backwards\";1900-01-01;1800-01-01;\"\"\n\
         \"Good Two\";1901-01-01;1950-01-01;\"\"\n"
    );

    let doc = parse(&source);

    let names: Vec<_> = doc.rows().iter().map(|r| r.record().name().to_string()).collect();
    assert_eq!(names, ["Good One", "Good Two"]);

    let codes: Vec<_> = doc.diagnostics().iter().map(|d| d.code()).collect();
    assert_eq!(
        codes,
        [
            ErrorCode::E100,
            ErrorCode::E101,
            ErrorCode::E102,
            ErrorCode::E200,
            ErrorCode::E201,
        ]
    );
    assert!(doc.diagnostics().iter().all(|d| d.severity().is_error()));
}

#[test]
fn test_diagnostic_span_points_at_field() {
    let source = format!("{HEADER}\n\"Bad Birth\";1900-02-30;;\"\"\n");
    let doc = parse(&source);

    let label = &doc.diagnostics()[0].labels()[0];
    assert_eq!(label.span().slice(&source), "1900-02-30");
}

#[test]
fn test_death_before_birth_labels_both_dates() {
    let source = format!("{HEADER}\nX;1900-01-01;1800-01-01;\n");
    let doc = parse(&source);

    let labels = doc.diagnostics()[0].labels();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].span().slice(&source), "1800-01-01");
    assert_eq!(labels[1].span().slice(&source), "1900-01-01");
}

#[test]
fn test_extra_fields_are_ignored() {
    let source = format!("{HEADER}\nX;1900-01-01;;desc;extra;more\n");
    let doc = parse(&source);

    assert!(doc.diagnostics().is_empty());
    assert_eq!(doc.rows()[0].record().description(), "desc");
}

proptest! {
    #[test]
    fn split_without_quotes_matches_str_split(line in "[a-z0-9 ;]{0,40}") {
        let values: Vec<String> =
            split_fields(&line).iter().map(|f| f.value().to_string()).collect();
        let expected: Vec<String> = line.split(';').map(str::to_string).collect();
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn quoted_value_survives_splitting(value in "[a-zA-Z0-9 ,;.-]{0,30}") {
        let line = format!("\"{value}\";1900-01-01");
        let fields = split_fields(&line);
        prop_assert_eq!(fields.len(), 2);
        prop_assert_eq!(fields[0].value(), value.as_str());
        prop_assert!(fields[0].unterminated_quote().is_none());
    }

    #[test]
    fn parse_never_panics(source in "(\\PC|\n|\r|;|\"){0,200}") {
        let _ = parse(&source);
    }
}
