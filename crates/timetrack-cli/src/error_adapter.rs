//! Bridges [`TimetrackError`] to miette reports.
//!
//! A rejected CSV import expands into one report per row diagnostic, each
//! with its own source snippet. Every other error is a single report
//! without source.

use std::{error::Error, fmt};

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, Severity as MietteSeverity,
    SourceCode, SourceSpan,
};

use timetrack::TimetrackError;
use timetrack_parser::{
    Span,
    error::{Diagnostic, LabelKind, Severity},
};

/// One renderable report.
#[derive(Debug)]
pub enum Report<'a> {
    /// A CSV diagnostic together with the document it points into.
    Row { diag: &'a Diagnostic, src: &'a str },
    Error(&'a TimetrackError),
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Row { diag, .. } => f.write_str(diag.message()),
            Report::Error(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl Error for Report<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Report::Row { .. } => None,
            Report::Error(err) => err.source(),
        }
    }
}

impl MietteDiagnostic for Report<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            Report::Row { diag, .. } => return Some(Box::new(diag.code())),
            Report::Error(TimetrackError::Io(_)) => "timetrack::io",
            Report::Error(TimetrackError::Record(_)) => "timetrack::record",
            Report::Error(TimetrackError::Parse { .. }) => "timetrack::parse",
            Report::Error(TimetrackError::Persistence(_)) => "timetrack::persistence",
            Report::Error(TimetrackError::Export(_)) => "timetrack::export",
            Report::Error(TimetrackError::Config(_)) => "timetrack::config",
        };
        Some(Box::new(code))
    }

    fn severity(&self) -> Option<MietteSeverity> {
        match self {
            Report::Row { diag, .. } => Some(match diag.severity() {
                Severity::Error => MietteSeverity::Error,
                Severity::Warning => MietteSeverity::Warning,
            }),
            Report::Error(_) => None,
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self {
            Report::Row { diag, .. } => diag.help()?,
            Report::Error(TimetrackError::Record(_)) => {
                "names must not be empty and death must not precede birth"
            }
            Report::Error(TimetrackError::Persistence(_)) => {
                "the data file is left untouched; fix or move it"
            }
            Report::Error(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            Report::Row { src, .. } => Some(src as &dyn SourceCode),
            Report::Error(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Report::Row { diag, .. } = self else {
            return None;
        };
        if diag.labels().is_empty() {
            return None;
        }

        Some(Box::new(diag.labels().iter().map(|label| {
            let span = to_source_span(label.span());
            let message = Some(label.message().to_string());
            match label.kind() {
                LabelKind::Primary => LabeledSpan::new_primary_with_span(message, span),
                LabelKind::Context => LabeledSpan::new_with_span(message, span),
            }
        })))
    }
}

fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Splits `err` into the reports shown to the user.
pub fn reports(err: &TimetrackError) -> Vec<Report<'_>> {
    match err {
        TimetrackError::Parse { err: parse_err, src } => parse_err
            .diagnostics()
            .iter()
            .map(|diag| Report::Row { diag, src })
            .collect(),
        _ => vec![Report::Error(err)],
    }
}

/// Renders every report of `err` with miette's graphical handler.
pub fn render_reports(err: &TimetrackError) -> Vec<String> {
    let handler = GraphicalReportHandler::new();

    reports(err)
        .iter()
        .map(|report| {
            let mut rendered = String::new();
            handler
                .render_report(&mut rendered, report)
                .expect("Writing to String buffer is infallible");
            rendered
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use timetrack_parser::error::{ErrorCode, ParseError};

    use super::*;

    #[test]
    fn test_row_report_carries_code_and_severity() {
        let diag = Diagnostic::new(ErrorCode::E101, "invalid birth date")
            .with_label(Span::new(0..5), "here")
            .with_help("use YYYY-MM-DD");
        let err = TimetrackError::new_parse_error(ParseError::from(diag), "hello");

        let reports = reports(&err);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].to_string(), "invalid birth date");
        assert_eq!(reports[0].code().unwrap().to_string(), "E101");
        assert!(matches!(reports[0].severity(), Some(MietteSeverity::Error)));
        assert_eq!(reports[0].labels().unwrap().count(), 1);
    }

    #[test]
    fn test_one_report_per_diagnostic() {
        let err = TimetrackError::new_parse_error(
            ParseError::new(vec![
                Diagnostic::new(ErrorCode::E002, "unexpected header"),
                Diagnostic::new(ErrorCode::E100, "missing fields")
                    .with_label(Span::new(10..15), "second"),
            ]),
            "source text here...",
        );

        let reports = reports(&err);

        assert_eq!(reports.len(), 2);
        assert!(matches!(reports[0].severity(), Some(MietteSeverity::Warning)));
        assert!(reports[0].labels().is_none());
        assert_eq!(reports[1].to_string(), "missing fields");
    }

    #[test]
    fn test_plain_error_has_namespaced_code() {
        let err = TimetrackError::Config("bad".to_string());

        let reports = reports(&err);

        assert_eq!(reports.len(), 1);
        assert!(matches!(reports[0], Report::Error(_)));
        assert_eq!(reports[0].code().unwrap().to_string(), "timetrack::config");
        assert!(reports[0].source_code().is_none());
    }

    #[test]
    fn test_rendered_report_shows_snippet() {
        let src = "Nom;DateNaissance;DateMort;Description\nbroken\n";
        let diag = Diagnostic::new(ErrorCode::E100, "expected at least 3 fields, found 1")
            .with_label(Span::new(39..45), "missing fields");
        let err = TimetrackError::new_parse_error(ParseError::from(diag), src);

        let rendered = render_reports(&err);

        assert_eq!(rendered.len(), 1);
        assert!(rendered[0].contains("E100"));
        assert!(rendered[0].contains("broken"));
    }
}
