use std::fmt;

use crate::{
    error::{ErrorCode, Severity},
    span::Span,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// The offending field.
    Primary,
    /// Related context, such as the birth date a death date conflicts with.
    Context,
}

/// A message attached to a span of the source.
#[derive(Debug, Clone)]
pub struct Label {
    kind: LabelKind,
    span: Span,
    message: String,
}

impl Label {
    pub fn kind(&self) -> LabelKind {
        self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One problem found in a CSV document.
///
/// Rendered by the CLI as:
///
/// ```text
/// error[E101]: invalid birth date `1900-13-01`
///    |
///  3 | "Ada";1900-13-01;;"Mathematician"
///    |       ^^^^^^^^^^ expected YYYY-MM-DD
///    |
///    = help: dates use the ISO format, e.g. `1900-06-15`
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: ErrorCode,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(LabelKind::Primary, span, message)
    }

    pub fn with_context(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(LabelKind::Context, span, message)
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Span of the first primary label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.kind == LabelKind::Primary)
            .map(Label::span)
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    fn push_label(mut self, kind: LabelKind, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            kind,
            span,
            message: message.into(),
        });
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity(), self.code, self.message)
    }
}

impl std::error::Error for Diagnostic {}
