use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The row was rejected.
    Error,
    /// The line was read but looks suspicious.
    Warning,
}

impl Severity {
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}

/// Stable identifiers for CSV problems.
///
/// `E0xx` cover the document layout, `E1xx` unreadable fields and `E2xx`
/// fields that read fine but do not form a valid record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A quote was opened and never closed. The rest of the line,
    /// separators included, became part of that field.
    E001,
    /// The first line is not `Nom;DateNaissance;DateMort;Description`.
    /// It is skipped anyway.
    E002,
    /// Fewer than three fields.
    E100,
    E101,
    E102,
    E200,
    E201,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
        }
    }

    /// Short summary, used as the label text when nothing more specific applies.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E001 => "unterminated quoted field",
            ErrorCode::E002 => "unexpected header",
            ErrorCode::E100 => "missing fields",
            ErrorCode::E101 => "invalid birth date",
            ErrorCode::E102 => "invalid death date",
            ErrorCode::E200 => "empty name",
            ErrorCode::E201 => "death before birth",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            ErrorCode::E001 | ErrorCode::E002 => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
