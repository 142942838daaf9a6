//! Diagnostics produced while reading a CSV document.
//!
//! Every problem becomes a [`Diagnostic`] identified by an [`ErrorCode`],
//! with labeled byte spans into the source and optional help. The code
//! decides the [`Severity`]: `E0xx` problems are warnings and the row is
//! still read, anything else rejects the row.
//!
//! ```
//! # use timetrack_parser::error::{Diagnostic, ErrorCode, Severity};
//! # use timetrack_parser::Span;
//! let diag = Diagnostic::new(ErrorCode::E101, "invalid birth date `1900-13-01`")
//!     .with_label(Span::new(42..52), "expected YYYY-MM-DD")
//!     .with_help("dates use the ISO format, e.g. `1900-06-15`");
//!
//! assert_eq!(diag.severity(), Severity::Error);
//! ```

mod code;
mod diagnostic;
mod parse_error;

pub use code::{ErrorCode, Severity};
pub use diagnostic::{Diagnostic, Label, LabelKind};
pub use parse_error::ParseError;
