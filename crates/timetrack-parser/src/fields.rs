//! Field splitting for a single CSV line.
//!
//! A `"` toggles quoted mode and is dropped from the value; a `;` outside
//! quotes ends the field. An opening quote that is never closed swallows the
//! rest of the line.

use winnow::{
    Parser as _,
    combinator::{alt, eof, opt, preceded, repeat, separated, terminated},
    error::ModalResult,
    stream::{LocatingSlice, Location},
    token::take_till,
};

use log::debug;

use crate::span::Span;

type Input<'a> = LocatingSlice<&'a str>;

/// One field of a CSV line with quotes removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    value: String,
    span: Span,
    unterminated_quote: Option<usize>,
}

impl RawField {
    /// The field value with quotes removed.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The span of the raw field text, quotes included, relative to the line.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Offset of a quote that was opened but never closed.
    pub fn unterminated_quote(&self) -> Option<usize> {
        self.unterminated_quote
    }

    /// Shift every offset by `offset` bytes.
    pub(crate) fn offset(mut self, offset: usize) -> Self {
        self.span = self.span.offset(offset);
        self.unterminated_quote = self.unterminated_quote.map(|pos| pos + offset);
        self
    }
}

struct Segment<'a> {
    text: &'a str,
    unterminated_quote: Option<usize>,
}

fn quoted<'a>(input: &mut Input<'a>) -> ModalResult<Segment<'a>> {
    let start = input.current_token_start();
    let (text, close) = preceded('"', (take_till(0.., '"'), opt('"'))).parse_next(input)?;

    Ok(Segment {
        text,
        unterminated_quote: close.is_none().then_some(start),
    })
}

fn unquoted<'a>(input: &mut Input<'a>) -> ModalResult<Segment<'a>> {
    take_till(1.., ['"', ';'])
        .map(|text| Segment {
            text,
            unterminated_quote: None,
        })
        .parse_next(input)
}

fn field(input: &mut Input<'_>) -> ModalResult<RawField> {
    let start = input.current_token_start();

    let (value, unterminated_quote) = repeat(0.., alt((quoted, unquoted)))
        .fold(
            || (String::new(), None),
            |(mut acc, open): (String, Option<usize>), segment: Segment<'_>| {
                acc.push_str(segment.text);
                (acc, open.or(segment.unterminated_quote))
            },
        )
        .parse_next(input)?;

    let end = input.current_token_start();

    Ok(RawField {
        value,
        span: Span::new(start..end),
        unterminated_quote,
    })
}

fn fields(input: &mut Input<'_>) -> ModalResult<Vec<RawField>> {
    terminated(separated(1.., field, ';'), eof).parse_next(input)
}

/// Split one line (without its line terminator) into fields.
///
/// Spans are relative to the start of `line`. The result always holds at
/// least one field; an empty line yields a single empty field.
pub fn split_fields(line: &str) -> Vec<RawField> {
    let mut input = LocatingSlice::new(line);
    match fields(&mut input) {
        Ok(fields) => fields,
        Err(_) => {
            debug!(line; "Field splitter rejected line, keeping it as one field");
            vec![RawField {
                value: line.replace('"', ""),
                span: Span::new(0..line.len()),
                unterminated_quote: None,
            }]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(line: &str) -> Vec<String> {
        split_fields(line)
            .into_iter()
            .map(|f| f.value().to_string())
            .collect()
    }

    #[test]
    fn test_split_plain_fields() {
        assert_eq!(values("a;b;c"), ["a", "b", "c"]);
    }

    #[test]
    fn test_split_keeps_empty_fields() {
        assert_eq!(values("a;;c;"), ["a", "", "c", ""]);
        assert_eq!(values(""), [""]);
    }

    #[test]
    fn test_quotes_are_dropped() {
        assert_eq!(
            values(r#""Ada Lovelace";1815-12-10;1852-11-27;"Mathematician""#),
            ["Ada Lovelace", "1815-12-10", "1852-11-27", "Mathematician"]
        );
    }

    #[test]
    fn test_separator_inside_quotes_is_literal() {
        assert_eq!(values(r#""a;b";c"#), ["a;b", "c"]);
    }

    #[test]
    fn test_quote_toggles_mid_field() {
        assert_eq!(values(r#"ab"c;d"e;f"#), ["abc;de", "f"]);
        assert_eq!(values(r#""ab""cd""#), ["abcd"]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end_of_line() {
        let fields = split_fields(r#"x;"open;still open"#);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1].value(), "open;still open");
        assert_eq!(fields[1].unterminated_quote(), Some(2));
        assert_eq!(fields[0].unterminated_quote(), None);
    }

    #[test]
    fn test_field_spans_cover_raw_text() {
        let line = r#""Ada";1815-12-10"#;
        let fields = split_fields(line);
        assert_eq!(fields[0].span(), Span::new(0..5));
        assert_eq!(fields[1].span(), Span::new(6..16));
        assert_eq!(&line[fields[1].span().start()..fields[1].span().end()], "1815-12-10");
    }

    #[test]
    fn test_offset_shifts_spans() {
        let field = split_fields(r#""a"#).remove(0).offset(10);
        assert_eq!(field.span(), Span::new(10..12));
        assert_eq!(field.unterminated_quote(), Some(10));
    }
}
