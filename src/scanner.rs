//! Template scanner
//!
//! Splits a template into literal spans and `{{ … }}` expression spans.
//! Every byte outside an interpolation span passes through verbatim,
//! including `\n`, `U+2028`, and `U+2029`. An opening `{{` with no closing
//! `}}` is not an error: the rest of the input, orphan braces included, is
//! emitted as a literal.

/// A segment of a scanned template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text, emitted verbatim
    Literal(&'a str),
    /// The content between `{{` and `}}`, exclusive
    Expression(&'a str),
}

/// Scan a template into alternating literal and expression segments.
///
/// Scanning cannot fail; expression segments are validated downstream.
pub fn scan(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        match rest[open + 2..].find("}}") {
            Some(close) => {
                if open > 0 {
                    segments.push(Segment::Literal(&rest[..open]));
                }
                segments.push(Segment::Expression(&rest[open + 2..open + 2 + close]));
                rest = &rest[open + 2 + close + 2..];
            }
            None => {
                // Orphan opener: everything from here on is literal
                segments.push(Segment::Literal(rest));
                return segments;
            }
        }
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }

    segments
}
