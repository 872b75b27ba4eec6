//! Line classification by literal field prefix.
//!
//! Lines are matched after whitespace trimming. A field prefix includes
//! exactly one space after the colon, so `data:x` is not a data line.

/// Prefix of an `id` line.
pub(crate) const ID: &str = "id: ";
/// Prefix of a `data` line.
pub(crate) const DATA: &str = "data: ";
/// Prefix of an `event` line.
pub(crate) const EVENT: &str = "event: ";
/// Prefix of a `retry` line.
pub(crate) const RETRY: &str = "retry: ";
/// Leading character of a comment line.
pub(crate) const COMMENT: char = ':';

/// A trimmed, non-blank line classified by its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Id(&'a str),
    Data(&'a str),
    Event(&'a str),
    /// Raw retry text; parsed by the scanner.
    Retry(&'a str),
    Comment(&'a str),
    /// Unrecognized field, kept for forward compatibility.
    Unknown,
}

impl<'a> Line<'a> {
    /// Classify a trimmed line. Callers handle blank lines before this.
    pub(crate) fn classify(line: &'a str) -> Self {
        if let Some(value) = line.strip_prefix(ID) {
            Line::Id(value)
        } else if let Some(value) = line.strip_prefix(DATA) {
            Line::Data(value)
        } else if let Some(value) = line.strip_prefix(EVENT) {
            Line::Event(value)
        } else if let Some(value) = line.strip_prefix(RETRY) {
            Line::Retry(value)
        } else if let Some(value) = line.strip_prefix(COMMENT) {
            Line::Comment(value.strip_prefix(' ').unwrap_or(value))
        } else {
            Line::Unknown
        }
    }
}
