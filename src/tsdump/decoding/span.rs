//! Position-span sub-parser
//!
//! Parses the `[<row>, <col>] - [<row>, <col>]` text trailing each dump line.
//! Whitespace is free around the brackets, commas and hyphen. The match is
//! anchored at the start of the text; anything after the closing bracket is
//! ignored.

use crate::tsdump::ast::Span;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static SPAN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[\s*([0-9]+)\s*,\s*([0-9]+)\s*\]\s*-\s*\[\s*([0-9]+)\s*,\s*([0-9]+)\s*\]")
        .expect("span pattern is a valid regex")
});

/// Error returned when position text does not match the span pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanParseError {
    pub text: String,
}

impl fmt::Display for SpanParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid position span: '{}'", self.text)
    }
}

impl std::error::Error for SpanParseError {}

impl Span {
    /// Parse position text, yielding `None` when it does not match.
    pub fn parse(text: &str) -> Option<Span> {
        let captures = SPAN_PATTERN.captures(text)?;
        let number = |index: usize| -> Option<usize> { captures.get(index)?.as_str().parse().ok() };

        Some(Span::new(number(1)?, number(2)?, number(3)?, number(4)?))
    }
}

impl FromStr for Span {
    type Err = SpanParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Span::parse(s).ok_or_else(|| SpanParseError {
            text: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_canonical_text() {
        assert_eq!(Span::parse("[0, 0] - [54, 1]"), Some(Span::new(0, 0, 54, 1)));
    }

    #[test]
    fn test_whitespace_is_free() {
        let expected = Some(Span::new(0, 0, 54, 1));
        assert_eq!(Span::parse("[ 0,0]-[54,1]"), expected);
        assert_eq!(Span::parse("[0 ,  0]   -   [54 , 1]"), expected);
        assert_eq!(Span::parse("[0,0]\t-\t[54,1]"), expected);
    }

    #[test]
    fn test_trailing_content_is_ignored() {
        assert_eq!(
            Span::parse("[3, 4] - [3, 9] extra stuff"),
            Some(Span::new(3, 4, 3, 9))
        );
    }

    #[test]
    fn test_must_anchor_at_start() {
        assert_eq!(Span::parse(" [0, 0] - [1, 1]"), None);
        assert_eq!(Span::parse("x [0, 0] - [1, 1]"), None);
    }

    #[test]
    fn test_rejects_malformed_text() {
        assert_eq!(Span::parse(""), None);
        assert_eq!(Span::parse("[0, 0]"), None);
        assert_eq!(Span::parse("[0, 0] - [1]"), None);
        assert_eq!(Span::parse("[-1, 0] - [1, 1]"), None);
        assert_eq!(Span::parse("[0.5, 0] - [1, 1]"), None);
        assert_eq!(Span::parse("(0, 0) - (1, 1)"), None);
    }

    #[test]
    fn test_overflowing_numbers_fail() {
        assert_eq!(Span::parse("[99999999999999999999999, 0] - [1, 1]"), None);
    }

    #[test]
    fn test_from_str() {
        let span: Span = "[1, 2] - [3, 4]".parse().unwrap();
        assert_eq!(span, Span::new(1, 2, 3, 4));

        let err = "nope".parse::<Span>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid position span: 'nope'");
    }
}
