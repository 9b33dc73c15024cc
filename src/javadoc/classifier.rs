//! Comment line classifier
//!
//! Sorts the lines of a block comment body into summary text and Javadoc tags.
//! Only lines that follow the continuation convention (whitespace, then `*`)
//! take part; everything else in the body is ignored.

use std::sync::OnceLock;
use regex::Regex;
use crate::error::{TranslateError, TranslateResult};
use super::constants::*;

/// A Javadoc tag recognised on a continuation line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTag<'a> {
    /// `@param <name> <description>`
    Param { name: &'a str, description: &'a str },
    /// `@return <description>` or `@returns <description>`
    Returns { description: &'a str },
    /// `@throws <type> <description>` or `@exception <type> <description>`
    Throws { exception: &'a str, description: &'a str },
    /// `@see ...`, which has no XML-doc counterpart here and is dropped
    See,
}

/// Classification of one continuation line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentLine<'a> {
    Tag(DocTag<'a>),
    /// Free text, possibly blank
    Summary {
        /// Text in front of the whitespace that precedes the marker
        lead: &'a str,
        /// Trimmed summary text
        text: &'a str,
    },
}

fn continuation_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<lead>\s*)\s\*(?P<rest>.*)$")
            .expect("Failed to compile continuation marker regex")
    })
}

/// Split a body line at its continuation marker
///
/// Returns the lead (the line's indentation minus the whitespace character
/// directly in front of `*`) and the left-trimmed text after the marker.
/// Example: `"         * @param x value"` gives `("        ", "@param x value")`.
pub fn split_continuation(line: &str) -> Option<(&str, &str)> {
    let captures = continuation_regex().captures(line)?;
    let lead = captures.name("lead")?.as_str();
    let rest = captures.name("rest")?.as_str();
    Some((lead, rest.trim_start()))
}

/// Classify a single body line
///
/// `line_number` is only used for error reporting. Returns `Ok(None)` for
/// lines without a continuation marker.
pub fn classify_line(line: &str, line_number: usize) -> TranslateResult<Option<CommentLine<'_>>> {
    let Some((lead, candidate)) = split_continuation(line) else {
        return Ok(None);
    };

    match parse_tag(candidate, line_number)? {
        Some(tag) => Ok(Some(CommentLine::Tag(tag))),
        None => Ok(Some(CommentLine::Summary {
            lead,
            text: candidate.trim(),
        })),
    }
}

/// Parse a tag candidate, returning `None` when it is not a known tag
fn parse_tag(candidate: &str, line_number: usize) -> TranslateResult<Option<DocTag<'_>>> {
    let (token, rest) = split_first_word(candidate);

    let tag = match token {
        TAG_PARAM => {
            let (name, description) = split_first_word(rest);
            if name.is_empty() {
                return Err(malformed(token, "parameter name", line_number));
            }
            DocTag::Param { name, description }
        }
        TAG_RETURN | TAG_RETURNS => DocTag::Returns { description: rest },
        TAG_THROWS | TAG_EXCEPTION => {
            let (exception, description) = split_first_word(rest);
            if exception.is_empty() {
                return Err(malformed(token, "exception type", line_number));
            }
            DocTag::Throws { exception, description }
        }
        TAG_SEE => DocTag::See,
        _ => return Ok(None),
    };

    Ok(Some(tag))
}

fn malformed(tag: &str, field: &'static str, line: usize) -> TranslateError {
    TranslateError::MalformedTag {
        tag: tag.to_string(),
        field,
        line,
    }
}

/// Split off the first whitespace-separated word; the remainder is trimmed
fn split_first_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(pos) => (&text[..pos], text[pos..].trim()),
        None => (text, ""),
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
