//! Block comment locator
//!
//! Finds `/* ... */` spans in a text buffer. Offsets are byte offsets into the
//! buffer and always fall on character boundaries because both delimiters are
//! ASCII.

use crate::error::{TranslateError, TranslateResult};
use super::constants::{BLOCK_CLOSE, BLOCK_OPEN};

/// A block comment span `[start, end)`, delimiters included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentBlock {
    /// Offset of the `/` of the opening delimiter
    pub start: usize,
    /// Offset just past the `/` of the closing delimiter
    pub end: usize,
}

impl CommentBlock {
    /// Raw text of the block including both delimiters
    pub fn text<'a>(&self, buffer: &'a str) -> &'a str {
        &buffer[self.start..self.end]
    }

    /// Text between the delimiters
    pub fn body<'a>(&self, buffer: &'a str) -> &'a str {
        &buffer[self.start + BLOCK_OPEN.len()..self.end - BLOCK_CLOSE.len()]
    }
}

/// Find the next block comment that opens at or after `cursor`
///
/// Returns `Ok(None)` once no opening delimiter remains. An opening delimiter
/// without a closing one is an error; the closing search starts after the
/// opening delimiter so `/*/` never counts as a complete block.
pub fn find_next_block(buffer: &str, cursor: usize) -> TranslateResult<Option<CommentBlock>> {
    let Some(relative_start) = buffer.get(cursor..).and_then(|rest| rest.find(BLOCK_OPEN)) else {
        return Ok(None);
    };

    let start = cursor + relative_start;
    let search_from = start + BLOCK_OPEN.len();

    match buffer[search_from..].find(BLOCK_CLOSE) {
        Some(relative_end) => Ok(Some(CommentBlock {
            start,
            end: search_from + relative_end + BLOCK_CLOSE.len(),
        })),
        None => Err(TranslateError::UnterminatedComment {
            offset: start,
            line: line_number_at(buffer, start),
        }),
    }
}

/// Whether a block is exempt from translation because it contains `marker`
pub fn is_exempt(block_text: &str, marker: &str) -> bool {
    !marker.is_empty() && block_text.contains(marker)
}

/// 1-based line number of a byte offset
pub fn line_number_at(buffer: &str, offset: usize) -> usize {
    buffer[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}

/// Leading whitespace of the line that contains `offset`
///
/// Example: for `    /** Docs */` and the offset of `/`, returns `"    "`.
pub fn indentation_before(buffer: &str, offset: usize) -> &str {
    let line_start = buffer[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line = &buffer[line_start..offset];
    &line[..line.len() - line.trim_start().len()]
}

#[cfg(test)]
#[path = "locator_tests.rs"]
mod tests;
