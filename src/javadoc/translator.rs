//! Comment translator
//!
//! Drives the scan over a source buffer: locate a block, decide whether it is
//! exempt, translate it, splice the result back and advance the cursor. Text
//! before the cursor has been processed; text after it is original input.

use log::{debug, trace};
use crate::config::{PaddingPolicy, TranslatorOptions};
use crate::error::{TranslateError, TranslateResult};
use super::classifier::{classify_line, CommentLine};
use super::locator::{find_next_block, indentation_before, is_exempt, line_number_at, CommentBlock};
use super::xml_doc::XmlDocBuilder;

/// Counts for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationReport {
    /// Blocks replaced with XML documentation
    pub translated: usize,
    /// Blocks left untouched (exempt or without continuation lines)
    pub skipped: usize,
}

/// Scan states of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    BlockFound(CommentBlock),
    Done,
}

/// Owned text buffer with its scan cursor
#[derive(Debug)]
struct SourceBuffer {
    text: String,
    cursor: usize,
}

impl SourceBuffer {
    fn new(text: String) -> Self {
        Self { text, cursor: 0 }
    }

    /// Replace the block with `replacement` and move the cursor past it
    fn splice(&mut self, block: CommentBlock, replacement: &str) {
        let replacement = replacement.trim();
        self.text.replace_range(block.start..block.end, replacement);
        self.cursor = block.start + replacement.len();
    }

    /// Leave the block as it is and move the cursor past it
    fn skip(&mut self, block: CommentBlock) {
        self.cursor = block.end;
    }
}

/// Translates Javadoc block comments into XML documentation comments
#[derive(Debug, Clone, Default)]
pub struct CommentTranslator {
    options: TranslatorOptions,
}

impl CommentTranslator {
    /// Create a new translator
    pub fn new(options: TranslatorOptions) -> Self {
        Self { options }
    }

    /// Translate every eligible block in `source`
    ///
    /// Fails on the first malformed block; nothing is partially applied since
    /// the caller only ever sees the finished buffer.
    pub fn translate(&self, source: String) -> TranslateResult<(String, TranslationReport)> {
        let newline = if source.contains("\r\n") { "\r\n" } else { "\n" };
        let mut buffer = SourceBuffer::new(source);
        let mut report = TranslationReport::default();
        let mut state = ScanState::Scanning;

        loop {
            state = match state {
                ScanState::Scanning => match find_next_block(&buffer.text, buffer.cursor)? {
                    Some(block) => ScanState::BlockFound(block),
                    None => ScanState::Done,
                },
                ScanState::BlockFound(block) => {
                    let line = line_number_at(&buffer.text, block.start);
                    match self.translate_block(&buffer.text, block, newline)? {
                        Some(replacement) => {
                            debug!("Translated comment block at line {}", line);
                            trace!("Replacement text:\n{}", replacement);
                            buffer.splice(block, &replacement);
                            report.translated += 1;
                        }
                        None => {
                            debug!("Skipped comment block at line {}", line);
                            buffer.skip(block);
                            report.skipped += 1;
                        }
                    }
                    ScanState::Scanning
                }
                ScanState::Done => break,
            };
        }

        Ok((buffer.text, report))
    }

    /// Translate a single block of `buffer`
    ///
    /// Returns `Ok(None)` when the block must stay as it is: it contains the
    /// skip marker, or none of its lines follow the continuation convention.
    pub fn translate_block(
        &self,
        buffer: &str,
        block: CommentBlock,
        newline: &str,
    ) -> TranslateResult<Option<String>> {
        if is_exempt(block.text(buffer), &self.options.skip_marker) {
            return Ok(None);
        }

        let first_line = line_number_at(buffer, block.start);
        let mut builder = XmlDocBuilder::new(self.options.summary_style);
        let mut continuation_lines = 0;

        // The first line holds the opening delimiter and never contributes
        for (index, line) in block.body(buffer).lines().enumerate().skip(1) {
            match classify_line(line, first_line + index)? {
                Some(CommentLine::Summary { lead, text }) => builder.push_summary(lead, text),
                Some(CommentLine::Tag(tag)) => builder.push_tag(&tag),
                None => continue,
            }
            continuation_lines += 1;
        }

        if continuation_lines == 0 {
            return Ok(None);
        }

        if !builder.has_padding() {
            match self.options.padding_policy {
                PaddingPolicy::Indentation => {
                    builder.pad_from_indentation(indentation_before(buffer, block.start));
                }
                PaddingPolicy::Require => {
                    return Err(TranslateError::UndefinedPadding {
                        offset: block.start,
                        line: first_line,
                    });
                }
            }
        }

        Ok(builder.render(newline))
    }
}

#[cfg(test)]
#[path = "translator_tests.rs"]
mod tests;
