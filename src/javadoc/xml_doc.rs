//! XML documentation comment builder
//!
//! Collects the classified lines of one block comment and renders them as
//! `///` lines: a `<summary>` section followed by one line per tag element.

use crate::config::SummaryStyle;
use super::classifier::DocTag;
use super::constants::*;

/// Accumulates the translated content of a single comment block
#[derive(Debug, Clone)]
pub struct XmlDocBuilder {
    style: SummaryStyle,
    /// Prefix for every emitted line, fixed by the first summary line
    padding: Option<String>,
    /// Summary paragraphs; the last one is the one being appended to
    paragraphs: Vec<String>,
    /// Tag elements in source order, without padding
    elements: Vec<String>,
}

impl XmlDocBuilder {
    pub fn new(style: SummaryStyle) -> Self {
        Self {
            style,
            padding: None,
            paragraphs: vec![String::new()],
            elements: Vec::new(),
        }
    }

    /// Whether a summary line has established the padding yet
    pub fn has_padding(&self) -> bool {
        self.padding.is_some()
    }

    /// Set padding from an indentation string unless a summary line already did
    pub fn pad_from_indentation(&mut self, indentation: &str) {
        if self.padding.is_none() {
            self.padding = Some(format!("{}{}", indentation, DOC_LINE_PREFIX));
        }
    }

    /// Append one summary line
    ///
    /// The first call fixes the padding from `lead`. A blank line closes the
    /// current paragraph when rendering paragraphs and is ignored otherwise.
    pub fn push_summary(&mut self, lead: &str, text: &str) {
        self.pad_from_indentation(lead);

        let text = text.trim();
        if text.is_empty() {
            let current_has_text = self.paragraphs.last().is_some_and(|p| !p.is_empty());
            if self.style == SummaryStyle::Paragraphs && current_has_text {
                self.paragraphs.push(String::new());
            }
            return;
        }

        if let Some(current) = self.paragraphs.last_mut() {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(text);
        }
    }

    /// Append a tag element; `@see` produces nothing
    pub fn push_tag(&mut self, tag: &DocTag<'_>) {
        if let Some(element) = render_tag(tag) {
            self.elements.push(element);
        }
    }

    /// Render the comment, or `None` if no padding was ever established
    ///
    /// Lines are joined with `newline` and the result is trimmed, so the first
    /// line carries no padding: it replaces the comment in place and inherits
    /// whatever preceded the opening delimiter.
    pub fn render(&self, newline: &str) -> Option<String> {
        let padding = self.padding.as_deref()?;

        let mut lines: Vec<String> = Vec::with_capacity(self.paragraphs.len() + self.elements.len() + 2);
        lines.push(SUMMARY_OPEN.to_string());

        let paragraphs = self.paragraphs.iter().filter(|p| !p.is_empty());
        for (index, paragraph) in paragraphs.enumerate() {
            if index == 0 {
                lines.push(paragraph.clone());
            } else {
                lines.push(format!("{}{}{}", PARA_OPEN, paragraph, PARA_CLOSE));
            }
        }

        lines.push(SUMMARY_CLOSE.to_string());
        lines.extend(self.elements.iter().cloned());

        let rendered = lines
            .iter()
            .map(|line| format!("{}{}", padding, line).trim_end().to_string())
            .collect::<Vec<_>>()
            .join(newline);

        Some(rendered.trim().to_string())
    }
}

/// Render a tag as a single XML-doc element
pub fn render_tag(tag: &DocTag<'_>) -> Option<String> {
    match tag {
        DocTag::Param { name, description } => {
            Some(format!("<param name=\"{}\">{}</param>", name, description))
        }
        DocTag::Returns { description } => Some(format!("<returns>{}</returns>", description)),
        DocTag::Throws { exception, description } => {
            Some(format!("<exception cref=\"{}\">{}</exception>", exception, description))
        }
        DocTag::See => None,
    }
}

#[cfg(test)]
#[path = "xml_doc_tests.rs"]
mod tests;
