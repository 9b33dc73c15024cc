//! In-place file rewrite
//!
//! Reads the whole file, translates it in memory and writes it back in one go.
//! A failure before the write leaves the file untouched.

use std::fs;
use std::path::Path;
use log::info;
use crate::config::TranslatorOptions;
use crate::error::{IoContext, TranslateError, TranslateResult};
use crate::javadoc::{CommentTranslator, TranslationReport};

/// Rewrite the Javadoc comments of `path` as XML documentation comments
pub fn rewrite_file(path: &Path, options: &TranslatorOptions) -> TranslateResult<TranslationReport> {
    if !path.is_file() {
        return Err(TranslateError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let source = fs::read_to_string(path)
        .with_io_context(&format!("Failed to read {}", path.display()))?;

    let translator = CommentTranslator::new(options.clone());
    let (output, report) = translator.translate(source)?;

    fs::write(path, output)
        .with_io_context(&format!("Failed to write {}", path.display()))?;

    info!(
        "Rewrote {}: {} block(s) translated, {} left unchanged",
        path.display(),
        report.translated,
        report.skipped
    );

    Ok(report)
}

#[cfg(test)]
#[path = "rewrite_tests.rs"]
mod tests;
