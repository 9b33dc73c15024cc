//! Error types for the comment translator
//!
//! Every failure is fatal for the run: nothing here is retried or recovered,
//! the binary reports the error and exits.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for translation runs
#[derive(Error, Debug)]
pub enum TranslateError {
    /// IO errors (reading or writing the target file)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// An opening `/*` with no closing `*/` after it
    #[error("Unterminated block comment starting at line {line} (byte offset {offset})")]
    UnterminatedComment { offset: usize, line: usize },

    /// A translatable block with no summary line to take its padding from
    #[error("Comment block at line {line} has no summary line to derive indentation from")]
    UndefinedPadding { offset: usize, line: usize },

    /// A tag that is missing its mandatory first field
    #[error("Tag '{tag}' at line {line} is missing its {field}")]
    MalformedTag {
        tag: String,
        field: &'static str,
        line: usize,
    },

    /// Missing required command-line argument
    #[error("Missing required argument: {parameter}")]
    MissingArgument { parameter: String },

    /// Unrecognised command-line option
    #[error("Unknown option: {option}")]
    UnknownOption { option: String },

    /// A positional argument after the file path
    #[error("Unexpected argument: {argument}")]
    UnexpectedArgument { argument: String },

    /// The target path does not point to a file
    #[error("Not a file: {path:?}")]
    NotAFile { path: PathBuf },

    /// Logger installation errors
    #[error("Failed to initialize logger: {message}")]
    Logger { message: String },
}

/// Result type alias for translator operations
pub type TranslateResult<T> = Result<T, TranslateError>;

impl From<log::SetLoggerError> for TranslateError {
    fn from(err: log::SetLoggerError) -> Self {
        TranslateError::Logger {
            message: err.to_string(),
        }
    }
}

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: &str) -> TranslateResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: &str) -> TranslateResult<T> {
        self.map_err(|e| TranslateError::Io {
            message: message.to_string(),
            source: e,
        })
    }
}
