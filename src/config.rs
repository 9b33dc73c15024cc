//! Run configuration
//!
//! Translator options plus the hand-rolled command-line and environment
//! parsing that produces them.

use std::env;
use std::path::PathBuf;
use log::LevelFilter;
use crate::error::{TranslateError, TranslateResult};
use crate::javadoc::constants::DEFAULT_SKIP_MARKER;

/// Environment variable that selects the log level
pub const LOG_LEVEL_ENV: &str = "JAVADOC_XMLDOC_LOG";

/// How summary lines are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryStyle {
    /// Blank lines split the summary; later paragraphs are wrapped in `<para>`
    #[default]
    Paragraphs,
    /// All summary text is joined into one paragraph
    Flat,
}

/// What to do with a block that has tags but no summary line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingPolicy {
    /// Indent with the whitespace in front of the opening delimiter
    #[default]
    Indentation,
    /// Treat the block as malformed and abort
    Require,
}

/// Options for a translation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorOptions {
    /// Blocks containing this text are left untouched
    pub skip_marker: String,
    pub summary_style: SummaryStyle,
    pub padding_policy: PaddingPolicy,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            skip_marker: DEFAULT_SKIP_MARKER.to_string(),
            summary_style: SummaryStyle::default(),
            padding_policy: PaddingPolicy::default(),
        }
    }
}

/// Parsed command line for a rewrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub file: PathBuf,
    pub options: TranslatorOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(CliArgs),
    Help,
}

/// Parse command-line arguments, excluding the program name
pub fn parse_args<I>(args: I) -> TranslateResult<CliCommand>
where
    I: IntoIterator<Item = String>,
{
    let mut options = TranslatorOptions::default();
    let mut file: Option<PathBuf> = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "--flat-summary" => options.summary_style = SummaryStyle::Flat,
            "--require-summary" => options.padding_policy = PaddingPolicy::Require,
            "--skip-marker" => {
                options.skip_marker = args.next().ok_or_else(|| TranslateError::MissingArgument {
                    parameter: "--skip-marker <text>".to_string(),
                })?;
            }
            _ if arg.starts_with("--") => {
                return Err(TranslateError::UnknownOption { option: arg });
            }
            _ => {
                if file.is_some() {
                    return Err(TranslateError::UnexpectedArgument { argument: arg });
                }
                file = Some(PathBuf::from(arg));
            }
        }
    }

    let file = file.ok_or_else(|| TranslateError::MissingArgument {
        parameter: "<file>".to_string(),
    })?;

    Ok(CliCommand::Run(CliArgs { file, options }))
}

/// Parse a log level name such as `debug` or `off`
pub fn parse_log_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse::<LevelFilter>().ok()
}

/// Log level from the environment, `Info` when unset or unparseable
pub fn log_level_from_env() -> LevelFilter {
    env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|value| parse_log_level(&value))
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
