use std::fmt;
use std::io::{self, Write};
use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record};
use crate::error::TranslateResult;

/// Writes log records to stderr so stdout and the rewritten file stay clean
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format_record(Utc::now(), record.level(), record.args());
            let mut stderr = io::stderr().lock();
            let _ = writeln!(stderr, "{}", line);
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Format a single log line
fn format_record(timestamp: DateTime<Utc>, level: Level, args: &fmt::Arguments) -> String {
    format!(
        "[{}] [{}] {}",
        timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
        level,
        args
    )
}

/// Initialize the stderr logger at the given level
pub fn init_logger(level: LevelFilter) -> TranslateResult<()> {
    log::set_boxed_logger(Box::new(StderrLogger { level }))
        .map(|()| log::set_max_level(level))?;

    Ok(())
}
