use std::sync::OnceLock;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::PROGRAM_LOG_LEVEL;

const DEFAULT_LEVEL: Level = Level::Warn;

enum LogTarget {
    Stderr,
}

pub struct Logger {
    level: Level,
    target: LogTarget,
}

impl Logger {
    fn format_line(&self, record: &Record<'_>) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        format!(
            "{} {:<5} [{}] {}",
            timestamp,
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_line(record);
        match &self.target {
            LogTarget::Stderr => eprintln!("{line}"),
        }
    }

    fn flush(&self) {}
}

/// Parse a level name as accepted in `FILESHELF_LOG_LEVEL`.
///
/// `off` and unknown names fall back to the default level.
fn parse_level(raw: &str) -> Option<Level> {
    raw.trim()
        .parse::<LevelFilter>()
        .ok()
        .and_then(|filter| filter.to_level())
}

fn get_level_from_env() -> Level {
    std::env::var(PROGRAM_LOG_LEVEL)
        .ok()
        .as_deref()
        .and_then(parse_level)
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the stderr logger at the level configured in the environment.
pub fn init() -> Result<(), SetLoggerError> {
    init_with_level(get_level_from_env())
}

/// Install the stderr logger at `level`.
///
/// Only the first call installs a logger; later calls are no-ops.
pub fn init_with_level(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // `log::set_max_level` must agree with the level the logger was built
    // with, so only the call that populates the cell sets it.
    let init_call = LOGGER.get().is_none();

    let logger = LOGGER.get_or_init(|| Logger {
        level,
        target: LogTarget::Stderr,
    });

    if init_call {
        log::set_logger(logger)?;
        log::set_max_level(logger.level.to_level_filter());
    }

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
