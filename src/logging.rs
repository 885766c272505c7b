#![cfg(feature = "std")]

use std::env;
use std::fmt::Display;
use std::io::{self, Write};
use std::string::String;

use log::{Level, LevelFilter, Metadata, Record};

use crate::config::LOG_ENV;

/// Writes diagnostics to stderr so they never interleave with the boards
/// printed on stdout.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format_line(record.level(), record.target(), record.args());
            let _ = writeln!(io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Module path relative to this crate: `sea_battle::board` becomes `board`.
pub fn short_target(target: &str) -> &str {
    const CRATE: &str = env!("CARGO_CRATE_NAME");
    if target == CRATE {
        return "main";
    }
    target
        .strip_prefix(CRATE)
        .and_then(|rest| rest.strip_prefix("::"))
        .unwrap_or(target)
}

/// `LEVEL [module] message`
pub fn format_line(level: Level, target: &str, message: impl Display) -> String {
    format!("{} [{}] {}", level, short_target(target), message)
}

/// Parse a level name, falling back to `default` when missing or invalid.
pub fn parse_level(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value.and_then(|lvl| lvl.parse().ok()).unwrap_or(default)
}

/// Install the logger at `level`. Later calls only change the level.
pub fn init_logging_with(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Initialize logging with a level taken from the `SEA_BATTLE_LOG` environment
/// variable. Defaults to `warn` so the game screen stays clean.
pub fn init_logging() {
    init_logging_with(parse_level(env::var(LOG_ENV).ok().as_deref(), LevelFilter::Warn));
}
