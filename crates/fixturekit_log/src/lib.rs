//! `fixturekit_log` v1:
//! Minimal stderr backend for the `log` facade used by the fixture binaries.
//!
//! Level comes from `FIXTUREKIT_LOG` (`off|error|warn|info|debug|trace`),
//! defaulting to `warn`.

use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Environment variable read by [`init_from_env`].
pub const C_ENV_LOG_LEVEL: &str = "FIXTUREKIT_LOG";
/// Level used when the variable is unset or unparsable.
pub const LEVEL_DEFAULT: LevelFilter = LevelFilter::Warn;

/// Logger writing `[LEVEL target] message` lines to stderr.
#[derive(Debug)]
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    /// Create a logger that passes records at or above `level`.
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", format_record(record));
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Render one record as a single line.
pub fn format_record(record: &Record<'_>) -> String {
    format!("[{} {}] {}", record.level(), record.target(), record.args())
}

/// Parse a level name; unknown or missing names fall back to [`LEVEL_DEFAULT`].
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|c_level| c_level.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LEVEL_DEFAULT)
}

/// Install [`StderrLogger`] at `level` as the global logger.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(StderrLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// Install the global logger with the level taken from [`C_ENV_LOG_LEVEL`].
pub fn init_from_env() -> Result<(), SetLoggerError> {
    let c_level = std::env::var(C_ENV_LOG_LEVEL).ok();
    init(parse_level(c_level.as_deref()))
}
