/*!
 * Stderr logger for applications embedding the structurer.
 *
 * The library itself only logs through the `log` facade. Hosts that do not
 * bring their own logger can install this one.
 */

use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use once_cell::sync::OnceCell;

use crate::app_config::LogLevel;

/// Level handle shared with the installed logger, set once `init` succeeds
static INSTALLED_LEVEL: OnceCell<Arc<AtomicUsize>> = OnceCell::new();

/// Coloured, timestamped logger writing to stderr
pub struct FormLogger {
    level: Arc<AtomicUsize>,
}

impl FormLogger {
    pub fn new(level: LevelFilter) -> Self {
        FormLogger {
            level: Arc::new(AtomicUsize::new(level as usize)),
        }
    }

    /// Change the level this logger lets through
    pub fn set_level(&self, level: LevelFilter) {
        self.level.store(level as usize, Ordering::Relaxed);
    }

    fn tag_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "ERROR",
            Level::Warn => "WARN ",
            Level::Info => "INFO ",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    fn colour_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for FormLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() as usize <= self.level.load(Ordering::Relaxed)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let now = chrono::Local::now().format("%H:%M:%S.%3f");
        let _ = writeln!(
            std::io::stderr(),
            "{}{} {} [{}] {}\x1B[0m",
            Self::colour_for_level(record.level()),
            now,
            Self::tag_for_level(record.level()),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the stderr logger as the global logger
pub fn init(level: LogLevel) -> Result<(), SetLoggerError> {
    let filter = level.to_level_filter();
    let logger = FormLogger::new(filter);
    let handle = Arc::clone(&logger.level);
    log::set_boxed_logger(Box::new(logger))?;
    let _ = INSTALLED_LEVEL.set(handle);
    log::set_max_level(filter);
    Ok(())
}

/// Change the level without reinstalling the logger.
///
/// Updates both the global max level and, when `init` installed it, the
/// stderr logger's own filter.
pub fn apply_level(level: LogLevel) {
    let filter = level.to_level_filter();
    if let Some(installed) = INSTALLED_LEVEL.get() {
        installed.store(filter as usize, Ordering::Relaxed);
    }
    log::set_max_level(filter);
}
