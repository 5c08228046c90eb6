//! Stderr sink for the `log` facade used by the library crates.

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the logger. Later calls only adjust the level.
pub fn init(level: LevelFilter) {
    // set_logger fails only if a logger is already installed.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
