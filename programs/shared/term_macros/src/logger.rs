use log::{Level, Log, Metadata, Record};
use owo_colors::OwoColorize;

pub use log::LevelFilter;

struct Stderr;

static LOGGER: Stderr = Stderr;

impl Log for Stderr {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => format!("{}", "error".red().bold()),
            Level::Warn => format!("{}", "warn".yellow().bold()),
            Level::Info => format!("{}", "info".green()),
            Level::Debug => format!("{}", "debug".cyan()),
            Level::Trace => format!("{}", "trace".dimmed()),
        };
        eprintln!("{} {}", tag, record.args());
    }

    fn flush(&self) {}
}

/// Installs the stderr logger. Calling it twice only adjusts the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
