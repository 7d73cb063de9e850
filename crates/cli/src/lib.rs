use std::path::Path;

use log::LevelFilter;

pub mod commands;

/// File name component of `path` for display, falling back to the full path.
///
/// Matches the name the core records in `DumpAnalysis::file_name`.
pub fn file_display_name(path: &Path) -> String {
    zeroscan_core::services::dump_file_name(path)
}

/// Logging verbosity accepted on the command line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
