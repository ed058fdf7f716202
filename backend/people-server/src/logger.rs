//! Process-wide `log` backend built on fern.
//!
//! One line layout for every sink:
//! `[<rfc3339> - <LEVEL>] <message> [<file>:<line>]`.
//! Colors only apply to stdout.

use crate::error::{Result as ServerErrorResult, ServerError};

use std::fs::{File, OpenOptions};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use error_location::ErrorLocation;
use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, Output};
use log::{LevelFilter, info};

/// Install the global logger. Call once, before anything logs.
///
/// `log_file` switches output from stdout to an appended file, in which
/// case `colored` is ignored.
#[track_caller]
pub fn initialize(
    log_level: people_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let location = Location::caller();
    let level_filter = log_level.0;

    let (sink, colors): (Output, _) = match log_file.as_deref() {
        Some(path) => (open_append(path, location)?.into(), None),
        None => (std::io::stdout().into(), colored.then(level_colors)),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx reports every statement at info
        .level_for("sqlx", LevelFilter::Warn)
        .format(move |out, message, record| {
            let level = match &colors {
                Some(colors) => colors.color(record.level()).to_string(),
                None => record.level().to_string(),
            };
            out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                humantime::format_rfc3339(SystemTime::now()),
                level,
                message,
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
            ))
        })
        .chain(sink)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(location),
        })?;

    match log_file {
        Some(path) => info!("Logging at {} to {}", level_filter, path.display()),
        None => info!("Logging at {} to stdout", level_filter),
    }

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn open_append(path: &Path, location: &'static Location<'static>) -> ServerErrorResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
            location: ErrorLocation::from(location),
        })
}
