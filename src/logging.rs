use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file: {0}")]
    LogFile(#[from] io::Error),
    #[error("logging is already initialized")]
    AlreadyInitialized,
}

/// Verbosity is a 0..=4 scale, higher is chattier. Values above 4 clamp
/// to the most verbose level.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber.
///
/// Log lines grow more detailed with verbosity: target names from `info`
/// up, file and line numbers from `debug` up. A `RUST_LOG` environment
/// filter overrides the verbosity-derived one when set. With `logfile`
/// given, output is appended to that file without ANSI colors; otherwise
/// it goes to stderr.
pub fn init_logging(verbosity: u8, logfile: Option<&Path>) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_file(verbosity >= 3)
        .with_line_number(verbosity >= 3);

    match logfile {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    }
    .map_err(|_| LoggingError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_onto_level_filters() {
        assert_eq!(level_for(0), "error");
        assert_eq!(level_for(1), "warn");
        assert_eq!(level_for(2), "info");
        assert_eq!(level_for(3), "debug");
        assert_eq!(level_for(4), "trace");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn second_initialization_is_reported() {
        // Whichever test binary runs this owns the global subscriber, so
        // only the repeated call has a guaranteed outcome.
        let _ = init_logging(2, None);
        assert!(matches!(
            init_logging(2, None),
            Err(LoggingError::AlreadyInitialized)
        ));
    }
}
