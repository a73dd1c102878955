//! Runtime configuration: verbosity and log output

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

/// Log verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// No log output
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Informational messages
    Verbose,
    /// Every button transition
    Debug,
}

impl Verbosity {
    /// Derives the level from `-q` and the `-v` count
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Filter directive for this level
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Quiet => "off",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Standard error
    Stderr,
    /// Append to a file
    File(&'a Path),
    /// Logging disabled
    Discard,
}

/// Builds the level filter for a verbosity
///
/// # Errors
///
/// Returns an error if the directive cannot be parsed.
pub fn env_filter(verbosity: Verbosity) -> AppResult<EnvFilter> {
    EnvFilter::try_new(verbosity.directive()).map_err(|e| AppError::logging(e.to_string()))
}

/// Installs the global tracing subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_logging(verbosity: Verbosity, target: LogTarget<'_>) -> AppResult<()> {
    if verbosity.is_quiet() {
        return Ok(());
    }

    let filter = env_filter(verbosity)?;
    let installed = match target {
        LogTarget::Discard => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init(),
        LogTarget::File(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| AppError::logging(format!("{}: {e}", path.display())))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    installed.map_err(|e| AppError::logging(e.to_string()))
}
