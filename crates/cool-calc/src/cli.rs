//! Command-line interface
//!
//! ```bash
//! cool-calc                          # Open the calculator window
//! cool-calc --log-file calc.log -vv  # Same, logging every press
//! cool-calc press "12+3="            # Headless: prints 15
//! cool-calc press "9/0=" -f json     # {"display":"Error","buffer":""}
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

use crate::config::{init_logging, LogTarget, Verbosity};
use crate::controller::Controller;
use crate::error::AppResult;
use crate::tui;

/// Cool Calc: a four-function calculator
#[derive(Parser, Debug)]
#[command(name = "cool-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no log output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write log lines to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `window`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Verbosity selected by `-q` and `-v`
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the calculator window
    Window,

    /// Press buttons without a window and print the display
    Press(PressArgs),
}

/// Arguments for the press command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PressArgs {
    /// Button labels to press in order, e.g. "12+3="
    pub labels: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output format for headless presses
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The display string alone
    #[default]
    Text,
    /// `{"display": ..., "buffer": ...}`
    Json,
}

/// Final calculator state after a headless run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressReport {
    /// Display string
    pub display: String,
    /// Expression buffer
    pub buffer: String,
}

impl PressReport {
    /// Presses `labels` on a fresh controller
    #[must_use]
    pub fn run(labels: &str) -> Self {
        let mut controller = Controller::new();
        controller.press_str(labels);
        Self {
            display: controller.display().to_string(),
            buffer: controller.buffer().to_string(),
        }
    }

    /// Renders the report in the requested format
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: OutputFormat) -> AppResult<String> {
        match format {
            OutputFormat::Text => Ok(self.display.clone()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

/// Runs the press command, writing the report to `out`
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn run_press<W: Write>(args: &PressArgs, out: &mut W) -> AppResult<()> {
    let report = PressReport::run(&args.labels);
    info!(labels = %args.labels, display = %report.display, "headless run");
    writeln!(out, "{}", report.render(args.format)?)?;
    Ok(())
}

/// Dispatches a parsed command line
///
/// # Errors
///
/// Returns an error if logging setup, the window or the output fails.
pub fn run(cli: Cli) -> AppResult<()> {
    let verbosity = cli.verbosity();
    let command = cli.command.unwrap_or(Commands::Window);

    let target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path),
        // Log lines on the terminal would corrupt the window
        (None, Commands::Window) => LogTarget::Discard,
        (None, Commands::Press(_)) => LogTarget::Stderr,
    };
    init_logging(verbosity, target)?;

    match command {
        Commands::Window => tui::launch(),
        Commands::Press(args) => run_press(&args, &mut std::io::stdout().lock()),
    }
}
