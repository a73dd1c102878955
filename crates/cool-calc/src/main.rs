//! Cool Calc binary
//!
//! ```bash
//! cool-calc                  # Open the window
//! cool-calc press "7*6="     # Print 42
//! ```

use std::process::ExitCode;

use clap::Parser;
use cool_calc::cli::{run, Cli};

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
