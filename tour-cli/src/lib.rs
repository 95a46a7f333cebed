//! Command-line interface for landmark tour planning.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod logging;
mod plan;
mod present;

pub use error::CliError;
pub use logging::init_logging;
pub use present::OutputFormat;

use plan::{PlanArgs, run_plan};

pub(crate) const ARG_PLAN_DATA_DIR: &str = "data-dir";
pub(crate) const ARG_PLAN_GRAPH: &str = "graph";
pub(crate) const ARG_PLAN_INTEREST: &str = "interest";
pub(crate) const ARG_PLAN_LOAD: &str = "load";
pub(crate) const ARG_PLAN_START: &str = "start";
pub(crate) const ARG_PLAN_EXPECTED_LANDMARKS: &str = "expected-landmarks";
pub(crate) const ARG_PLAN_FORMAT: &str = "format";

/// Run the tour CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] describing the first failure encountered.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tour",
    about = "Plan the most attractive closed tour over a set of landmarks",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read the landmark tables and print the optimal tour.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
