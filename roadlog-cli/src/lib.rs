//! Command-line interface for planning hours-of-service trips.
#![forbid(unsafe_code)]

mod error;
mod fs;
mod plan;
mod report;

use clap::{Parser, Subcommand};

pub use error::CliError;
use plan::{PlanArgs, run_plan};

const ARG_PLAN_REQUEST: &str = "request";
const ARG_PLAN_START_DATE: &str = "start-date";
const ARG_PLAN_START_HOUR: &str = "start-hour";
const ARG_PLAN_FORMAT: &str = "format";
const ARG_PLAN_OUTPUT: &str = "output";
const ENV_PLAN_REQUEST: &str = "ROADLOG_CMDS_PLAN_REQUEST_PATH";

/// Run the roadlog CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or the trip request are
/// invalid, when planning fails, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "roadlog",
    about = "Plan hours-of-service compliant trips and daily duty logs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a trip and build its daily logs.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
