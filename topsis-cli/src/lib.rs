//! Command-line interface for ranking alternatives with TOPSIS.
//!
//! The `rank` subcommand reads a CSV decision table, evaluates it with the
//! supplied weights and impacts, and writes the table back out with
//! `Topsis Score` and `Rank` columns. Options can come from CLI flags,
//! configuration files, or `TOPSIS_CMDS_RANK_*` environment variables.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod rank;

pub use error::CliError;

use rank::{RankArgs, run_rank};

const ARG_INPUT: &str = "input";
const ARG_WEIGHTS: &str = "weights";
const ARG_IMPACTS: &str = "impacts";
const ARG_OUTPUT: &str = "output";
const ARG_FORMAT: &str = "format";
const ARG_TIES: &str = "ties";
const ARG_MAX_ALTERNATIVES: &str = "max-alternatives";
const ENV_INPUT: &str = "TOPSIS_CMDS_RANK_INPUT";
const ENV_WEIGHTS: &str = "TOPSIS_CMDS_RANK_WEIGHTS";
const ENV_IMPACTS: &str = "TOPSIS_CMDS_RANK_IMPACTS";

/// Run the TOPSIS CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// input cannot be read, the engine rejects it, or the result cannot be
/// written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "topsis",
    about = "Rank alternatives against weighted criteria with TOPSIS",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score and rank the alternatives in a CSV decision table.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
