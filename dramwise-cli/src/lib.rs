//! Command-line interface for the dramwise whisky recommender.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;
mod report;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};

const ARG_FILE: &str = "file";
const ARG_LIKE: &str = "like";
const ARG_COUNT: &str = "count";
const ARG_FORMAT: &str = "format";
const ARG_KEY_COLUMN: &str = "key-column";
const ARG_DELIMITER: &str = "delimiter";
const ENV_LIKE: &str = "DRAMWISE_CMDS_RECOMMEND_LIKE";

/// Run the dramwise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// flavour table cannot be loaded, the liked distilleries are rejected, or
/// output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dramwise",
    about = "Recommend whiskies from the flavour profiles of the ones you like",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank distilleries against the flavours of the ones you like.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
