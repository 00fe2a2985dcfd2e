// src/cli/commands.rs
use clap::Subcommand;

use crate::models::CasePolicy;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Start the HTTP API server
    Serve,

    /// Generate passwords and print them, one per line
    Generate {
        /// Password length, 8 to 64 (default: DEFAULT_PASSWORD_LENGTH)
        #[arg(long, short)]
        length: Option<usize>,

        /// Letter casing: lower, upper or mixed
        #[arg(long, short, default_value = "lowercase")]
        case: CasePolicy,

        /// Include symbols
        #[arg(long, short)]
        symbols: bool,

        /// Build the password from dictionary words
        #[arg(long, short)]
        words: bool,

        /// How many passwords to print
        #[arg(long = "count", short = 'n', default_value_t = 1)]
        count: usize,
    },

    /// Prompt for options and generate passwords interactively
    Interactive,
}
