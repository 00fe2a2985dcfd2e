// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

use crate::core::Config;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON word list (object keys or array of words)
    #[arg(long, env = "WORD_LIST_PATH")]
    pub word_list: Option<PathBuf>,

    /// API server port
    #[arg(long)]
    pub port: Option<u16>,

    /// Command to execute (defaults to serve)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Args {
    /// Command-line flags take precedence over the environment.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(path) = &self.word_list {
            config.word_list_path = path.clone();
        }
        if let Some(port) = self.port {
            config.web_port = port;
        }
    }
}
