use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

mod api;
mod cli;
mod core;
mod dictionary;
mod generators;
mod logging;
mod models;

use crate::cli::{Args, CliCommand};
use crate::core::Config;
use crate::dictionary::DictionaryLoader;
use crate::generators::{PasswordEngine, PasswordGenerator};
use crate::models::GenerationRequest;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();
    args.apply_to(&mut config);

    logging::init(&config).context("failed to initialise logging")?;
    for warning in config.warnings.drain(..) {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    let generator = Arc::new(PasswordGenerator::new(
        PasswordEngine::new(config.engine_options()),
        DictionaryLoader::from_path(&config.word_list_path),
    ));

    match args.command.unwrap_or(CliCommand::Serve) {
        CliCommand::Serve => {
            if config.preload_dictionary {
                // A failure is cached by the loader; word mode then reports it per request
                match generator.preload() {
                    Ok(words) => log::info!("Word list ready with {} words", words),
                    Err(e) => log::error!("Word list preload failed: {}", e),
                }
            }

            log::info!("🔐 Server listening on {}:{}", config.web_address, config.web_port);
            api::start_server(generator, &config)
                .await
                .context("API server failed")?;
        }
        CliCommand::Generate { length, case, symbols, words, count } => {
            let request = GenerationRequest {
                length: length.unwrap_or(config.default_password_length),
                case_policy: case,
                include_symbols: symbols,
                include_words: words,
            };
            for password in cli::handlers::handle_generate(&generator, &request, count)? {
                println!("{}", password);
            }
        }
        CliCommand::Interactive => {
            cli::menu::run_cli_menu(&generator, config.default_password_length)?;
        }
    }

    Ok(())
}
