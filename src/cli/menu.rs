// src/cli/menu.rs
use inquire::{Confirm, Select, Text};

use crate::generators::PasswordGenerator;
use crate::models::{CasePolicy, GenerationRequest, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

pub fn run_cli_menu(generator: &PasswordGenerator, default_length: usize) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║       🦀 RUST PASSWORD GENERATOR      ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        let length: usize = Text::new(&format!(
            "Password length ({}-{}):",
            MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
        ))
        .with_default(&default_length.to_string())
        .prompt()
        .and_then(|s| s.trim().parse().map_err(|_| inquire::InquireError::Custom("Invalid number".into())))?;

        let case_policy = Select::new(
            "Letter case:",
            vec![CasePolicy::Lowercase, CasePolicy::Uppercase, CasePolicy::Mixed],
        )
        .prompt()?;

        let include_symbols = Confirm::new("Include symbols?")
            .with_default(false)
            .prompt()?;

        let include_words = Confirm::new("Build from dictionary words?")
            .with_default(false)
            .prompt()?;

        let request = GenerationRequest {
            length,
            case_policy,
            include_symbols,
            include_words,
        };

        match generator.generate_password(&request) {
            Ok(password) => println!("\nGenerated Password: {}\n", password),
            Err(e) => eprintln!("❌ {}", e),
        }

        let again = Confirm::new("Generate another password?")
            .with_default(true)
            .prompt()?;
        if !again {
            break;
        }
    }

    Ok(())
}
