// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use log::LevelFilter;

use crate::generators::EngineOptions;
use crate::models::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

// Configuration for the password generator service
#[derive(Debug, Clone)]
pub struct Config {
    // Word list
    pub word_list_path: PathBuf,
    pub preload_dictionary: bool,

    // Password Generation
    pub default_password_length: usize,
    pub mixed_case_characters: bool,

    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    /// Problems found while reading the environment. Loading runs before the
    /// logger exists, so `main` logs these once logging is up.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Word list
            word_list_path: PathBuf::from("./static/words.json"),
            preload_dictionary: false,

            // Password Generation
            default_password_length: 16,
            mixed_case_characters: true,

            // Web Interface
            web_address: "0.0.0.0".to_string(),
            web_port: 8080,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup, starting from the
    /// defaults. Values that fail to parse or fall out of range are ignored
    /// and noted in `warnings`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Word list
        if let Some(path) = lookup("WORD_LIST_PATH") {
            config.word_list_path = PathBuf::from(path);
        }
        parse_into(&lookup, "PRELOAD_DICTIONARY", &mut config.preload_dictionary, &mut config.warnings);

        // Password Generation
        let mut length = config.default_password_length;
        parse_into(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut length, &mut config.warnings);
        if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
            config.default_password_length = length;
        } else {
            config.warnings.push(format!(
                "Ignoring DEFAULT_PASSWORD_LENGTH {}, must be between {} and {}",
                length, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
            ));
        }
        parse_into(&lookup, "MIXED_CASE_CHARACTERS", &mut config.mixed_case_characters, &mut config.warnings);

        // Web Interface
        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }
        parse_into(&lookup, "WEB_PORT", &mut config.web_port, &mut config.warnings);

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                "off" => config.log_level = LevelFilter::Off,
                _ => config
                    .warnings
                    .push(format!("Unknown log level '{}', keeping {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            mixed_case_characters: self.mixed_case_characters,
        }
    }
}

fn parse_into<F, T>(lookup: &F, key: &str, target: &mut T, warnings: &mut Vec<String>)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(key) {
        match raw.trim().parse() {
            Ok(value) => *target = value,
            Err(_) => warnings.push(format!("Ignoring invalid value '{}' for {}", raw, key)),
        }
    }
}
