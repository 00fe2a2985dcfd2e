// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;

use crate::core::Config;

/// Install the global logger. Logs go to stderr unless a log file is
/// configured, in which case they are appended to that file.
pub fn init(config: &Config) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(true);

    if let Some(path) = &config.log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // A logger may already be installed (tests, embedding); keep the first one.
    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }
    Ok(())
}
