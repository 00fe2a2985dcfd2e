// src/dictionary/loader.rs
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use super::{Dictionary, LoadError, Result};

/// Where the raw word list comes from.
pub trait WordSource: Send + Sync {
    /// Human-readable location, used in errors and logs.
    fn describe(&self) -> String;

    fn read(&self) -> io::Result<String>;
}

pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWordSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryStatus {
    NotLoaded,
    Loaded { words: usize },
    Failed { reason: String },
}

/// Lazily loads the dictionary exactly once for the lifetime of the loader.
///
/// Concurrent first callers block until the single load attempt finishes and
/// then all observe its outcome. A failed load is never retried.
pub struct DictionaryLoader {
    source: Box<dyn WordSource>,
    state: OnceLock<Result<Arc<Dictionary>>>,
}

impl DictionaryLoader {
    pub fn new(source: impl WordSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            state: OnceLock::new(),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(FileWordSource::new(path))
    }

    pub fn ensure_loaded(&self) -> Result<Arc<Dictionary>> {
        self.state.get_or_init(|| self.load()).clone()
    }

    pub fn status(&self) -> DictionaryStatus {
        match self.state.get() {
            None => DictionaryStatus::NotLoaded,
            Some(Ok(dict)) => DictionaryStatus::Loaded { words: dict.len() },
            Some(Err(e)) => DictionaryStatus::Failed { reason: e.to_string() },
        }
    }

    fn load(&self) -> Result<Arc<Dictionary>> {
        let location = self.source.describe();
        log::info!("Loading word list from {}", location);

        let outcome = self
            .source
            .read()
            .map_err(|e| LoadError::Io {
                path: location.clone(),
                reason: e.to_string(),
            })
            .and_then(|content| Dictionary::from_json(&content));

        match outcome {
            Ok(dict) => {
                log::info!("Loaded {} words from {}", dict.len(), location);
                Ok(Arc::new(dict))
            }
            Err(e) => {
                log::error!("Word list unavailable for the rest of this process: {}", e);
                Err(e)
            }
        }
    }
}
