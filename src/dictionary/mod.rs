// src/dictionary/mod.rs
use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

mod loader;

pub use loader::{DictionaryLoader, DictionaryStatus};

/// Failure to produce a dictionary. Cloneable so every caller of the
/// once-only loader can be handed the same outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Failed to read word list {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Word list is not a JSON object or array of words: {0}")]
    Format(String),

    #[error("Empty dictionary")]
    Empty,
}

pub type Result<T> = std::result::Result<T, LoadError>;

// Accepted layouts of the word file: {"word": <ignored>, ...} or ["word", ...]
#[derive(Deserialize)]
#[serde(untagged)]
enum WordFile {
    Keys(serde_json::Map<String, serde_json::Value>),
    List(Vec<String>),
}

/// Immutable, non-empty list of lowercase ASCII words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from raw entries. Entries are trimmed and
    /// lower-cased; anything that is not purely ASCII letters is skipped and
    /// repeated words keep their first position.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        let mut skipped = 0usize;

        for entry in entries {
            match normalize_word(entry.as_ref()) {
                Some(word) => {
                    if seen.insert(word.clone()) {
                        words.push(word);
                    }
                }
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            log::debug!("Skipped {} word list entries that are not plain ASCII words", skipped);
        }

        if words.is_empty() {
            return Err(LoadError::Empty);
        }

        Ok(Self { words })
    }

    /// Parse the JSON content of a word file.
    pub fn from_json(content: &str) -> Result<Self> {
        let parsed: WordFile = serde_json::from_str(content)
            .map_err(|e| LoadError::Format(e.to_string()))?;

        match parsed {
            WordFile::Keys(map) => Self::new(map.keys()),
            WordFile::List(list) => Self::new(list),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim();
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_lowercase())
}
