// src/generators/password.rs
use std::sync::Arc;

use super::{GenerationResult, PasswordEngine};
use crate::dictionary::{Dictionary, DictionaryLoader, DictionaryStatus, LoadError};
use crate::models::GenerationRequest;

/// Couples the engine with the process-wide, lazily loaded dictionary.
pub struct PasswordGenerator {
    engine: PasswordEngine,
    dictionary: DictionaryLoader,
}

impl PasswordGenerator {
    pub fn new(engine: PasswordEngine, dictionary: DictionaryLoader) -> Self {
        PasswordGenerator { engine, dictionary }
    }

    pub fn generate_password(&self, request: &GenerationRequest) -> GenerationResult {
        // Only word mode with a valid length needs the word list
        let dictionary = if request.include_words && request.length_in_bounds() {
            self.word_list()
        } else {
            None
        };

        self.engine.generate(request, dictionary.as_deref())
    }

    /// Load the dictionary ahead of the first word-mode request.
    pub fn preload(&self) -> Result<usize, LoadError> {
        self.dictionary.ensure_loaded().map(|dict| dict.len())
    }

    pub fn last_error(&self) -> Option<String> {
        self.engine.last_error()
    }

    pub fn dictionary_status(&self) -> DictionaryStatus {
        self.dictionary.status()
    }

    pub fn mixed_case_characters(&self) -> bool {
        self.engine.options().mixed_case_characters
    }

    fn word_list(&self) -> Option<Arc<Dictionary>> {
        match self.dictionary.ensure_loaded() {
            Ok(dict) => Some(dict),
            Err(e) => {
                log::warn!("Word mode requested but the word list is unavailable: {}", e);
                None
            }
        }
    }
}
