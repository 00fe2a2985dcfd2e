// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::dictionary::DictionaryStatus;
use crate::generators::{ErrorKind, GenerateError};
use crate::models::{CasePolicy, GenerationRequest};

// Password generation types
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationRequest {
    /// Password length, 8 to 64 (default: configured length)
    pub length: Option<usize>,
    /// Letter casing (default: lowercase)
    pub case: Option<CasePolicy>,
    /// Include symbols (default: false)
    pub include_symbols: Option<bool>,
    /// Build the password from dictionary words (default: false)
    pub include_words: Option<bool>,
}

impl PasswordGenerationRequest {
    pub fn into_request(self, default_length: usize) -> GenerationRequest {
        GenerationRequest {
            length: self.length.unwrap_or(default_length),
            case_policy: self.case.unwrap_or_default(),
            include_symbols: self.include_symbols.unwrap_or(false),
            include_words: self.include_words.unwrap_or(false),
        }
    }
}

/// Form-style query parameters; checkboxes arrive as `on`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenerateQuery {
    /// Password length, 8 to 64
    pub length: Option<String>,
    /// lower, upper or mixed
    pub case: Option<String>,
    /// Include symbols (on/true/1)
    pub symbols: Option<String>,
    /// Build the password from dictionary words (on/true/1)
    pub words: Option<String>,
}

impl GenerateQuery {
    pub fn into_request(self, default_length: usize) -> Result<GenerationRequest, String> {
        let length = match self.length.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw
                .parse()
                .map_err(|_| format!("Invalid password length '{}'", raw))?,
            None => default_length,
        };

        let case_policy = match self.case.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(raw) => raw.parse()?,
            None => CasePolicy::default(),
        };

        Ok(GenerationRequest {
            length,
            case_policy,
            include_symbols: is_checked(self.symbols.as_deref()),
            include_words: is_checked(self.words.as_deref()),
        })
    }
}

fn is_checked(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_lowercase()).as_deref(),
        Some("on" | "true" | "1" | "yes")
    )
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
    /// Failure category (if generation failed)
    pub error_kind: Option<ErrorKind>,
}

impl PasswordGenerationResponse {
    pub fn generated(password: String) -> Self {
        Self { success: true, password: Some(password), error: None, error_kind: None }
    }

    pub fn failed(error: &GenerateError) -> Self {
        Self {
            success: false,
            password: None,
            error: Some(error.to_string()),
            error_kind: Some(error.kind()),
        }
    }

    pub fn rejected(message: String) -> Self {
        Self { success: false, password: None, error: Some(message), error_kind: None }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LastErrorResponse {
    /// Message of the latest failed generation, cleared by the next attempt
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DictionaryStatusResponse {
    /// not_loaded, loaded or failed
    pub state: String,
    /// Number of words (when loaded)
    pub words: Option<usize>,
    /// Load failure reason (when failed)
    pub reason: Option<String>,
}

impl From<DictionaryStatus> for DictionaryStatusResponse {
    fn from(status: DictionaryStatus) -> Self {
        match status {
            DictionaryStatus::NotLoaded => Self { state: "not_loaded".into(), words: None, reason: None },
            DictionaryStatus::Loaded { words } => Self { state: "loaded".into(), words: Some(words), reason: None },
            DictionaryStatus::Failed { reason } => Self { state: "failed".into(), words: None, reason: Some(reason) },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// Service version
    pub version: String,
    /// Word list state
    pub dictionary: DictionaryStatusResponse,
    /// Whether mixed case applies in character mode
    pub mixed_case_characters: bool,
}
