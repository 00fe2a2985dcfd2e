// src/models.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 64;

/// Letter casing applied to a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CasePolicy {
    #[default]
    Lowercase,
    Uppercase,
    /// Every letter is independently upper- or lower-cased.
    Mixed,
}

impl fmt::Display for CasePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CasePolicy::Lowercase => write!(f, "lowercase"),
            CasePolicy::Uppercase => write!(f, "uppercase"),
            CasePolicy::Mixed => write!(f, "mixed"),
        }
    }
}

impl FromStr for CasePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lower" | "lowercase" => Ok(CasePolicy::Lowercase),
            "upper" | "uppercase" => Ok(CasePolicy::Uppercase),
            "mixed" => Ok(CasePolicy::Mixed),
            other => Err(format!("unknown case policy '{}'", other)),
        }
    }
}

// Password generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: usize,
    pub case_policy: CasePolicy,
    pub include_symbols: bool,
    pub include_words: bool,
}

impl GenerationRequest {
    pub fn length_in_bounds(&self) -> bool {
        (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&self.length)
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 16,
            case_policy: CasePolicy::Lowercase,
            include_symbols: false,
            include_words: false,
        }
    }
}
