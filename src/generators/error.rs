// src/generators/error.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Machine-checkable failure category, stable across message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidLength,
    EmptyPool,
    DictionaryUnavailable,
    NoCombination,
    RandomSourceFailure,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Please specify a password length between 8 and 64.")]
    InvalidLength(usize),

    #[error("Please select at least one character set")]
    EmptyPool,

    #[error("Word list unavailable")]
    DictionaryUnavailable,

    #[error("No combination of words could be found for the selected length")]
    NoCombination(usize),

    // Never retried with a weaker generator
    #[error("Unexpected error while generating password: {0}")]
    RandomSourceFailure(String),
}

impl GenerateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerateError::InvalidLength(_) => ErrorKind::InvalidLength,
            GenerateError::EmptyPool => ErrorKind::EmptyPool,
            GenerateError::DictionaryUnavailable => ErrorKind::DictionaryUnavailable,
            GenerateError::NoCombination(_) => ErrorKind::NoCombination,
            GenerateError::RandomSourceFailure(_) => ErrorKind::RandomSourceFailure,
        }
    }
}

impl From<rand_core::Error> for GenerateError {
    fn from(e: rand_core::Error) -> Self {
        GenerateError::RandomSourceFailure(e.to_string())
    }
}
