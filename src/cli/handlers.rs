// src/cli/handlers.rs
use anyhow::Context;

use crate::generators::PasswordGenerator;
use crate::models::GenerationRequest;

// Handlers for CLI commands
pub fn handle_generate(
    generator: &PasswordGenerator,
    request: &GenerationRequest,
    count: usize,
) -> anyhow::Result<Vec<String>> {
    (0..count)
        .map(|_| {
            generator
                .generate_password(request)
                .with_context(|| format!("could not generate a {}-character password", request.length))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryLoader;
    use crate::generators::PasswordEngine;
    use crate::models::CasePolicy;
    use std::io::Write;

    #[test]
    fn test_generates_requested_count() {
        let dir = tempfile::tempdir().unwrap();
        let generator = PasswordGenerator::new(PasswordEngine::default(), DictionaryLoader::from_path(dir.path().join("words.json")));
        let request = GenerationRequest { length: 14, ..GenerationRequest::default() };

        let passwords = handle_generate(&generator, &request, 5).unwrap();
        assert_eq!(passwords.len(), 5);
        assert!(passwords.iter().all(|p| p.len() == 14));
    }

    #[test]
    fn test_word_mode_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"copper": 0, "willow": 0, "fox": 0}"#).unwrap();
        let generator = PasswordGenerator::new(PasswordEngine::default(), DictionaryLoader::from_path(file.path()));
        let request = GenerationRequest {
            length: 12,
            case_policy: CasePolicy::Mixed,
            include_symbols: false,
            include_words: true,
        };

        let passwords = handle_generate(&generator, &request, 3).unwrap();
        for password in passwords {
            let lower = password.to_ascii_lowercase();
            assert!(["copper", "willow"].iter().any(|w| lower.starts_with(w)), "{}", password);
            assert!(["copper", "willow"].iter().any(|w| lower.ends_with(w)), "{}", password);
        }
    }

    #[test]
    fn test_failure_carries_engine_message() {
        let dir = tempfile::tempdir().unwrap();
        let generator = PasswordGenerator::new(PasswordEngine::default(), DictionaryLoader::from_path(dir.path().join("words.json")));
        let request = GenerationRequest { length: 100, ..GenerationRequest::default() };

        let err = handle_generate(&generator, &request, 1).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("between 8 and 64"), "{}", chain);
    }
}
