//! Language type: a language tag validated against the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};

/// A validated language.
///
/// Only supported, enabled languages can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "si")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const SINHALA: Language = Language { code: "si" };

    /// Create a Language from a user supplied selector.
    ///
    /// The selector is trimmed and compared case-insensitively, so "EN" and
    /// " si " are accepted.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let normalized = code.trim().to_ascii_lowercase();
        let registry = LanguageRegistry::get();

        match registry.get_by_code(&normalized) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical language, used whenever a selector cannot be
    /// resolved.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for values built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language (e.g., "Sinhala").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "සිංහල").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::canonical()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_canonical());
    }

    #[test]
    fn test_sinhala_constant() {
        let sinhala = Language::SINHALA;
        assert_eq!(sinhala.code(), "si");
        assert_eq!(sinhala.name(), "Sinhala");
        assert!(!sinhala.is_canonical());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_sinhala() {
        let language = Language::from_code("si").expect("Should succeed");
        assert_eq!(language, Language::SINHALA);
    }

    #[test]
    fn test_from_code_is_case_insensitive_and_trimmed() {
        assert_eq!(Language::from_code("EN").unwrap(), Language::ENGLISH);
        assert_eq!(Language::from_code("  Si ").unwrap(), Language::SINHALA);
    }

    #[test]
    fn test_from_code_unknown() {
        let result = Language::from_code("fr");
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_disabled() {
        let result = Language::from_code("ta");
        assert!(result.unwrap_err().to_string().contains("not enabled"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_default_is_canonical() {
        assert_eq!(Language::default(), Language::ENGLISH);
    }

    #[test]
    fn test_display_and_serialize_use_code() {
        assert_eq!(Language::SINHALA.to_string(), "si");
        assert_eq!(serde_json::to_string(&Language::SINHALA).unwrap(), "\"si\"");
    }

    #[test]
    fn test_native_name() {
        assert_eq!(Language::ENGLISH.native_name(), "English");
        assert_eq!(Language::SINHALA.native_name(), "සිංහල");
    }
}
