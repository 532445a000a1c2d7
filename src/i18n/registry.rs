//! Language registry: Single source of truth for all supported languages.
//!
//! The registry holds static metadata only (codes and display names). The
//! chatbot tables for each language live in the catalog, which is built at
//! startup and passed around explicitly.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "si")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Sinhala")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "සිංහල")
    pub native_name: &'static str,

    /// Whether this is the default language used when a selector is unknown
    /// (exactly one should be true)
    pub is_canonical: bool,

    /// Whether this language can be selected by users
    pub enabled: bool,
}

/// Global language registry.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

/// Default language configurations.
///
/// Tamil is advertised by the portal but has no chatbot tables yet, so it is
/// registered disabled and selecting it falls back to English.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            enabled: true,
        },
        LanguageConfig {
            code: "si",
            name: "Sinhala",
            native_name: "සිංහල",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "ta",
            name: "Tamil",
            native_name: "தமிழ்",
            is_canonical: false,
            enabled: false,
        },
    ]
}
