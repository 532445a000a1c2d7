//! Intent catalog: per-language trigger phrases and canned responses.
//!
//! A [`Catalog`] is built once at startup, either from the built-in tables or
//! from a JSON file, and is immutable afterwards. Callers share it by
//! reference (the server keeps it in an `Arc`).
//!
//! # JSON format
//!
//! ```json
//! {
//!   "default_language": "en",
//!   "languages": [
//!     {
//!       "language": "en",
//!       "fallback": "Sorry, I don't know that one.",
//!       "intents": [
//!         { "name": "greeting", "triggers": ["hello", "hi"], "response": "Hello!" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! `fallback` may be omitted, in which case the localized default from
//! [`LanguageStrings`] is used.

mod builtin;
mod validator;

pub use validator::{CatalogValidator, ValidationReport};

use crate::i18n::{Language, LanguageStrings};
use builtin::{BuiltinIntent, ENGLISH_INTENTS, SINHALA_INTENTS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog is invalid: {}", .0.errors.join("; "))]
    Invalid(ValidationReport),
}

// ==================== File Model ====================

/// Catalog as written on disk, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default = "default_language_code")]
    pub default_language: String,
    pub languages: Vec<LanguageFile>,
}

/// One language section of a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageFile {
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    #[serde(default)]
    pub intents: Vec<IntentFile>,
}

/// One intent of a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentFile {
    pub name: String,
    pub triggers: Vec<String>,
    pub response: String,
}

fn default_language_code() -> String {
    Language::canonical().code().to_string()
}

/// Normalize a trigger phrase the same way utterances are normalized.
pub(crate) fn normalize_trigger(trigger: &str) -> String {
    trigger.trim().to_lowercase()
}

// ==================== Validated Model ====================

/// A topic with its trigger phrases and canned response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    name: String,
    triggers: Vec<String>,
    response: String,
}

impl Intent {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trigger phrases, lowercased and trimmed, in declaration order.
    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    pub fn response(&self) -> &str {
        &self.response
    }
}

/// All intents of one language plus its fallback reply.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    language: Language,
    fallback: String,
    intents: Vec<Intent>,
}

impl LanguageCatalog {
    pub fn language(&self) -> Language {
        self.language
    }

    /// Reply used when no intent clears the matching thresholds.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Intents in matching order.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn intent(&self, name: &str) -> Option<&Intent> {
        self.intents.iter().find(|intent| intent.name == name)
    }

    fn from_builtin(language: Language, table: &[BuiltinIntent]) -> Self {
        Self {
            language,
            fallback: LanguageStrings::for_language(language).fallback.to_string(),
            intents: table
                .iter()
                .map(|row| Intent {
                    name: row.name.to_string(),
                    triggers: row.triggers.iter().map(|t| normalize_trigger(t)).collect(),
                    response: row.response.to_string(),
                })
                .collect(),
        }
    }
}

/// The complete, validated multi-language catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    languages: Vec<LanguageCatalog>,
    default_index: usize,
}

impl Catalog {
    /// The portal's built-in English and Sinhala tables, English by default.
    pub fn builtin() -> Self {
        Self {
            languages: vec![
                LanguageCatalog::from_builtin(Language::ENGLISH, ENGLISH_INTENTS),
                LanguageCatalog::from_builtin(Language::SINHALA, SINHALA_INTENTS),
            ],
            default_index: 0,
        }
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_file_model(file)
    }

    /// Read, parse and validate a catalog JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Validate a parsed catalog file and build the catalog.
    ///
    /// Validation warnings are logged; errors reject the catalog.
    pub fn from_file_model(file: CatalogFile) -> Result<Self, CatalogError> {
        let report = CatalogValidator::validate(&file);
        if report.has_errors() {
            return Err(CatalogError::Invalid(report));
        }
        for warning in &report.warnings {
            warn!("Catalog: {}", warning);
        }

        let mut languages = Vec::with_capacity(file.languages.len());
        for entry in file.languages {
            // Validation guarantees every tag resolves.
            let language = Language::from_code(&entry.language).map_err(|e| {
                CatalogError::Invalid(ValidationReport {
                    errors: vec![e.to_string()],
                    warnings: Vec::new(),
                })
            })?;

            let fallback = entry
                .fallback
                .unwrap_or_else(|| LanguageStrings::for_language(language).fallback.to_string());

            let intents = entry
                .intents
                .into_iter()
                .map(|intent| {
                    let mut triggers: Vec<String> = Vec::with_capacity(intent.triggers.len());
                    for trigger in intent.triggers.iter().map(|t| normalize_trigger(t)) {
                        if !triggers.contains(&trigger) {
                            triggers.push(trigger);
                        }
                    }
                    Intent {
                        name: intent.name.trim().to_string(),
                        triggers,
                        response: intent.response,
                    }
                })
                .collect();

            languages.push(LanguageCatalog {
                language,
                fallback,
                intents,
            });
        }

        let default_language = Language::from_code(&file.default_language).unwrap_or_default();
        let default_index = languages
            .iter()
            .position(|l| l.language == default_language)
            .unwrap_or(0);

        Ok(Self {
            languages,
            default_index,
        })
    }

    /// Pick the tables for a language selector.
    ///
    /// Unknown, disabled, missing or blank selectors, and languages without
    /// tables in this catalog, resolve to the default language.
    pub fn resolve(&self, selector: Option<&str>) -> &LanguageCatalog {
        selector
            .and_then(|code| Language::from_code(code).ok())
            .and_then(|language| self.get(language))
            .unwrap_or_else(|| self.default_catalog())
    }

    /// Tables for an exact language, if present.
    pub fn get(&self, language: Language) -> Option<&LanguageCatalog> {
        self.languages.iter().find(|l| l.language == language)
    }

    pub fn default_language(&self) -> Language {
        self.default_catalog().language
    }

    pub fn default_catalog(&self) -> &LanguageCatalog {
        &self.languages[self.default_index]
    }

    /// All language tables in declaration order.
    pub fn languages(&self) -> &[LanguageCatalog] {
        &self.languages
    }

    /// Total number of intents across all languages.
    pub fn intent_count(&self) -> usize {
        self.languages.iter().map(|l| l.intents.len()).sum()
    }

    /// Convert back to the on-disk model (e.g. to export the built-in tables).
    pub fn to_file_model(&self) -> CatalogFile {
        CatalogFile {
            default_language: self.default_language().code().to_string(),
            languages: self
                .languages
                .iter()
                .map(|l| LanguageFile {
                    language: l.language.code().to_string(),
                    fallback: Some(l.fallback.clone()),
                    intents: l
                        .intents
                        .iter()
                        .map(|i| IntentFile {
                            name: i.name.clone(),
                            triggers: i.triggers.clone(),
                            response: i.response.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
