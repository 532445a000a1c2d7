//! Catalog validation.
//!
//! Checks a parsed catalog file before it is turned into a [`Catalog`]. Errors
//! make the catalog unusable; warnings describe legal but suspicious content
//! such as a trigger phrase shared by several intents.
//!
//! [`Catalog`]: crate::catalog::Catalog

use super::CatalogFile;
use crate::i18n::Language;
use std::collections::{HashMap, HashSet};

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that prevent the catalog from being loaded
    pub errors: Vec<String>,

    /// Non-critical findings
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog files.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Validate a parsed catalog file.
    ///
    /// Errors:
    /// - no languages, unknown/disabled or duplicated language tags
    /// - default language missing from the catalog
    /// - empty fallback text
    /// - empty or duplicated intent names, intents without triggers,
    ///   empty trigger phrases, empty responses
    ///
    /// Warnings:
    /// - languages without intents
    /// - triggers that are not lowercase/trimmed (they are normalized on load)
    /// - triggers repeated within one intent or shared across intents
    pub fn validate(file: &CatalogFile) -> ValidationReport {
        let mut report = ValidationReport::new();

        if file.languages.is_empty() {
            report.errors.push("Catalog defines no languages".to_string());
            return report;
        }

        let mut seen_languages = HashSet::new();
        for entry in &file.languages {
            match Language::from_code(&entry.language) {
                Ok(language) => {
                    if !seen_languages.insert(language) {
                        report
                            .errors
                            .push(format!("Language '{}' is defined more than once", language));
                    }
                }
                Err(e) => report.errors.push(e.to_string()),
            }
        }

        match Language::from_code(&file.default_language) {
            Ok(default) if !seen_languages.contains(&default) => report.errors.push(format!(
                "Default language '{}' has no tables in the catalog",
                default
            )),
            Ok(_) => {}
            Err(e) => report
                .errors
                .push(format!("Default language is invalid: {}", e)),
        }

        for entry in &file.languages {
            let tag = entry.language.as_str();

            if let Some(fallback) = &entry.fallback {
                if fallback.trim().is_empty() {
                    report
                        .errors
                        .push(format!("[{}] Fallback response is empty", tag));
                }
            }

            if entry.intents.is_empty() {
                report.warnings.push(format!(
                    "[{}] No intents defined, every message gets the fallback",
                    tag
                ));
            }

            Self::validate_intents(tag, entry, &mut report);
        }

        report
    }

    fn validate_intents(tag: &str, entry: &super::LanguageFile, report: &mut ValidationReport) {
        let mut names = HashSet::new();
        // trigger -> intents that declare it, in declaration order
        let mut owners: HashMap<String, Vec<&str>> = HashMap::new();
        let mut trigger_order: Vec<String> = Vec::new();

        for intent in &entry.intents {
            let name = intent.name.trim();
            if name.is_empty() {
                report
                    .errors
                    .push(format!("[{}] Intent with an empty name", tag));
            } else if !names.insert(name) {
                report
                    .errors
                    .push(format!("[{}] Intent '{}' is defined more than once", tag, name));
            }

            if intent.response.trim().is_empty() {
                report
                    .errors
                    .push(format!("[{}] Intent '{}' has an empty response", tag, name));
            }

            if intent.triggers.is_empty() {
                report
                    .errors
                    .push(format!("[{}] Intent '{}' has no trigger phrases", tag, name));
            }

            let mut own = HashSet::new();
            for trigger in &intent.triggers {
                let normalized = super::normalize_trigger(trigger);
                if normalized.is_empty() {
                    report.errors.push(format!(
                        "[{}] Intent '{}' has an empty trigger phrase",
                        tag, name
                    ));
                    continue;
                }
                if normalized != *trigger {
                    report.warnings.push(format!(
                        "[{}] Trigger '{}' of intent '{}' will be normalized to '{}'",
                        tag, trigger, name, normalized
                    ));
                }
                if !own.insert(normalized.clone()) {
                    report.warnings.push(format!(
                        "[{}] Trigger '{}' is repeated in intent '{}'",
                        tag, normalized, name
                    ));
                    continue;
                }

                let list = owners.entry(normalized.clone()).or_default();
                if list.is_empty() {
                    trigger_order.push(normalized);
                }
                list.push(name);
            }
        }

        for trigger in trigger_order {
            if let Some(intents) = owners.get(&trigger) {
                if intents.len() > 1 {
                    report.warnings.push(format!(
                        "[{}] Trigger '{}' is shared by intents {}",
                        tag,
                        trigger,
                        intents.join(", ")
                    ));
                }
            }
        }
    }
}
