//! Internationalization (i18n) module for multi-language support.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe, validated language tag
//! - `strings`: Localized UI strings (fallback reply, welcome text, quick questions)
//!
//! # Example
//!
//! ```rust,ignore
//! use welfare_assistant::i18n::{Language, LanguageRegistry};
//!
//! let sinhala = Language::from_code("si")?;
//! let languages = LanguageRegistry::get().list_enabled();
//! ```

mod language;
mod registry;
mod strings;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{LanguageStrings, QuickQuestion, ENGLISH_STRINGS, SINHALA_STRINGS};
