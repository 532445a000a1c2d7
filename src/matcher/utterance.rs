use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

// Anything that is neither a word character nor whitespace (Unicode aware)
static PUNCTUATION_REGEX: OnceLock<Regex> = OnceLock::new();

fn punctuation() -> &'static Regex {
    PUNCTUATION_REGEX.get_or_init(|| Regex::new(r"[^\w\s]").expect("punctuation regex is valid"))
}

/// A user message prepared for matching.
///
/// Holds three views of the same text:
/// - `normalized`: lowercased and trimmed
/// - `stripped`: `normalized` with punctuation removed
/// - `tokens`: whitespace separated words of `stripped`
#[derive(Debug, Clone)]
pub struct Utterance {
    normalized: String,
    stripped: String,
    tokens: HashSet<String>,
}

impl Utterance {
    pub fn new(text: &str) -> Self {
        let normalized = text.trim().to_lowercase();
        let stripped = punctuation().replace_all(&normalized, "").into_owned();
        let tokens = stripped.split_whitespace().map(str::to_string).collect();

        Self {
            normalized,
            stripped,
            tokens,
        }
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn stripped(&self) -> &str {
        &self.stripped
    }

    pub fn tokens(&self) -> &HashSet<String> {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Whether `phrase` occurs in either the stripped or the normalized text.
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        self.stripped.contains(phrase) || self.normalized.contains(phrase)
    }

    pub fn has_token(&self, word: &str) -> bool {
        self.tokens.contains(word)
    }
}
