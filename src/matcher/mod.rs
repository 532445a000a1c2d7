//! Intent matching: maps a free-text message to one canned response.
//!
//! Scoring runs in up to three stages. Each later stage only runs while the
//! best score so far is below that stage's threshold:
//!
//! 1. **Phrase**: a trigger phrase found verbatim in the message scores
//!    `chars(phrase) * phrase_weight`, so long, specific phrases beat short
//!    generic ones.
//! 2. **Token** (best < `phrase_threshold`): an intent scores
//!    `token_weight` for each trigger phrase sharing at least one word with
//!    the message.
//! 3. **Fuzzy** (best < `token_threshold`): a trigger phrase similar to the
//!    whole message scores `ratio * fuzzy_weight` when `ratio > fuzzy_floor`.
//!
//! A candidate only replaces the current best with a strictly higher score,
//! so ties go to the intent declared first in the catalog. Matching is a pure
//! function of the message, the catalog and the [`MatcherConfig`].

mod similarity;
mod utterance;

pub use similarity::{ratio, ratio_upper_bound};
pub use utterance::Utterance;

use crate::catalog::{Catalog, Intent, LanguageCatalog};
use crate::i18n::Language;
use anyhow::{bail, Result};
use serde::Serialize;

/// Weights and thresholds of the matching pipeline.
///
/// The defaults were tuned by hand against the portal's FAQ questions:
/// a 5 character phrase (`2 * 5 = 10`) is specific enough to skip word
/// overlap, two overlapping triggers (`2 * 3 = 6`) are enough to skip fuzzy
/// matching, and a fuzzy hit must share more than half of its characters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatcherConfig {
    /// Score per character of a trigger phrase found in the message
    pub phrase_weight: f64,
    /// Score per trigger phrase sharing a word with the message
    pub token_weight: f64,
    /// Multiplier applied to the similarity ratio
    pub fuzzy_weight: f64,
    /// Word overlap runs while the best score is below this value
    pub phrase_threshold: f64,
    /// Fuzzy matching runs while the best score is below this value
    pub token_threshold: f64,
    /// Minimum similarity ratio (exclusive) for a fuzzy match
    pub fuzzy_floor: f64,
}

impl MatcherConfig {
    pub const DEFAULT_PHRASE_WEIGHT: f64 = 2.0;
    pub const DEFAULT_TOKEN_WEIGHT: f64 = 3.0;
    pub const DEFAULT_FUZZY_WEIGHT: f64 = 10.0;
    pub const DEFAULT_PHRASE_THRESHOLD: f64 = 10.0;
    pub const DEFAULT_TOKEN_THRESHOLD: f64 = 5.0;
    pub const DEFAULT_FUZZY_FLOOR: f64 = 0.5;

    /// Reject values that would make scoring meaningless.
    pub fn validate(&self) -> Result<()> {
        let values = [
            ("phrase_weight", self.phrase_weight),
            ("token_weight", self.token_weight),
            ("fuzzy_weight", self.fuzzy_weight),
            ("phrase_threshold", self.phrase_threshold),
            ("token_threshold", self.token_threshold),
            ("fuzzy_floor", self.fuzzy_floor),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                bail!("Matcher {} must be a finite, non-negative number, got {}", name, value);
            }
        }
        if self.fuzzy_floor > 1.0 {
            bail!("Matcher fuzzy_floor must be within [0, 1], got {}", self.fuzzy_floor);
        }
        Ok(())
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            phrase_weight: Self::DEFAULT_PHRASE_WEIGHT,
            token_weight: Self::DEFAULT_TOKEN_WEIGHT,
            fuzzy_weight: Self::DEFAULT_FUZZY_WEIGHT,
            phrase_threshold: Self::DEFAULT_PHRASE_THRESHOLD,
            token_threshold: Self::DEFAULT_TOKEN_THRESHOLD,
            fuzzy_floor: Self::DEFAULT_FUZZY_FLOOR,
        }
    }
}

/// Pipeline stage that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Phrase,
    Token,
    Fuzzy,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Phrase => "phrase",
            Stage::Token => "token",
            Stage::Fuzzy => "fuzzy",
        }
    }
}

/// Result of scoring a message against one language's intents.
#[derive(Debug, Clone, Copy)]
pub struct Match<'c> {
    /// Best intent, `None` when nothing cleared the thresholds
    pub intent: Option<&'c Intent>,
    pub score: f64,
    pub stage: Option<Stage>,
}

impl<'c> Match<'c> {
    fn none() -> Self {
        Self {
            intent: None,
            score: 0.0,
            stage: None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.intent.is_some()
    }

    fn offer(&mut self, intent: &'c Intent, score: f64, stage: Stage) {
        if score > self.score {
            self.intent = Some(intent);
            self.score = score;
            self.stage = Some(stage);
        }
    }
}

/// Owned description of how a message was answered.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    /// Language whose tables were used
    pub language: Language,
    pub intent: Option<String>,
    pub score: f64,
    pub stage: Option<Stage>,
    pub response: String,
}

/// Stateless matcher; safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct IntentMatcher {
    config: MatcherConfig,
}

impl IntentMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Answer a message: the best intent's response, or the fallback of the
    /// selected language. Never fails.
    pub fn respond<'c>(&self, catalog: &'c Catalog, message: &str, language: Option<&str>) -> &'c str {
        let tables = catalog.resolve(language);
        self.find_match(tables, message)
            .intent
            .map(Intent::response)
            .unwrap_or_else(|| tables.fallback())
    }

    /// Like [`respond`](Self::respond), also reporting which intent and stage
    /// won.
    pub fn explain(&self, catalog: &Catalog, message: &str, language: Option<&str>) -> Explanation {
        let tables = catalog.resolve(language);
        let found = self.find_match(tables, message);

        Explanation {
            language: tables.language(),
            intent: found.intent.map(|intent| intent.name().to_string()),
            score: found.score,
            stage: found.stage,
            response: found
                .intent
                .map(Intent::response)
                .unwrap_or_else(|| tables.fallback())
                .to_string(),
        }
    }

    /// Score a message against one language's intents.
    pub fn find_match<'c>(&self, tables: &'c LanguageCatalog, message: &str) -> Match<'c> {
        self.match_utterance(tables, &Utterance::new(message))
    }

    pub fn match_utterance<'c>(&self, tables: &'c LanguageCatalog, utterance: &Utterance) -> Match<'c> {
        let mut best = Match::none();
        if utterance.is_empty() {
            return best;
        }

        self.phrase_stage(tables, utterance, &mut best);

        if best.score < self.config.phrase_threshold {
            self.token_stage(tables, utterance, &mut best);
        }

        if best.score < self.config.token_threshold {
            self.fuzzy_stage(tables, utterance, &mut best);
        }

        best
    }

    fn phrase_stage<'c>(&self, tables: &'c LanguageCatalog, utterance: &Utterance, best: &mut Match<'c>) {
        for intent in tables.intents() {
            for phrase in intent.triggers() {
                if utterance.contains_phrase(phrase) {
                    let score = phrase.chars().count() as f64 * self.config.phrase_weight;
                    best.offer(intent, score, Stage::Phrase);
                }
            }
        }
    }

    fn token_stage<'c>(&self, tables: &'c LanguageCatalog, utterance: &Utterance, best: &mut Match<'c>) {
        for intent in tables.intents() {
            let matched = intent
                .triggers()
                .iter()
                .filter(|phrase| phrase.split_whitespace().any(|word| utterance.has_token(word)))
                .count();

            if matched > 0 {
                let score = matched as f64 * self.config.token_weight;
                best.offer(intent, score, Stage::Token);
            }
        }
    }

    fn fuzzy_stage<'c>(&self, tables: &'c LanguageCatalog, utterance: &Utterance, best: &mut Match<'c>) {
        let text = utterance.stripped();
        let text_chars = text.chars().count();

        for intent in tables.intents() {
            for phrase in intent.triggers() {
                let phrase_chars = phrase.chars().count();
                if ratio_upper_bound(text_chars, phrase_chars) <= self.config.fuzzy_floor {
                    continue;
                }

                let similarity = ratio(text, phrase);
                if similarity > self.config.fuzzy_floor {
                    best.offer(intent, similarity * self.config.fuzzy_weight, Stage::Fuzzy);
                }
            }
        }
    }
}
