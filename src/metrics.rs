//! Chat metrics.
//!
//! Counts chat requests by the matching stage that answered them. One
//! instance lives in the server state for the lifetime of the process.

use crate::matcher::Stage;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lock-free counters of chat outcomes.
#[derive(Debug)]
pub struct ChatMetrics {
    /// When counting started
    started_at: DateTime<Utc>,

    /// Requests answered by a verbatim trigger phrase
    phrase_matches: AtomicUsize,

    /// Requests answered by word overlap
    token_matches: AtomicUsize,

    /// Requests answered by string similarity
    fuzzy_matches: AtomicUsize,

    /// Requests answered with the fallback reply
    fallbacks: AtomicUsize,

    /// Requests rejected before matching (malformed body, missing message)
    rejected: AtomicUsize,
}

impl ChatMetrics {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            phrase_matches: AtomicUsize::new(0),
            token_matches: AtomicUsize::new(0),
            fuzzy_matches: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
            rejected: AtomicUsize::new(0),
        }
    }

    /// Record the outcome of one answered chat request.
    pub fn record(&self, stage: Option<Stage>) {
        let counter = match stage {
            Some(Stage::Phrase) => &self.phrase_matches,
            Some(Stage::Token) => &self.token_matches,
            Some(Stage::Fuzzy) => &self.fuzzy_matches,
            None => &self.fallbacks,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn matched(&self, stage: Stage) -> usize {
        match stage {
            Stage::Phrase => self.phrase_matches.load(Ordering::Relaxed),
            Stage::Token => self.token_matches.load(Ordering::Relaxed),
            Stage::Fuzzy => self.fuzzy_matches.load(Ordering::Relaxed),
        }
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn rejected(&self) -> usize {
        self.rejected.load(Ordering::Relaxed)
    }

    /// Snapshot of the counters.
    pub fn report(&self) -> MetricsReport {
        let phrase = self.matched(Stage::Phrase);
        let token = self.matched(Stage::Token);
        let fuzzy = self.matched(Stage::Fuzzy);
        let fallbacks = self.fallbacks();

        let answered = phrase + token + fuzzy + fallbacks;
        let match_rate = if answered > 0 {
            ((answered - fallbacks) as f64 / answered as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            since: self.started_at,
            requests: answered + self.rejected(),
            phrase_matches: phrase,
            token_matches: token,
            fuzzy_matches: fuzzy,
            fallbacks,
            rejected: self.rejected(),
            match_rate,
        }
    }
}

impl Default for ChatMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Metrics report returned by `GET /api/metrics`.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// When counting started
    pub since: DateTime<Utc>,

    /// All chat requests, answered or rejected
    pub requests: usize,

    pub phrase_matches: usize,
    pub token_matches: usize,
    pub fuzzy_matches: usize,
    pub fallbacks: usize,
    pub rejected: usize,

    /// Share of answered requests that matched an intent, as a percentage (0-100)
    pub match_rate: f64,
}
