use crate::investment::Segmenter;
use crate::matcher::MatcherConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; empty means any origin
    pub cors_origins: Vec<String>,

    // Chatbot
    /// JSON catalog to load instead of the built-in tables
    pub catalog_path: Option<PathBuf>,
    pub matcher: MatcherConfig,

    // Care directories
    pub doctors_csv: Option<PathBuf>,
    pub hospitals_csv: Option<PathBuf>,

    // Investment
    pub segmenter: Segmenter,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = MatcherConfig::default();
        let matcher = MatcherConfig {
            phrase_weight: env_f64("MATCHER_PHRASE_WEIGHT", defaults.phrase_weight),
            token_weight: env_f64("MATCHER_TOKEN_WEIGHT", defaults.token_weight),
            fuzzy_weight: env_f64("MATCHER_FUZZY_WEIGHT", defaults.fuzzy_weight),
            phrase_threshold: env_f64("MATCHER_PHRASE_THRESHOLD", defaults.phrase_threshold),
            token_threshold: env_f64("MATCHER_TOKEN_THRESHOLD", defaults.token_threshold),
            fuzzy_floor: env_f64("MATCHER_FUZZY_FLOOR", defaults.fuzzy_floor),
        };
        matcher.validate().context("Invalid matcher configuration")?;

        let segmenter = match env_string("INVESTMENT_CENTROIDS") {
            Some(list) => Segmenter::parse(&list).context("INVESTMENT_CENTROIDS is invalid")?,
            None => Segmenter::default(),
        };

        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            cors_origins: env_string("CORS_ORIGINS")
                .map(|list| {
                    list.split(',')
                        .map(|origin| origin.trim().to_string())
                        .filter(|origin| !origin.is_empty())
                        .collect()
                })
                .unwrap_or_default(),

            // Chatbot
            catalog_path: env_string("CATALOG_PATH").map(PathBuf::from),
            matcher,

            // Care directories
            doctors_csv: env_string("DOCTORS_CSV").map(PathBuf::from),
            hospitals_csv: env_string("HOSPITALS_CSV").map(PathBuf::from),

            segmenter,
        })
    }

    /// Address to bind the HTTP server to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Non-empty value of an environment variable.
fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
