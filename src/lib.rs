//! Welfare services assistant: FAQ chatbot, care and investment
//! recommendations behind a JSON API.

pub mod care;
pub mod catalog;
pub mod client;
pub mod config;
pub mod i18n;
pub mod investment;
pub mod matcher;
pub mod metrics;
pub mod retry;
pub mod server;
