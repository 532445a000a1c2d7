use anyhow::{Context, Result};
use tracing::info;
use welfare_assistant::{
    care::CareDirectory,
    catalog::Catalog,
    config::Config,
    matcher::IntentMatcher,
    server::{self, AppState},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when not present)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("welfare_assistant=info".parse()?),
        )
        .init();

    info!("Starting welfare assistant backend");

    let config = Config::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };
    for tables in catalog.languages() {
        info!(
            "Chatbot [{}]: {} intents",
            tables.language(),
            tables.intents().len()
        );
    }

    let care = CareDirectory::load(config.doctors_csv.as_deref(), config.hospitals_csv.as_deref())
        .context("Failed to load care directories")?;
    info!(
        "Care directories: {} specialists, {} hospitals",
        care.specialists.len(),
        care.hospitals.len()
    );

    let state = AppState::new(catalog, IntentMatcher::new(config.matcher))
        .with_care(care)
        .with_segmenter(config.segmenter.clone())
        .with_cors_origins(config.cors_origins.clone());

    server::serve(state, &config.bind_address()).await
}
