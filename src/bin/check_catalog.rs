//! Validate a chatbot catalog file.
//!
//! Usage:
//!   cargo run --bin check-catalog -- data/faq_catalog.json
//!   cargo run --bin check-catalog -- --export-builtin > catalog.json
//!
//! Prints every error and warning. Exits with status 1 when the catalog has
//! errors.

use anyhow::{Context, Result};
use welfare_assistant::catalog::{Catalog, CatalogFile, CatalogValidator};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--export-builtin") {
        let json = serde_json::to_string_pretty(&Catalog::builtin().to_file_model())?;
        println!("{}", json);
        return Ok(());
    }

    let path = args
        .first()
        .context("Usage: check-catalog <catalog.json> | --export-builtin")?;

    let text = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let file: CatalogFile =
        serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path))?;

    let report = CatalogValidator::validate(&file);

    for error in &report.errors {
        println!("❌ {}", error);
    }
    for warning in &report.warnings {
        println!("⚠️  {}", warning);
    }

    let intents: usize = file.languages.iter().map(|l| l.intents.len()).sum();
    println!(
        "\n{}: {} languages, {} intents, {} errors, {} warnings",
        path,
        file.languages.len(),
        intents,
        report.errors.len(),
        report.warnings.len()
    );

    if report.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}
