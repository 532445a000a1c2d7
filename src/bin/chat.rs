//! Terminal chat with the welfare services assistant.
//!
//! Usage:
//!   cargo run --bin chat                                  # Answer locally from the catalog
//!   cargo run --bin chat -- --server http://localhost:5000  # Talk to a running server
//!   cargo run --bin chat -- --language si                 # Start in Sinhala
//!
//! Optional environment variables:
//! - CHAT_SERVER_URL (same as --server)
//! - CATALOG_PATH, MATCHER_* (local mode only; read the same way as the server)
//!
//! Commands inside the chat:
//!   1-6           ask a quick question
//!   /lang <code>  switch language (any enabled code)
//!   /clear        start over
//!   /quit         leave

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::warn;
use welfare_assistant::{
    catalog::Catalog,
    client::ChatClient,
    config::Config,
    i18n::{Language, LanguageRegistry, LanguageStrings},
    matcher::IntentMatcher,
};

/// Where answers come from.
enum Backend {
    Local {
        catalog: Catalog,
        matcher: IntentMatcher,
    },
    Remote(ChatClient),
}

impl Backend {
    /// Answer from the catalog and matcher settings the server would use.
    fn local(config: &Config) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_file(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?,
            None => Catalog::builtin(),
        };
        Ok(Backend::Local {
            catalog,
            matcher: IntentMatcher::new(config.matcher),
        })
    }

    async fn answer(&self, message: &str, language: Language) -> String {
        match self {
            Backend::Local { catalog, matcher } => {
                matcher.respond(catalog, message, Some(language.code())).to_string()
            }
            Backend::Remote(client) => match client.send(message, Some(language.code())).await {
                Ok(reply) => reply,
                Err(e) => {
                    warn!("{:#}", e);
                    LanguageStrings::for_language(language).connection_error.to_string()
                }
            },
        }
    }
}

struct Args {
    server: Option<String>,
    language: Language,
}

fn parse_args() -> Result<Args> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut server = std::env::var("CHAT_SERVER_URL").ok().filter(|v| !v.trim().is_empty());
    let mut language = Language::canonical();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--server" => {
                server = Some(iter.next().context("--server needs a URL")?.clone());
            }
            "--language" => {
                let code = iter.next().context("--language needs a code")?;
                language = Language::from_code(code)?;
            }
            "--help" | "-h" => {
                println!("Usage: chat [--server URL] [--language CODE]");
                std::process::exit(0);
            }
            other => anyhow::bail!("Unknown argument: {}", other),
        }
    }

    Ok(Args { server, language })
}

fn print_welcome(language: Language) {
    let strings = LanguageStrings::for_language(language);
    println!();
    println!("🤖 {}", strings.welcome);
    println!();
    for (index, quick) in strings.quick_questions.iter().enumerate() {
        println!("  {}. {}", index + 1, quick.label);
    }
    println!();
    let codes: Vec<&str> = LanguageRegistry::get()
        .list_enabled()
        .iter()
        .map(|lang| lang.code)
        .collect();
    println!("  /lang <{}>  /clear  /quit", codes.join("|"));
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("welfare_assistant=warn".parse()?),
        )
        .with_writer(io::stderr)
        .init();

    let args = parse_args()?;
    let mut language = args.language;

    let backend = match args.server {
        Some(url) => {
            let client = ChatClient::new(&url)?;
            if let Err(e) = client.health().await {
                warn!("{:#}", e);
            }
            println!("Connected to {}", client.base_url());
            Backend::Remote(client)
        }
        None => Backend::local(&Config::from_env()?)?,
    };

    print_welcome(language);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("You: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/quit" | "/exit" => break,
            "/clear" => {
                print_welcome(language);
                continue;
            }
            _ => {}
        }

        if let Some(code) = input.strip_prefix("/lang") {
            match Language::from_code(code) {
                Ok(selected) => {
                    language = selected;
                    print_welcome(language);
                }
                Err(e) => println!("{}", e),
            }
            continue;
        }

        let quick_questions = LanguageStrings::for_language(language).quick_questions;
        let message = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| quick_questions.get(index))
            .map(|quick| {
                println!("You: {}", quick.question);
                quick.question
            })
            .unwrap_or(input);

        let reply = backend.answer(message, language).await;
        println!();
        println!("🤖 {}", reply);
        println!();
    }

    Ok(())
}
