//! Deckpeek CLI - deck code detection and deck-builder page summaries
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use deckpeek::{builder, extract, fetch, render, summarize, Config};

#[derive(Parser)]
#[command(name = "deckpeek")]
#[command(author, version, about = "Deck code detection and deck-builder page summaries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect a deck code in text, fetch the builder page and summarise it
    Peek {
        /// Message text to scan for a deck code
        text: Vec<String>,
        /// Override the number of cards shown in the preview
        #[arg(long)]
        preview: Option<usize>,
        /// Print the summary as JSON instead of a formatted reply
        #[arg(long)]
        json: bool,
    },
    /// Only run code detection and print the detected code
    Extract {
        /// Message text to scan
        text: Vec<String>,
    },
    /// Print the deck-builder link for a detected code without fetching
    Link {
        /// Message text to scan
        text: Vec<String>,
    },
    /// Summarise a local HTML file
    Parse {
        /// Path to the HTML document
        file: PathBuf,
        /// Print the summary as JSON instead of a formatted reply
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default()?;

    match cli.command {
        Commands::Peek {
            text,
            preview,
            json,
        } => {
            let text = text.join(" ");
            let code = match extract::extract_with(&text, config.extract_limits()) {
                Some(code) => code,
                None => {
                    println!("{}", render::render_no_code());
                    return Ok(());
                }
            };
            tracing::info!(code = %code, "detected deck code");

            let url = builder::deck_builder_url(&config.builder.base_url, &code);
            eprintln!("{} {}", "Fetching:".dimmed(), url);

            let html = match fetch::fetch_page(&url).await {
                Ok(html) => html,
                Err(e) => {
                    println!("{}", render::render_fetch_failure(&url, e));
                    return Ok(());
                }
            };

            let summary = summarize::summarize_with(&html, config.summarize_limits());
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                let mut options = config.render_options();
                if let Some(count) = preview {
                    options.preview_count = count;
                }
                println!("{}", render::render_reply(&summary, &url, options));
            }
        }
        Commands::Extract { text } => {
            let text = text.join(" ");
            match extract::extract_with(&text, config.extract_limits()) {
                Some(code) => println!("{code}"),
                None => println!("{}", render::render_no_code()),
            }
        }
        Commands::Link { text } => {
            let text = text.join(" ");
            match extract::extract_with(&text, config.extract_limits()) {
                Some(code) => println!(
                    "{}",
                    builder::deck_builder_url(&config.builder.base_url, &code)
                ),
                None => println!("{}", render::render_no_code()),
            }
        }
        Commands::Parse { file, json } => {
            let html = std::fs::read_to_string(&file)?;
            let summary = summarize::summarize_with(&html, config.summarize_limits());
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else if summary.is_empty() {
                println!("{}", "Nothing recognisable on that page.".yellow());
            } else {
                println!("{}", render::render_summary(&summary, config.render_options()));
            }
        }
    }

    Ok(())
}
