//! WikiCloud command-line client
//!
//! Asks a running WikiCloud API to analyze a Wikipedia category and prints
//! the most frequent non-common words.

mod client;
mod render;

use anyhow::Result;
use clap::Parser;
use client::WikiCloudClient;
use tracing_subscriber::EnvFilter;

/// Word frequencies of a Wikipedia category.
#[derive(Debug, Parser)]
#[command(name = "wikicloud")]
#[command(about = "Analyze word frequencies in Wikipedia categories", long_about = None)]
pub struct Cli {
    /// Wikipedia category name, with or without the `Category:` prefix.
    pub category: String,

    /// Number of words to print (capped by the server's TOP_N).
    #[arg(long, short = 'n', default_value = "50", value_name = "N")]
    pub top: usize,

    /// Colour palette to request (only visible with --json).
    #[arg(long, short = 'p')]
    pub palette: Option<String>,

    /// Base URL of the WikiCloud API.
    #[arg(long, env = "WIKICLOUD_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    /// Print the raw JSON response instead of a word list.
    #[arg(long)]
    pub json: bool,
}

async fn run(cli: Cli) -> Result<()> {
    let client = WikiCloudClient::new(&cli.api_url)?;

    if cli.json {
        let body = client
            .analyze_json(&cli.category, cli.palette.as_deref())
            .await?;
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        let cloud = client.analyze(&cli.category, cli.palette.as_deref()).await?;
        print!("{}", render::render_top_words(&cloud, cli.top));
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::info!("Analyzing category '{}' via {}", cli.category, cli.api_url);

    if let Err(err) = run(cli).await {
        eprintln!("wikicloud error: {:#}", err);
        std::process::exit(1);
    }
}
