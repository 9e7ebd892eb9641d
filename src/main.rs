mod cli;
mod config;
mod models;
mod pipeline;
mod sources;
mod view;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use config::Config;
use pipeline::{ImageCatalog, MatchHandler, Notice};
use sources::NinjasClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let prefs = cli.preferences()?;
    let config = Config::from_cli(&cli);

    info!("🚗 AutoMatch - Personalized Car Finder");

    // Loaded once, shared read-only with the handler
    let catalog = ImageCatalog::load_or_unavailable(&config.metadata_csv, &config.image_dir);
    let source = NinjasClient::new(&config)?;

    view::print_notice(&Notice::info("Fetching car data from the API..."));

    let report = MatchHandler::new(&source, &catalog)
        .find_matches(&prefs)
        .await;

    if cli.json {
        println!("{}", view::render_json(&report)?);
    } else {
        print!("{}", view::render_text(&report));
    }

    if let Some(path) = &config.output {
        let json = view::render_json(&report)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!("💾 Saved report to {}", path.display());
    }

    Ok(())
}
