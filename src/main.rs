use crate::cli::Cli;
use crate::config::ScrapeConfig;
use crate::orchestrator::Orchestrator;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod domain;
mod errors;
mod fetch;
mod geocode;
mod html;
mod normalize;
mod orchestrator;
mod portal;
mod spreadsheets;

#[cfg(test)]
mod tests;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    // 1️⃣ Environment, then flags on top
    let config = match ScrapeConfig::from_env() {
        Ok(config) => cli.apply(config),
        Err(e) => {
            error!("❌ Invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    let base_urls = match cli.base_urls() {
        Ok(urls) => urls,
        Err(e) => {
            error!("❌ {e}");
            std::process::exit(2);
        }
    };

    // 2️⃣ Wire the live fetcher and geocoder
    let orchestrator = match Orchestrator::from_config(&config) {
        Ok(o) => o,
        Err(e) => {
            error!("❌ Scraper init failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ One spreadsheet per base URL
    let summary = orchestrator.run(&base_urls);

    let failed = summary.failed();
    info!(
        "Finished {} search(es), {} failed",
        summary.batches.len(),
        failed
    );
    if failed > 0 {
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,html5ever=warn,selectors=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
