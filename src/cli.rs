// src/cli.rs

use crate::config::{ScrapeConfig, DEFAULT_BASE_URLS};
use crate::errors::ScraperError;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "listing_scraper")]
#[command(about = "Scrape property listings from search results into one spreadsheet per search")]
pub struct Cli {
    /// Search-result URLs to scrape
    pub base_urls: Vec<String>,

    /// File with one search-result URL per line (`#` starts a comment)
    #[arg(long)]
    pub urls_file: Option<PathBuf>,

    /// Directory the spreadsheets are written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Leave latitude/longitude blank instead of calling the geocoder
    #[arg(long)]
    pub no_geocode: bool,

    /// Drop listing URLs already seen earlier in the same search
    #[arg(long)]
    pub dedupe: bool,

    /// Parse pages that came back with a non-2xx status
    #[arg(long)]
    pub allow_error_status: bool,
}

impl Cli {
    /// Flags win over environment; unset flags leave the config alone.
    pub fn apply(&self, mut config: ScrapeConfig) -> ScrapeConfig {
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if self.no_geocode {
            config.geocoding_enabled = false;
        }
        if self.dedupe {
            config.dedupe_urls = true;
        }
        if self.allow_error_status {
            config.allow_error_status = true;
        }
        config
    }

    /// Positional URLs followed by those in `--urls-file`; the built-in
    /// search when neither gives any.
    pub fn base_urls(&self) -> Result<Vec<String>, ScraperError> {
        let mut urls: Vec<String> = self
            .base_urls
            .iter()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .collect();

        if let Some(path) = &self.urls_file {
            let contents = fs::read_to_string(path).map_err(|e| {
                ScraperError::Config(format!("reading {}: {e}", path.display()))
            })?;
            urls.extend(parse_url_list(&contents));
        }

        if urls.is_empty() {
            urls = DEFAULT_BASE_URLS.iter().map(|u| u.to_string()).collect();
        }
        Ok(urls)
    }
}

fn parse_url_list(contents: &str) -> impl Iterator<Item = String> + '_ {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
}
