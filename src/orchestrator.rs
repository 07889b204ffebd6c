// src/orchestrator.rs

use crate::config::ScrapeConfig;
use crate::domain::ListingBatch;
use crate::errors::ScraperError;
use crate::fetch::HttpFetcher;
use crate::geocode::{GeocodeResolver, NominatimGeocoder};
use crate::portal::PortalScraper;
use crate::spreadsheets::TableWriter;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Outcome of one base URL.
#[derive(Debug)]
pub struct BatchReport {
    pub base_url: String,
    pub listings_found: usize,
    pub records_written: usize,
    pub skipped: usize,
    pub output: Result<PathBuf, ScraperError>,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub batches: Vec<BatchReport>,
}

impl RunSummary {
    pub fn failed(&self) -> usize {
        self.batches.iter().filter(|b| b.output.is_err()).count()
    }
}

/// Drives collect -> extract -> write for each base URL in turn.
pub struct Orchestrator {
    scraper: PortalScraper,
    writer: TableWriter,
    dedupe_urls: bool,
}

impl Orchestrator {
    pub fn new(scraper: PortalScraper, writer: TableWriter, dedupe_urls: bool) -> Self {
        Self {
            scraper,
            writer,
            dedupe_urls,
        }
    }

    /// Wires the live HTTP fetcher and Nominatim geocoder.
    pub fn from_config(config: &ScrapeConfig) -> Result<Self, ScraperError> {
        let fetcher = HttpFetcher::new(config)?;
        let geocoder = if config.geocoding_enabled {
            let provider = NominatimGeocoder::new(&config.geocoder_url, &config.geocoder_user_agent)?;
            GeocodeResolver::new(Box::new(provider), config.geocode_timeout)
        } else {
            info!("geocoding disabled, coordinates will be left blank");
            GeocodeResolver::disabled()
        };

        let scraper = PortalScraper::new(Box::new(fetcher), geocoder, config)?;
        let writer = TableWriter::new(config.output_dir.clone());
        Ok(Self::new(scraper, writer, config.dedupe_urls))
    }

    /// Processes every base URL in order. A failing base URL is reported in
    /// the summary and does not stop the ones after it.
    pub fn run(&self, base_urls: &[String]) -> RunSummary {
        let mut summary = RunSummary::default();

        for base_url in base_urls {
            info!("🏠 Scraping data from: {base_url}");
            let report = self.run_one(base_url);

            match &report.output {
                Ok(path) => info!(
                    "✅ {base_url}: {} rows -> {} ({} skipped)",
                    report.records_written,
                    path.display(),
                    report.skipped
                ),
                Err(e) => error!("❌ {base_url} failed: {e}"),
            }
            summary.batches.push(report);
        }

        summary
    }

    fn run_one(&self, base_url: &str) -> BatchReport {
        match self.scrape_batch(base_url) {
            Ok(scraped) => BatchReport {
                base_url: base_url.to_string(),
                listings_found: scraped.listings_found,
                records_written: scraped.batch.len(),
                skipped: scraped.skipped,
                output: self.writer.write(&scraped.batch),
            },
            Err(e) => BatchReport {
                base_url: base_url.to_string(),
                listings_found: 0,
                records_written: 0,
                skipped: 0,
                output: Err(e),
            },
        }
    }

    /// Collects and extracts one base URL. Individual listings that fail are
    /// logged and left out of the batch.
    pub(crate) fn scrape_batch(&self, base_url: &str) -> Result<ScrapedBatch, ScraperError> {
        let mut listing_urls = self.scraper.collect_urls(base_url)?;
        if self.dedupe_urls {
            dedupe_in_order(&mut listing_urls);
        }
        info!("🔗 Found {} property URLs", listing_urls.len());

        let mut batch = ListingBatch::new(base_url);
        let mut skipped = 0;
        for listing_url in &listing_urls {
            match self.scraper.extract(listing_url) {
                Ok(record) => batch.push(record),
                Err(e) => {
                    skipped += 1;
                    warn!("⚠️ Skipping {listing_url}: {e}");
                }
            }
        }

        Ok(ScrapedBatch {
            batch,
            listings_found: listing_urls.len(),
            skipped,
        })
    }
}

pub(crate) struct ScrapedBatch {
    pub batch: ListingBatch,
    pub listings_found: usize,
    pub skipped: usize,
}

fn dedupe_in_order(urls: &mut Vec<String>) {
    let mut seen = HashSet::new();
    urls.retain(|url| seen.insert(url.clone()));
}
