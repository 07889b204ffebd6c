mod collector;
pub mod extractor;
pub mod pagination;
pub mod selectors;

use crate::config::ScrapeConfig;
use crate::errors::ScraperError;
use crate::fetch::Fetch;
use crate::geocode::GeocodeResolver;
use crate::html::Document;
use url::Url;

/// Scraper for privateproperty.co.za search results and listing pages.
///
/// Pagination, link collection and field extraction live in the sibling
/// modules as further `impl PortalScraper` blocks.
pub struct PortalScraper {
    fetcher: Box<dyn Fetch>,
    geocoder: GeocodeResolver,
    origin: Url,
    results_per_page: u32,
    allow_error_status: bool,
}

impl PortalScraper {
    pub fn new(
        fetcher: Box<dyn Fetch>,
        geocoder: GeocodeResolver,
        config: &ScrapeConfig,
    ) -> Result<Self, ScraperError> {
        config.validate()?;
        let origin = Url::parse(&config.site_origin).map_err(|e| ScraperError::InvalidUrl {
            url: config.site_origin.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            fetcher,
            geocoder,
            origin,
            results_per_page: config.results_per_page,
            allow_error_status: config.allow_error_status,
        })
    }

    /// Fetches `url` and parses it, rejecting error statuses unless the
    /// config says to parse them anyway.
    fn document(&self, url: &str) -> Result<Document, ScraperError> {
        let page = self.fetcher.get(url)?;

        if !page.is_success() && !self.allow_error_status {
            return Err(ScraperError::HttpStatus {
                url: page.url,
                status: page.status,
            });
        }

        Ok(Document::parse(&page.body))
    }
}
