// portal/pagination.rs
use crate::errors::ScraperError;
use crate::portal::selectors::RESULT_COUNT;
use crate::portal::PortalScraper;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

static TOTAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"of\s*([\d,]+)").unwrap_or_else(|e| panic!("bad pattern: {e}")));

impl PortalScraper {
    /// Number of result pages behind `base_url`. A missing or unreadable
    /// result counter gives 0 pages; only a failed fetch is an error.
    pub fn page_count(&self, base_url: &str) -> Result<u32, ScraperError> {
        let document = self.document(base_url)?;

        let Some(counter) = document.first(&RESULT_COUNT) else {
            warn!(base_url, "result counter not found on page");
            return Ok(0);
        };

        let counter_text = counter.text();
        let Some(total) = parse_total_listings(&counter_text) else {
            warn!(base_url, counter = %counter_text, "could not read total listings");
            return Ok(0);
        };

        let pages = pages_for(total, self.results_per_page);
        info!("📊 Total listings: {total}, total pages: {pages}");
        Ok(pages)
    }
}

/// Pulls the listing total out of counter text like
/// "Showing 1 - 20 of 1,150".
pub fn parse_total_listings(counter_text: &str) -> Option<u32> {
    let cleaned = counter_text.replace('\u{a0}', "");
    let digits = TOTAL_PATTERN
        .captures(&cleaned)?
        .get(1)?
        .as_str()
        .replace(',', "");
    digits.parse().ok()
}

pub fn pages_for(total_listings: u32, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    total_listings.div_ceil(per_page)
}
