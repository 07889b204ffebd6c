// src/tests/utils.rs

use crate::config::ScrapeConfig;
use crate::domain::Coordinates;
use crate::errors::{GeocodeError, ScraperError};
use crate::fetch::{Fetch, FetchedPage};
use crate::geocode::{Geocode, GeocodeResolver};
use crate::orchestrator::Orchestrator;
use crate::portal::PortalScraper;
use crate::spreadsheets::TableWriter;
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

pub const ORIGIN: &str = "https://www.privateproperty.co.za";
pub const SALE_SEARCH: &str = "https://www.privateproperty.co.za/for-sale/gauteng/centurion/32";
pub const RENT_SEARCH: &str = "https://www.privateproperty.co.za/to-rent/gauteng/centurion/32";

pub const CENTURION: Coordinates = Coordinates {
    latitude: -25.8603,
    longitude: 28.1894,
};

/// Serves canned pages by exact URL; anything else is a network error.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, FetchedPage>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(self, url: &str, body: impl Into<String>) -> Self {
        self.status(url, 200, body)
    }

    pub fn status(mut self, url: &str, status: u16, body: impl Into<String>) -> Self {
        self.pages.insert(
            url.to_string(),
            FetchedPage {
                url: url.to_string(),
                status,
                body: body.into(),
            },
        );
        self
    }
}

impl Fetch for StubFetcher {
    fn get(&self, url: &str) -> Result<FetchedPage, ScraperError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScraperError::Network(format!("no fixture for {url}")))
    }
}

/// Always finds `CENTURION` and remembers what it was asked.
#[derive(Default, Clone)]
pub struct StubGeocoder {
    pub queries: Rc<RefCell<Vec<String>>>,
}

impl Geocode for StubGeocoder {
    fn geocode(
        &self,
        query: &str,
        _timeout: Duration,
    ) -> Result<Option<Coordinates>, GeocodeError> {
        self.queries.borrow_mut().push(query.to_string());
        Ok(Some(CENTURION))
    }
}

pub fn scraper_with(fetcher: StubFetcher, geocoder: StubGeocoder, config: &ScrapeConfig) -> PortalScraper {
    let resolver = GeocodeResolver::new(Box::new(geocoder), config.geocode_timeout);
    PortalScraper::new(Box::new(fetcher), resolver, config).unwrap()
}

pub fn scraper(fetcher: StubFetcher) -> PortalScraper {
    scraper_with(fetcher, StubGeocoder::default(), &ScrapeConfig::default())
}

pub fn orchestrator(fetcher: StubFetcher, output_dir: &Path, dedupe: bool) -> Orchestrator {
    Orchestrator::new(scraper(fetcher), TableWriter::new(output_dir), dedupe)
}

/// Every row of the "Listings" sheet in a written workbook, header included.
pub fn read_rows(path: &Path) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let range = workbook.worksheet_range("Listings").unwrap();
    range.rows().map(|row| row.to_vec()).collect()
}

pub fn text(value: &str) -> Data {
    Data::String(value.to_string())
}

pub fn page_url(base_url: &str, page: u32) -> String {
    format!("{base_url}?page={page}")
}

/// A search-results page. `counter` is the item-count text, left out
/// entirely when `None`; hrefs are rendered as plain listing-result cards.
pub fn results_page(counter: Option<&str>, hrefs: &[&str]) -> String {
    let counter = counter
        .map(|text| format!(r#"<div class="listing-results-layout__desktop-item-count">{text}</div>"#))
        .unwrap_or_default();
    let cards: String = hrefs
        .iter()
        .map(|href| format!(r#"<a class="listing-result" href="{href}"><span>card</span></a>"#))
        .collect();

    format!("<html><body>{counter}<div class=\"results\">{cards}</div></body></html>")
}

/// A fully populated listing page: title, address, price, description, three
/// features (one without a value) and details including land size and
/// property type.
pub fn listing_page(title: &str) -> String {
    format!(
        r#"<html><body>
        <h1 class="listing-details__title">{title}</h1>
        <div class="listing-details__address">12 Jean Avenue, Lyttelton Manor, Centurion</div>
        <div class="listing-price-display__price">R&nbsp;2&nbsp;450&nbsp;000</div>
        <div class="listing-description__text"><p>Spacious family home.</p></div>
        <div class="property-features"><ul>
          <li class="property-features__list-item"><span class="property-features__name-value">Bedrooms <span class="property-features__value">3</span></span></li>
          <li class="property-features__list-item"><span class="property-features__name-value">Bathrooms <span class="property-features__value">2</span></span></li>
          <li class="property-features__list-item"><span class="property-features__name-value">Study</span></li>
        </ul></div>
        <div class="property-details"><ul>
          <li class="property-details__list-item"><span class="property-details__name-value">Land size <span class="property-details__value">1&nbsp;000 m²</span></span></li>
          <li class="property-details__list-item"><span class="property-details__name-value">Property type <span class="property-details__value">House</span></span></li>
          <li class="property-details__list-item"><span class="property-details__name-value">Pets allowed <span class="property-details__value">Yes</span></span></li>
        </ul></div>
        </body></html>"#
    )
}
