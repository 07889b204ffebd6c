// src/config.rs

use crate::errors::ScraperError;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_SITE_ORIGIN: &str = "https://www.privateproperty.co.za";
pub const DEFAULT_RESULTS_PER_PAGE: u32 = 20;
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_GEOCODE_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

const GEOCODER_USER_AGENT: &str = concat!("listing_scraper/", env!("CARGO_PKG_VERSION"));

/// Search queries scraped when none are given on the command line.
pub const DEFAULT_BASE_URLS: &[&str] =
    &["https://www.privateproperty.co.za/for-sale/gauteng/centurion/32"];

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Relative listing links are joined onto this.
    pub site_origin: String,
    pub results_per_page: u32,
    pub output_dir: PathBuf,
    pub user_agent: String,
    /// `None` leaves portal requests without a timeout.
    pub http_timeout: Option<Duration>,
    pub geocoder_url: String,
    pub geocoder_user_agent: String,
    pub geocode_timeout: Duration,
    pub geocoding_enabled: bool,
    pub dedupe_urls: bool,
    /// Parse non-2xx pages instead of failing them.
    pub allow_error_status: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            user_agent: USER_AGENT.to_string(),
            http_timeout: None,
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            geocoder_user_agent: GEOCODER_USER_AGENT.to_string(),
            geocode_timeout: DEFAULT_GEOCODE_TIMEOUT,
            geocoding_enabled: true,
            dedupe_urls: false,
            allow_error_status: false,
        }
    }
}

impl ScrapeConfig {
    /// Defaults overridden by process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, ScraperError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ScraperError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(origin) = parse_var::<String, _>(&lookup, "SCRAPER_SITE_ORIGIN")? {
            config.site_origin = origin;
        }
        if let Some(per_page) = parse_var(&lookup, "SCRAPER_RESULTS_PER_PAGE")? {
            config.results_per_page = per_page;
        }
        if let Some(dir) = parse_var::<PathBuf, _>(&lookup, "SCRAPER_OUTPUT_DIR")? {
            config.output_dir = dir;
        }
        if let Some(agent) = parse_var::<String, _>(&lookup, "SCRAPER_USER_AGENT")? {
            config.user_agent = agent;
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "SCRAPER_HTTP_TIMEOUT_SECS")? {
            config.http_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(url) = parse_var::<String, _>(&lookup, "GEOCODER_URL")? {
            config.geocoder_url = url;
        }
        if let Some(agent) = parse_var::<String, _>(&lookup, "GEOCODER_USER_AGENT")? {
            config.geocoder_user_agent = agent;
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "GEOCODER_TIMEOUT_SECS")? {
            config.geocode_timeout = Duration::from_secs(secs);
        }
        if let Some(enabled) = parse_var(&lookup, "SCRAPER_GEOCODE")? {
            config.geocoding_enabled = enabled;
        }
        if let Some(dedupe) = parse_var(&lookup, "SCRAPER_DEDUPE_URLS")? {
            config.dedupe_urls = dedupe;
        }
        if let Some(allow) = parse_var(&lookup, "SCRAPER_ALLOW_ERROR_STATUS")? {
            config.allow_error_status = allow;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ScraperError> {
        if self.results_per_page == 0 {
            return Err(ScraperError::Config(
                "results per page must be greater than zero".into(),
            ));
        }
        url::Url::parse(&self.site_origin).map_err(|e| {
            ScraperError::Config(format!("site origin '{}': {e}", self.site_origin))
        })?;
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ScraperError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ScraperError::Config(format!("{key}={raw}: {e}"))),
        _ => Ok(None),
    }
}
