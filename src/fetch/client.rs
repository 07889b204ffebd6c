// fetch/client.rs
use crate::config::ScrapeConfig;
use crate::errors::ScraperError;
use crate::fetch::{Fetch, FetchedPage};
use reqwest::blocking::Client;
use std::time::Instant;
use tracing::debug;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<FetchedPage, ScraperError> {
        let start = Instant::now();

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(format!("GET {url}: {e}")))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| ScraperError::Network(format!("reading body of {url}: {e}")))?;

        debug!(
            url,
            status,
            bytes = body.len(),
            elapsed = ?start.elapsed(),
            "fetched page"
        );

        Ok(FetchedPage {
            url: url.to_string(),
            status,
            body,
        })
    }
}
