mod client;

pub use client::HttpFetcher;

use crate::errors::ScraperError;

/// A fetched page, whatever its status code.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking GET. Implementations return `Err` only when no response arrived;
/// status-code policy is left to the caller.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<FetchedPage, ScraperError>;
}
