// errors.rs
use std::time::Duration;
use thiserror::Error;

/// Errors that can abort a fetch, a listing, or a whole base-URL batch.
///
/// Missing page elements and geocoder misses are not errors; they surface as
/// `None` fields on the record instead.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Failures reported by a geocoding provider. The resolver folds every one of
/// these into an absent coordinate pair.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoder timed out after {0:?}")]
    Timeout(Duration),

    #[error("geocoder request failed: {0}")]
    Request(String),

    #[error("unexpected geocoder response: {0}")]
    Decode(String),
}
