mod nominatim;

pub use nominatim::NominatimGeocoder;

use crate::domain::Coordinates;
use crate::errors::GeocodeError;
use std::time::Duration;
use tracing::{debug, info, warn};

/// A geocoding backend. `Ok(None)` means the provider answered but had no
/// match.
pub trait Geocode {
    fn geocode(&self, query: &str, timeout: Duration)
        -> Result<Option<Coordinates>, GeocodeError>;
}

/// Turns address fragments into coordinates, treating every provider failure
/// as "no coordinates".
pub struct GeocodeResolver {
    provider: Option<Box<dyn Geocode>>,
    timeout: Duration,
}

impl GeocodeResolver {
    pub fn new(provider: Box<dyn Geocode>, timeout: Duration) -> Self {
        Self {
            provider: Some(provider),
            timeout,
        }
    }

    pub fn disabled() -> Self {
        Self {
            provider: None,
            timeout: Duration::ZERO,
        }
    }

    pub fn resolve(&self, address_fragment: &str) -> Option<Coordinates> {
        let provider = self.provider.as_ref()?;
        let query = address_fragment.trim();
        if query.is_empty() {
            return None;
        }

        match provider.geocode(query, self.timeout) {
            Ok(Some(coordinates)) => {
                debug!(query, ?coordinates, "geocoded");
                Some(coordinates)
            }
            Ok(None) => {
                info!(query, "no geocoder match");
                None
            }
            Err(GeocodeError::Timeout(after)) => {
                info!(query, ?after, "geocoder timed out");
                None
            }
            Err(e) => {
                warn!(query, error = %e, "geocoding failed");
                None
            }
        }
    }
}

/// The part of an address before its first comma, with surrounding
/// whitespace trimmed. Unit and complex names usually sit after the comma
/// and stop the geocoder from matching.
pub fn sub_address(address: &str) -> &str {
    match address.split_once(',') {
        Some((head, _)) => head.trim(),
        None => address.trim(),
    }
}
