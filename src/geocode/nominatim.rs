// geocode/nominatim.rs
use crate::domain::Coordinates;
use crate::errors::{GeocodeError, ScraperError};
use crate::geocode::Geocode;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// One entry of Nominatim's `format=json` search response. Coordinates come
/// back as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// OpenStreetMap's Nominatim search API.
pub struct NominatimGeocoder {
    client: Client,
    search_url: String,
}

impl NominatimGeocoder {
    pub fn new(endpoint: &str, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self {
            client,
            search_url: format!("{}/search", endpoint.trim_end_matches('/')),
        })
    }
}

impl Geocode for NominatimGeocoder {
    fn geocode(
        &self,
        query: &str,
        timeout: Duration,
    ) -> Result<Option<Coordinates>, GeocodeError> {
        let classify = |e: reqwest::Error| {
            if e.is_timeout() {
                GeocodeError::Timeout(timeout)
            } else {
                GeocodeError::Request(e.to_string())
            }
        };

        let body = self
            .client
            .get(&self.search_url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .timeout(timeout)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(classify)?;

        coordinates_from(&body)
    }
}

/// First hit of a search response body, if any.
fn coordinates_from(body: &str) -> Result<Option<Coordinates>, GeocodeError> {
    let places: Vec<NominatimPlace> =
        serde_json::from_str(body).map_err(|e| GeocodeError::Decode(e.to_string()))?;

    let Some(place) = places.into_iter().next() else {
        return Ok(None);
    };

    let latitude = place
        .lat
        .parse::<f64>()
        .map_err(|e| GeocodeError::Decode(format!("latitude '{}': {e}", place.lat)))?;
    let longitude = place
        .lon
        .parse::<f64>()
        .map_err(|e| GeocodeError::Decode(format!("longitude '{}': {e}", place.lon)))?;

    Ok(Some(Coordinates {
        latitude,
        longitude,
    }))
}
