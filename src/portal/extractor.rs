// portal/extractor.rs
use crate::domain::{Coordinates, ListingRecord, Mapping, TransactionType, NOT_AVAILABLE};
use crate::errors::ScraperError;
use crate::geocode::sub_address;
use crate::html::Document;
use crate::normalize::{normalize, normalize_mapping};
use crate::portal::selectors::{
    ADDRESS, DESCRIPTION, DESCRIPTION_WRAPPER, DETAILS, DETAIL_ITEM, DETAIL_NAME_VALUE,
    DETAIL_VALUE, FEATURES, FEATURE_ITEM, FEATURE_NAME_VALUE, FEATURE_VALUE, PARAGRAPH, PRICE,
    PRICE_ALT, TITLE,
};
use crate::portal::PortalScraper;
use tracing::debug;

const LAND_SIZE: &str = "Land size";
const PROPERTY_TYPE: &str = "Property type";

impl PortalScraper {
    /// Fetches one listing page and builds its record. Only the fetch can
    /// fail; missing elements become absent fields.
    pub fn extract(&self, listing_url: &str) -> Result<ListingRecord, ScraperError> {
        let document = self.document(listing_url)?;
        let fields = ListingFields::parse(&document);

        let coordinates = fields
            .address
            .as_deref()
            .and_then(|address| self.geocoder.resolve(sub_address(address)));

        let record = fields.into_record(listing_url, coordinates);
        debug!(?record, "extracted listing");
        Ok(record)
    }
}

/// Everything read off a listing page before geocoding.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListingFields {
    pub name: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub characteristics: Mapping,
    pub property_details: Mapping,
}

impl ListingFields {
    pub fn parse(document: &Document) -> Self {
        Self {
            name: clean(document.first_text(&TITLE)),
            address: clean(document.first_text(&ADDRESS)),
            description: description(document),
            price: price(document),
            characteristics: characteristics(document),
            property_details: property_details(document),
        }
    }

    pub fn into_record(self, url: &str, coordinates: Option<Coordinates>) -> ListingRecord {
        let area = detail_or_sentinel(&self.property_details, LAND_SIZE);
        let property_type = detail_or_sentinel(&self.property_details, PROPERTY_TYPE);

        ListingRecord {
            url: url.to_string(),
            name: self.name,
            description: self.description,
            address: self.address,
            coordinates,
            area,
            property_type,
            transaction_type: TransactionType::from_url(url),
            price: self.price,
            characteristics: self.characteristics,
            property_details: self.property_details,
        }
    }
}

fn clean(text: Option<String>) -> Option<String> {
    normalize(text.as_deref()).filter(|t| !t.is_empty())
}

fn detail_or_sentinel(details: &Mapping, key: &str) -> String {
    details
        .get(key)
        .cloned()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn description(document: &Document) -> Option<String> {
    if let Some(section) = document.first(&DESCRIPTION) {
        return clean(Some(section.text()));
    }

    let wrapper = document.first(&DESCRIPTION_WRAPPER)?;
    let paragraphs: Vec<String> = wrapper.all(&PARAGRAPH).iter().map(|p| p.text()).collect();
    clean(Some(paragraphs.join(" ")))
}

fn price(document: &Document) -> Option<String> {
    let element = document
        .first(&PRICE)
        .or_else(|| document.first(&PRICE_ALT))?;
    clean(Some(element.text()))
}

/// Features list: the label is the name span's own leading text, the value
/// sits in a nested span.
fn characteristics(document: &Document) -> Mapping {
    let mut features = Mapping::new();
    let Some(section) = document.first(&FEATURES) else {
        return features;
    };

    for item in section.all(&FEATURE_ITEM) {
        let Some(name_value) = item.first(&FEATURE_NAME_VALUE) else {
            continue;
        };
        let (Some(key), Some(value)) = (name_value.own_text(), name_value.first(&FEATURE_VALUE))
        else {
            continue;
        };
        features.insert(key, value.text());
    }

    normalize_mapping(&features)
}

/// Details list: the label is whatever text remains in the name span once the
/// value span's text is cut out.
fn property_details(document: &Document) -> Mapping {
    let mut details = Mapping::new();
    let Some(section) = document.first(&DETAILS) else {
        return details;
    };

    for item in section.all(&DETAIL_ITEM) {
        let (Some(label_el), Some(value_el)) =
            (item.first(&DETAIL_NAME_VALUE), item.first(&DETAIL_VALUE))
        else {
            continue;
        };

        let label = label_el.raw_text().replace(&value_el.raw_text(), "");
        let label = label.trim();
        if label.is_empty() {
            continue;
        }
        details.insert(label.to_string(), value_el.text());
    }

    normalize_mapping(&details)
}
