// src/domain/listing.rs

use indexmap::IndexMap;

/// Ordered label -> value pairs scraped from a listing section.
pub type Mapping = IndexMap<String, String>;

/// Placeholder written when a detail was looked up but not found.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Sales,
    Rentals,
}

impl TransactionType {
    /// Any URL mentioning "sale" is a sale; everything else is a rental.
    pub fn from_url(url: &str) -> Self {
        if url.to_lowercase().contains("sale") {
            TransactionType::Sales
        } else {
            TransactionType::Rentals
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Sales => "Sales",
            TransactionType::Rentals => "Rentals",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One spreadsheet row. Built in a single pass by the extractor and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRecord {
    pub url: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub area: String,
    pub property_type: String,
    pub transaction_type: TransactionType,
    pub price: Option<String>,
    pub characteristics: Mapping,
    pub property_details: Mapping,
}

impl ListingRecord {
    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.longitude)
    }
}

/// Records scraped for one base URL, in collection order.
#[derive(Debug)]
pub struct ListingBatch {
    base_url: String,
    records: Vec<ListingRecord>,
}

impl ListingBatch {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: ListingRecord) {
        self.records.push(record);
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn records(&self) -> &[ListingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
