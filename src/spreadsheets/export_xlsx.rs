use crate::domain::{ListingBatch, ListingRecord, Mapping};
use crate::errors::ScraperError;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Column headers, in `ListingRecord` field order.
pub const HEADERS: [&str; 12] = [
    "URL",
    "Name",
    "Description",
    "Address",
    "Latitude",
    "Longitude",
    "Area",
    "Property Type",
    "Transaction Type",
    "Price",
    "Characteristics",
    "Property Details",
];

// Longest string an xlsx cell accepts.
const MAX_CELL_CHARS: usize = 32_767;

/// Writes one workbook per batch into a fixed output directory.
pub struct TableWriter {
    output_dir: PathBuf,
}

impl TableWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Writes `batch` to `<output_dir>/<file_name_for(base_url)>` and returns
    /// the path. The output directory is created on demand.
    pub fn write(&self, batch: &ListingBatch) -> Result<PathBuf, ScraperError> {
        fs::create_dir_all(&self.output_dir)?;
        if batch.is_empty() {
            warn!("No listings for {}, writing headers only", batch.base_url());
        }
        let path = self.output_dir.join(file_name_for(batch.base_url()));

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Listings")?;

        let header_format = Format::new().set_bold();
        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, record) in batch.records().iter().enumerate() {
            write_record(worksheet, (i + 1) as u32, record)?;
        }

        workbook.save(&path)?;
        info!("💾 Data saved to {} ({} rows)", path.display(), batch.len());
        Ok(path)
    }
}

/// Spreadsheet file name for a search URL: scheme dropped, path and query
/// punctuation turned into underscores.
pub fn file_name_for(base_url: &str) -> String {
    let without_scheme = base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"))
        .unwrap_or(base_url);

    let stem: String = without_scheme
        .chars()
        .map(|c| match c {
            '/' | '?' | ':' => '_',
            other => other,
        })
        .collect();

    format!("{stem}.xlsx")
}

fn write_record(ws: &mut Worksheet, row: u32, record: &ListingRecord) -> Result<(), ScraperError> {
    write_text(ws, row, 0, Some(&record.url))?;
    write_text(ws, row, 1, record.name.as_deref())?;
    write_text(ws, row, 2, record.description.as_deref())?;
    write_text(ws, row, 3, record.address.as_deref())?;

    if let (Some(latitude), Some(longitude)) = (record.latitude(), record.longitude()) {
        ws.write_number(row, 4, latitude)?;
        ws.write_number(row, 5, longitude)?;
    }

    write_text(ws, row, 6, Some(&record.area))?;
    write_text(ws, row, 7, Some(&record.property_type))?;
    write_text(ws, row, 8, Some(record.transaction_type.as_str()))?;
    write_text(ws, row, 9, record.price.as_deref())?;
    write_text(ws, row, 10, Some(&mapping_cell(&record.characteristics)?))?;
    write_text(ws, row, 11, Some(&mapping_cell(&record.property_details)?))?;

    Ok(())
}

/// Absent values leave the cell blank.
fn write_text(ws: &mut Worksheet, row: u32, col: u16, text: Option<&str>) -> Result<(), ScraperError> {
    if let Some(text) = text {
        ws.write_string(row, col, truncate_cell(text))?;
    }
    Ok(())
}

/// A whole mapping goes into one cell as a JSON object.
pub fn mapping_cell(mapping: &Mapping) -> Result<String, ScraperError> {
    Ok(serde_json::to_string(mapping)?)
}

fn truncate_cell(text: &str) -> &str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}
