pub mod listing;

pub use listing::{
    Coordinates, ListingBatch, ListingRecord, Mapping, TransactionType, NOT_AVAILABLE,
};
