//! Record store - append-only persistence for supplier records

pub mod csv_store;
pub mod memory;

use thiserror::Error;

use crate::core::record::SupplierRecord;

pub use csv_store::CsvStore;
pub use memory::MemStore;

/// Errors from record store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("no supplier data submitted yet")]
    NoData,
}

/// Append-only storage for supplier records.
///
/// Records have no identity and are never updated in place; the only
/// destructive operation is a full clear. Single-writer, single-reader
/// usage is assumed and no locking is performed.
pub trait RecordStore {
    /// Append one record, creating the backing store with its header if
    /// absent
    fn append(&self, record: &SupplierRecord) -> Result<(), StoreError>;

    /// Load every record in submission order
    fn load_all(&self) -> Result<Vec<SupplierRecord>, StoreError>;

    /// Delete the backing store entirely; a missing store is not an error
    fn clear(&self) -> Result<(), StoreError>;

    /// The raw CSV document, header included, for download/export
    fn raw_csv(&self) -> Result<String, StoreError>;
}
