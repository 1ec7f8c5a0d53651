//! In-memory implementation of the record store, for tests

use std::sync::Mutex;

use crate::core::record::SupplierRecord;
use crate::store::{RecordStore, StoreError};

/// Vec-backed store with the same contract as [`super::CsvStore`]
#[derive(Debug, Default)]
pub struct MemStore {
    records: Mutex<Vec<SupplierRecord>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemStore {
    fn append(&self, record: &SupplierRecord) -> Result<(), StoreError> {
        self.records
            .lock()
            .expect("store lock poisoned")
            .push(record.clone());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<SupplierRecord>, StoreError> {
        Ok(self.records.lock().expect("store lock poisoned").clone())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.records.lock().expect("store lock poisoned").clear();
        Ok(())
    }

    fn raw_csv(&self) -> Result<String, StoreError> {
        let records = self.records.lock().expect("store lock poisoned");
        if records.is_empty() {
            return Err(StoreError::NoData);
        }

        let mut wtr = csv::Writer::from_writer(Vec::new());
        for record in records.iter() {
            wtr.serialize(record)?;
        }
        let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
