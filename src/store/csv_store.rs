//! Flat-file CSV implementation of the record store

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::core::record::SupplierRecord;
use crate::store::{RecordStore, StoreError};

/// Append-only CSV file store.
///
/// The file carries a single header row; appends never rewrite existing
/// rows. There are no transactional guarantees beyond what the OS append
/// primitive offers.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl RecordStore for CsvStore {
    fn append(&self, record: &SupplierRecord) -> Result<(), StoreError> {
        let needs_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        wtr.serialize(record)?;
        wtr.flush()?;

        Ok(())
    }

    fn load_all(&self) -> Result<Vec<SupplierRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for result in rdr.deserialize() {
            records.push(result?);
        }
        Ok(records)
    }

    fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn raw_csv(&self) -> Result<String, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NoData);
        }
        Ok(fs::read_to_string(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::{Confidence, Industry, Method, Tier};
    use tempfile::TempDir;

    fn record(supplier: &str, emissions: f64) -> SupplierRecord {
        SupplierRecord {
            supplier: supplier.to_string(),
            industry: Industry::Logistics,
            volume: 100.0,
            energy_kwh: 0.0,
            emissions_t_co2: emissions,
            method: Method::Estimated,
            confidence: Confidence::Medium,
            tier: Tier::A,
        }
    }

    #[test]
    fn test_append_then_load_preserves_order() {
        let tmp = TempDir::new().unwrap();
        let store = CsvStore::new(tmp.path().join("supplier_data.csv"));

        for i in 0..5 {
            store.append(&record(&format!("Supplier {}", i), i as f64)).unwrap();
        }

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 5);
        for (i, r) in loaded.iter().enumerate() {
            assert_eq!(r.supplier, format!("Supplier {}", i));
            assert_eq!(r.emissions_t_co2, i as f64);
        }
    }

    #[test]
    fn test_single_header_row_across_appends() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("supplier_data.csv");
        let store = CsvStore::new(&path);

        store.append(&record("First", 1.0)).unwrap();
        store.append(&record("Second", 2.0)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let header_rows = contents
            .lines()
            .filter(|l| l.starts_with("Supplier,Industry"))
            .count();
        assert_eq!(header_rows, 1);
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let store = CsvStore::new(tmp.path().join("supplier_data.csv"));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_clear_deletes_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("supplier_data.csv");
        let store = CsvStore::new(&path);

        store.append(&record("Acme", 1.0)).unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(!path.exists());
        assert!(store.load_all().unwrap().is_empty());

        // Clearing again is a no-op
        store.clear().unwrap();
    }

    #[test]
    fn test_raw_csv_requires_data() {
        let tmp = TempDir::new().unwrap();
        let store = CsvStore::new(tmp.path().join("supplier_data.csv"));

        assert!(matches!(store.raw_csv(), Err(StoreError::NoData)));

        store.append(&record("Acme", 90.0)).unwrap();
        let raw = store.raw_csv().unwrap();
        assert!(raw.starts_with("Supplier,Industry,Volume,Energy_kWh,Emissions_tCO2,Method,Confidence,Tier"));
        assert!(raw.contains("Acme"));
    }

    #[test]
    fn test_roundtrip_preserves_values() {
        let tmp = TempDir::new().unwrap();
        let store = CsvStore::new(tmp.path().join("supplier_data.csv"));

        let original = SupplierRecord {
            supplier: "Nordic API, Ltd.".to_string(),
            industry: Industry::PharmaceuticalApi,
            volume: 123.45,
            energy_kwh: 6789.01,
            emissions_t_co2: 6789.01 * 0.0004,
            method: Method::Reported,
            confidence: Confidence::High,
            tier: Tier::A,
        };

        store.append(&original).unwrap();
        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, vec![original]);
    }
}
