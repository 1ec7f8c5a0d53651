//! Core module - pure domain logic and configuration

pub mod aggregate;
pub mod config;
pub mod estimate;
pub mod record;
pub mod tier;

pub use config::Config;
pub use estimate::{estimate, Estimate, ELECTRICITY_FACTOR};
pub use record::{Confidence, Industry, Method, SupplierRecord, Tier};
pub use tier::{carbon_intensity, classify};
