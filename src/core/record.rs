//! Supplier record entity and its enumerated fields

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Industry sector, the closed set offered by the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Industry {
    #[serde(rename = "Pharmaceutical API")]
    #[value(name = "pharmaceutical-api")]
    PharmaceuticalApi,

    #[serde(rename = "Packaging (Plastic)")]
    #[value(name = "packaging-plastic")]
    PackagingPlastic,

    #[serde(rename = "Logistics")]
    #[value(name = "logistics")]
    Logistics,
}

impl Industry {
    /// All industries, in form order
    pub const ALL: [Industry; 3] = [
        Industry::PharmaceuticalApi,
        Industry::PackagingPlastic,
        Industry::Logistics,
    ];

    /// Emission factor in tons CO2 per production unit, used when no
    /// energy data is available
    pub fn emission_factor(&self) -> f64 {
        match self {
            Industry::PharmaceuticalApi => 4.2,
            Industry::PackagingPlastic => 2.1,
            Industry::Logistics => 0.9,
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Industry::PharmaceuticalApi => write!(f, "Pharmaceutical API"),
            Industry::PackagingPlastic => write!(f, "Packaging (Plastic)"),
            Industry::Logistics => write!(f, "Logistics"),
        }
    }
}

/// How the emissions figure was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    Reported,
    Estimated,
}

impl Method {
    /// Long label shown on the results panel
    pub fn label(&self) -> &'static str {
        match self {
            Method::Reported => "Reported (energy-based)",
            Method::Estimated => "Estimated (industry average)",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Reported => write!(f, "Reported"),
            Method::Estimated => write!(f, "Estimated"),
        }
    }
}

/// Data quality of the emissions figure; mirrors [`Method`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "High"),
            Confidence::Medium => write!(f, "Medium"),
        }
    }
}

/// Coarse sustainability grade, A best through C worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
pub enum Tier {
    A,
    B,
    C,
}

impl Tier {
    /// All tiers, best first
    pub const ALL: [Tier; 3] = [Tier::A, Tier::B, Tier::C];
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::A => write!(f, "A"),
            Tier::B => write!(f, "B"),
            Tier::C => write!(f, "C"),
        }
    }
}

/// One submitted supplier entry
///
/// Records are immutable once appended to the store; there is no identity
/// column and no per-record update or delete. Field renames pin the CSV
/// header row of the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRecord {
    /// Supplier name as entered, not unique, not validated
    #[serde(rename = "Supplier")]
    pub supplier: String,

    /// Industry sector
    #[serde(rename = "Industry")]
    pub industry: Industry,

    /// Annual production volume in units
    #[serde(rename = "Volume")]
    pub volume: f64,

    /// Annual energy consumption in kWh
    #[serde(rename = "Energy_kWh")]
    pub energy_kwh: f64,

    /// Derived total emissions in tons CO2 per year
    #[serde(rename = "Emissions_tCO2")]
    pub emissions_t_co2: f64,

    /// How the emissions figure was obtained
    #[serde(rename = "Method")]
    pub method: Method,

    /// Data quality of the figure
    #[serde(rename = "Confidence")]
    pub confidence: Confidence,

    /// Sustainability grade
    #[serde(rename = "Tier")]
    pub tier: Tier,
}
