//! Emissions estimation from form inputs
//!
//! Two fixed formulas: an energy-based calculation when the supplier
//! reported energy consumption, and an industry-average fallback otherwise.
//! Pure arithmetic, no I/O.

use crate::core::record::{Confidence, Industry, Method};

/// Tons CO2 per kWh of grid electricity
pub const ELECTRICITY_FACTOR: f64 = 0.0004;

/// Outcome of an emissions estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Total emissions in tons CO2 per year
    pub emissions_t_co2: f64,
    pub method: Method,
    pub confidence: Confidence,
}

/// Estimate annual emissions for a supplier.
///
/// Energy data takes precedence: any positive `energy_kwh` yields a
/// reported, high-confidence figure. Otherwise the industry emission
/// factor is applied to the production volume and the figure is an
/// estimate at medium confidence.
pub fn estimate(industry: Industry, volume: f64, energy_kwh: f64) -> Estimate {
    if energy_kwh > 0.0 {
        Estimate {
            emissions_t_co2: energy_kwh * ELECTRICITY_FACTOR,
            method: Method::Reported,
            confidence: Confidence::High,
        }
    } else {
        Estimate {
            emissions_t_co2: volume * industry.emission_factor(),
            method: Method::Estimated,
            confidence: Confidence::Medium,
        }
    }
}
