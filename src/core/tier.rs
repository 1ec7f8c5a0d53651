//! Sustainability tier classification

use crate::core::record::{Confidence, Tier};

/// Emissions per production unit, the basis for tier grading.
///
/// A zero volume yields zero intensity rather than a division error. This
/// deliberately reproduces the historical scoring rule: with zero volume a
/// high-confidence submission still grades as Tier A.
pub fn carbon_intensity(emissions_t_co2: f64, volume: f64) -> f64 {
    if volume > 0.0 {
        emissions_t_co2 / volume
    } else {
        0.0
    }
}

/// Grade a supplier from confidence and carbon intensity.
///
/// Tier A requires measured (high-confidence) data and intensity below 3;
/// intensity below 5 grades B regardless of confidence; everything else C.
pub fn classify(confidence: Confidence, carbon_intensity: f64) -> Tier {
    if confidence == Confidence::High && carbon_intensity < 3.0 {
        Tier::A
    } else if carbon_intensity < 5.0 {
        Tier::B
    } else {
        Tier::C
    }
}
