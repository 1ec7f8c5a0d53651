//! Read-side aggregate views for the dashboard
//!
//! Every view is a pure function over the full record set. The caller
//! reloads the store before rendering; nothing here is cached or updated
//! incrementally.

use std::collections::HashMap;

use crate::core::record::{Confidence, Industry, SupplierRecord, Tier};

/// Total emissions per supplier label, sorted by label
pub fn emissions_by_supplier(records: &[SupplierRecord]) -> Vec<(String, f64)> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for r in records {
        *totals.entry(r.supplier.as_str()).or_insert(0.0) += r.emissions_t_co2;
    }

    let mut rows: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(name, total)| (name.to_string(), total))
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    rows
}

/// Record count per tier, always reporting A, B, C in that order
pub fn tier_counts(records: &[SupplierRecord]) -> [(Tier, usize); 3] {
    let mut counts = [(Tier::A, 0), (Tier::B, 0), (Tier::C, 0)];
    for r in records {
        match r.tier {
            Tier::A => counts[0].1 += 1,
            Tier::B => counts[1].1 += 1,
            Tier::C => counts[2].1 += 1,
        }
    }
    counts
}

/// Mean emissions per industry, in form order, omitting industries with
/// no submissions
pub fn mean_emissions_by_industry(records: &[SupplierRecord]) -> Vec<(Industry, f64)> {
    let mut sums: HashMap<Industry, (f64, usize)> = HashMap::new();
    for r in records {
        let entry = sums.entry(r.industry).or_insert((0.0, 0));
        entry.0 += r.emissions_t_co2;
        entry.1 += 1;
    }

    Industry::ALL
        .into_iter()
        .filter_map(|industry| {
            sums.get(&industry)
                .map(|(sum, n)| (industry, sum / *n as f64))
        })
        .collect()
}

/// Share of high-confidence (reported) rows as a percentage; 0 when empty
pub fn reported_share(records: &[SupplierRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let high = records
        .iter()
        .filter(|r| r.confidence == Confidence::High)
        .count();
    high as f64 / records.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Method;

    fn record(supplier: &str, industry: Industry, emissions: f64, confidence: Confidence, tier: Tier) -> SupplierRecord {
        SupplierRecord {
            supplier: supplier.to_string(),
            industry,
            volume: 10.0,
            energy_kwh: 0.0,
            emissions_t_co2: emissions,
            method: match confidence {
                Confidence::High => Method::Reported,
                Confidence::Medium => Method::Estimated,
            },
            confidence,
            tier,
        }
    }

    fn sample() -> Vec<SupplierRecord> {
        vec![
            record("Acme", Industry::Logistics, 90.0, Confidence::Medium, Tier::B),
            record("Acme", Industry::Logistics, 10.0, Confidence::High, Tier::A),
            record("Borealis", Industry::PackagingPlastic, 2.0, Confidence::High, Tier::A),
        ]
    }

    #[test]
    fn test_emissions_by_supplier_sums_per_label() {
        let rows = emissions_by_supplier(&sample());
        assert_eq!(rows, vec![("Acme".to_string(), 100.0), ("Borealis".to_string(), 2.0)]);
    }

    #[test]
    fn test_tier_counts_fixed_order() {
        let counts = tier_counts(&sample());
        assert_eq!(counts, [(Tier::A, 2), (Tier::B, 1), (Tier::C, 0)]);
    }

    #[test]
    fn test_mean_emissions_by_industry_omits_absent() {
        let means = mean_emissions_by_industry(&sample());
        assert_eq!(
            means,
            vec![
                (Industry::PackagingPlastic, 2.0),
                (Industry::Logistics, 50.0),
            ]
        );
    }

    #[test]
    fn test_reported_share_percentage() {
        assert_eq!(reported_share(&sample()), 2.0 / 3.0 * 100.0);
        assert_eq!(reported_share(&[]), 0.0);
    }
}
