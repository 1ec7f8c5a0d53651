//! SERT: Supplier Emissions Reporting Toolkit
//!
//! A small CLI for collecting supplier CO2 inputs, estimating carbon
//! footprints, and rendering aggregate dashboards from a flat CSV file.

pub mod cli;
pub mod core;
pub mod store;
