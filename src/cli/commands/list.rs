//! `sert list` command - the submitted records table

use clap::ValueEnum;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{escape_csv, escape_md_cell, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::record::{Industry, SupplierRecord, Tier};
use crate::core::Config;
use crate::store::{CsvStore, RecordStore};

/// Columns available for sorting
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SortColumn {
    Supplier,
    Industry,
    Volume,
    Energy,
    Emissions,
    Tier,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by industry
    #[arg(long, value_enum)]
    pub industry: Option<Industry>,

    /// Filter by tier
    #[arg(long, value_enum)]
    pub tier: Option<Tier>,

    /// Search in supplier names (substring match)
    #[arg(long)]
    pub search: Option<String>,

    /// Sort by field (default: submission order)
    #[arg(long)]
    pub sort: Option<SortColumn>,

    /// Reverse sort order
    #[arg(long, short = 'r')]
    pub reverse: bool,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = CsvStore::new(config.data_file(global.data_file.as_ref()));

    let mut records: Vec<SupplierRecord> = store
        .load_all()
        .into_diagnostic()?
        .into_iter()
        .filter(|r| args.industry.map_or(true, |i| r.industry == i))
        .filter(|r| args.tier.map_or(true, |t| r.tier == t))
        .filter(|r| {
            args.search.as_ref().map_or(true, |needle| {
                r.supplier.to_lowercase().contains(&needle.to_lowercase())
            })
        })
        .collect();

    if let Some(sort) = args.sort {
        match sort {
            SortColumn::Supplier => records.sort_by(|a, b| a.supplier.cmp(&b.supplier)),
            SortColumn::Industry => {
                records.sort_by(|a, b| a.industry.to_string().cmp(&b.industry.to_string()))
            }
            SortColumn::Volume => {
                records.sort_by(|a, b| a.volume.total_cmp(&b.volume))
            }
            SortColumn::Energy => {
                records.sort_by(|a, b| a.energy_kwh.total_cmp(&b.energy_kwh))
            }
            SortColumn::Emissions => {
                records.sort_by(|a, b| a.emissions_t_co2.total_cmp(&b.emissions_t_co2))
            }
            SortColumn::Tier => records.sort_by(|a, b| a.tier.cmp(&b.tier)),
        }
    }

    if args.reverse {
        records.reverse();
    }

    if let Some(limit) = args.limit {
        records.truncate(limit);
    }

    if args.count {
        println!("{}", records.len());
        return Ok(());
    }

    if records.is_empty() {
        println!("No supplier data submitted yet.");
        return Ok(());
    }

    let format = match global.format {
        OutputFormat::Auto => config
            .default_format
            .as_deref()
            .and_then(|s| OutputFormat::from_str(s, true).ok())
            .filter(|f| *f != OutputFormat::Auto)
            .unwrap_or(OutputFormat::Tsv),
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&records).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&records).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv => {
            println!("Supplier,Industry,Volume,Energy_kWh,Emissions_tCO2,Method,Confidence,Tier");
            for r in &records {
                println!(
                    "{},{},{},{},{},{},{},{}",
                    escape_csv(&r.supplier),
                    escape_csv(&r.industry.to_string()),
                    r.volume,
                    r.energy_kwh,
                    r.emissions_t_co2,
                    r.method,
                    r.confidence,
                    r.tier
                );
            }
        }
        OutputFormat::Md => {
            println!("| Supplier | Industry | Volume | Energy kWh | Emissions tCO2 | Method | Confidence | Tier |");
            println!("|---|---|---|---|---|---|---|---|");
            for r in &records {
                println!(
                    "| {} | {} | {} | {} | {:.2} | {} | {} | {} |",
                    escape_md_cell(&r.supplier),
                    r.industry,
                    r.volume,
                    r.energy_kwh,
                    r.emissions_t_co2,
                    r.method,
                    r.confidence,
                    r.tier
                );
            }
        }
        OutputFormat::Tsv => {
            println!(
                "{} {} {} {} {} {} {} {}",
                format!("{:<25}", style("SUPPLIER").bold()),
                format!("{:<20}", style("INDUSTRY").bold()),
                format!("{:>12}", style("VOLUME").bold()),
                format!("{:>12}", style("ENERGY_KWH").bold()),
                format!("{:>10}", style("T_CO2").bold()),
                format!("{:<10}", style("METHOD").bold()),
                format!("{:<10}", style("CONF").bold()),
                format!("{:<4}", style("TIER").bold()),
            );
            println!("{}", "-".repeat(110));

            for r in &records {
                println!(
                    "{:<25} {:<20} {:>12} {:>12} {:>10.2} {:<10} {:<10} {:<4}",
                    truncate_str(&r.supplier, 23),
                    truncate_str(&r.industry.to_string(), 18),
                    r.volume,
                    r.energy_kwh,
                    r.emissions_t_co2,
                    r.method.to_string(),
                    r.confidence.to_string(),
                    r.tier.to_string(),
                );
            }

            if !global.quiet {
                println!();
                println!("{} record(s) found.", style(records.len()).cyan());
            }
        }
        OutputFormat::Auto => unreachable!(),
    }

    Ok(())
}
