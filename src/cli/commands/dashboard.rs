//! `sert dashboard` command - supply chain emissions overview
//!
//! Reloads the full record set and renders the aggregate views: emissions
//! by supplier, reported-data coverage, tier counts, and mean emissions by
//! industry. With `--output` a markdown report is written instead of the
//! terminal charts.

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::bar;
use crate::cli::GlobalOpts;
use crate::core::aggregate::{
    emissions_by_supplier, mean_emissions_by_industry, reported_share, tier_counts,
};
use crate::core::record::SupplierRecord;
use crate::core::Config;
use crate::store::{CsvStore, RecordStore};

const CHART_WIDTH: usize = 40;

#[derive(clap::Args, Debug)]
pub struct DashboardArgs {
    /// Write a markdown report to file instead of rendering charts
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: DashboardArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = CsvStore::new(config.data_file(global.data_file.as_ref()));
    let records = store.load_all().into_diagnostic()?;

    if records.is_empty() {
        println!("No supplier data submitted yet.");
        return Ok(());
    }

    if let Some(path) = args.output {
        let report = markdown_report(&records);
        let file = File::create(&path).into_diagnostic()?;
        let mut writer = BufWriter::new(file);
        writer.write_all(report.as_bytes()).into_diagnostic()?;
        println!("Report written to: {}", path.display());
        return Ok(());
    }

    render_terminal(&records);
    Ok(())
}

fn render_terminal(records: &[SupplierRecord]) {
    println!("{}", style("Supply Chain Emissions Overview").bold());
    println!("{}", style("─".repeat(60)).dim());

    // Emissions by supplier
    let by_supplier = emissions_by_supplier(records);
    let max = by_supplier
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0_f64, f64::max);
    println!();
    println!("{}", style("Total Emissions by Supplier (tCO₂/year)").bold());
    for (supplier, total) in &by_supplier {
        println!(
            "  {:<25} {:>10.2} {}",
            supplier,
            total,
            style(bar(*total, max, CHART_WIDTH)).cyan()
        );
    }

    // Data quality
    println!();
    println!("{}", style("Data Quality Overview").bold());
    println!(
        "  Reported data coverage: {}",
        style(format!("{:.0}%", reported_share(records))).yellow()
    );

    // Tier counts
    let counts = tier_counts(records);
    let max_count = counts.iter().map(|(_, n)| *n).max().unwrap_or(0) as f64;
    println!();
    println!("{}", style("Supplier Tiers Overview").bold());
    for (tier, count) in counts {
        println!(
            "  {:<25} {:>10} {}",
            format!("Tier {}", tier),
            count,
            style(bar(count as f64, max_count, CHART_WIDTH)).cyan()
        );
    }

    // Industry comparison
    let means = mean_emissions_by_industry(records);
    let max_mean = means.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    println!();
    println!("{}", style("Industry Emission Comparison (mean tCO₂/year)").bold());
    for (industry, mean) in &means {
        println!(
            "  {:<25} {:>10.2} {}",
            industry.to_string(),
            mean,
            style(bar(*mean, max_mean, CHART_WIDTH)).cyan()
        );
    }

    println!();
    println!("{}", style("─".repeat(60)).dim());
    println!("{} record(s) on file.", style(records.len()).cyan());
}

fn markdown_report(records: &[SupplierRecord]) -> String {
    let mut output = String::new();
    output.push_str("# Supply Chain Emissions Overview\n\n");

    output.push_str("## Total Emissions by Supplier\n\n");
    let mut suppliers = Builder::default();
    suppliers.push_record(["Supplier", "Emissions (tCO2/year)"]);
    for (supplier, total) in emissions_by_supplier(records) {
        suppliers.push_record([supplier, format!("{:.2}", total)]);
    }
    output.push_str(&suppliers.build().with(Style::markdown()).to_string());
    output.push('\n');

    output.push_str("\n## Data Quality\n\n");
    output.push_str(&format!(
        "Reported data coverage: {:.0}%\n",
        reported_share(records)
    ));

    output.push_str("\n## Supplier Tiers\n\n");
    let mut tiers = Builder::default();
    tiers.push_record(["Tier", "Suppliers"]);
    for (tier, count) in tier_counts(records) {
        tiers.push_record([tier.to_string(), count.to_string()]);
    }
    output.push_str(&tiers.build().with(Style::markdown()).to_string());
    output.push('\n');

    output.push_str("\n## Industry Emission Comparison\n\n");
    let mut industries = Builder::default();
    industries.push_record(["Industry", "Mean Emissions (tCO2/year)"]);
    for (industry, mean) in mean_emissions_by_industry(records) {
        industries.push_record([industry.to_string(), format!("{:.2}", mean)]);
    }
    output.push_str(&industries.build().with(Style::markdown()).to_string());
    output.push('\n');

    output.push_str(&format!("\n{} record(s) on file.\n", records.len()));
    output
}
