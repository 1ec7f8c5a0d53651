//! `sert submit` command - supplier data entry

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::record::{Confidence, Industry, SupplierRecord, Tier};
use crate::core::{carbon_intensity, classify, estimate, Config};
use crate::store::{CsvStore, RecordStore};

#[derive(clap::Args, Debug)]
pub struct SubmitArgs {
    /// Supplier name
    #[arg(long, short = 's')]
    pub supplier: Option<String>,

    /// Industry sector
    #[arg(long, value_enum)]
    pub industry: Option<Industry>,

    /// Annual production volume in units
    #[arg(long)]
    pub volume: Option<f64>,

    /// Annual energy consumption in kWh
    #[arg(long)]
    pub energy: Option<f64>,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

/// The entry form inputs, after prompting/validation
struct FormInput {
    supplier: String,
    industry: Industry,
    volume: f64,
    energy_kwh: f64,
}

pub fn run(args: SubmitArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = CsvStore::new(config.data_file(global.data_file.as_ref()));

    let input = if args.interactive {
        prompt_form(&args)?
    } else {
        form_from_flags(&args)?
    };

    if !input.volume.is_finite() || input.volume < 0.0 {
        return Err(miette::miette!(
            "Annual production volume must be a non-negative number, got {}",
            input.volume
        ));
    }
    if !input.energy_kwh.is_finite() || input.energy_kwh < 0.0 {
        return Err(miette::miette!(
            "Annual energy consumption must be a non-negative number, got {}",
            input.energy_kwh
        ));
    }

    let est = estimate(input.industry, input.volume, input.energy_kwh);
    let intensity = carbon_intensity(est.emissions_t_co2, input.volume);
    let tier = classify(est.confidence, intensity);

    let record = SupplierRecord {
        supplier: input.supplier,
        industry: input.industry,
        volume: input.volume,
        energy_kwh: input.energy_kwh,
        emissions_t_co2: est.emissions_t_co2,
        method: est.method,
        confidence: est.confidence,
        tier,
    };

    store.append(&record).into_diagnostic()?;

    if !global.quiet {
        print_results_panel(&record, intensity);

        let total = store.load_all().into_diagnostic()?.len();
        println!();
        println!(
            "{} Recorded submission for {} ({} record(s) on file)",
            style("✓").green(),
            style(&record.supplier).yellow(),
            style(total).cyan()
        );
        println!("   {}", style(store.path().display()).dim());
    }

    Ok(())
}

fn form_from_flags(args: &SubmitArgs) -> Result<FormInput> {
    let supplier = args.supplier.clone().ok_or_else(|| {
        miette::miette!("missing --supplier (or use --interactive to be prompted)")
    })?;
    let industry = args.industry.ok_or_else(|| {
        miette::miette!("missing --industry (or use --interactive to be prompted)")
    })?;

    Ok(FormInput {
        supplier,
        industry,
        volume: args.volume.unwrap_or(0.0),
        energy_kwh: args.energy.unwrap_or(0.0),
    })
}

/// Prompt for each form field; flags pre-fill defaults
fn prompt_form(args: &SubmitArgs) -> Result<FormInput> {
    let theme = ColorfulTheme::default();

    let supplier: String = Input::with_theme(&theme)
        .with_prompt("Supplier name")
        .with_initial_text(args.supplier.clone().unwrap_or_default())
        .interact_text()
        .into_diagnostic()?;

    let items: Vec<String> = Industry::ALL.iter().map(|i| i.to_string()).collect();
    let preselected = args
        .industry
        .and_then(|ind| Industry::ALL.iter().position(|i| *i == ind))
        .unwrap_or(0);
    let selection = Select::with_theme(&theme)
        .with_prompt("Industry")
        .items(&items)
        .default(preselected)
        .interact()
        .into_diagnostic()?;
    let industry = Industry::ALL[selection];

    let volume: f64 = Input::with_theme(&theme)
        .with_prompt("Annual production volume (units)")
        .default(args.volume.unwrap_or(0.0))
        .validate_with(|v: &f64| {
            if v.is_finite() && *v >= 0.0 {
                Ok(())
            } else {
                Err("must be a non-negative number")
            }
        })
        .interact_text()
        .into_diagnostic()?;

    let energy_kwh: f64 = Input::with_theme(&theme)
        .with_prompt("Annual energy consumption (kWh)")
        .default(args.energy.unwrap_or(0.0))
        .validate_with(|v: &f64| {
            if v.is_finite() && *v >= 0.0 {
                Ok(())
            } else {
                Err("must be a non-negative number")
            }
        })
        .interact_text()
        .into_diagnostic()?;

    Ok(FormInput {
        supplier,
        industry,
        volume,
        energy_kwh,
    })
}

fn print_results_panel(record: &SupplierRecord, intensity: f64) {
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Estimated CO₂ Emissions").bold());
    println!(
        "{}: {} tons CO₂/year",
        style("Total emissions").bold(),
        style(format!("{:.2}", record.emissions_t_co2)).yellow()
    );
    println!(
        "{}: {}",
        style("Calculation method").bold(),
        record.method.label()
    );
    println!("{}: {}", style("Confidence level").bold(), record.confidence);
    println!("{}", style("─".repeat(60)).dim());

    let tier_styled = match record.tier {
        Tier::A => style(format!("Tier {}", record.tier)).green().bold(),
        Tier::B => style(format!("Tier {}", record.tier)).yellow().bold(),
        Tier::C => style(format!("Tier {}", record.tier)).red().bold(),
    };
    println!("{}: {}", style("Sustainability Rating").bold(), tier_styled);

    let mut hints = Vec::new();
    if record.confidence != Confidence::High {
        hints.push("Provide energy consumption data to improve data quality.");
    }
    if intensity > 4.0 {
        hints.push("Reduce energy intensity or switch to renewable electricity.");
    }
    if record.tier == Tier::A {
        hints.push("Maintain current performance to retain preferred supplier status.");
    }
    if !hints.is_empty() {
        println!();
        println!("{}", style("How to improve your score:").bold());
        for hint in hints {
            println!("  • {}", hint);
        }
    }

    println!();
    println!("{}", style("Benchmark vs Industry").bold());
    println!(
        "  Industry average: {} tons CO₂ / unit",
        record.industry.emission_factor()
    );
    println!("  Your intensity:   {:.2} tons CO₂ / unit", intensity);
}
