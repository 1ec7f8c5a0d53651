//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs,
    dashboard::DashboardArgs,
    export::ExportArgs,
    list::ListArgs,
    reset::ResetArgs,
    submit::SubmitArgs,
};

#[derive(Parser)]
#[command(name = "sert")]
#[command(author, version, about = "Supplier Emissions Reporting Toolkit")]
#[command(long_about = "Supplier Emissions Reporting Toolkit\n\nA CLI for collecting supplier CO2 inputs, estimating carbon footprints, and rendering aggregate dashboards from a flat CSV file.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to the supplier data file (default: supplier_data.csv)
    #[arg(long, global = true, env = "SERT_DATA_FILE")]
    pub data_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a supplier's emissions inputs
    Submit(SubmitArgs),

    /// List submitted supplier records
    List(ListArgs),

    /// Render the supply chain emissions overview
    Dashboard(DashboardArgs),

    /// Export the raw supplier data file
    Export(ExportArgs),

    /// Clear all submitted data
    Reset(ResetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (tsv for list)
    #[default]
    Auto,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// YAML format
    Yaml,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
}
