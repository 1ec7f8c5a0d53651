//! `sert export` command - download the raw data file

use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use console::style;

use crate::cli::GlobalOpts;
use crate::core::Config;
use crate::store::{CsvStore, RecordStore, StoreError};

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Write to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = CsvStore::new(config.data_file(global.data_file.as_ref()));

    let raw = match store.raw_csv() {
        Ok(raw) => raw,
        Err(StoreError::NoData) => {
            return Err(miette::miette!(
                "no supplier data submitted yet ({})",
                store.path().display()
            ));
        }
        Err(e) => return Err(e).into_diagnostic(),
    };

    match args.output {
        Some(path) => {
            fs::write(&path, &raw).into_diagnostic()?;
            if !global.quiet {
                println!(
                    "{} Exported supplier data to {}",
                    style("✓").green(),
                    style(path.display()).cyan()
                );
            }
        }
        None => {
            print!("{}", raw);
        }
    }

    Ok(())
}
