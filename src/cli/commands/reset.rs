//! `sert reset` command - clear all submitted data

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};
use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::Config;
use crate::store::{CsvStore, RecordStore};

#[derive(clap::Args, Debug)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(long, short = 'y', visible_alias = "yes")]
    pub force: bool,
}

pub fn run(args: ResetArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let store = CsvStore::new(config.data_file(global.data_file.as_ref()));

    if !store.exists() {
        if !global.quiet {
            println!("No supplier data to clear.");
        }
        return Ok(());
    }

    if !args.force {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Delete all supplier data in {}?",
                store.path().display()
            ))
            .default(false)
            .interact()
            .into_diagnostic()?;

        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    store.clear().into_diagnostic()?;

    if !global.quiet {
        println!("{} Data cleared.", style("✓").green());
    }

    Ok(())
}
