use anyhow::Result;
use clap::Parser;
use tracing::error;

use domaintally::report::{print_import_summary, ReportOptions};
use domaintally::utils::{setup_logging, validate_args};
use domaintally::{import_path, Args, ImportConfig};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    validate_args(&args)?;

    match import_path(&args.input, &ImportConfig::from(&args)) {
        Ok(summary) => print_import_summary(&summary, &ReportOptions::from(&args)),
        Err(e) => {
            error!(action = "abort", component = "importer", error = %e, "Import failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
