//! Prints the compiled field-position table as JSON.
//!
//! ```text
//! stagger-table [--field E|B|J|Tmp] [--dim 2|3] [--out PATH]
//! ```

mod args;

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use args::Args;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Registry(#[from] stagger_runtime::RegistryError),
    #[error(transparent)]
    Io(#[from] stagger_io::IoError),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), AppError> {
    let registry = stagger_fields::registry()?;
    let mut table = stagger_io::collect_table(&registry);

    table.records.retain(|r| {
        args.field.is_none_or(|k| r.field == k.name()) && args.dim.is_none_or(|d| r.dim == d)
    });
    info!(records = table.records.len(), "selected field positions");

    match &args.out {
        Some(path) => stagger_io::write_table(path, &table)?,
        None => println!("{}", stagger_io::to_json(&table)?),
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
