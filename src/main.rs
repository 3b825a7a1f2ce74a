use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use log::info;

/// Compile the linedef special-effects table into TOML linedef metadata on
/// stdout.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the table file.
    #[arg(default_value = "tables.txt")]
    table: PathBuf,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let input = fs::read_to_string(&args.table)
        .wrap_err_with(|| format!("reading {}", args.table.display()))?;

    let mut out = io::BufWriter::new(io::stdout().lock());
    let summary = linespec_tables::compile(&input, &mut out)
        .wrap_err_with(|| format!("compiling {}", args.table.display()))?;
    out.flush()?;

    info!(
        "emitted {} linedef records, skipped {} rows",
        summary.emitted, summary.skipped_rows
    );
    Ok(())
}
