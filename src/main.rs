use anyhow::{bail, Result};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::{info, warn};

use battery_pipeline::generator;
use battery_pipeline::io;
use battery_pipeline::pipeline::Deriver;
use battery_pipeline::report::TableSummary;

#[derive(Parser, Debug)]
#[command(name = "battery_pipeline")]
#[command(about = "EV battery telemetry synthesis and health derivation", long_about = None)]
struct Args {
    /// Generate a synthetic raw telemetry table instead of reading one
    #[arg(long)]
    generate: bool,

    /// Number of synthetic records to generate
    #[arg(long, default_value = "500")]
    rows: usize,

    /// RNG seed for reproducible synthetic data
    #[arg(long)]
    seed: Option<u64>,

    /// Input CSV with raw battery telemetry
    #[arg(long, env = "BATTERY_INPUT")]
    input: Option<PathBuf>,

    /// Output CSV with the derived columns appended
    #[arg(long, env = "BATTERY_OUTPUT", default_value = "battery_health_derived.csv")]
    output: PathBuf,

    /// Also write the generated raw table to this CSV
    #[arg(long)]
    raw_output: Option<PathBuf>,

    /// Write the table summary as JSON
    #[arg(long)]
    summary_json: Option<PathBuf>,

    /// Worker threads for the derivation pass (0 = one per core)
    #[arg(long, default_value = "0")]
    threads: usize,

    /// Derive records sequentially instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Hide the progress bar
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("battery_pipeline=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let records = if args.generate {
        let records = generator::generate_records(args.rows, args.seed);
        if let Some(path) = &args.raw_output {
            io::write_raw(path, &records)?;
        }
        records
    } else if let Some(input) = &args.input {
        io::read_records(input)?
    } else {
        bail!("either --generate or --input <FILE> is required");
    };

    if records.is_empty() {
        warn!("input table contains no records");
    }

    let report = Deriver::new()
        .with_workers(args.threads)
        .sequential(args.sequential)
        .show_progress(!args.quiet)
        .run(&records)?;

    io::write_derived(&args.output, &report.derived)?;
    if !report.failures.is_empty() {
        warn!(
            "{} of {} records were rejected; see warnings above",
            report.failures.len(),
            report.total_records()
        );
    }

    let summary = TableSummary::from_records(&report.derived);
    summary.print();
    if let Some(path) = &args.summary_json {
        let file = BufWriter::new(File::create(path)?);
        summary.write_json(file)?;
        info!("Wrote summary JSON to {}", path.display());
    }

    Ok(())
}
