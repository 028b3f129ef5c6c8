//! Synthetic CSV test-data generator
//!
//! Produces CSV files with a mix of numeric, date, and string columns,
//! including fields that embed commas and newlines, to exercise the
//! projector's quoting paths at realistic sizes.

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use clap::Parser;
use humansize::{format_size, BINARY};
use projector::RecordWriter;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "csvgen")]
#[command(about = "Generate large synthetic CSV test data", long_about = None)]
#[command(version)]
struct Args {
    /// Number of rows to generate
    #[arg(long, default_value_t = 1_000_000)]
    rows: u64,

    /// Number of columns
    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// Output file name
    #[arg(long, default_value = "test_data.csv")]
    output: String,

    /// Target file size in GB (overrides --rows)
    #[arg(long, value_name = "GB")]
    size_gb: Option<f64>,

    /// RNG seed for reproducible data
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the confirmation prompt for very large row counts
    #[arg(long)]
    force: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // A size target overrides the row count, using the same rough
    // bytes-per-row estimate the size report uses
    let rows = match args.size_gb {
        Some(gb) => {
            let target_bytes = gb * 1024.0 * 1024.0 * 1024.0;
            let rows = (target_bytes / bytes_per_row(args.cols) as f64) as u64;
            info!("calculated {} rows for {} GB file", rows, gb);
            rows
        }
        None => args.rows,
    };

    info!(
        "estimated file size: {}",
        format_size(rows * bytes_per_row(args.cols), BINARY)
    );

    if rows > 10_000_000 && !args.force && !confirm(rows)? {
        info!("cancelled");
        return Ok(());
    }

    info!(
        "generating {} rows with {} columns into {}",
        rows, args.cols, args.output
    );
    generate(&args, rows)?;

    let actual = fs::metadata(&args.output)
        .with_context(|| format!("Failed to stat output file: {}", args.output))?
        .len();
    info!("generation completed: actual file size {}", format_size(actual, BINARY));

    Ok(())
}

/// Rough average bytes per row, used for size estimates and targets
fn bytes_per_row(cols: usize) -> u64 {
    cols as u64 * 20 + 50
}

/// Ask before generating very large files
fn confirm(rows: u64) -> Result<bool> {
    eprint!("This will generate {} rows. Continue? (y/N): ", rows);
    io::stderr().flush()?;
    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    Ok(response.trim().eq_ignore_ascii_case("y"))
}

fn generate(args: &Args, rows: u64) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create output file: {}", args.output))?;
    let mut writer = RecordWriter::new(BufWriter::new(file));

    let headers: Vec<String> = (0..args.cols).map(|i| format!("col_{:03}", i)).collect();
    writer.write_record(&headers)?;

    let start_date = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid start date");
    let end_date = NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid end date");
    let date_span = (end_date - start_date).num_days() as u64;

    for row_num in 0..rows {
        if row_num > 0 && row_num % 100_000 == 0 {
            info!("progress: {} rows generated", row_num);
        }

        let record: Vec<String> = (0..args.cols)
            .map(|col| gen_field(&mut rng, col, row_num, start_date, date_span))
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Generate one field value. The first six columns carry fixed
/// patterns (row number, date, integer, float, comma-bearing string,
/// newline-bearing string); the rest are random alphanumerics.
fn gen_field(
    rng: &mut fastrand::Rng,
    col: usize,
    row_num: u64,
    start_date: NaiveDate,
    date_span: u64,
) -> String {
    match col {
        0 => (row_num + 1).to_string(),
        1 => {
            let date = start_date
                .checked_add_days(Days::new(rng.u64(0..date_span)))
                .expect("date within generation range");
            date.format("%Y-%m-%d").to_string()
        }
        2 => rng.u64(1..=1_000_000).to_string(),
        3 => format!("{:.2}", rng.f64() * 1000.0),
        4 => {
            // 10% of values embed a comma to exercise quoting
            let text = gen_string(rng, 20);
            if rng.f64() < 0.1 {
                format!("{}, with comma", text)
            } else {
                text
            }
        }
        5 => {
            // 5% embed a newline
            let text = gen_string(rng, 15);
            if rng.f64() < 0.05 {
                format!("{}\nwith newline", text)
            } else {
                text
            }
        }
        _ => gen_string(rng, 15),
    }
}

fn gen_string(rng: &mut fastrand::Rng, len: usize) -> String {
    let charset = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    (0..len)
        .map(|_| charset[rng.usize(0..charset.len())] as char)
        .collect()
}
