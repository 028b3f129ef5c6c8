use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use projector::{FieldSelection, Projector};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read};
use tracing::debug;

/// Select and reorder CSV columns
#[derive(Parser, Debug)]
#[command(name = "csvcut")]
#[command(about = "Select and reorder CSV columns by 1-based index", long_about = None)]
#[command(version, disable_version_flag = true)]
struct Args {
    /// Input CSV file (standard input if omitted or "-")
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Comma-separated 1-based column indices, e.g. "2,1,4".
    /// Omitted or "0" passes all columns through unchanged.
    #[arg(short, long, value_name = "LIST")]
    fields: Option<String>,

    /// Print version information and exit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber with environment filter.
    // Set RUST_LOG to control the log level; --verbose defaults it
    // to debug instead of warn. Logs go to stderr so stdout stays
    // clean CSV output.
    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    // Invalid selections are configuration errors, reported before
    // any row is read
    let selection = match args.fields.as_deref() {
        Some(list) => FieldSelection::parse(list)?,
        None => FieldSelection::All,
    };
    debug!("field selection: {:?}", selection);

    let input = open_input(args.input.as_deref())?;
    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());

    let count = Projector::new(selection).run(input, output)?;
    debug!("wrote {} records", count);

    Ok(())
}

/// Open the input source: a file path, or stdin for "-" or no argument
fn open_input(path: Option<&str>) -> Result<Box<dyn Read>> {
    match path {
        None | Some("-") => Ok(Box::new(io::stdin().lock())),
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}
