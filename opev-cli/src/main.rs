//! Event Table Generator CLI
//!
//! Command-line front end for the opev-gen library: converts an oprofile
//! event description file into a C initializer fragment written next to the
//! input as `<input>.h`, ready for inclusion in a profiler control binary.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Fallback input when no path is given on the command line
const DEFAULT_EVENT_FILE: &str = "events/mips/24K/events";

/// Event Table Generator - Convert oprofile event files to C tables
#[derive(Parser, Debug)]
#[command(name = "opev-cli")]
#[command(about = "Convert oprofile event files into C event tables", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the event file to convert (default: events/mips/24K/events)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Event Table Generator CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using generator library v{}", opev_gen::VERSION);

    let input = args
        .input
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EVENT_FILE));

    let output = opev_gen::generate_to_header(&input)?;
    log::info!("Wrote {}", output.display());

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
