//! protrle - Protein Sequence Batch Analyzer
//!
//! Runs a command file against run-length encoded protein records.
//!
//! ## Usage
//!
//! ```bash
//! protrle sequences.txt commands.txt               # writes results.txt
//! protrle sequences.txt commands.txt -o -          # report to stdout
//! protrle --decode 3A2CD                           # prints AAACCD
//! protrle --encode AAACCD                          # prints 3ACCD
//! ```
//!
//! ## Commands
//!
//! - `search<TAB>fragment`: records containing the (encoded) fragment
//! - `diff<TAB>protein1<TAB>protein2`: residue differences
//! - `mode<TAB>protein`: most frequent amino acid
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` for per-line detail.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use protrle::controller::{run_batch, BatchConfig, OutputTarget};
use protrle::rle;

/// Batch analysis of run-length encoded protein sequences
#[derive(Parser, Debug)]
#[command(name = "protrle")]
#[command(version)]
#[command(about = "Search, compare and summarize run-length encoded protein sequences")]
struct Args {
    /// Protein records: protein<TAB>organism<TAB>encoded_sequence
    #[arg(required_unless_present_any = ["decode", "encode"])]
    sequences: Option<PathBuf>,

    /// Commands: search, diff or mode followed by tab-separated arguments
    #[arg(required_unless_present_any = ["decode", "encode"])]
    commands: Option<PathBuf>,

    /// Report file. Use "-" for stdout.
    #[arg(short = 'o', long = "output", default_value = "results.txt")]
    output: String,

    /// Decode a run-length encoded sequence, print it and exit
    #[arg(long = "decode", value_name = "ENCODED", conflicts_with = "encode")]
    decode: Option<String>,

    /// Encode a sequence, print it and exit
    #[arg(long = "encode", value_name = "SEQUENCE")]
    encode: Option<String>,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Some(encoded) = args.decode {
        if encoded.trim().is_empty() {
            anyhow::bail!("Invalid input. Sequence cannot be empty.");
        }
        println!("{}", rle::decode(encoded.trim()));
        return Ok(());
    }

    if let Some(sequence) = args.encode {
        println!("{}", rle::encode(sequence.trim()));
        return Ok(());
    }

    let (Some(sequences), Some(commands)) = (args.sequences, args.commands) else {
        anyhow::bail!("Both a sequence file and a command file are required");
    };

    let config = BatchConfig {
        sequences,
        commands,
        output: OutputTarget::from_arg(&args.output),
    };

    let summary = run_batch(&config)?;
    if summary.lines_skipped > 0 {
        warn!("{} sequence lines were skipped", summary.lines_skipped);
    }
    info!("Processing completed successfully.");

    Ok(())
}
