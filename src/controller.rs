//! Batch controller.
//!
//! Orchestrates one run end to end:
//! - Load and validate the protein records
//! - Read the command file
//! - Build the report in memory
//! - Write the report in a single step
//!
//! Both inputs are read before anything is written, so a missing input file
//! never leaves a partial report behind.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::loader::{load_records_file, read_lines_file};
use crate::report::process_commands;

/// Where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Interprets a command-line value: `-` means stdout.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(arg))
        }
    }
}

/// Inputs and output of one batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Tab-separated protein records
    pub sequences: PathBuf,
    /// Tab-separated commands
    pub commands: PathBuf,
    pub output: OutputTarget,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub records_loaded: usize,
    pub lines_skipped: usize,
    pub command_lines: usize,
}

/// Loads both inputs and returns the rendered report with a run summary.
pub fn build_report(config: &BatchConfig) -> Result<(String, BatchSummary)> {
    let loaded = load_records_file(&config.sequences)
        .with_context(|| format!("Could not load sequences from {}", config.sequences.display()))?;
    info!("Loaded {} valid protein records.", loaded.store.len());

    let commands = read_lines_file(&config.commands)
        .with_context(|| format!("Could not load commands from {}", config.commands.display()))?;
    info!("Loaded {} commands.", commands.len());

    let report = process_commands(&commands, &loaded.store);
    let summary = BatchSummary {
        records_loaded: loaded.store.len(),
        lines_skipped: loaded.skipped.len(),
        command_lines: commands.len(),
    };
    Ok((report, summary))
}

/// Runs a whole batch: load, process, write.
pub fn run_batch(config: &BatchConfig) -> Result<BatchSummary> {
    let (report, summary) = build_report(config)?;

    match &config.output {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(report.as_bytes())?;
            handle.flush()?;
        }
        OutputTarget::File(path) => {
            fs::write(path, &report)
                .with_context(|| format!("Could not write results to {}", path.display()))?;
            info!("Results written to {}", path.display());
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_target_from_arg() {
        assert_eq!(OutputTarget::from_arg("-"), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_arg("results.txt"),
            OutputTarget::File(PathBuf::from("results.txt"))
        );
    }
}
