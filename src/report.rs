//! Report generation.
//!
//! Runs every command line against a [`RecordStore`] and renders one block
//! per non-blank line:
//!
//! ```text
//! 001: diff	P1	P2
//! amino-acids difference:
//! 1
//! --------------------------------------------------
//!
//! ```
//!
//! A failure while evaluating one command is written into that command's
//! block; the remaining commands are still processed.

use std::fmt::{self, Write};

use log::{debug, warn};
use thiserror::Error;

use crate::commands::{Analysis, Command, DiffOutcome, ModeOutcome};
use crate::model::RecordStore;

/// Title block at the top of every report.
pub const REPORT_TITLE: &str = "Genetic Data Analysis Results";

const TITLE_RULE: &str = "==============================";

/// Width of the rule that closes each command block.
pub const SEPARATOR_WIDTH: usize = 50;

const DIFF_HEADER: &str = "amino-acids difference:";
const MODE_HEADER: &str = "amino-acid occurs:";

/// Errors raised while evaluating a single command.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to format result: {0}")]
    Format(#[from] fmt::Error),
}

/// Result type for command evaluation.
pub type CommandResult<T> = Result<T, CommandError>;

/// Builds the full report for a list of command lines.
///
/// Blank lines are skipped and do not consume a command number.
pub fn process_commands<S: AsRef<str>>(lines: &[S], store: &RecordStore) -> String {
    let mut report = String::new();
    report.push_str(REPORT_TITLE);
    report.push('\n');
    report.push_str(TITLE_RULE);
    report.push_str("\n\n");

    let mut number = 0;
    for line in lines {
        let line = line.as_ref();
        let Some(command) = Command::parse(line) else {
            continue;
        };
        number += 1;
        debug!("Command {:03}: {}", number, command.operation);

        report.push_str(&render_block(number, line, &command, store));
    }

    report
}

/// Renders one command block, including the closing rule.
pub fn render_block(number: usize, line: &str, command: &Command, store: &RecordStore) -> String {
    let mut out = String::new();
    let body = write_analysis(&mut out, command, store).map(|()| out);
    finish_block(number, line, body)
}

/// Assembles a block from an evaluated body. A failed evaluation is reported
/// in place of the body.
pub fn finish_block(number: usize, line: &str, body: CommandResult<String>) -> String {
    let mut block = format!("{:03}: {}\n", number, line);

    match body {
        Ok(body) => block.push_str(&body),
        Err(e) => {
            warn!("Command {:03} failed: {}", number, e);
            block.push_str(&format!("Error processing command: {}", e));
        }
    }

    block.push('\n');
    block.push_str(&"-".repeat(SEPARATOR_WIDTH));
    block.push_str("\n\n");
    block
}

/// Writes the body of one command's block.
pub fn write_analysis<W: Write>(
    out: &mut W,
    command: &Command,
    store: &RecordStore,
) -> CommandResult<()> {
    let Some(analysis) = command.execute(store) else {
        return Ok(());
    };

    match analysis {
        Analysis::Search(matches) if matches.is_empty() => writeln!(out, "NOT FOUND")?,
        Analysis::Search(matches) => {
            for record in matches {
                writeln!(out, "{} {}", record.organism, record.protein)?;
            }
        }
        Analysis::Diff(outcome) => {
            writeln!(out, "{}", DIFF_HEADER)?;
            match outcome {
                DiffOutcome::Distance(distance) => write!(out, "{}", distance)?,
                DiffOutcome::Missing(names) => write!(out, "MISSING: {}", names.join(", "))?,
            }
        }
        Analysis::Mode(outcome) => {
            writeln!(out, "{}", MODE_HEADER)?;
            match outcome {
                ModeOutcome::Found { residue, count } => {
                    write!(out, "{} {}", residue.unwrap_or(' '), count)?
                }
                ModeOutcome::Missing(name) => write!(out, "MISSING: {}", name)?,
            }
        }
        Analysis::Unknown => write!(out, "Unknown command")?,
    }

    Ok(())
}
