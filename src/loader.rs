//! Protein record loader.
//!
//! Reads tab-separated protein records and builds a [`RecordStore`].
//!
//! ## Record Format
//!
//! ```text
//! protein<TAB>organism<TAB>encoded_sequence
//! P1      Human    3A2CD
//! ```
//!
//! The sequence field is run-length decoded (see [`crate::rle`]) and must only
//! contain the 20 standard amino acids. Lines that fail any check are skipped
//! with a diagnostic; they never abort the load. Only a missing or unreadable
//! input file is fatal.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use thiserror::Error;

use crate::model::{is_valid_amino_acid_sequence, Record, RecordStore};
use crate::rle;

/// Errors that abort a whole load.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File {} not found.", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read file: {0}")]
    Io(#[from] io::Error),
}

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Why a single data line was left out of the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("incorrect format. Expected 3 tab-separated parts, got {found}")]
    FieldCount { found: usize },

    #[error("invalid amino acid sequence in {protein}")]
    InvalidSequence { protein: String },
}

/// A skipped data line and the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input
    pub line: usize,
    pub reason: SkipReason,
}

/// Outcome of parsing one non-blank data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Loaded(Record),
    Skipped(SkipReason),
}

/// Everything a load produced: the store plus per-line diagnostics.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub store: RecordStore,
    pub skipped: Vec<SkippedLine>,
}

/// Parses a single data line.
///
/// Returns `None` for blank lines, which are skipped silently.
pub fn parse_record_line(line: &str) -> Option<LineOutcome> {
    if line.trim().is_empty() {
        return None;
    }

    let fields: Vec<&str> = line.split('\t').collect();
    let [protein, organism, encoded] = fields[..] else {
        return Some(LineOutcome::Skipped(SkipReason::FieldCount {
            found: fields.len(),
        }));
    };

    let record = Record::new(protein.trim(), organism.trim(), rle::decode(encoded.trim()));
    if !is_valid_amino_acid_sequence(&record.sequence) {
        return Some(LineOutcome::Skipped(SkipReason::InvalidSequence {
            protein: record.protein,
        }));
    }

    Some(LineOutcome::Loaded(record))
}

/// Loads records from a reader.
///
/// Lines are processed independently. Invalid UTF-8 is replaced with U+FFFD,
/// so a bad byte in the sequence field fails validation while one in the
/// protein or organism field is kept. Only an I/O failure of the reader itself
/// is returned as an error.
pub fn load_records<R: BufRead>(reader: R) -> LoadResult<LoadReport> {
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for (index, raw) in reader.split(b'\n').enumerate() {
        let line_number = index + 1;
        let raw = raw?;

        let line = String::from_utf8_lossy(strip_cr(&raw));

        match parse_record_line(&line) {
            None => {}
            Some(LineOutcome::Loaded(record)) => {
                debug!("Line {}: loaded {}", line_number, record.protein);
                records.push(record);
            }
            Some(LineOutcome::Skipped(reason)) => {
                warn!("Line {} {}. Skipping.", line_number, reason);
                skipped.push(SkippedLine {
                    line: line_number,
                    reason,
                });
            }
        }
    }

    Ok(LoadReport {
        store: RecordStore::new(records),
        skipped,
    })
}

/// Loads records from in-memory content.
///
/// Useful for testing or processing in-memory data.
pub fn load_records_str(content: &str) -> LoadReport {
    // Reading from a byte slice cannot fail
    load_records(content.as_bytes()).unwrap_or_default()
}

/// Loads records from a sequence file.
///
/// # Examples
///
/// ```no_run
/// use protrle::loader::load_records_file;
///
/// let report = load_records_file("sequences.txt").unwrap();
/// println!("Loaded {} valid protein records", report.store.len());
/// ```
pub fn load_records_file<P: AsRef<Path>>(path: P) -> LoadResult<LoadReport> {
    let file = open_input(path.as_ref())?;
    load_records(BufReader::new(file))
}

/// Reads every line of a text file, e.g. a command file.
///
/// Invalid UTF-8 is replaced rather than rejected so each line can still be
/// echoed in the report.
pub fn read_lines_file<P: AsRef<Path>>(path: P) -> LoadResult<Vec<String>> {
    let file = open_input(path.as_ref())?;
    let mut lines = Vec::new();
    for raw in BufReader::new(file).split(b'\n') {
        let raw = raw?;
        lines.push(String::from_utf8_lossy(strip_cr(&raw)).into_owned());
    }
    Ok(lines)
}

fn open_input(path: &Path) -> LoadResult<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io(e),
    })
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}
