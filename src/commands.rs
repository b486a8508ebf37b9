//! Analysis commands.
//!
//! A command line is tab-separated: the operation keyword followed by its
//! arguments.
//!
//! ```text
//! search<TAB>3A2C
//! diff<TAB>P1<TAB>P2
//! mode<TAB>P1
//! ```
//!
//! The operations are pure functions of a [`RecordStore`]; turning their
//! results into report text is done by [`crate::report`].

use std::collections::BTreeMap;
use std::fmt;

use crate::model::{Record, RecordStore};
use crate::rle;

/// The operation named by a command's first field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Find records whose sequence contains a (run-length encoded) fragment
    Search,
    /// Count differing residues between two proteins
    Diff,
    /// Most frequent amino acid of a protein
    Mode,
    /// Any other keyword, lowercased
    Unknown(String),
}

impl Operation {
    /// Parses an operation keyword, ignoring case and surrounding whitespace.
    pub fn parse(keyword: &str) -> Self {
        match keyword.trim().to_lowercase().as_str() {
            "search" => Operation::Search,
            "diff" => Operation::Diff,
            "mode" => Operation::Mode,
            other => Operation::Unknown(other.to_string()),
        }
    }

    /// Number of arguments the operation needs.
    pub fn required_arguments(&self) -> usize {
        match self {
            Operation::Search | Operation::Mode => 1,
            Operation::Diff => 2,
            Operation::Unknown(_) => 0,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Search => write!(f, "search"),
            Operation::Diff => write!(f, "diff"),
            Operation::Mode => write!(f, "mode"),
            Operation::Unknown(keyword) => write!(f, "{}", keyword),
        }
    }
}

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub operation: Operation,
    /// Remaining fields, trimmed
    pub arguments: Vec<String>,
}

impl Command {
    /// Parses a command line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        if line.trim().is_empty() {
            return None;
        }

        let mut fields = line.split('\t');
        let operation = Operation::parse(fields.next().unwrap_or_default());
        let arguments = fields.map(|f| f.trim().to_string()).collect();

        Some(Self {
            operation,
            arguments,
        })
    }

    /// Returns true if enough arguments were given for the operation.
    pub fn has_required_arguments(&self) -> bool {
        self.arguments.len() >= self.operation.required_arguments()
    }

    fn argument(&self, index: usize) -> &str {
        self.arguments.get(index).map(String::as_str).unwrap_or_default()
    }

    /// Runs the command against a store.
    ///
    /// Returns `None` when a known operation is missing arguments; such lines
    /// produce no output of their own.
    pub fn execute<'a>(&self, store: &'a RecordStore) -> Option<Analysis<'a>> {
        if !self.has_required_arguments() {
            return None;
        }

        let analysis = match &self.operation {
            Operation::Search => Analysis::Search(search(store, &rle::decode(self.argument(0)))),
            Operation::Diff => Analysis::Diff(diff(store, self.argument(0), self.argument(1))),
            Operation::Mode => Analysis::Mode(mode(store, self.argument(0))),
            Operation::Unknown(_) => Analysis::Unknown,
        };
        Some(analysis)
    }
}

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis<'a> {
    /// Matching records in store order (empty when nothing matched)
    Search(Vec<&'a Record>),
    Diff(DiffOutcome),
    Mode(ModeOutcome),
    Unknown,
}

/// Result of comparing two proteins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    Distance(usize),
    /// Names not found in the store, first protein before second
    Missing(Vec<String>),
}

/// Result of looking for the most frequent amino acid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeOutcome {
    /// `residue` is `None` only for an empty sequence
    Found { residue: Option<char>, count: usize },
    Missing(String),
}

/// Returns every record whose sequence contains `fragment` (case-sensitive).
pub fn search<'a>(store: &'a RecordStore, fragment: &str) -> Vec<&'a Record> {
    store
        .all()
        .iter()
        .filter(|record| record.sequence.contains(fragment))
        .collect()
}

/// Compares two proteins by name.
pub fn diff(store: &RecordStore, first: &str, second: &str) -> DiffOutcome {
    match (store.find_by_protein(first), store.find_by_protein(second)) {
        (Some(a), Some(b)) => DiffOutcome::Distance(sequence_distance(&a.sequence, &b.sequence)),
        (a, b) => {
            let mut missing = Vec::with_capacity(2);
            if a.is_none() {
                missing.push(first.to_string());
            }
            if b.is_none() {
                missing.push(second.to_string());
            }
            DiffOutcome::Missing(missing)
        }
    }
}

/// Finds the most frequent amino acid of a protein.
pub fn mode(store: &RecordStore, protein: &str) -> ModeOutcome {
    match store.find_by_protein(protein) {
        Some(record) => match most_frequent_residue(&record.sequence) {
            Some((residue, count)) => ModeOutcome::Found {
                residue: Some(residue),
                count,
            },
            None => ModeOutcome::Found {
                residue: None,
                count: 0,
            },
        },
        None => ModeOutcome::Missing(protein.to_string()),
    }
}

/// Mismatches over the common prefix plus the length difference.
///
/// This is not an edit distance: an insertion near the start shifts every
/// following residue and counts as a mismatch at each position.
pub fn sequence_distance(a: &str, b: &str) -> usize {
    let mismatches = a.chars().zip(b.chars()).filter(|(x, y)| x != y).count();
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    mismatches + len_a.abs_diff(len_b)
}

/// Most frequent character and its count. Ties go to the smallest character.
pub fn most_frequent_residue(sequence: &str) -> Option<(char, usize)> {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for c in sequence.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    // Ascending order, so only a strictly larger count replaces the best
    counts
        .into_iter()
        .fold(None, |best, (c, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((c, count)),
        })
}
