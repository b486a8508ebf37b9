//! Data model for protein records.
//!
//! This module contains:
//! - `Record`: one protein entry with its decoded amino acid sequence
//! - `RecordStore`: the ordered, read-only collection the commands query

/// The 20 standard amino acids, in one-letter code.
pub const AMINO_ACIDS: &str = "ACDEFGHIKLMNPQRSTVWY";

/// Returns true if every character is a standard amino acid (case-insensitive).
///
/// An empty sequence is valid.
pub fn is_valid_amino_acid_sequence(sequence: &str) -> bool {
    sequence
        .chars()
        .all(|c| AMINO_ACIDS.contains(c.to_ascii_uppercase()))
}

/// A single protein entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Protein identifier
    pub protein: String,
    /// Source organism
    pub organism: String,
    /// Decoded amino acid sequence, stored with its original case
    pub sequence: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(
        protein: impl Into<String>,
        organism: impl Into<String>,
        sequence: impl Into<String>,
    ) -> Self {
        Self {
            protein: protein.into(),
            organism: organism.into(),
            sequence: sequence.into(),
        }
    }

    /// Returns true if this record's protein identifier matches `name`,
    /// ignoring case.
    pub fn is_protein(&self, name: &str) -> bool {
        eq_ignore_case(&self.protein, name)
    }
}

/// Character-by-character comparison with a one-to-one case fold.
///
/// Characters whose uppercase form is more than one character (`ß`) only
/// match themselves, so `straße` never equals `STRASSE`.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| fold_case(x) == fold_case(y))
}

fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Ordered collection of validated records.
///
/// Built once from the loader's output and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Creates a store from records in load order.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Finds a record by protein identifier (case-insensitive exact match).
    ///
    /// With duplicate identifiers the first record in load order wins.
    pub fn find_by_protein(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.is_protein(name))
    }

    /// All records, in load order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> RecordStore {
        RecordStore::new(vec![
            Record::new("P1", "Human", "AAABBC"),
            Record::new("p2", "Mouse", "AAABB"),
            Record::new("P1", "Yeast", "WWW"),
        ])
    }

    #[test]
    fn test_valid_amino_acids() {
        assert!(is_valid_amino_acid_sequence("ACDEFGHIKLMNPQRSTVWY"));
        assert!(is_valid_amino_acid_sequence("acdefghiklmnpqrstvwy"));
        assert!(is_valid_amino_acid_sequence(""));
    }

    #[test]
    fn test_invalid_amino_acids() {
        assert!(!is_valid_amino_acid_sequence("XXX"));
        assert!(!is_valid_amino_acid_sequence("ACB"));
        assert!(!is_valid_amino_acid_sequence("AC3"));
        assert!(!is_valid_amino_acid_sequence("A C"));
    }

    #[test]
    fn test_find_by_protein_ignores_case() {
        let store = sample_store();
        assert_eq!(store.find_by_protein("P2").unwrap().organism, "Mouse");
        assert_eq!(store.find_by_protein("p1").unwrap().organism, "Human");
        assert!(store.find_by_protein("P3").is_none());
    }

    #[test]
    fn test_find_by_protein_first_duplicate_wins() {
        let store = sample_store();
        assert_eq!(store.find_by_protein("P1").unwrap().sequence, "AAABBC");
    }

    #[test]
    fn test_find_by_protein_is_exact() {
        let store = sample_store();
        assert!(store.find_by_protein("P").is_none());
        assert!(store.find_by_protein("P1 ").is_none());
    }

    #[test]
    fn test_store_preserves_load_order() {
        let store = sample_store();
        let organisms: Vec<&str> = store.all().iter().map(|r| r.organism.as_str()).collect();
        assert_eq!(organisms, ["Human", "Mouse", "Yeast"]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.all()[1].protein, "p2");
    }

    #[test]
    fn test_find_by_protein_unicode_case() {
        let store = RecordStore::new(vec![
            Record::new("STRASSE", "Human", "ACD"),
            Record::new("Ärger", "Mouse", "ACD"),
        ]);
        assert!(store.find_by_protein("straße").is_none());
        assert!(store.find_by_protein("strasse").is_some());
        assert_eq!(store.find_by_protein("äRGER").unwrap().organism, "Mouse");
    }

    #[test]
    fn test_fold_case_is_one_to_one() {
        assert!(eq_ignore_case("straße", "STRAßE"));
        assert!(!eq_ignore_case("ß", "SS"));
        assert!(!eq_ignore_case("P1", "P12"));
    }
}
