//! End-to-end runs of the batch controller on temporary files.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use protrle::controller::{build_report, run_batch, BatchConfig, OutputTarget};
use protrle::loader::LoadError;

const SEQUENCES: &str = "\
P1\tHuman\t3A2CD
P2\tMouse\t3A2C
bad line without tabs
P3\tYeast\t3X

P4\tFly\tWY2W
";

const COMMANDS: &str = "\
search\t3A
search\tZZZ

diff\tP1\tP2
diff\tX\tY
mode\tp1
frobnicate\tP1
";

fn write_inputs(dir: &Path) -> BatchConfig {
    let sequences = dir.join("sequences.txt");
    let commands = dir.join("commands.txt");
    fs::write(&sequences, SEQUENCES).unwrap();
    fs::write(&commands, COMMANDS).unwrap();
    BatchConfig {
        sequences,
        commands,
        output: OutputTarget::File(dir.join("results.txt")),
    }
}

fn rule() -> String {
    "-".repeat(50)
}

#[test]
fn test_full_report() {
    let dir = TempDir::new().unwrap();
    let config = write_inputs(dir.path());

    let summary = run_batch(&config).unwrap();
    assert_eq!(summary.records_loaded, 3);
    assert_eq!(summary.lines_skipped, 2);

    let report = fs::read_to_string(dir.path().join("results.txt")).unwrap();
    let expected = format!(
        "Genetic Data Analysis Results\n\
         ==============================\n\
         \n\
         001: search\t3A\nHuman P1\nMouse P2\n\n{rule}\n\n\
         002: search\tZZZ\nNOT FOUND\n\n{rule}\n\n\
         003: diff\tP1\tP2\namino-acids difference:\n1\n{rule}\n\n\
         004: diff\tX\tY\namino-acids difference:\nMISSING: X, Y\n{rule}\n\n\
         005: mode\tp1\namino-acid occurs:\nA 3\n{rule}\n\n\
         006: frobnicate\tP1\nUnknown command\n{rule}\n\n",
        rule = rule()
    );
    assert_eq!(report, expected);
}

#[test]
fn test_crlf_inputs() {
    let dir = TempDir::new().unwrap();
    let mut config = write_inputs(dir.path());
    fs::write(&config.sequences, "P1\tHuman\t3A\r\n").unwrap();
    fs::write(&config.commands, "mode\tP1\r\n").unwrap();
    config.output = OutputTarget::Stdout;

    let (report, summary) = build_report(&config).unwrap();
    assert_eq!(summary.records_loaded, 1);
    assert!(report.contains("001: mode\tP1\namino-acid occurs:\nA 3\n"));
}

#[test]
fn test_missing_sequence_file_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut config = write_inputs(dir.path());
    config.sequences = dir.path().join("absent.txt");

    let err = run_batch(&config).unwrap_err();
    let load_err = err.downcast_ref::<LoadError>().unwrap();
    assert!(matches!(load_err, LoadError::NotFound { .. }));
    assert!(load_err.to_string().contains("absent.txt"));
    assert!(!dir.path().join("results.txt").exists());
}

#[test]
fn test_missing_command_file_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut config = write_inputs(dir.path());
    config.commands = dir.path().join("absent.txt");

    assert!(run_batch(&config).is_err());
    assert!(!dir.path().join("results.txt").exists());
}
