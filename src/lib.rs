//! # protrle - Protein Sequence Batch Analyzer
//!
//! Loads run-length encoded protein records, runs a file of analysis commands
//! against them and writes a text report.
//!
//! ## Architecture
//!
//! A single linear pass with clear separation:
//! - `rle`: run-length codec for amino acid sequences
//! - `model`: protein records and the read-only record store
//! - `loader`: tab-separated record parsing and validation
//! - `commands`: command parsing and the search / diff / mode operations
//! - `report`: per-command evaluation and report formatting
//! - `controller`: orchestration of load, process and write

pub mod commands;
pub mod controller;
pub mod loader;
pub mod model;
pub mod report;
pub mod rle;
