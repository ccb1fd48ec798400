//! GNSS Track Log Parser Library
//!
//! A Rust library for parsing logged NMEA 0183 GNSS sentences from capture
//! files. This library provides both in-memory data access and export
//! capabilities.
//!
//! # Features
//!
//! - **`csv`** (default): Enable CSV export functionality
//! - **`cli`** (default): Build the command-line interface binary
//! - **`json`**: Enable track export in JSON format
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Parse a capture log and access the records:
//! ```rust,no_run
//! use gnss_log_parser::parse_log_file;
//! use std::path::Path;
//!
//! let records = parse_log_file(Path::new("track-2020-01-25.txt")).unwrap();
//! println!("Parsed {} records", records.len());
//! for record in &records {
//!     println!("{} at {}", record.message_type().as_str(), record.capture_time);
//! }
//! ```
//!
//! Count message types and extract the position sentences:
//! ```rust,no_run
//! use gnss_log_parser::{count_message_types, extract_track, ExportOptions};
//! use std::path::Path;
//!
//! let text = std::fs::read_to_string("track-2020-01-25.txt").unwrap();
//! let stats = count_message_types(&text);
//! for (code, count) in stats.iter() {
//!     println!("{code}: {count}");
//! }
//!
//! let options = ExportOptions::default();
//! let path = extract_track(Path::new("track-2020-01-25.txt"), &options).unwrap();
//! println!("Extracted to: {}", path.display());
//! ```
//!
//! # Public API
//!
//! ## Parsing Functions
//! - [`parse_log_file`] - Parse a capture log file into records
//! - [`parse_log_text`] - Parse capture log text from memory
//! - [`parse_log_line`] - Parse a single `timestamp;sentence` line
//! - [`parse_sentence`] - Parse a single raw NMEA sentence
//!
//! ## Data Types
//! - [`CaptureRecord`] - One parsed sentence with its capture timestamp
//! - [`SentenceData`] - Typed field data per message type
//! - [`MessageType`] - The supported talker+sentence codes
//! - [`Track`] - Records grouped by capture timestamp
//! - [`MessageStats`] - Message-type occurrence counts
//! - [`ExportOptions`] - Configuration for export operations
//!
//! ## Export Functions
//! - [`extract_track`] - Write the raw GGA/RMC sentences to a `.nmea` file
//! - [`export_to_csv`] - Export flattened records to CSV format
//! - [`export_to_json`] - Export a grouped track to JSON format
//!
//! ## Aggregation Functions
//! - [`count_message_types`] - Count message-type occurrences in log text
//! - [`build_track`] - Group parsed records by capture timestamp

// Module declarations
pub mod error;
pub mod export;
pub mod parser;
pub mod stats;
pub mod types;

// Re-export everything from modules for convenience
#[allow(ambiguous_glob_reexports)]
pub use error::*;
#[allow(ambiguous_glob_reexports)]
pub use export::*;
#[allow(ambiguous_glob_reexports)]
pub use parser::*;
#[allow(ambiguous_glob_reexports)]
pub use stats::*;
#[allow(ambiguous_glob_reexports)]
pub use types::*;

// Re-export Result type for convenience
pub use anyhow::Result;
