use crate::parser::line::parse_log_line;
use crate::types::CaptureRecord;
use crate::Result;
use anyhow::Context;
use std::path::Path;

/// Parse a capture log file and return all records in input order.
pub fn parse_log_file(file_path: &Path) -> Result<Vec<CaptureRecord>> {
    let text = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read track log: {:?}", file_path))?;
    Ok(parse_log_text(&text))
}

/// Parse capture log text, one record per usable line.
///
/// Lines that cannot be classified contribute nothing; parse order does not
/// affect any individual line, so the result is simply input order.
pub fn parse_log_text(text: &str) -> Vec<CaptureRecord> {
    text.lines().filter_map(parse_log_line).collect()
}
