//! Export functionality for parsed track logs
//!
//! Contains functions for exporting capture log data to various formats:
//! raw GGA/RMC sentence extraction, flattened CSV, and JSON track dumps.

use crate::parser::line::{sentence_code, split_log_line};
use crate::types::MessageType;
use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "csv")]
use crate::types::{CaptureRecord, SentenceData};

#[cfg(feature = "json")]
use crate::types::Track;

/// Export options for controlling output formats
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub extract: bool,
    pub csv: bool,
    pub json: bool,
    pub output_dir: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            extract: false,
            csv: false,
            json: false,
            output_dir: None,
        }
    }
}

/// Output directory for an input file: the configured directory when set,
/// otherwise the input's parent. Created if missing.
fn resolve_output_dir(input_path: &Path, options: &ExportOptions) -> Result<PathBuf> {
    let output_dir = match options.output_dir {
        Some(ref dir) => PathBuf::from(dir),
        None => input_path.parent().unwrap_or(Path::new(".")).to_path_buf(),
    };

    if !output_dir.exists() {
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("Failed to create output directory: {output_dir:?}"))?;
    }

    Ok(output_dir)
}

fn output_path(input_path: &Path, options: &ExportOptions, extension: &str) -> Result<PathBuf> {
    let base_name = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("track");
    Ok(resolve_output_dir(input_path, options)?.join(format!("{base_name}.{extension}")))
}

/// Extract the raw GGA and RMC sentences from a capture log.
///
/// Writes the sentence text only (capture timestamp prefix dropped), one
/// per line in input order, to `<stem>.nmea` next to the input or in the
/// configured output directory. Returns the path written.
pub fn extract_track(input_path: &Path, options: &ExportOptions) -> Result<PathBuf> {
    let text = std::fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read track log: {input_path:?}"))?;

    let out_path = output_path(input_path, options, "nmea")?;
    let file = File::create(&out_path)
        .with_context(|| format!("Failed to create extract file: {out_path:?}"))?;
    let mut writer = BufWriter::new(file);

    for line in text.lines() {
        let Some(log_line) = split_log_line(line) else {
            continue;
        };
        let is_position = sentence_code(log_line.sentence)
            .and_then(MessageType::from_sentence_code)
            .is_some_and(|t| matches!(t, MessageType::Gga | MessageType::Rmc));
        if is_position {
            writeln!(writer, "{}", log_line.sentence)?;
        }
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush extract file: {out_path:?}"))?;

    Ok(out_path)
}

/// Export parsed records as flattened CSV rows to `<stem>.csv`.
///
/// One row per record: capture time, message type, and the position/fix
/// columns. Fields a record does not carry are left empty.
#[cfg(feature = "csv")]
pub fn export_to_csv(
    records: &[CaptureRecord],
    input_path: &Path,
    options: &ExportOptions,
) -> Result<PathBuf> {
    fn opt_f64(value: Option<f64>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    fn opt_u32(value: Option<u32>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    let out_path = output_path(input_path, options, "csv")?;
    let mut writer = csv::Writer::from_path(&out_path)
        .with_context(|| format!("Failed to create CSV file: {out_path:?}"))?;

    writer.write_record([
        "capture_time",
        "type",
        "latitude",
        "longitude",
        "altitude",
        "speed_knots",
        "course",
        "fix_quality",
        "satellites",
        "hdop",
    ])?;

    for record in records {
        let capture_time = record.capture_time.to_string();
        let message_type = record.message_type().as_str();
        let row = match &record.data {
            SentenceData::Rmc(rmc) => [
                opt_f64(rmc.latitude),
                opt_f64(rmc.longitude),
                String::new(),
                opt_f64(rmc.speed_knots),
                opt_f64(rmc.course),
                String::new(),
                String::new(),
                String::new(),
            ],
            SentenceData::Gga(gga) => [
                opt_f64(gga.latitude),
                opt_f64(gga.longitude),
                opt_f64(gga.altitude),
                String::new(),
                String::new(),
                gga.fix_quality.to_string(),
                opt_u32(gga.satellites_in_use),
                opt_f64(gga.hdop),
            ],
            SentenceData::Vtg(vtg) => [
                String::new(),
                String::new(),
                String::new(),
                opt_f64(vtg.speed_knots),
                opt_f64(vtg.true_track),
                String::new(),
                String::new(),
                String::new(),
            ],
            SentenceData::Gsa(gsa) => [
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                gsa.fix_sat_count().to_string(),
                opt_f64(gsa.hdop),
            ],
            SentenceData::Gsv(gsv) => [
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                opt_u32(gsv.satellites_in_view),
                String::new(),
            ],
        };

        let mut full_row = vec![capture_time, message_type.to_string()];
        full_row.extend(row);
        writer.write_record(&full_row)?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush CSV file: {out_path:?}"))?;

    Ok(out_path)
}

/// Serialize a grouped track to `<stem>.track.json`. Returns the path
/// written.
#[cfg(feature = "json")]
pub fn export_to_json(track: &Track, input_path: &Path, options: &ExportOptions) -> Result<PathBuf> {
    let out_path = output_path(input_path, options, "track.json")?;
    let file = File::create(&out_path)
        .with_context(|| format!("Failed to create JSON file: {out_path:?}"))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, track)
        .with_context(|| format!("Failed to serialize track to: {out_path:?}"))?;
    writeln!(writer)?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush JSON file: {out_path:?}"))?;

    Ok(out_path)
}
