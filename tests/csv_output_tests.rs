#![cfg(feature = "csv")]

//! Integration tests for CSV output validation
//!
//! Exports parsed records through the library API and checks the shape and
//! values of the generated CSV.

use gnss_log_parser::{export_to_csv, parse_log_text, ExportOptions};
use std::fs;
use tempfile::TempDir;

const SAMPLE_LOG: &str = "\
1580000000;$GPGGA,235945.00,5807.0283,N,00936.5200,E,1,08,0.9,10.0,M,41.5,M,,*5C
1580000000;$GPRMC,235945.00,A,5807.0283,N,00936.5200,E,0.25,54.7,250120,,*2F
1580000000;$GPVTG,54.7,T,34.4,M,5.5,N,10.2,K*48
1580000001;$GPGSA,A,3,04,05,09,12,,,,,,,,,2.5,1.3,2.1*39
1580000001;$GPGSV,3,1,11,03,03,111,00,04,15,270,00,06,01,010,00,13,06,292,00*74
";

fn export_sample(temp_dir: &TempDir) -> String {
    let log_path = temp_dir.path().join("track.txt");
    fs::write(&log_path, SAMPLE_LOG).expect("Failed to write sample log");

    let records = parse_log_text(SAMPLE_LOG);
    let out_path = export_to_csv(&records, &log_path, &ExportOptions::default())
        .expect("CSV export should succeed");

    fs::read_to_string(&out_path).expect("Failed to read generated CSV file")
}

#[test]
fn test_csv_field_count_consistency() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv_content = export_sample(&temp_dir);

    let lines: Vec<&str> = csv_content.lines().collect();
    assert!(!lines.is_empty(), "CSV file is empty");

    let header_fields = lines[0].split(',').count();
    for (i, line) in lines.iter().enumerate().skip(1) {
        let field_count = line.split(',').count();
        assert_eq!(
            field_count,
            header_fields,
            "Row {} has {} fields, but header has {} fields. Row content: {}",
            i + 1,
            field_count,
            header_fields,
            line
        );
    }
}

#[test]
fn test_csv_row_per_record() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv_content = export_sample(&temp_dir);

    let lines: Vec<&str> = csv_content.lines().collect();
    assert_eq!(
        lines.len(),
        6,
        "One header row plus one row per parsed record"
    );
    assert!(
        lines[0].starts_with("capture_time,type,latitude,longitude"),
        "Header should lead with the capture time, type and position columns"
    );
}

#[test]
fn test_csv_gga_row_values() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv_content = export_sample(&temp_dir);

    let gga_row: Vec<&str> = csv_content
        .lines()
        .find(|line| line.contains(",GGA,"))
        .expect("GGA row should be present")
        .split(',')
        .collect();

    assert_eq!(gga_row[0], "1580000000");
    assert_eq!(gga_row[1], "GGA");
    let latitude: f64 = gga_row[2].parse().expect("latitude should be numeric");
    let longitude: f64 = gga_row[3].parse().expect("longitude should be numeric");
    assert!((latitude - 58.1171).abs() < 1e-3);
    assert!((longitude - 9.6087).abs() < 1e-3);
    assert_eq!(gga_row[4], "10", "altitude column");
    assert_eq!(gga_row[7], "1", "fix quality column");
    assert_eq!(gga_row[8], "8", "satellite count column");
    assert_eq!(gga_row[9], "0.9", "HDOP column");
}

#[test]
fn test_csv_vtg_row_leaves_position_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let csv_content = export_sample(&temp_dir);

    let vtg_row: Vec<&str> = csv_content
        .lines()
        .find(|line| line.contains(",VTG,"))
        .expect("VTG row should be present")
        .split(',')
        .collect();

    assert_eq!(vtg_row[2], "", "VTG carries no latitude");
    assert_eq!(vtg_row[3], "", "VTG carries no longitude");
    assert_eq!(vtg_row[5], "5.5", "VTG ground speed in knots");
}

#[test]
fn test_csv_empty_records_writes_header_only() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_path = temp_dir.path().join("empty.txt");
    fs::write(&log_path, "").expect("Failed to write empty log");

    let out_path = export_to_csv(&[], &log_path, &ExportOptions::default())
        .expect("CSV export of no records should succeed");

    let content = fs::read_to_string(&out_path).expect("Failed to read generated CSV file");
    assert_eq!(
        content.lines().count(),
        1,
        "Only the header row should be written"
    );
}
