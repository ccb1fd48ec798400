//! CLI binary for the GNSS track log parser
//!
//! Reads capture log files (`<timestamp>;<sentence>` lines), parses the
//! supported NMEA sentences, and optionally extracts or exports them.

use anyhow::Result;
use clap::{Arg, Command};
use glob::glob;
use gnss_log_parser::{count_message_types, extract_track, parse_log_text, ExportOptions};
use std::path::{Path, PathBuf};

#[cfg(feature = "csv")]
use gnss_log_parser::export_to_csv;

#[cfg(feature = "json")]
use gnss_log_parser::{build_track, export_to_json};

fn build_command() -> Command {
    Command::new("GNSS Log Parser")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read and parse logged NMEA 0183 track files. Prints statistics, extracts position sentences, exports to CSV/JSON.")
        .arg(
            Arg::new("files")
                .help("Track log files to parse (.txt, .log, .nmea extensions supported, case-insensitive, supports globbing)")
                .required(false)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and echo every sentence as it is read")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for output files (default: same as input file)")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("extract")
                .long("extract")
                .help("Extract the raw GGA/RMC position sentences to a .nmea file")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .help("Export parsed records to a CSV file")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Export the track, grouped by capture timestamp, to a JSON file")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .help("Print message-type occurrence counts per file")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Expand input arguments to a list of candidate files. Literal file paths
/// are taken as-is, anything else is treated as a glob pattern.
fn expand_input_patterns(patterns: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        match glob(pattern) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    if entry.is_file() {
                        files.push(entry);
                    }
                }
            }
            Err(e) => eprintln!("Warning: Invalid glob pattern '{pattern}': {e}"),
        }
    }
    files
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext_lower = ext.to_ascii_lowercase();
            ext_lower == "txt" || ext_lower == "log" || ext_lower == "nmea"
        })
        .unwrap_or(false)
}

fn process_file(
    path: &Path,
    export_options: &ExportOptions,
    print_stats: bool,
    debug: bool,
) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read track log {path:?}: {e}"))?;

    if debug {
        for line in text.lines() {
            println!("{line}");
        }
    }

    let records = parse_log_text(&text);
    println!(
        "Parsed {} records from {} lines",
        records.len(),
        text.lines().count()
    );

    if print_stats {
        let stats = count_message_types(&text);
        println!("Message statistics:");
        for (code, count) in stats.iter() {
            println!("  {code}: {count}");
        }
    }

    if export_options.extract {
        let out_path = extract_track(path, export_options)?;
        println!("Extracted track to: {}", out_path.display());
    }

    #[cfg(feature = "csv")]
    if export_options.csv {
        let out_path = export_to_csv(&records, path, export_options)?;
        println!("Exported records to: {}", out_path.display());
    }
    #[cfg(not(feature = "csv"))]
    if export_options.csv {
        eprintln!("Warning: CSV export requested but the csv feature is not enabled");
    }

    #[cfg(feature = "json")]
    if export_options.json {
        let track = build_track(records);
        let out_path = export_to_json(&track, path, export_options)?;
        println!("Exported track to: {}", out_path.display());
    }
    #[cfg(not(feature = "json"))]
    if export_options.json {
        eprintln!("Warning: JSON export requested but the json feature is not enabled");
    }

    Ok(())
}

fn main() -> Result<()> {
    let matches = build_command().get_matches();

    let debug = matches.get_flag("debug");
    let print_stats = matches.get_flag("stats");

    // Check if no files were provided and show help
    let file_patterns: Vec<String> = match matches.get_many::<String>("files") {
        Some(files) => files.cloned().collect(),
        None => {
            build_command().print_help()?;
            println!();
            return Ok(());
        }
    };

    let export_options = ExportOptions {
        extract: matches.get_flag("extract"),
        csv: matches.get_flag("csv"),
        json: matches.get_flag("json"),
        output_dir: matches.get_one::<String>("output-dir").cloned(),
    };

    if debug {
        println!("Input patterns: {file_patterns:?}");
    }

    let input_files = expand_input_patterns(&file_patterns);
    if input_files.is_empty() {
        eprintln!("Error: No files found in the specified input paths.");
        std::process::exit(1);
    }

    // Collect all valid file paths
    let mut valid_paths = Vec::new();
    for path in input_files {
        if !path.exists() {
            eprintln!("Warning: File does not exist: {path:?}");
            continue;
        }

        if !has_supported_extension(&path) {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("none");
            eprintln!("Warning: Skipping file with unsupported extension '{ext}': {path:?}");
            continue;
        }

        valid_paths.push(path);
    }

    if valid_paths.is_empty() {
        eprintln!("Error: No valid files found to process.");
        eprintln!("Supported extensions: .txt, .log, .nmea (case-insensitive)");
        eprintln!("Input patterns were: {file_patterns:?}");
        std::process::exit(1);
    }

    let mut processed_files = 0;
    for (index, path) in valid_paths.iter().enumerate() {
        if index > 0 {
            println!();
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        println!("Processing: {filename}");

        match process_file(path, &export_options, print_stats, debug) {
            Ok(()) => processed_files += 1,
            Err(e) => {
                eprintln!("Error processing {filename}: {e}");
                eprintln!("Continuing with next file...");
            }
        }
    }

    if processed_files == 0 {
        eprintln!(
            "Error: No files were successfully processed out of {} files found.",
            valid_paths.len()
        );
        eprintln!("Use --debug for more detailed information.");
        std::process::exit(1);
    }

    Ok(())
}
