//! Log line classification and dispatch
//!
//! Capture logs carry one sentence per line, `<ts>;<sentence>` in most
//! files and `<index>;<ts>;<sentence>` in older logger variants. Both are
//! accepted: the sentence is the last `;` field that starts with `$`, the
//! capture timestamp the numeric field just before it.

use crate::error::NmeaError;
use crate::parser::sentence::parse_sentence;
use crate::types::CaptureRecord;

/// One split log line, borrowed from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLine<'a> {
    /// Epoch seconds assigned by the logger, 0 when missing or non-numeric
    pub capture_time: u64,
    pub sentence: &'a str,
}

/// Split a raw log line into capture timestamp and sentence text.
///
/// Returns `None` when the line has no `$`-prefixed sentence field. A bare
/// sentence line (no timestamp prefix at all) is accepted with a capture
/// timestamp of 0, so extracted `.nmea` files can be fed back in.
pub fn split_log_line(line: &str) -> Option<LogLine<'_>> {
    let parts: Vec<&str> = line.trim().split(';').map(str::trim).collect();
    let position = parts.iter().rposition(|part| part.starts_with('$'))?;

    let capture_time = if position > 0 {
        parts[position - 1].parse().unwrap_or(0)
    } else {
        0
    };

    Some(LogLine {
        capture_time,
        sentence: parts[position],
    })
}

/// Talker+sentence code of a raw sentence, stripped of `$` and checksum.
pub fn sentence_code(sentence: &str) -> Option<&str> {
    let token = sentence.split(',').next().unwrap_or(sentence);
    let code = token.split('*').next().unwrap_or(token).strip_prefix('$')?;
    if code.is_empty() {
        None
    } else {
        Some(code)
    }
}

/// Parse one log line into a capture record, reporting why a line was not
/// usable. [`parse_log_line`] is the skip-silently variant most callers
/// want; this one feeds diagnostics in debug output and tooling.
pub fn classify_log_line(line: &str) -> crate::error::Result<CaptureRecord> {
    let log_line =
        split_log_line(line).ok_or_else(|| NmeaError::InvalidLine(line.trim().to_string()))?;
    let data = parse_sentence(log_line.sentence)
        .ok_or_else(|| NmeaError::UnknownSentence(log_line.sentence.to_string()))?;

    Ok(CaptureRecord {
        capture_time: log_line.capture_time,
        data,
    })
}

/// Parse one log line into a capture record.
///
/// Lines that do not split into the timestamp;sentence shape and sentences
/// of unsupported types yield `None`; callers skip them without recording
/// anything.
pub fn parse_log_line(line: &str) -> Option<CaptureRecord> {
    classify_log_line(line).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MessageType, SentenceData};

    const GGA: &str = "$GPGGA,235945.00,5807.0283,N,00936.5200,E,1,08,0.9,10.0,M,41.5,M,,*5C";

    #[test]
    fn test_split_two_field_line() {
        let line = format!("1580000000;{}", GGA);
        let log_line = split_log_line(&line).unwrap();
        assert_eq!(log_line.capture_time, 1580000000);
        assert_eq!(log_line.sentence, GGA);
    }

    #[test]
    fn test_split_three_field_line() {
        let line = format!("42;1580000000;{}", GGA);
        let log_line = split_log_line(&line).unwrap();
        assert_eq!(log_line.capture_time, 1580000000);
        assert_eq!(log_line.sentence, GGA);
    }

    #[test]
    fn test_split_bare_sentence() {
        let log_line = split_log_line(GGA).unwrap();
        assert_eq!(log_line.capture_time, 0);
        assert_eq!(log_line.sentence, GGA);
    }

    #[test]
    fn test_non_numeric_timestamp_defaults_to_zero() {
        let line = format!("not-a-number;{}", GGA);
        assert_eq!(split_log_line(&line).unwrap().capture_time, 0);
    }

    #[test]
    fn test_line_without_sentence_is_rejected() {
        assert!(split_log_line("1580000000;").is_none());
        assert!(split_log_line("").is_none());
        assert!(split_log_line("just some text").is_none());
    }

    #[test]
    fn test_sentence_code() {
        assert_eq!(sentence_code(GGA), Some("GPGGA"));
        assert_eq!(sentence_code("$GPRMC"), Some("GPRMC"));
        assert_eq!(sentence_code("$"), None);
        assert_eq!(sentence_code("GPGGA,1,2"), None);
    }

    #[test]
    fn test_parse_log_line_dispatch() {
        let record = parse_log_line(&format!("1580000000;{}", GGA)).unwrap();
        assert_eq!(record.capture_time, 1580000000);
        assert_eq!(record.message_type(), MessageType::Gga);
        match record.data {
            SentenceData::Gga(gga) => assert_eq!(gga.fix_quality, 1),
            other => panic!("expected GGA data, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_log_line_skips_unknown_types() {
        assert!(parse_log_line("1580000000;$GPGLL,5807.0283,N,00936.5200,E,235945.00,A*26").is_none());
    }

    #[test]
    fn test_classify_log_line_errors() {
        match classify_log_line("no sentence here") {
            Err(NmeaError::InvalidLine(_)) => {}
            other => panic!("expected InvalidLine, got {:?}", other),
        }
        match classify_log_line("1580000000;$GPZDA,235945.00,25,01,2020,00,00*66") {
            Err(NmeaError::UnknownSentence(_)) => {}
            other => panic!("expected UnknownSentence, got {:?}", other),
        }
    }
}
