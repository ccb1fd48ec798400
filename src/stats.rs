//! Bookkeeping over parser output
//!
//! Message-type occurrence counting and capture-time grouping. Pure
//! aggregation, no parsing of its own beyond recognizing the sentence code
//! of each line.

use crate::parser::line::{sentence_code, split_log_line};
use crate::types::{CaptureRecord, MessageStats, Track};

/// Short message code of a sentence, talker prefix dropped.
///
/// A five-character talker+sentence code like `GPGGA` counts as `GGA`;
/// anything else is counted under the code as written.
fn message_code(code: &str) -> &str {
    if code.len() == 5 {
        &code[2..]
    } else {
        code
    }
}

/// Count message-type occurrences across raw log text.
///
/// Every line carrying a sentence contributes to the count of its code,
/// whether or not the type is one the parser extracts fields for. Lines
/// without a sentence are skipped.
pub fn count_message_types(text: &str) -> MessageStats {
    let mut stats = MessageStats::new();
    for line in text.lines() {
        let Some(log_line) = split_log_line(line) else {
            continue;
        };
        if let Some(code) = sentence_code(log_line.sentence) {
            stats.record(message_code(code));
        }
    }
    stats
}

/// Group parsed records by capture timestamp.
pub fn build_track(records: Vec<CaptureRecord>) -> Track {
    let mut track = Track::new();
    for record in records {
        track.insert(record);
    }
    track
}
