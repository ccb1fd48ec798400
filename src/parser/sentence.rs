//! Per-type sentence field extraction
//!
//! Each extractor takes the comma-split tokens of one sentence (the
//! talker+sentence code at index 0, data fields following at their NMEA 0183
//! positions) and fills a typed record. Extraction never fails as a whole:
//! a field that is missing, truncated, or malformed is set to `None` and the
//! remaining fields are still attempted.

use crate::parser::fields::{
    field_char, field_coordinate, field_f64, field_i32, field_str, field_u32, field_u8,
};
use crate::types::{
    GgaData, GsaData, GsvData, GsvSatellite, MessageType, RmcData, SentenceData, VtgData,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Drop the `*XX` checksum suffix and split the sentence on commas.
fn split_sentence(sentence: &str) -> Vec<&str> {
    let body = sentence.split('*').next().unwrap_or(sentence);
    body.split(',').collect()
}

/// Parse one raw NMEA sentence into typed field data.
///
/// Returns `None` only for sentence codes outside the supported set; for a
/// supported code the result always carries a record, with unparseable
/// fields nulled out individually.
pub fn parse_sentence(sentence: &str) -> Option<SentenceData> {
    let fields = split_sentence(sentence);
    let code = fields.first()?.trim().trim_start_matches('$');
    let message_type = MessageType::from_sentence_code(code)?;

    let data = match message_type {
        MessageType::Rmc => SentenceData::Rmc(parse_rmc(&fields)),
        MessageType::Gga => SentenceData::Gga(parse_gga(&fields)),
        MessageType::Vtg => SentenceData::Vtg(parse_vtg(&fields)),
        MessageType::Gsa => SentenceData::Gsa(parse_gsa(&fields)),
        MessageType::Gsv => SentenceData::Gsv(parse_gsv(&fields)),
    };
    Some(data)
}

/// Combine an RMC `DDMMYY` date and `HHMMSS.ffffff` time of day into a UTC
/// timestamp. Years are offset from 2000. Either string being malformed
/// yields `None`; a partial timestamp is never produced.
pub fn combined_datetime(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let day: u32 = date.get(0..2)?.parse().ok()?;
    let month: u32 = date.get(2..4)?.parse().ok()?;
    let year: i32 = date.get(4..6)?.parse().ok()?;
    if date.len() != 6 {
        return None;
    }

    let (whole, fraction) = match time.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (time, None),
    };
    if whole.len() != 6 {
        return None;
    }
    let hour: u32 = whole.get(0..2)?.parse().ok()?;
    let minute: u32 = whole.get(2..4)?.parse().ok()?;
    let second: u32 = whole.get(4..6)?.parse().ok()?;
    let micros: u32 = match fraction {
        Some(digits) => format!("{:0<6}", digits).get(0..6)?.parse().ok()?,
        None => 0,
    };

    let date = NaiveDate::from_ymd_opt(2000 + year, month, day)?;
    let time = NaiveTime::from_hms_micro_opt(hour, minute, second, micros)?;
    Some(Utc.from_utc_datetime(&NaiveDateTime::new(date, time)))
}

pub fn parse_rmc(fields: &[&str]) -> RmcData {
    let time = field_str(fields, 1);
    let date = field_str(fields, 9);
    let datetime = match (&date, &time) {
        (Some(date), Some(time)) => combined_datetime(date, time),
        _ => None,
    };

    RmcData {
        status: field_char(fields, 2),
        latitude: field_coordinate(fields, 3, 4),
        longitude: field_coordinate(fields, 5, 6),
        speed_knots: field_f64(fields, 7),
        course: field_f64(fields, 8),
        time,
        date,
        magnetic_variation: field_f64(fields, 10),
        variation_direction: field_char(fields, 11),
        datetime,
    }
}

pub fn parse_gga(fields: &[&str]) -> GgaData {
    GgaData {
        time: field_str(fields, 1),
        latitude: field_coordinate(fields, 2, 3),
        longitude: field_coordinate(fields, 4, 5),
        // Absent or non-numeric quality counts as no fix
        fix_quality: field_u8(fields, 6).unwrap_or(0),
        satellites_in_use: field_u32(fields, 7),
        hdop: field_f64(fields, 8),
        altitude: field_f64(fields, 9),
        geoid_separation: field_f64(fields, 11),
        dgps_age: field_f64(fields, 13),
        dgps_station: field_str(fields, 14),
    }
}

pub fn parse_vtg(fields: &[&str]) -> VtgData {
    VtgData {
        true_track: field_f64(fields, 1),
        magnetic_track: field_f64(fields, 3),
        speed_knots: field_f64(fields, 5),
        speed_kmh: field_f64(fields, 7),
    }
}

pub fn parse_gsa(fields: &[&str]) -> GsaData {
    // Fields 3..=14 are the 12 PRN slots; empty slots are simply not kept
    let mut satellites = Vec::new();
    for index in 3..15 {
        if let Some(prn) = field_u32(fields, index) {
            satellites.push(prn);
        }
    }

    GsaData {
        mode: field_char(fields, 1),
        fix_type: field_u8(fields, 2),
        satellites,
        pdop: field_f64(fields, 15),
        hdop: field_f64(fields, 16),
        vdop: field_f64(fields, 17),
    }
}

pub fn parse_gsv(fields: &[&str]) -> GsvData {
    let mut satellites = Vec::new();
    for group in 0..4 {
        let base = 4 + group * 4;
        let satellite = GsvSatellite {
            prn: field_u32(fields, base),
            elevation: field_i32(fields, base + 1),
            azimuth: field_u32(fields, base + 2),
            snr: field_u32(fields, base + 3),
        };
        if satellite.is_populated() {
            satellites.push(satellite);
        }
    }

    GsvData {
        total_messages: field_u32(fields, 1),
        message_number: field_u32(fields, 2),
        satellites_in_view: field_u32(fields, 3),
        satellites,
    }
}
