use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Talker+sentence codes understood by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MessageType {
    Rmc,
    Gga,
    Vtg,
    Gsa,
    Gsv,
}

impl MessageType {
    /// Map a talker+sentence code (e.g. "GPGGA", already stripped of `$`)
    /// to a supported message type. Codes outside the supported set return
    /// `None` and are ignored by callers.
    pub fn from_sentence_code(code: &str) -> Option<Self> {
        match code {
            "GPRMC" => Some(MessageType::Rmc),
            "GPGGA" => Some(MessageType::Gga),
            "GPVTG" => Some(MessageType::Vtg),
            "GPGSA" => Some(MessageType::Gsa),
            "GPGSV" => Some(MessageType::Gsv),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Rmc => "RMC",
            MessageType::Gga => "GGA",
            MessageType::Vtg => "VTG",
            MessageType::Gsa => "GSA",
            MessageType::Gsv => "GSV",
        }
    }
}

/// Recommended minimum navigation data from RMC sentences
///
/// Coordinates are signed decimal degrees. `datetime` is the UTC timestamp
/// combined from the `date` and `time` strings; it is `None` unless both
/// strings are well formed.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RmcData {
    /// Receiver status, 'A' = valid, 'V' = void
    pub status: Option<char>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub speed_knots: Option<f64>,
    pub course: Option<f64>,
    /// Time of day as logged, `HHMMSS.ffffff`
    pub time: Option<String>,
    /// Date as logged, `DDMMYY`
    pub date: Option<String>,
    pub magnetic_variation: Option<f64>,
    pub variation_direction: Option<char>,
    pub datetime: Option<DateTime<Utc>>,
}

/// Fix data from GGA sentences
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GgaData {
    pub time: Option<String>,
    /// Fix quality (0 = invalid, 1 = GPS, 2 = DGPS, ...); 0 when the token
    /// is absent or non-numeric, never null
    pub fix_quality: u8,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Altitude above mean sea level in meters
    pub altitude: Option<f64>,
    pub satellites_in_use: Option<u32>,
    pub hdop: Option<f64>,
    pub geoid_separation: Option<f64>,
    /// Age of differential data in seconds
    pub dgps_age: Option<f64>,
    pub dgps_station: Option<String>,
}

/// Course and ground speed data from VTG sentences
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VtgData {
    pub true_track: Option<f64>,
    pub magnetic_track: Option<f64>,
    pub speed_knots: Option<f64>,
    pub speed_kmh: Option<f64>,
}

/// Active satellite and DOP data from GSA sentences
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GsaData {
    /// Selection mode, 'A' = automatic, 'M' = manual
    pub mode: Option<char>,
    /// 1 = no fix, 2 = 2D, 3 = 3D
    pub fix_type: Option<u8>,
    /// PRNs of satellites used in the fix; only populated slots, never
    /// padded to the 12 positions the sentence reserves
    pub satellites: Vec<u32>,
    pub pdop: Option<f64>,
    pub hdop: Option<f64>,
    pub vdop: Option<f64>,
}

impl GsaData {
    /// Number of satellites actually used in the fix
    pub fn fix_sat_count(&self) -> usize {
        self.satellites.len()
    }
}

/// One satellite entry from a GSV sentence
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GsvSatellite {
    pub prn: Option<u32>,
    /// Elevation in degrees
    pub elevation: Option<i32>,
    /// Azimuth in degrees from true north
    pub azimuth: Option<u32>,
    /// Signal-to-noise ratio in dB, absent while not tracking
    pub snr: Option<u32>,
}

impl GsvSatellite {
    fn is_empty(&self) -> bool {
        self.prn.is_none() && self.elevation.is_none() && self.azimuth.is_none() && self.snr.is_none()
    }

    pub(crate) fn is_populated(&self) -> bool {
        !self.is_empty()
    }
}

/// Satellites-in-view data from GSV sentences
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GsvData {
    pub total_messages: Option<u32>,
    pub message_number: Option<u32>,
    pub satellites_in_view: Option<u32>,
    /// Up to four satellites carried by this sentence
    pub satellites: Vec<GsvSatellite>,
}

/// Typed field data of one parsed sentence
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SentenceData {
    Rmc(RmcData),
    Gga(GgaData),
    Vtg(VtgData),
    Gsa(GsaData),
    Gsv(GsvData),
}

impl SentenceData {
    pub fn message_type(&self) -> MessageType {
        match self {
            SentenceData::Rmc(_) => MessageType::Rmc,
            SentenceData::Gga(_) => MessageType::Gga,
            SentenceData::Vtg(_) => MessageType::Vtg,
            SentenceData::Gsa(_) => MessageType::Gsa,
            SentenceData::Gsv(_) => MessageType::Gsv,
        }
    }
}

/// One parsed sentence tied to the capture timestamp the logger assigned
/// when the sentence was received. Created once per input line and never
/// updated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CaptureRecord {
    /// Epoch seconds from the log line, 0 when the timestamp field is
    /// missing or non-numeric
    pub capture_time: u64,
    pub data: SentenceData,
}

impl CaptureRecord {
    pub fn message_type(&self) -> MessageType {
        self.data.message_type()
    }
}
