//! Permissive field access over split sentence tokens
//!
//! Every accessor returns `Option`: an index past the end of the sentence
//! and a token that fails to convert both come back as `None`, so one bad
//! field never aborts extraction of the remaining fields.

/// Raw string field, `None` when out of range or empty
pub fn field_str(fields: &[&str], index: usize) -> Option<String> {
    let token = fields.get(index)?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

pub fn field_f64(fields: &[&str], index: usize) -> Option<f64> {
    fields.get(index)?.trim().parse().ok()
}

pub fn field_i32(fields: &[&str], index: usize) -> Option<i32> {
    fields.get(index)?.trim().parse().ok()
}

pub fn field_u32(fields: &[&str], index: usize) -> Option<u32> {
    fields.get(index)?.trim().parse().ok()
}

pub fn field_u8(fields: &[&str], index: usize) -> Option<u8> {
    fields.get(index)?.trim().parse().ok()
}

/// Single-character field such as a hemisphere or mode indicator
pub fn field_char(fields: &[&str], index: usize) -> Option<char> {
    let token = fields.get(index)?.trim();
    let mut chars = token.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        None
    } else {
        Some(first)
    }
}

/// Convert an NMEA `DDDMM.MMMM` coordinate to signed decimal degrees.
///
/// Degrees are the integer part of value/100, minutes the remainder;
/// decimal degrees = degrees + minutes/60. 'N' and 'E' are positive,
/// 'S' and 'W' (and anything else) negative.
pub fn coordinate_degrees(value: f64, hemisphere: char) -> f64 {
    let degrees = (value / 100.0).trunc();
    let minutes = value - degrees * 100.0;
    let decimal = degrees + minutes / 60.0;
    match hemisphere {
        'N' | 'E' => decimal,
        _ => -decimal,
    }
}

/// Coordinate plus hemisphere as a field pair; both tokens must parse for
/// a signed value to come out.
pub fn field_coordinate(fields: &[&str], value_index: usize, hemisphere_index: usize) -> Option<f64> {
    let raw = field_f64(fields, value_index)?;
    let hemisphere = field_char(fields, hemisphere_index)?;
    Some(coordinate_degrees(raw, hemisphere))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_degrees_north() {
        let lat = coordinate_degrees(5807.0283, 'N');
        assert!((lat - 58.117138).abs() < 1e-5);
    }

    #[test]
    fn test_coordinate_degrees_east() {
        let lon = coordinate_degrees(936.5200, 'E');
        assert!((lon - 9.608667).abs() < 1e-5);
    }

    #[test]
    fn test_coordinate_degrees_south_is_negative() {
        let lat = coordinate_degrees(5807.0283, 'S');
        assert!(lat < 0.0);
        assert!((lat + 58.117138).abs() < 1e-5);
    }

    #[test]
    fn test_coordinate_degrees_west_is_negative() {
        // Symmetric with the hemisphere handling for latitude
        let lon = coordinate_degrees(936.5200, 'W');
        assert!((lon + 9.608667).abs() < 1e-5);
    }

    #[test]
    fn test_field_access_out_of_range() {
        let fields = ["$GPVTG", "54.7"];
        assert_eq!(field_f64(&fields, 1), Some(54.7));
        assert_eq!(field_f64(&fields, 7), None);
        assert_eq!(field_str(&fields, 7), None);
        assert_eq!(field_char(&fields, 7), None);
    }

    #[test]
    fn test_field_access_malformed() {
        let fields = ["$GPGGA", "abc", "", "NN"];
        assert_eq!(field_f64(&fields, 1), None);
        assert_eq!(field_u32(&fields, 1), None);
        assert_eq!(field_str(&fields, 2), None);
        assert_eq!(field_char(&fields, 2), None);
        assert_eq!(field_char(&fields, 3), None);
    }

    #[test]
    fn test_field_coordinate_requires_both_tokens() {
        let fields = ["$GPGGA", "5807.0283", "N", "00936.5200", ""];
        assert!(field_coordinate(&fields, 1, 2).is_some());
        assert_eq!(field_coordinate(&fields, 3, 4), None);
    }
}
