//! Open Location Code ("Plus Code") decoding
//!
//! Decodes full Plus Codes (e.g. `6GFRP38F+F2`) to the grid cell they name.
//! Only decoding is implemented; the resolution pipeline never needs to
//! encode. Short codes (separator before position 8) require a reference
//! location to recover and are rejected as malformed.

use crate::coord::Coordinates;
use crate::error::{Error, Result};

/// Valid code digits, in value order (0-19)
const ALPHABET: &str = "23456789CFGHJMPQRVWX";

/// Separates the area code from the local code
const SEPARATOR: char = '+';

/// Position of the separator in a full code
const SEPARATOR_POSITION: usize = 8;

/// Padding character for truncated area codes
const PADDING: char = '0';

/// Digits up to this length come in lat/lng pairs; beyond it each digit
/// refines a 4x5 grid
const PAIR_CODE_LENGTH: usize = 10;

/// Codes longer than this carry no extra precision
const MAX_CODE_LENGTH: usize = 15;

/// Rows and columns of the refinement grid
const GRID_ROWS: usize = 5;
const GRID_COLUMNS: usize = 4;

/// The rectangular area a code decodes to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeArea {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl CodeArea {
    /// Center point of the area
    pub fn center(&self) -> Coordinates {
        Coordinates::new(
            ((self.south + self.north) / 2.0).min(90.0),
            ((self.west + self.east) / 2.0).min(180.0),
        )
    }
}

/// Decode a full Plus Code to its area
///
/// Returns an error for anything structurally invalid: missing or
/// misplaced separator, padding after the separator, characters outside
/// the code alphabet, or too few digits.
pub fn decode(code: &str) -> Result<CodeArea> {
    let code = code.trim().to_uppercase();

    let separator_index = code
        .find(SEPARATOR)
        .ok_or_else(|| Error::PlusCode(format!("Missing '+' separator in '{}'", code)))?;

    if code.rfind(SEPARATOR) != Some(separator_index) {
        return Err(Error::PlusCode(format!("Multiple separators in '{}'", code)));
    }
    if separator_index != SEPARATOR_POSITION {
        return Err(Error::PlusCode(format!(
            "'{}' is not a full code (separator at {}, expected {})",
            code, separator_index, SEPARATOR_POSITION
        )));
    }
    if let Some(first_padding) = code.find(PADDING) {
        // Padding must run contiguously up to the separator, with no
        // digits after it
        let terminal = first_padding < separator_index
            && code[first_padding..separator_index]
                .chars()
                .all(|c| c == PADDING)
            && code.len() == separator_index + 1;
        if !terminal {
            return Err(Error::PlusCode(format!(
                "Non-terminal padding in '{}'",
                code
            )));
        }
    }

    let digits: Vec<usize> = code
        .chars()
        .filter(|&c| c != SEPARATOR && c != PADDING)
        .map(|c| {
            ALPHABET
                .find(c)
                .ok_or_else(|| Error::PlusCode(format!("Invalid digit '{}' in '{}'", c, code)))
        })
        .collect::<Result<_>>()?;

    if digits.len() < 2 {
        return Err(Error::PlusCode(format!("Code '{}' is too short", code)));
    }

    let mut south = -90.0;
    let mut west = -180.0;
    // Resolution of the *next* pair digit is this divided by 20
    let mut lat_resolution = 400.0;
    let mut lng_resolution = 400.0;

    for (i, &value) in digits.iter().take(MAX_CODE_LENGTH).enumerate() {
        if i < PAIR_CODE_LENGTH {
            if i % 2 == 0 {
                lat_resolution /= 20.0;
                south += value as f64 * lat_resolution;
            } else {
                lng_resolution /= 20.0;
                west += value as f64 * lng_resolution;
            }
        } else {
            lat_resolution /= GRID_ROWS as f64;
            lng_resolution /= GRID_COLUMNS as f64;
            south += (value / GRID_COLUMNS) as f64 * lat_resolution;
            west += (value % GRID_COLUMNS) as f64 * lng_resolution;
        }
    }

    Ok(CodeArea {
        south,
        west,
        north: south + lat_resolution,
        east: west + lng_resolution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_all_lowest_digits() {
        // "2" is digit zero everywhere, so the cell hugs the SW corner of
        // the coordinate space: south = -90, west = -180, cell 0.000125 wide
        let area = decode("22222222+22").unwrap();
        assert!((area.south - (-90.0)).abs() < 1e-10);
        assert!((area.west - (-180.0)).abs() < 1e-10);

        let center = area.center();
        assert!((center.lat - (-89.9999375)).abs() < 1e-9);
        assert!((center.lng - (-179.9999375)).abs() < 1e-9);
    }

    #[test]
    fn test_decode_ascending_digits() {
        // Digit values 0..9 interleaved lat/lng, computed by hand:
        // lat: 0*20 + 2*1 + 4*0.05 + 6*0.0025 + 8*0.000125 above -90
        // lng: 1*20 + 3*1 + 5*0.05 + 7*0.0025 + 9*0.000125 above -180
        let center = decode("23456789+CF").unwrap().center();
        assert!((center.lat - (-87.7839375)).abs() < 1e-9);
        assert!((center.lng - (-156.7313125)).abs() < 1e-9);
    }

    #[test]
    fn test_decode_nakuru_code() {
        // Encodes the cell containing (-0.2838, 36.0725)
        let center = decode("6GFRP38F+F2").unwrap().center();
        assert!((center.lat - (-0.2838125)).abs() < 1e-9);
        assert!((center.lng - 36.0725625).abs() < 1e-9);
    }

    #[test]
    fn test_decode_reference_vector() {
        // 8FVC2222+22 names the cell whose SW corner is (47.0, 8.0)
        let area = decode("8FVC2222+22").unwrap();
        assert!((area.south - 47.0).abs() < 1e-10);
        assert!((area.west - 8.0).abs() < 1e-10);

        let center = area.center();
        assert!((center.lat - 47.0000625).abs() < 1e-9);
        assert!((center.lng - 8.0000625).abs() < 1e-9);
    }

    #[test]
    fn test_decode_padded_code() {
        // Terminal padding is valid: the code names a 1x1 degree cell
        let area = decode("6G000000+").unwrap();
        assert!((area.south - (-10.0)).abs() < 1e-10);
        assert!((area.west - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_decode_padding_with_trailing_digits_rejected() {
        // Padding must be terminal; digits after the separator make the
        // code malformed, not a bogus coordinate
        assert!(decode("6GFV0000+22").is_err());
    }

    #[test]
    fn test_decode_non_contiguous_padding_rejected() {
        assert!(decode("6G0V0000+").is_err());
    }

    #[test]
    fn test_decode_is_case_insensitive() {
        let upper = decode("6GFRP38F+F2").unwrap();
        let lower = decode("6gfrp38f+f2").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_decode_short_code_rejected() {
        // Short codes need a reference location; we treat them as malformed
        assert!(decode("P3C5+M97").is_err());
    }

    #[test]
    fn test_decode_missing_separator() {
        assert!(decode("6GFRP38FF2").is_err());
    }

    #[test]
    fn test_decode_invalid_digit() {
        // 'A' is not in the code alphabet
        assert!(decode("6GFRP38A+F2").is_err());
    }

    #[test]
    fn test_decode_padding_after_separator() {
        assert!(decode("6GFV0000+00").is_err());
    }
}
