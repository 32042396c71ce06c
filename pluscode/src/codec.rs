//! Conversion between coordinates and Plus Codes.
//!
//! Coordinates are converted to integers once, up front, and every digit is
//! then derived with integer arithmetic. This keeps encoding deterministic:
//! the same `(latitude, longitude, length)` always produces the same code,
//! regardless of how floating point rounding would have played out digit by
//! digit.
//!
//! # Grid Layout
//!
//! - The first 10 digits are five pairs, each pair refining latitude and
//!   longitude by a factor of 20
//! - Digits beyond 10 each refine a 5 row by 4 column grid

use crate::area::CodeArea;
use crate::code::PlusCode;
use crate::error::{PlusCodeError, Result};
use crate::validate::{digit_symbol, digit_value, PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION};

/// Minimum number of digits in a code.
pub const MIN_DIGIT_COUNT: usize = 2;

/// Maximum number of digits in a code. Longer codes are truncated.
pub const MAX_DIGIT_COUNT: usize = 15;

/// Number of digits encoded as latitude/longitude pairs.
pub const PAIR_CODE_LENGTH: usize = 10;

/// Default code length, roughly a 14 by 14 meter area.
pub const CODE_PRECISION_NORMAL: usize = 10;

/// Code length used when a caller asks for length `0`.
pub const DEFAULT_CODE_LENGTH: usize = CODE_PRECISION_NORMAL;

const GRID_CODE_LENGTH: usize = MAX_DIGIT_COUNT - PAIR_CODE_LENGTH;

pub(crate) const ENCODING_BASE: i64 = 20;
pub(crate) const LATITUDE_MAX: i64 = 90;
pub(crate) const LONGITUDE_MAX: i64 = 180;

const GRID_COLUMNS: i64 = 4;
const GRID_ROWS: i64 = 5;

/// Integer units per degree of latitude: 20^3 * 5^5.
pub const LAT_INTEGER_MULTIPLIER: i64 = 8000 * 3125;

/// Integer units per degree of longitude: 20^3 * 4^5.
pub const LNG_INTEGER_MULTIPLIER: i64 = 8000 * 1024;

/// Place value of the most significant latitude digit, in integer units.
const LAT_MSP_VALUE: i64 = LAT_INTEGER_MULTIPLIER * ENCODING_BASE * ENCODING_BASE;

/// Place value of the most significant longitude digit, in integer units.
const LNG_MSP_VALUE: i64 = LNG_INTEGER_MULTIPLIER * ENCODING_BASE * ENCODING_BASE;

const LAT_RANGE: i64 = 2 * LATITUDE_MAX * LAT_INTEGER_MULTIPLIER;
const LNG_RANGE: i64 = 2 * LONGITUDE_MAX * LNG_INTEGER_MULTIPLIER;

/// Clamp a latitude into `[-90, 90]`.
pub(crate) fn clip_latitude(latitude: f64) -> f64 {
    latitude.clamp(-(LATITUDE_MAX as f64), LATITUDE_MAX as f64)
}

/// Wrap a longitude into `[-180, 180)`.
///
/// Values already in range are returned untouched.
pub(crate) fn normalize_longitude(longitude: f64) -> f64 {
    let max = LONGITUDE_MAX as f64;
    if (-max..max).contains(&longitude) {
        return longitude;
    }
    let wrapped = (longitude + max).rem_euclid(2.0 * max) - max;
    if wrapped >= max {
        wrapped - 2.0 * max
    } else {
        wrapped
    }
}

/// Height in degrees of the cell covered by a code of the given length.
///
/// # Examples
///
/// ```
/// use pluscode::codec::compute_latitude_precision;
///
/// assert_eq!(compute_latitude_precision(2), 20.0);
/// assert_eq!(compute_latitude_precision(4), 1.0);
/// assert!((compute_latitude_precision(10) - 0.000125).abs() < 1e-12);
/// ```
pub fn compute_latitude_precision(code_length: usize) -> f64 {
    let base = ENCODING_BASE as f64;
    if code_length <= PAIR_CODE_LENGTH {
        return base.powi(2 - (code_length / 2) as i32);
    }
    base.powi(-3) / (GRID_ROWS as f64).powi((code_length - PAIR_CODE_LENGTH) as i32)
}

fn to_fixed_point(degrees: f64, multiplier: i64) -> i64 {
    ((degrees * multiplier as f64 * 1e6).round() / 1e6) as i64
}

/// Convert a location to the integer grid used for encoding.
///
/// Latitude is clipped to `[-90, 90]` and longitude wrapped to `[-180, 180)`
/// first. The returned values are offsets from the south-west corner of the
/// world, in units of 1/[`LAT_INTEGER_MULTIPLIER`] and
/// 1/[`LNG_INTEGER_MULTIPLIER`] degrees.
///
/// # Examples
///
/// ```
/// use pluscode::codec::location_to_integers;
///
/// assert_eq!(location_to_integers(-90.0, -180.0), (0, 0));
/// assert_eq!(location_to_integers(0.0, 0.0), (2_250_000_000, 1_474_560_000));
/// ```
pub fn location_to_integers(latitude: f64, longitude: f64) -> (i64, i64) {
    let latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);

    let mut lat_val = to_fixed_point(latitude + LATITUDE_MAX as f64, LAT_INTEGER_MULTIPLIER);
    let mut lng_val = to_fixed_point(longitude + LONGITUDE_MAX as f64, LNG_INTEGER_MULTIPLIER);

    if lat_val >= LAT_RANGE {
        lat_val = LAT_RANGE - 1;
    }
    if lng_val >= LNG_RANGE {
        lng_val -= LNG_RANGE;
    }
    (lat_val, lng_val)
}

fn checked_code_length(code_length: usize) -> Result<usize> {
    let length = match code_length {
        0 => DEFAULT_CODE_LENGTH,
        n => n.min(MAX_DIGIT_COUNT),
    };
    if length < MIN_DIGIT_COUNT || (length < PAIR_CODE_LENGTH && length % 2 == 1) {
        return Err(PlusCodeError::InvalidCodeLength {
            length: code_length,
        });
    }
    Ok(length)
}

/// Encode a location into a Plus Code of the given length.
///
/// A length of `0` selects [`DEFAULT_CODE_LENGTH`]; lengths above
/// [`MAX_DIGIT_COUNT`] are reduced to it. Latitude is clipped and longitude
/// wrapped, so any finite input produces a code.
///
/// # Errors
///
/// Returns [`PlusCodeError::InvalidCodeLength`] if the length is below 2, or
/// odd and below 10.
///
/// # Examples
///
/// ```
/// use pluscode::encode;
///
/// let code = encode(47.0000625, 8.0000625, 10)?;
/// assert_eq!(code.as_str(), "8FVC2222+22");
///
/// let coarse = encode(20.375, 2.775, 6)?;
/// assert_eq!(coarse.as_str(), "7FG49Q00+");
/// # Ok::<(), pluscode::PlusCodeError>(())
/// ```
pub fn encode(latitude: f64, longitude: f64, code_length: usize) -> Result<PlusCode> {
    let code_length = checked_code_length(code_length)?;
    Ok(encode_location(latitude, longitude, code_length))
}

/// Encode an already-integer location into a Plus Code.
///
/// Values outside the grid are brought back into it: latitude is clamped and
/// longitude wrapped, matching what [`location_to_integers`] would produce.
///
/// # Errors
///
/// Returns [`PlusCodeError::InvalidCodeLength`] under the same rules as
/// [`encode`].
pub fn encode_integers(lat_val: i64, lng_val: i64, code_length: usize) -> Result<PlusCode> {
    let code_length = checked_code_length(code_length)?;
    let lat_val = lat_val.clamp(0, LAT_RANGE - 1);
    let lng_val = lng_val.rem_euclid(LNG_RANGE);
    Ok(encode_digits(lat_val, lng_val, code_length))
}

/// Encode with a length that has already been checked.
pub(crate) fn encode_location(latitude: f64, longitude: f64, code_length: usize) -> PlusCode {
    let mut latitude = clip_latitude(latitude);
    // The north pole is not inside any cell, so nudge it into the top row.
    if latitude == LATITUDE_MAX as f64 {
        latitude -= 0.9 * compute_latitude_precision(code_length);
    }
    let (lat_val, lng_val) = location_to_integers(latitude, longitude);
    encode_digits(lat_val, lng_val, code_length)
}

fn encode_digits(mut lat_val: i64, mut lng_val: i64, code_length: usize) -> PlusCode {
    // Digits are produced least significant first and reversed at the end.
    let mut reversed: Vec<u8> = Vec::with_capacity(MAX_DIGIT_COUNT + 1);

    if code_length > PAIR_CODE_LENGTH {
        for _ in 0..GRID_CODE_LENGTH {
            let lat_digit = lat_val % GRID_ROWS;
            let lng_digit = lng_val % GRID_COLUMNS;
            reversed.push(digit_symbol(lat_digit * GRID_COLUMNS + lng_digit));
            lat_val /= GRID_ROWS;
            lng_val /= GRID_COLUMNS;
        }
    } else {
        lat_val /= GRID_ROWS.pow(GRID_CODE_LENGTH as u32);
        lng_val /= GRID_COLUMNS.pow(GRID_CODE_LENGTH as u32);
    }

    for pair in 0..PAIR_CODE_LENGTH / 2 {
        reversed.push(digit_symbol(lng_val % ENCODING_BASE));
        reversed.push(digit_symbol(lat_val % ENCODING_BASE));
        lat_val /= ENCODING_BASE;
        lng_val /= ENCODING_BASE;
        if pair == 0 {
            reversed.push(SEPARATOR as u8);
        }
    }

    let mut code = reversed;
    code.reverse();

    if code_length < SEPARATOR_POSITION {
        code[code_length..SEPARATOR_POSITION].fill(PADDING_CHARACTER as u8);
    }
    code.truncate((code_length + 1).max(SEPARATOR_POSITION + 1));

    PlusCode::from_canonical(code.into_iter().map(char::from).collect())
}

/// Decode a full code into the area it covers.
///
/// # Errors
///
/// Returns [`PlusCodeError::NotFullCode`] for short codes. Recover them
/// against a reference location first.
///
/// # Examples
///
/// ```
/// use pluscode::{decode, PlusCode};
///
/// let area = decode(&PlusCode::new("7FG49Q00+")?)?;
/// assert_eq!(area.length(), 6);
/// assert!((area.south_latitude() - 20.35).abs() < 1e-10);
/// assert!((area.east_longitude() - 2.8).abs() < 1e-10);
/// # Ok::<(), pluscode::PlusCodeError>(())
/// ```
pub fn decode(code: &PlusCode) -> Result<CodeArea> {
    if !code.is_full() {
        return Err(PlusCodeError::NotFullCode {
            code: code.to_string(),
        });
    }
    Ok(decode_digits(code.as_str()))
}

/// Decode the digits of a code, ignoring separator and padding.
///
/// Only the first [`MAX_DIGIT_COUNT`] digits are significant.
pub(crate) fn decode_digits(code: &str) -> CodeArea {
    let digits: Vec<i64> = code
        .bytes()
        .filter_map(digit_value)
        .map(|value| value as i64)
        .take(MAX_DIGIT_COUNT)
        .collect();

    let mut lat_val = -LATITUDE_MAX * LAT_INTEGER_MULTIPLIER;
    let mut lng_val = -LONGITUDE_MAX * LNG_INTEGER_MULTIPLIER;
    let mut lat_place = LAT_MSP_VALUE;
    let mut lng_place = LNG_MSP_VALUE;

    let pair_digits = digits.len().min(PAIR_CODE_LENGTH);
    for pair in digits[..pair_digits].chunks_exact(2) {
        lat_place /= ENCODING_BASE;
        lng_place /= ENCODING_BASE;
        lat_val += pair[0] * lat_place;
        lng_val += pair[1] * lng_place;
    }

    for &digit in digits.iter().skip(PAIR_CODE_LENGTH) {
        lat_place /= GRID_ROWS;
        lng_place /= GRID_COLUMNS;
        lat_val += (digit / GRID_COLUMNS) * lat_place;
        lng_val += (digit % GRID_COLUMNS) * lng_place;
    }

    let lat_mult = LAT_INTEGER_MULTIPLIER as f64;
    let lng_mult = LNG_INTEGER_MULTIPLIER as f64;
    CodeArea::new(
        lat_val as f64 / lat_mult,
        lng_val as f64 / lng_mult,
        (lat_val + lat_place) as f64 / lat_mult,
        (lng_val + lng_place) as f64 / lng_mult,
        digits.len(),
    )
}
