//! Plus Code string classification.
//!
//! This module answers structural questions about a string without decoding
//! it: is it a Plus Code at all, and if so is it short, full or padded.
//!
//! # Code Format
//!
//! - Digits are drawn from [`CODE_ALPHABET`], case-insensitively
//! - Exactly one [`SEPARATOR`] at an even offset no greater than 8
//! - A full code has its separator at offset 8; anything earlier is short
//! - Full codes with fewer than eight leading digits fill the gap with
//!   [`PADDING_CHARACTER`] and end with the separator

use crate::codec::{ENCODING_BASE, LATITUDE_MAX, LONGITUDE_MAX};
use crate::error::{PlusCodeError, Result};

/// The 20 symbols used to encode digits, in ascending value order.
pub const CODE_ALPHABET: &str = "23456789CFGHJMPQRVWX";

/// Separator between the leading digits and the refinement digits.
pub const SEPARATOR: char = '+';

/// Offset of the separator in a full code.
pub const SEPARATOR_POSITION: usize = 8;

/// Character used to pad full codes with fewer than eight digits.
pub const PADDING_CHARACTER: char = '0';

const ALPHABET: &[u8] = CODE_ALPHABET.as_bytes();

/// Value of a single code character, case-insensitively.
///
/// Returns `None` for the separator, padding, and anything outside the alphabet.
pub(crate) fn digit_value(c: u8) -> Option<usize> {
    let upper = c.to_ascii_uppercase();
    ALPHABET.iter().position(|&symbol| symbol == upper)
}

/// Alphabet symbol for a digit value in `0..20`.
pub(crate) fn digit_symbol(value: i64) -> u8 {
    ALPHABET[value as usize]
}

/// Check that a string is a structurally valid Plus Code.
///
/// # Errors
///
/// Returns [`PlusCodeError::InvalidCodeFormat`] naming the first rule the
/// string breaks.
///
/// # Examples
///
/// ```
/// use pluscode::validate::check;
///
/// assert!(check("8FWC2345+G6").is_ok());
/// assert!(check("8FWC2345+G").is_err());
/// ```
pub fn check(code: &str) -> Result<()> {
    let fail = |reason: &'static str| -> Result<()> {
        Err(PlusCodeError::InvalidCodeFormat {
            code: code.to_string(),
            reason,
        })
    };

    if code.len() < 2 {
        return fail("too short");
    }
    if !code.is_ascii() {
        return fail("non-ASCII character");
    }

    let Some(separator) = code.find(SEPARATOR) else {
        return fail("missing separator");
    };
    if code.rfind(SEPARATOR) != Some(separator) {
        return fail("more than one separator");
    }
    if separator % 2 == 1 || separator > SEPARATOR_POSITION {
        return fail("separator in illegal position");
    }

    let bytes = code.as_bytes();

    // The first pair of a full code must stay inside the legal lat/lng range.
    if separator == SEPARATOR_POSITION {
        if let Some(value) = digit_value(bytes[0]) {
            if value as i64 * ENCODING_BASE >= LATITUDE_MAX * 2 {
                return fail("latitude outside range");
            }
        }
        if let Some(value) = digit_value(bytes[1]) {
            if value as i64 * ENCODING_BASE >= LONGITUDE_MAX * 2 {
                return fail("longitude outside range");
            }
        }
    }

    let padding = PADDING_CHARACTER as u8;
    let mut padding_start = None;
    for (i, &c) in bytes[..separator].iter().enumerate() {
        if c == padding {
            if padding_start.is_none() {
                if separator < SEPARATOR_POSITION {
                    return fail("padding in short code");
                }
                if i == 0 || i % 2 == 1 {
                    return fail("padding in illegal position");
                }
                padding_start = Some(i);
            }
        } else if padding_start.is_some() {
            return fail("digit after padding");
        } else if digit_value(c).is_none() {
            return fail("invalid character");
        }
    }

    let suffix = &bytes[separator + 1..];
    if !suffix.is_empty() {
        if padding_start.is_some() {
            return fail("padded code must end with the separator");
        }
        if suffix.len() == 1 {
            return fail("single character after separator");
        }
        if suffix.iter().any(|&c| digit_value(c).is_none()) {
            return fail("invalid character");
        }
    }

    Ok(())
}

/// Determine if a string is a valid Plus Code, either short or full.
pub fn is_valid(code: &str) -> bool {
    check(code).is_ok()
}

/// Determine if a string is a valid short code.
///
/// A short code has had leading digits removed and needs a reference
/// location to be recovered.
pub fn is_short(code: &str) -> bool {
    is_valid(code) && code.find(SEPARATOR).is_some_and(|i| i < SEPARATOR_POSITION)
}

/// Determine if a string is a valid full code.
pub fn is_full(code: &str) -> bool {
    is_valid(code) && code.find(SEPARATOR) == Some(SEPARATOR_POSITION)
}

/// Determine if a string is a valid code containing padding.
///
/// Only full codes can be padded.
pub fn is_padded(code: &str) -> bool {
    is_valid(code) && code.contains(PADDING_CHARACTER)
}
