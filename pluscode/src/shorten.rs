//! Removing leading digits from full codes.

use crate::code::PlusCode;
use crate::codec::{compute_latitude_precision, decode};
use crate::error::{PlusCodeError, Result};

/// Most digit pairs that may be removed from a code.
const MAX_REMOVABLE_PAIRS: usize = 4;

/// Fraction of a cell's size the reference may be from the code's center.
/// Must stay below 0.5 for shortened codes to recover to the full code.
const SAFETY_FACTOR: f64 = 0.3;

/// Shorten a full code relative to a reference location.
///
/// As many leading pairs as possible are removed, up to four, provided the
/// reference stays close enough to the code's center that
/// [`crate::recover`] gives back the original.
///
/// # Errors
///
/// - [`PlusCodeError::NotFullCode`] if `code` is already short
/// - [`PlusCodeError::PaddedCodeNotShortenable`] if `code` contains padding
/// - [`PlusCodeError::ReferenceTooFar`] if not even one pair can be removed
///
/// # Examples
///
/// ```
/// use pluscode::{shorten, PlusCode};
///
/// let code = PlusCode::new("9C3W9QCJ+2VX")?;
/// assert_eq!(shorten(&code, 51.3708675, -1.217765625)?.as_str(), "CJ+2VX");
/// assert_eq!(shorten(&code, 51.0, -1.0)?.as_str(), "3W9QCJ+2VX");
/// # Ok::<(), pluscode::PlusCodeError>(())
/// ```
pub fn shorten(code: &PlusCode, latitude: f64, longitude: f64) -> Result<PlusCode> {
    if !code.is_full() {
        return Err(PlusCodeError::NotFullCode {
            code: code.to_string(),
        });
    }
    if code.is_padded() {
        return Err(PlusCodeError::PaddedCodeNotShortenable {
            code: code.to_string(),
        });
    }

    // The reference is compared as given, without clipping or wrapping.
    let area = decode(code)?;
    let range = (latitude - area.center_latitude())
        .abs()
        .max((longitude - area.center_longitude()).abs());

    for pairs in (1..=MAX_REMOVABLE_PAIRS).rev() {
        let removed = pairs * 2;
        // At least one pair of digits has to survive.
        if removed >= code.digit_count() {
            continue;
        }
        if range < compute_latitude_precision(removed) * SAFETY_FACTOR {
            return Ok(PlusCode::from_canonical(code.as_str()[removed..].to_string()));
        }
    }

    Err(PlusCodeError::ReferenceTooFar {
        code: code.to_string(),
        latitude,
        longitude,
    })
}
