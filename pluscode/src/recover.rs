//! Restoring short codes to full codes.

use crate::code::PlusCode;
use crate::codec::{
    clip_latitude, decode_digits, encode_location, normalize_longitude, ENCODING_BASE,
    LATITUDE_MAX, PAIR_CODE_LENGTH,
};
use crate::validate::SEPARATOR_POSITION;

/// Recover the full code nearest to a reference location.
///
/// The digits missing from a short code are taken from the reference, then
/// the result is shifted by one cell of the missing precision if that lands
/// closer to the reference. Shifts that would cross a pole are skipped.
///
/// Full codes are returned unchanged.
///
/// # Examples
///
/// ```
/// use pluscode::{recover, PlusCode};
///
/// let short = PlusCode::new("9QCJ+2VX")?;
/// let full = recover(&short, 51.3708675, -1.217765625);
/// assert_eq!(full.as_str(), "9C3W9QCJ+2VX");
/// # Ok::<(), pluscode::PlusCodeError>(())
/// ```
pub fn recover(code: &PlusCode, latitude: f64, longitude: f64) -> PlusCode {
    if code.is_full() {
        return code.clone();
    }

    let latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);

    let missing = SEPARATOR_POSITION - code.separator_offset();
    // Size in degrees of the area the missing digits would pin down.
    let precision = (ENCODING_BASE as f64).powi(2 - (missing / 2) as i32);
    let half = precision / 2.0;

    let reference = encode_location(latitude, longitude, PAIR_CODE_LENGTH);
    let candidate = format!("{}{}", &reference.as_str()[..missing], code.as_str());
    let area = decode_digits(&candidate);

    let mut center_latitude = area.center_latitude();
    let mut center_longitude = area.center_longitude();
    let max_latitude = LATITUDE_MAX as f64;

    let latitude_diff = center_latitude - latitude;
    if latitude_diff > half && center_latitude - precision >= -max_latitude {
        center_latitude -= precision;
    } else if latitude_diff < -half && center_latitude + precision <= max_latitude {
        center_latitude += precision;
    }

    let longitude_diff = center_longitude - longitude;
    if longitude_diff > half {
        center_longitude -= precision;
    } else if longitude_diff < -half {
        center_longitude += precision;
    }

    encode_location(center_latitude, center_longitude, area.length())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shorten::shorten;

    fn code(s: &str) -> PlusCode {
        PlusCode::new(s).unwrap()
    }

    #[test]
    fn test_full_code_unchanged() {
        let full = code("9C3W9QCJ+2VX");
        assert_eq!(recover(&full, 0.0, 0.0), full);
    }

    #[test]
    fn test_recover_shortened_codes() {
        let full = code("9C3W9QCJ+2VX");
        let references = [
            (51.3701125, -1.217765625),
            (51.3708675, -1.217765625),
            (51.3693575, -1.217765625),
            (51.3701125, -1.218520625),
            (51.3852125, -1.217765625),
            (51.3701125, -1.202665625),
            (51.0, -1.0),
        ];
        for (lat, lng) in references {
            let short = shorten(&full, lat, lng).unwrap();
            assert_eq!(recover(&short, lat, lng), full, "ref ({lat}, {lng})");
        }
    }

    #[test]
    fn test_recover_across_cell_boundary() {
        let full = code("8FJFW222+");
        assert_eq!(recover(&code("22+"), 42.899, 9.012), full);
        let full = code("796RXG22+");
        assert_eq!(recover(&code("22+"), 14.95125, -23.5001), full);
    }

    #[test]
    fn test_recover_near_poles() {
        assert_eq!(
            recover(&code("XXXXXX+XX"), -81.0, 0.0).as_str(),
            "2CXXXXXX+XX"
        );
        assert_eq!(
            recover(&code("2222+22"), 89.6, 0.0).as_str(),
            "CFX22222+22"
        );
    }

    #[test]
    fn test_recover_keeps_grid_digits() {
        let recovered = recover(&code("CJ+2VXGJ"), 51.3701135, -1.217765);
        assert_eq!(recovered.digit_count(), 13);
        assert!(recovered.as_str().starts_with("9C3W9QCJ+2VX"));
    }
}
