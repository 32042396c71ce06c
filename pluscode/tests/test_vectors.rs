//! Reference vectors shared by Plus Code implementations.

use pluscode::{
    contains, decode, encode, is_full, is_padded, is_short, is_valid, recover, shorten,
    PlusCode, PlusCodeError,
};

const EPSILON: f64 = 1e-10;

fn code(s: &str) -> PlusCode {
    PlusCode::new(s).unwrap()
}

// (code, is_valid, is_short, is_full)
const VALIDITY: &[(&str, bool, bool, bool)] = &[
    ("8FWC2345+G6", true, false, true),
    ("8FWC2345+G6G", true, false, true),
    ("8fwc2345+", true, false, true),
    ("8FWCX400+", true, false, true),
    ("WC2345+G6g", true, true, false),
    ("2345+G6", true, true, false),
    ("45+G6", true, true, false),
    ("+G6", true, true, false),
    ("G+", false, false, false),
    ("+", false, false, false),
    ("8FWC2345+G", false, false, false),
    ("8FWC2_45+G6", false, false, false),
    ("8FWC2η45+G6", false, false, false),
    ("8FWC2345+G6+", false, false, false),
    ("8FWC2300+G6", false, false, false),
    ("WC2300+G6g", false, false, false),
    ("WC2345+G", false, false, false),
];

// (code, latitude, longitude, length)
const ENCODING: &[(&str, f64, f64, usize)] = &[
    ("7FG49Q00+", 20.375, 2.775, 6),
    ("7FG49QCJ+2V", 20.3700625, 2.7821875, 10),
    ("7FG49QCJ+2VX", 20.3701125, 2.782234375, 11),
    ("8FVC2222+22", 47.0000625, 8.0000625, 10),
    ("8FVC2222+22", 47.0, 8.0, 10),
    ("4VCPPQGP+Q9", -41.2730625, 174.7859375, 10),
    ("62G20000+", 0.5, -179.5, 4),
    ("22220000+", -89.5, -179.5, 4),
    ("22220000+", -90.0, -180.0, 4),
    ("7FG40000+", 20.5, 2.5, 4),
    ("22222222+22", -89.9999375, -179.9999375, 10),
    ("6VGX0000+", 0.5, 179.5, 4),
    ("CFX30000+", 90.0, 1.0, 4),
    ("CFX30000+", 92.0, 1.0, 4),
    ("62H20000+", 1.0, 180.0, 4),
    ("62H30000+", 1.0, 181.0, 4),
    ("CFX3X2X2+X2", 90.0, 1.0, 10),
];

// (code, south, west, north, east)
const DECODING: &[(&str, f64, f64, f64, f64)] = &[
    ("7FG49Q00+", 20.35, 2.75, 20.4, 2.8),
    ("7FG49QCJ+2V", 20.37, 2.782125, 20.370125, 2.78225),
    ("7FG49QCJ+2VX", 20.3701, 2.78221875, 20.370125, 2.78225),
    ("7FG49QCJ+2VXGJ", 20.370113, 2.782234375, 20.370114, 2.782236328125),
    ("4VCPPQGP+Q9", -41.273125, 174.785875, -41.273, 174.786),
    ("6VGX0000+", 0.0, 179.0, 1.0, 180.0),
    ("CFX30000+", 89.0, 1.0, 90.0, 2.0),
    ("62H20000+", 1.0, -180.0, 2.0, -179.0),
    ("22222222+22", -90.0, -180.0, -89.999875, -179.999875),
];

// (full code, reference latitude, reference longitude, short code)
const SHORTENING: &[(&str, f64, f64, &str)] = &[
    ("9C3W9QCJ+2VX", 51.3701125, -1.217765625, "+2VX"),
    ("9C3W9QCJ+2VX", 51.3708675, -1.217765625, "CJ+2VX"),
    ("9C3W9QCJ+2VX", 51.3693575, -1.217765625, "CJ+2VX"),
    ("9C3W9QCJ+2VX", 51.3701125, -1.218520625, "CJ+2VX"),
    ("9C3W9QCJ+2VX", 51.3701125, -1.217010625, "CJ+2VX"),
    ("9C3W9QCJ+2VX", 51.3852125, -1.217765625, "9QCJ+2VX"),
    ("9C3W9QCJ+2VX", 51.3550125, -1.217765625, "9QCJ+2VX"),
    ("9C3W9QCJ+2VX", 51.3701125, -1.232865625, "9QCJ+2VX"),
    ("9C3W9QCJ+2VX", 51.3701125, -1.202665625, "9QCJ+2VX"),
    ("9C3W9QCJ+2VX", 51.0, -1.0, "3W9QCJ+2VX"),
    ("8FJFW222+", 42.899, 9.012, "22+"),
    ("796RXG22+", 14.95125, -23.5001, "22+"),
];

#[test]
fn test_validity() {
    for &(input, valid, short, full) in VALIDITY {
        assert_eq!(is_valid(input), valid, "is_valid({input})");
        assert_eq!(is_short(input), short, "is_short({input})");
        assert_eq!(is_full(input), full, "is_full({input})");
        assert_eq!(PlusCode::new(input).is_ok(), valid, "PlusCode::new({input})");
    }
}

#[test]
fn test_encoding() {
    for &(expected, lat, lng, length) in ENCODING {
        let actual = encode(lat, lng, length).unwrap();
        assert_eq!(actual.as_str(), expected, "encode({lat}, {lng}, {length})");
    }
}

#[test]
fn test_decoding() {
    for &(input, south, west, north, east) in DECODING {
        let area = decode(&code(input)).unwrap();
        let bounds = [
            (area.south_latitude(), south),
            (area.west_longitude(), west),
            (area.north_latitude(), north),
            (area.east_longitude(), east),
        ];
        for (actual, expected) in bounds {
            assert!(
                (actual - expected).abs() < EPSILON,
                "decode({input}): expected {expected}, got {actual}"
            );
        }
    }
}

#[test]
fn test_round_trip_through_center() {
    for &(input, ..) in DECODING {
        let original = code(input);
        let area = decode(&original).unwrap();
        let again = encode(area.center_latitude(), area.center_longitude(), area.length()).unwrap();
        assert_eq!(again, original, "round trip of {input}");
    }
}

#[test]
fn test_containment() {
    for &(input, ..) in DECODING {
        let full = code(input);
        let area = decode(&full).unwrap();
        assert!(contains(&full, area.center_latitude(), area.center_longitude()));
        assert!(contains(&full, area.south_latitude(), area.west_longitude()));
        assert!(!contains(&full, area.north_latitude(), area.east_longitude()));
    }
}

#[test]
fn test_shortening_and_recovery() {
    for &(full, lat, lng, short) in SHORTENING {
        let full = code(full);
        let shortened = shorten(&full, lat, lng).unwrap();
        assert_eq!(shortened.as_str(), short, "shorten({full}, {lat}, {lng})");

        let recovered = recover(&shortened, lat, lng);
        assert_eq!(recovered, full, "recover({short}, {lat}, {lng})");
    }
}

#[test]
fn test_shorten_reference_too_far() {
    let result = shorten(&code("9C3W9QCJ+2VX"), 60.0, 10.0);
    assert!(matches!(result, Err(PlusCodeError::ReferenceTooFar { .. })));
}

#[test]
fn test_recover_is_idempotent_on_full_codes() {
    for &(input, ..) in DECODING {
        let full = code(input);
        assert_eq!(recover(&full, 0.0, 0.0), full);
        assert_eq!(recover(&full, -45.0, 120.0), full);
    }
}

#[test]
fn test_recovery_near_poles() {
    assert_eq!(recover(&code("XXXXXX+XX"), -81.0, 0.0).as_str(), "2CXXXXXX+XX");
    assert_eq!(recover(&code("2222+22"), 89.6, 0.0).as_str(), "CFX22222+22");
}

#[test]
fn test_latitude_clipping() {
    assert_eq!(encode(-91.0, 5.0, 10).unwrap(), encode(-90.0, 5.0, 10).unwrap());
    assert_eq!(encode(-90.0, 5.0, 10).unwrap().as_str(), "2F272222+22");
    assert_eq!(encode(91.0, 5.0, 10).unwrap(), encode(90.0, 5.0, 10).unwrap());
    assert_eq!(encode(90.0, 5.0, 10).unwrap().as_str(), "CFX7X2X2+X2");
}

#[test]
fn test_longitude_wraparound() {
    for lng in [175.0, -185.0, -905.0, 175.0 + 360.0 * 1e6] {
        assert_eq!(encode(5.0, lng, 10).unwrap().as_str(), "6VQQ2222+22", "lng {lng}");
    }
    for lng in [-175.0, 905.0, -175.0 - 360.0 * 1e6] {
        assert_eq!(encode(5.0, lng, 10).unwrap().as_str(), "62Q72222+22", "lng {lng}");
    }
}

#[test]
fn test_max_length() {
    let full = encode(51.3701125, -10.202665625, 15).unwrap();
    assert_eq!(full.as_str(), "9C3F9QCW+2WWGHCH");
    assert_eq!(full.as_str().len(), 16);
    assert!(is_valid(full.as_str()));

    // Digits past the maximum are still valid but carry no precision.
    let extended = format!("{full}W");
    assert!(is_valid(&extended));
    assert_eq!(decode(&code(&extended)).unwrap(), decode(&full).unwrap());

    let bad = format!("{full}U");
    assert!(!is_valid(&bad));
}

#[test]
fn test_precision_by_length() {
    let cases = [
        ("67000000+", 20.0),
        ("67890000+", 1.0),
        ("6789CF00+", 0.05),
        ("6789CFGH+", 0.0025),
        ("6789CFGH+JM", 0.000125),
    ];
    for (input, size) in cases {
        let area = decode(&code(input)).unwrap();
        assert!((area.latitude_height() - size).abs() < EPSILON, "height of {input}");
        assert!((area.longitude_width() - size).abs() < EPSILON, "width of {input}");
    }

    let area = decode(&code("6789CFGH+JMP")).unwrap();
    assert!((area.latitude_height() - 0.000025).abs() < EPSILON);
    assert!((area.longitude_width() - 0.00003125).abs() < EPSILON);
}

#[test]
fn test_padded_codes() {
    assert!(is_padded("7FG49Q00+"));
    assert!(!is_padded("7FG49QCJ+2V"));
    assert!(!is_padded("7FG4+"));
    let result = shorten(&code("7FG49Q00+"), 20.375, 2.775);
    assert!(matches!(
        result,
        Err(PlusCodeError::PaddedCodeNotShortenable { .. })
    ));
}
