//! GeoJSON export of Plus Code areas.
//!
//! Enable the `geojson` feature to use this module. Positions follow GeoJSON
//! order: `[longitude, latitude]`.
//!
//! # Example
//!
//! ```
//! use pluscode::geojson::code_to_feature;
//! use pluscode::PlusCode;
//!
//! let code = PlusCode::new("7FG49QCJ+2V")?;
//! let feature = code_to_feature(&code)?;
//!
//! assert_eq!(
//!     feature.property("code").and_then(|v| v.as_str()),
//!     Some("7FG49QCJ+2V")
//! );
//! # Ok::<(), pluscode::PlusCodeError>(())
//! ```

use geojson::{Feature, Geometry, Value as GeoJsonValue};

use crate::area::CodeArea;
use crate::code::PlusCode;
use crate::codec::encode;
use crate::error::{PlusCodeError, Result};

/// Convert a decoded area into a closed GeoJSON polygon.
///
/// The ring runs counter-clockwise from the south-west corner and repeats
/// it at the end.
pub fn area_to_geometry(area: &CodeArea) -> Geometry {
    let (south, west) = (area.south_latitude(), area.west_longitude());
    let (north, east) = (area.north_latitude(), area.east_longitude());
    let ring = vec![
        vec![west, south],
        vec![east, south],
        vec![east, north],
        vec![west, north],
        vec![west, south],
    ];
    Geometry::new(GeoJsonValue::Polygon(vec![ring]))
}

/// Decode a full code into a polygon feature.
///
/// The feature carries the code, its digit count and its center as
/// properties.
///
/// # Errors
///
/// Returns [`PlusCodeError::NotFullCode`] for short codes.
pub fn code_to_feature(code: &PlusCode) -> Result<Feature> {
    let area = code.decode()?;
    let mut feature = Feature::from(area_to_geometry(&area));
    feature.set_property("code", code.as_str());
    feature.set_property("length", area.length());
    feature.set_property(
        "center",
        vec![area.center_longitude(), area.center_latitude()],
    );
    Ok(feature)
}

/// Encode a GeoJSON position.
///
/// Any elements after latitude (altitude and so on) are ignored.
///
/// # Errors
///
/// Returns an error if:
/// - The position has fewer than 2 elements
/// - The code length is invalid (see [`crate::encode`])
pub fn encode_position(position: &[f64], code_length: usize) -> Result<PlusCode> {
    match position {
        [longitude, latitude, ..] => encode(*latitude, *longitude, code_length),
        _ => Err(PlusCodeError::InvalidCoordinate {
            message: format!(
                "position must have at least 2 elements, got {}",
                position.len()
            ),
        }),
    }
}
