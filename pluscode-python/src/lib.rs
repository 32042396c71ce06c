//! Python bindings for the pluscode Open Location Code library.

#![allow(clippy::useless_conversion)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

// Use fully qualified path to avoid collision with the Python module name
use ::pluscode as pluscode_lib;

fn to_py_err(e: pluscode_lib::PlusCodeError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn parse(code: &str) -> PyResult<pluscode_lib::PlusCode> {
    pluscode_lib::PlusCode::new(code).map_err(to_py_err)
}

/// The area covered by a decoded Plus Code.
///
/// South and west edges are inside the area; north and east edges are not.
#[pyclass(frozen)]
#[derive(Clone)]
struct CodeArea {
    /// Southern edge in decimal degrees.
    #[pyo3(get)]
    south_latitude: f64,
    /// Western edge in decimal degrees.
    #[pyo3(get)]
    west_longitude: f64,
    /// Northern edge in decimal degrees.
    #[pyo3(get)]
    north_latitude: f64,
    /// Eastern edge in decimal degrees.
    #[pyo3(get)]
    east_longitude: f64,
    /// Number of significant digits in the code.
    #[pyo3(get)]
    code_length: usize,
}

impl From<pluscode_lib::CodeArea> for CodeArea {
    fn from(area: pluscode_lib::CodeArea) -> Self {
        CodeArea {
            south_latitude: area.south_latitude(),
            west_longitude: area.west_longitude(),
            north_latitude: area.north_latitude(),
            east_longitude: area.east_longitude(),
            code_length: area.length(),
        }
    }
}

impl CodeArea {
    fn inner(&self) -> pluscode_lib::CodeArea {
        pluscode_lib::CodeArea::new(
            self.south_latitude,
            self.west_longitude,
            self.north_latitude,
            self.east_longitude,
            self.code_length,
        )
    }
}

#[pymethods]
impl CodeArea {
    /// Latitude of the center of the area.
    #[getter]
    fn center_latitude(&self) -> f64 {
        self.inner().center_latitude()
    }

    /// Longitude of the center of the area.
    #[getter]
    fn center_longitude(&self) -> f64 {
        self.inner().center_longitude()
    }

    /// Check whether a point lies inside the area.
    fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.inner().contains(latitude, longitude)
    }

    fn __repr__(&self) -> String {
        format!(
            "CodeArea(south={}, west={}, north={}, east={}, code_length={})",
            self.south_latitude,
            self.west_longitude,
            self.north_latitude,
            self.east_longitude,
            self.code_length
        )
    }
}

/// Encode a location into a Plus Code.
///
/// Args:
///     latitude: Latitude in decimal degrees. Clipped to [-90, 90].
///     longitude: Longitude in decimal degrees. Wrapped to [-180, 180).
///     code_length: Number of digits (2, 4, 6, 8, or 10-15; default: 10).
///
/// Returns:
///     The Plus Code string.
///
/// Raises:
///     ValueError: If the code length is invalid.
///
/// Example:
///     >>> encode(47.0000625, 8.0000625)
///     '8FVC2222+22'
#[pyfunction]
#[pyo3(signature = (latitude, longitude, code_length=10))]
fn encode(latitude: f64, longitude: f64, code_length: usize) -> PyResult<String> {
    pluscode_lib::encode(latitude, longitude, code_length)
        .map(|code| code.into_string())
        .map_err(to_py_err)
}

/// Decode a full Plus Code into the area it covers.
///
/// Raises:
///     ValueError: If the code is invalid or short.
///
/// Example:
///     >>> decode("7FG49Q00+").center_latitude
///     20.375
#[pyfunction]
fn decode(code: &str) -> PyResult<CodeArea> {
    let code = parse(code)?;
    pluscode_lib::decode(&code)
        .map(CodeArea::from)
        .map_err(to_py_err)
}

/// Check whether a string is a valid Plus Code, short or full.
#[pyfunction]
fn is_valid(code: &str) -> bool {
    pluscode_lib::is_valid(code)
}

/// Check whether a string is a valid short Plus Code.
#[pyfunction]
fn is_short(code: &str) -> bool {
    pluscode_lib::is_short(code)
}

/// Check whether a string is a valid full Plus Code.
#[pyfunction]
fn is_full(code: &str) -> bool {
    pluscode_lib::is_full(code)
}

/// Check whether a string is a valid padded Plus Code.
#[pyfunction]
fn is_padded(code: &str) -> bool {
    pluscode_lib::is_padded(code)
}

/// Remove leading digits from a full code relative to a reference location.
///
/// Args:
///     code: A full, unpadded Plus Code.
///     latitude: Reference latitude.
///     longitude: Reference longitude.
///
/// Raises:
///     ValueError: If the code is short or padded, or the reference is too far.
///
/// Example:
///     >>> shorten("9C3W9QCJ+2VX", 51.3708675, -1.217765625)
///     'CJ+2VX'
#[pyfunction]
fn shorten(code: &str, latitude: f64, longitude: f64) -> PyResult<String> {
    let code = parse(code)?;
    pluscode_lib::shorten(&code, latitude, longitude)
        .map(|short| short.into_string())
        .map_err(to_py_err)
}

/// Recover the nearest full code to a reference location.
///
/// Full codes are returned unchanged (in upper case).
///
/// Raises:
///     ValueError: If the code is not a valid Plus Code.
///
/// Example:
///     >>> recover_nearest("CJ+2VX", 51.3708675, -1.217765625)
///     '9C3W9QCJ+2VX'
#[pyfunction]
fn recover_nearest(code: &str, latitude: f64, longitude: f64) -> PyResult<String> {
    let code = parse(code)?;
    Ok(pluscode_lib::recover(&code, latitude, longitude).into_string())
}

/// Plus Codes - Open Location Code encoding and decoding.
///
/// This module provides Python bindings for the pluscode Rust library.
///
/// Example:
///     >>> import pluscodes
///     >>> code = pluscodes.encode(51.3701125, -1.217765625, 11)
///     >>> pluscodes.shorten(code, 51.3708675, -1.217765625)
///     'CJ+2VX'
#[pymodule]
fn pluscodes(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<CodeArea>()?;
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid, m)?)?;
    m.add_function(wrap_pyfunction!(is_short, m)?)?;
    m.add_function(wrap_pyfunction!(is_full, m)?)?;
    m.add_function(wrap_pyfunction!(is_padded, m)?)?;
    m.add_function(wrap_pyfunction!(shorten, m)?)?;
    m.add_function(wrap_pyfunction!(recover_nearest, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("CODE_ALPHABET", pluscode_lib::CODE_ALPHABET)?;
    Ok(())
}
