//! Error types for the pluscode library.

use thiserror::Error;

/// Errors that can occur when working with Plus Codes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlusCodeError {
    /// The string is not a structurally valid Plus Code.
    #[error("Invalid Plus Code '{code}': {reason}")]
    InvalidCodeFormat { code: String, reason: &'static str },

    /// Requested digit count is outside 2..=15 or odd below the pair section.
    #[error("Invalid code length: {length} (must be 2..=15, and even when below 10)")]
    InvalidCodeLength { length: usize },

    /// A full code was required but a short code was given.
    #[error("Not a full Plus Code: {code}")]
    NotFullCode { code: String },

    /// Padded codes carry too few digits to drop a prefix.
    #[error("Cannot shorten padded Plus Code: {code}")]
    PaddedCodeNotShortenable { code: String },

    /// The reference point is too far from the code center to drop any prefix.
    #[error("Reference location lat={latitude}, lon={longitude} is too far from the center of {code}")]
    ReferenceTooFar {
        code: String,
        latitude: f64,
        longitude: f64,
    },

    /// A coordinate could not be interpreted (e.g. a short GeoJSON position).
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },
}

/// Result type alias using [`PlusCodeError`].
pub type Result<T> = std::result::Result<T, PlusCodeError>;
