//! The validated Plus Code value type.

use std::fmt;
use std::str::FromStr;

use crate::area::CodeArea;
use crate::codec;
use crate::error::Result;
use crate::validate::{self, digit_value, PADDING_CHARACTER, SEPARATOR, SEPARATOR_POSITION};

/// A structurally valid Plus Code, stored in upper case.
///
/// Construction validates the string, so every `PlusCode` is either a full
/// code or a short code. Ordering and equality compare the canonical text.
///
/// # Examples
///
/// ```
/// use pluscode::PlusCode;
///
/// let code: PlusCode = "8fvc2222+22".parse()?;
/// assert_eq!(code.as_str(), "8FVC2222+22");
/// assert!(code.is_full());
///
/// let area = code.decode()?;
/// assert!(area.contains(47.0000625, 8.0000625));
/// # Ok::<(), pluscode::PlusCodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlusCode {
    code: String,
}

impl PlusCode {
    /// Parse and normalize a code string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PlusCodeError::InvalidCodeFormat`] if the string is
    /// not a valid short or full code.
    pub fn new(code: &str) -> Result<Self> {
        validate::check(code)?;
        Ok(Self {
            code: code.to_ascii_uppercase(),
        })
    }

    /// Wrap a string this crate produced itself. It must already be valid and
    /// upper case.
    pub(crate) fn from_canonical(code: String) -> Self {
        debug_assert!(validate::is_valid(&code), "non-canonical code {code}");
        Self { code }
    }

    /// Encode a location into a code of the given length.
    ///
    /// See [`crate::encode`].
    pub fn from_location(latitude: f64, longitude: f64, code_length: usize) -> Result<Self> {
        codec::encode(latitude, longitude, code_length)
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn into_string(self) -> String {
        self.code
    }

    /// Offset of the separator. Always even and at most 8.
    pub fn separator_offset(&self) -> usize {
        self.code.find(SEPARATOR).unwrap_or(SEPARATOR_POSITION)
    }

    pub fn is_full(&self) -> bool {
        self.separator_offset() == SEPARATOR_POSITION
    }

    pub fn is_short(&self) -> bool {
        self.separator_offset() < SEPARATOR_POSITION
    }

    pub fn is_padded(&self) -> bool {
        self.code.contains(PADDING_CHARACTER)
    }

    /// Number of digits, excluding separator and padding.
    pub fn digit_count(&self) -> usize {
        self.code.bytes().filter(|&c| digit_value(c).is_some()).count()
    }

    /// Decode this code into the area it covers. See [`crate::decode`].
    pub fn decode(&self) -> Result<CodeArea> {
        codec::decode(self)
    }

    /// Check whether a point lies inside the area of this code.
    ///
    /// Short codes contain nothing, since they do not describe an area on
    /// their own.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        contains(self, latitude, longitude)
    }

    /// Remove leading digits relative to a reference location.
    /// See [`crate::shorten`].
    pub fn shorten(&self, latitude: f64, longitude: f64) -> Result<Self> {
        crate::shorten::shorten(self, latitude, longitude)
    }

    /// Recover the nearest full code to a reference location.
    /// See [`crate::recover`].
    pub fn recover(&self, latitude: f64, longitude: f64) -> Self {
        crate::recover::recover(self, latitude, longitude)
    }
}

/// Check whether a point lies inside the area of a full code.
///
/// Returns `false` for short codes.
pub fn contains(code: &PlusCode, latitude: f64, longitude: f64) -> bool {
    codec::decode(code).is_ok_and(|area| area.contains(latitude, longitude))
}

impl FromStr for PlusCode {
    type Err = crate::PlusCodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for PlusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.code)
    }
}

impl AsRef<str> for PlusCode {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl From<PlusCode> for String {
    fn from(code: PlusCode) -> Self {
        code.code
    }
}
