//! # Plus Codes
//!
//! Encode, decode, shorten and recover Open Location Codes ("Plus Codes"):
//! short alphanumeric strings that name a rectangle on the Earth's surface.
//!
//! ## Features
//!
//! - **Exact**: Digits are computed from a fixed-point integer grid, so codes
//!   match other Plus Code implementations character for character
//! - **Pure**: No I/O, no shared state; every function is safe to call from
//!   any thread
//! - **Typed**: A [`PlusCode`] is always structurally valid once constructed
//!
//! ## Quick Start
//!
//! ```
//! use pluscode::{decode, encode, recover, shorten};
//!
//! // Encode a location at the default precision (about 14m x 14m)
//! let code = encode(51.3701125, -1.217765625, 10)?;
//! assert_eq!(code.as_str(), "9C3W9QCJ+2V");
//!
//! // Decode it back into the area it covers
//! let area = decode(&code)?;
//! assert!(area.contains(51.3701125, -1.217765625));
//!
//! // Drop leading digits when a nearby reference is known
//! let short = shorten(&code, 51.3708675, -1.217765625)?;
//! assert_eq!(short.as_str(), "CJ+2V");
//! assert_eq!(recover(&short, 51.3708675, -1.217765625), code);
//! # Ok::<(), pluscode::PlusCodeError>(())
//! ```
//!
//! ## Code Format
//!
//! A full code has eight digits, a `+` separator, then optional refinement
//! digits:
//!
//! - **Pairs** (digits 1-10): alternate latitude and longitude, base 20
//! - **Grid** (digits 11-15): each picks a cell in a 5 row by 4 column grid
//! - **Padding**: codes shorter than eight digits are padded with `0`
//!
//! | Length | Cell size (approx.) |
//! |--------|---------------------|
//! | 2      | 2200 km             |
//! | 4      | 110 km              |
//! | 6      | 5.5 km              |
//! | 8      | 275 m               |
//! | 10     | 14 m                |
//! | 11     | 3.5 m               |

pub mod area;
pub mod code;
pub mod codec;
pub mod error;
#[cfg(feature = "geojson")]
pub mod geojson;
pub mod recover;
pub mod shorten;
pub mod validate;

// Re-export main types at crate root for convenience
pub use area::CodeArea;
pub use code::{contains, PlusCode};
pub use codec::{
    compute_latitude_precision, decode, encode, encode_integers, location_to_integers,
    CODE_PRECISION_NORMAL, DEFAULT_CODE_LENGTH, MAX_DIGIT_COUNT, MIN_DIGIT_COUNT,
    PAIR_CODE_LENGTH,
};
pub use error::{PlusCodeError, Result};
pub use recover::recover;
pub use shorten::shorten;
pub use validate::{
    is_full, is_padded, is_short, is_valid, CODE_ALPHABET, PADDING_CHARACTER, SEPARATOR,
    SEPARATOR_POSITION,
};
