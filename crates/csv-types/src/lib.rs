//! Value types for Secure Verification Codes.
//!
//! A Secure Verification Code (CSV) is a 32-character identifier built from three caller inputs:
//! a namespace prefix, a numeric document identifier and a content digest. This crate holds the
//! types that *guarantee* the caller inputs are valid once constructed:
//!
//! - [`Prefix`]: exactly three characters, copied verbatim into the code.
//! - [`DocumentId`]: an integer no larger than [`MAX_DOCUMENT_ID`] (`ZZZZZZZ` in base 36).
//! - [`LayoutIndex`]: one of the 36 interleaving layouts, rendered as the trailing marker.
//!
//! Validation happens in the constructors, so any function that accepts these types can skip
//! re-checking them. All failures are reported as [`ValidationError`].

mod constants;
mod values;

pub use constants::{
    BASE36_ALPHABET, BASE36_RADIX, BODY_LEN, CODE_LEN, DIGEST_WIDTH, DOCUMENT_ID_WIDTH,
    LAYOUT_COUNT, MAX_DOCUMENT_ID, PREFIX_LEN,
};
pub use values::{DocumentId, LayoutIndex, Prefix};

/// Errors raised when caller input cannot form a valid code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The prefix does not have exactly [`PREFIX_LEN`] characters
    #[error("prefix must be a {expected} characters string, got {actual} characters")]
    PrefixLength { expected: usize, actual: usize },

    /// The document identifier does not fit in seven base-36 digits
    #[error("document id must be lower or equal than {max}, got {actual}")]
    DocumentIdOutOfRange { max: u64, actual: u64 },

    /// The digest renders to fewer base-36 characters than a code needs
    #[error("digest renders to {actual} base-36 characters, at least {required} are required")]
    DigestTooShort { required: usize, actual: usize },

    /// Layout index outside the layout table
    #[error("layout index must be lower than {count}, got {actual}")]
    LayoutIndexOutOfRange { count: u8, actual: u8 },

    /// Character that is not an uppercase base-36 digit used as a layout marker
    #[error("invalid layout marker: {0:?}")]
    InvalidLayoutMarker(char),
}

/// Result type for validation.
pub type ValidationResult<T> = Result<T, ValidationError>;
