//! Validated inputs of a Secure Verification Code.

use crate::constants::{BASE36_ALPHABET, LAYOUT_COUNT, MAX_DOCUMENT_ID, PREFIX_LEN};
use crate::{ValidationError, ValidationResult};
use std::{fmt, str::FromStr};

/// Three-character namespace tag placed at the start of every code.
///
/// The prefix carries no encoding and is not restricted to the base-36 alphabet. Length is
/// counted in Unicode scalar values, so `"ÑAB"` is a valid prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    /// Validates and wraps a prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PrefixLength`] if `input` is not exactly three characters long.
    pub fn new(input: impl Into<String>) -> ValidationResult<Self> {
        let input = input.into();
        let actual = input.chars().count();
        if actual != PREFIX_LEN {
            return Err(ValidationError::PrefixLength {
                expected: PREFIX_LEN,
                actual,
            });
        }
        Ok(Self(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Prefix {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prefix::new(s)
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Numeric document identifier, bounded so it always renders in seven base-36 digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(u64);

impl DocumentId {
    /// Largest accepted identifier.
    pub const MAX: DocumentId = DocumentId(MAX_DOCUMENT_ID);

    /// Validates a document identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DocumentIdOutOfRange`] if `value` exceeds [`MAX_DOCUMENT_ID`].
    pub fn new(value: u64) -> ValidationResult<Self> {
        if value > MAX_DOCUMENT_ID {
            return Err(ValidationError::DocumentIdOutOfRange {
                max: MAX_DOCUMENT_ID,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for DocumentId {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        DocumentId::new(value)
    }
}

/// Index into the layout table.
///
/// The index is written as the last character of a code, as a single uppercase base-36 digit
/// (`0`-`9` for 0-9, `A`-`Z` for 10-35).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayoutIndex(u8);

impl LayoutIndex {
    /// Validates a layout index.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::LayoutIndexOutOfRange`] if `value` is not below
    /// [`LAYOUT_COUNT`].
    pub fn new(value: u8) -> ValidationResult<Self> {
        if value >= LAYOUT_COUNT {
            return Err(ValidationError::LayoutIndexOutOfRange {
                count: LAYOUT_COUNT,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Maps any byte onto the table by reducing it modulo [`LAYOUT_COUNT`].
    pub fn wrapping(value: u8) -> Self {
        Self(value % LAYOUT_COUNT)
    }

    /// Decodes a layout marker character.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLayoutMarker`] for anything outside `0-9A-Z`.
    pub fn from_marker(marker: char) -> ValidationResult<Self> {
        BASE36_ALPHABET
            .iter()
            .position(|&b| char::from(b) == marker)
            .map(|pos| Self(pos as u8))
            .ok_or(ValidationError::InvalidLayoutMarker(marker))
    }

    /// Iterates over every index of the table in order.
    pub fn all() -> impl Iterator<Item = LayoutIndex> {
        (0..LAYOUT_COUNT).map(Self)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the marker character written at the end of a code.
    pub fn marker(self) -> char {
        char::from(BASE36_ALPHABET[usize::from(self.0)])
    }
}

impl fmt::Display for LayoutIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{DocumentId, LayoutIndex, Prefix};

    impl serde::Serialize for Prefix {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(&self.0)
        }
    }

    impl<'de> serde::Deserialize<'de> for Prefix {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Prefix::new(s).map_err(serde::de::Error::custom)
        }
    }

    impl serde::Serialize for DocumentId {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_u64(self.0)
        }
    }

    impl<'de> serde::Deserialize<'de> for DocumentId {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = u64::deserialize(deserializer)?;
            DocumentId::new(value).map_err(serde::de::Error::custom)
        }
    }

    impl serde::Serialize for LayoutIndex {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_u8(self.0)
        }
    }

    impl<'de> serde::Deserialize<'de> for LayoutIndex {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = u8::deserialize(deserializer)?;
            LayoutIndex::new(value).map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_accepts_three_characters() {
        let prefix = Prefix::new("CSV").unwrap();
        assert_eq!(prefix.as_str(), "CSV");
        assert_eq!(prefix.to_string(), "CSV");
    }

    #[test]
    fn test_prefix_rejects_single_character() {
        let result = Prefix::new("A");
        assert_eq!(
            result,
            Err(ValidationError::PrefixLength {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn test_prefix_rejects_empty_and_too_long() {
        assert!(Prefix::new("").is_err());
        assert!(Prefix::new("CSVX").is_err());
    }

    #[test]
    fn test_prefix_counts_characters_not_bytes() {
        let prefix = Prefix::new("ÑAB").unwrap();
        assert_eq!(prefix.as_str().len(), 4);
        assert!(Prefix::new("ÑÑ").is_err());
    }

    #[test]
    fn test_prefix_is_not_trimmed() {
        assert!(Prefix::new(" AB").is_ok());
        assert!(Prefix::new(" AB ").is_err());
    }

    #[test]
    fn test_document_id_accepts_boundary() {
        let id = DocumentId::new(78_364_164_095).unwrap();
        assert_eq!(id, DocumentId::MAX);
        assert_eq!(DocumentId::new(0).unwrap().get(), 0);
    }

    #[test]
    fn test_document_id_rejects_above_boundary() {
        match DocumentId::new(78_364_164_096) {
            Err(ValidationError::DocumentIdOutOfRange { max, actual }) => {
                assert_eq!(max, MAX_DOCUMENT_ID);
                assert_eq!(actual, 78_364_164_096);
            }
            other => panic!("Expected DocumentIdOutOfRange, got {:?}", other),
        }
        assert!(DocumentId::try_from(u64::MAX).is_err());
    }

    #[test]
    fn test_layout_index_range() {
        assert!(LayoutIndex::new(0).is_ok());
        assert!(LayoutIndex::new(35).is_ok());
        assert!(matches!(
            LayoutIndex::new(36),
            Err(ValidationError::LayoutIndexOutOfRange { count: 36, actual: 36 })
        ));
    }

    #[test]
    fn test_layout_index_wrapping() {
        assert_eq!(LayoutIndex::wrapping(36).get(), 0);
        assert_eq!(LayoutIndex::wrapping(255).get(), 255 % 36);
    }

    #[test]
    fn test_layout_marker_round_trips_for_all_indices() {
        for index in LayoutIndex::all() {
            let marker = index.marker();
            assert!(marker.is_ascii_digit() || marker.is_ascii_uppercase());
            assert_eq!(LayoutIndex::from_marker(marker).unwrap(), index);
        }
        assert_eq!(LayoutIndex::all().count(), 36);
    }

    #[test]
    fn test_layout_marker_values() {
        assert_eq!(LayoutIndex::new(0).unwrap().marker(), '0');
        assert_eq!(LayoutIndex::new(9).unwrap().marker(), '9');
        assert_eq!(LayoutIndex::new(10).unwrap().marker(), 'A');
        assert_eq!(LayoutIndex::new(35).unwrap().marker(), 'Z');
    }

    #[test]
    fn test_layout_marker_rejects_lowercase() {
        assert_eq!(
            LayoutIndex::from_marker('a'),
            Err(ValidationError::InvalidLayoutMarker('a'))
        );
        assert!(LayoutIndex::from_marker('-').is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates_on_deserialize() {
        let prefix: Prefix = serde_json::from_str("\"CSV\"").unwrap();
        assert_eq!(serde_json::to_string(&prefix).unwrap(), "\"CSV\"");
        assert!(serde_json::from_str::<Prefix>("\"CS\"").is_err());

        let id: DocumentId = serde_json::from_str("2018").unwrap();
        assert_eq!(id.get(), 2018);
        assert!(serde_json::from_str::<DocumentId>("78364164096").is_err());

        let layout: LayoutIndex = serde_json::from_str("35").unwrap();
        assert_eq!(serde_json::to_string(&layout).unwrap(), "35");
        assert!(serde_json::from_str::<LayoutIndex>("36").is_err());
    }
}
