//! Generator configuration.
//!
//! Configuration is resolved once at process startup and passed into
//! [`CsvGenerator`](crate::CsvGenerator). Environment variables are never read while a code is
//! being computed.

use crate::constants::{DEFAULT_READ_CHUNK_BYTES, MAX_READ_CHUNK_BYTES};
use crate::{CsvError, CsvResult};

/// Generator configuration resolved at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    read_chunk_bytes: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            read_chunk_bytes: DEFAULT_READ_CHUNK_BYTES,
        }
    }
}

impl GeneratorConfig {
    /// Create a new `GeneratorConfig`.
    ///
    /// `read_chunk_bytes` must be between 1 and [`MAX_READ_CHUNK_BYTES`].
    pub fn new(read_chunk_bytes: usize) -> CsvResult<Self> {
        if read_chunk_bytes == 0 || read_chunk_bytes > MAX_READ_CHUNK_BYTES {
            return Err(CsvError::InvalidConfig(format!(
                "read chunk size must be between 1 and {} bytes, got {}",
                MAX_READ_CHUNK_BYTES, read_chunk_bytes
            )));
        }

        Ok(Self { read_chunk_bytes })
    }

    pub fn read_chunk_bytes(&self) -> usize {
        self.read_chunk_bytes
    }
}

/// Parse the read chunk size from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_READ_CHUNK_BYTES`].
pub fn read_chunk_bytes_from_env_value(value: Option<String>) -> CsvResult<usize> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(DEFAULT_READ_CHUNK_BYTES),
        Some(v) => v.parse::<usize>().map_err(|e| {
            CsvError::InvalidConfig(format!("invalid read chunk size '{}': {}", v, e))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chunk_size() {
        assert_eq!(GeneratorConfig::default().read_chunk_bytes(), 4096);
    }

    #[test]
    fn test_new_rejects_zero_and_oversized_chunks() {
        assert!(matches!(
            GeneratorConfig::new(0),
            Err(CsvError::InvalidConfig(_))
        ));
        assert!(GeneratorConfig::new(MAX_READ_CHUNK_BYTES + 1).is_err());
        assert_eq!(
            GeneratorConfig::new(MAX_READ_CHUNK_BYTES)
                .unwrap()
                .read_chunk_bytes(),
            MAX_READ_CHUNK_BYTES
        );
    }

    #[test]
    fn test_env_value_missing_or_blank_uses_default() {
        assert_eq!(read_chunk_bytes_from_env_value(None).unwrap(), 4096);
        assert_eq!(
            read_chunk_bytes_from_env_value(Some("  ".into())).unwrap(),
            4096
        );
    }

    #[test]
    fn test_env_value_is_parsed_and_trimmed() {
        assert_eq!(
            read_chunk_bytes_from_env_value(Some(" 8192 ".into())).unwrap(),
            8192
        );
    }

    #[test]
    fn test_env_value_rejects_garbage() {
        match read_chunk_bytes_from_env_value(Some("lots".into())) {
            Err(CsvError::InvalidConfig(msg)) => assert!(msg.contains("lots")),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }
}
