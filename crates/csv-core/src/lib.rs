//! # CSV Core
//!
//! Encoder for Secure Verification Codes (CSV, *Código Seguro de Verificación*).
//!
//! A code is a 32-character string binding a document to its content:
//!
//! - 3 characters of caller prefix, copied verbatim
//! - 28 characters of body: the document identifier (7 base-36 characters) interleaved with the
//!   content digest (the first 21 base-36 characters of its SHA-512)
//! - 1 character naming the layout used for the interleaving
//!
//! The layout is picked at random for every code, so the same document produces different codes
//! over time. Each of them can be split back into identifier and digest by anyone holding the
//! layout table in [`layout::LAYOUTS`].
//!
//! ## Example
//!
//! ```
//! use csv_code_core::generate_from_bytes;
//!
//! # fn main() -> Result<(), csv_code_core::CsvError> {
//! let csv = generate_from_bytes("CSV", 2018, b"document content")?;
//! assert_eq!(csv.as_str().len(), 32);
//! assert_eq!(csv.prefix(), "CSV");
//! # Ok(())
//! # }
//! ```
//!
//! **No decoding**: splitting a code back into its parts is left to whoever holds the table.

pub mod config;
pub mod constants;
pub mod digest;
pub mod interleave;
pub mod layout;
pub mod radix;

mod generator;

pub use config::{read_chunk_bytes_from_env_value, GeneratorConfig};
pub use csv_code_types::{DocumentId, LayoutIndex, Prefix, ValidationError};
pub use digest::Sha512Digest;
pub use generator::{
    generate_from_bytes, generate_from_digest, generate_from_file, generate_from_reader, Csv,
    CsvGenerator,
};
pub use layout::{FixedSelector, Layout, LayoutSelector, SeededSelector, ThreadRngSelector};

#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to open source file {path}: {source}", path = path.display())]
    FileOpen {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read content while digesting: {0}")]
    DigestRead(std::io::Error),
}

pub type CsvResult<T> = std::result::Result<T, CsvError>;
