//! Code generation entry points.
//!
//! A code is `prefix ∥ body ∥ marker`:
//!
//! ```text
//! PPP IHIHIHIHIHIHIHHHHHHHHHHHHHHH R
//! │   │                            └─ layout marker, base 36 (1)
//! │   └─ body: identifier (I, 7) interleaved with digest (H, 21)
//! └─ prefix, verbatim (3)
//! ```
//!
//! The sample body above is layout 28 (identifier on every even position up to 12).
//!
//! Inputs are validated before any content is read or hashed, so an invalid prefix or identifier
//! never costs a pass over the document.

use crate::config::GeneratorConfig;
use crate::digest::{digest_reader, Sha512Digest};
use crate::interleave::interleave;
use crate::layout::{Layout, LayoutSelector, ThreadRngSelector};
use crate::radix::{digest_to_base36, document_id_to_base36};
use crate::{CsvError, CsvResult};
use csv_code_types::{
    DocumentId, LayoutIndex, Prefix, ValidationError, BODY_LEN, CODE_LEN, DIGEST_WIDTH,
};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A generated Secure Verification Code.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Csv {
    code: String,
    prefix_bytes: usize,
    layout: LayoutIndex,
}

impl Csv {
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// The verbatim prefix (first three characters).
    pub fn prefix(&self) -> &str {
        &self.code[..self.prefix_bytes]
    }

    /// The 28-character interleaved body.
    pub fn body(&self) -> &str {
        // Body and marker are ASCII, so the marker is the last byte.
        &self.code[self.prefix_bytes..self.code.len() - 1]
    }

    /// Layout used for the body, as recorded by the trailing marker.
    pub fn layout_index(&self) -> LayoutIndex {
        self.layout
    }

    pub fn into_string(self) -> String {
        self.code
    }
}

impl fmt::Display for Csv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl AsRef<str> for Csv {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

/// Generates codes with a given layout selector and configuration.
///
/// The generator holds no per-call state and can be shared between threads when its selector
/// allows it (every [`LayoutSelector`] is `Send + Sync`).
#[derive(Debug, Default)]
pub struct CsvGenerator<S = ThreadRngSelector> {
    selector: S,
    config: GeneratorConfig,
}

impl CsvGenerator<ThreadRngSelector> {
    /// Creates a generator drawing layouts from the thread-local RNG.
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_selector(ThreadRngSelector, config)
    }
}

impl<S: LayoutSelector> CsvGenerator<S> {
    pub fn with_selector(selector: S, config: GeneratorConfig) -> Self {
        Self { selector, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a code for the content yielded by `reader`.
    ///
    /// The content is digested with SHA-512 in chunks of
    /// [`GeneratorConfig::read_chunk_bytes`].
    ///
    /// # Errors
    ///
    /// - [`CsvError::Validation`] if `prefix` or `document_id` is invalid (checked before reading)
    /// - [`CsvError::DigestRead`] if reading fails
    pub fn generate_from_reader<R: Read>(
        &self,
        prefix: &str,
        document_id: u64,
        reader: R,
    ) -> CsvResult<Csv> {
        let (prefix, document_id) = validate(prefix, document_id)?;
        let digest = digest_reader(reader, self.config.read_chunk_bytes())?;
        Ok(self.encode(&prefix, document_id, digest.as_bytes())?)
    }

    /// Generates a code for the content of the file at `path`.
    ///
    /// The file is closed before this returns, whether or not digesting succeeded.
    ///
    /// # Errors
    ///
    /// - [`CsvError::Validation`] if `prefix` or `document_id` is invalid (checked before opening)
    /// - [`CsvError::FileOpen`] if the file cannot be opened
    /// - [`CsvError::DigestRead`] if reading fails
    pub fn generate_from_file(
        &self,
        prefix: &str,
        document_id: u64,
        path: &Path,
    ) -> CsvResult<Csv> {
        let (prefix, document_id) = validate(prefix, document_id)?;
        let file = File::open(path).map_err(|source| CsvError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let digest = digest_reader(file, self.config.read_chunk_bytes())?;
        Ok(self.encode(&prefix, document_id, digest.as_bytes())?)
    }

    /// Generates a code from a precomputed digest.
    ///
    /// Any digest whose base-36 rendering has at least 21 digits is accepted; a 64-byte SHA-512
    /// digest is the expected input.
    ///
    /// # Errors
    ///
    /// [`CsvError::Validation`] if `prefix` or `document_id` is invalid, or if the digest is too
    /// small to supply 21 base-36 characters.
    pub fn generate_from_digest(
        &self,
        prefix: &str,
        document_id: u64,
        digest: &[u8],
    ) -> CsvResult<Csv> {
        let (prefix, document_id) = validate(prefix, document_id)?;
        Ok(self.encode(&prefix, document_id, digest)?)
    }

    /// Generates a code from already validated parts.
    pub fn encode(
        &self,
        prefix: &Prefix,
        document_id: DocumentId,
        digest: &[u8],
    ) -> Result<Csv, ValidationError> {
        let mut digest36 = digest_to_base36(digest);
        if digest36.len() < DIGEST_WIDTH {
            return Err(ValidationError::DigestTooShort {
                required: DIGEST_WIDTH,
                actual: digest36.len(),
            });
        }
        digest36.truncate(DIGEST_WIDTH);

        let id36 = document_id_to_base36(document_id);
        let layout = Layout::get(self.selector.select());
        let body = interleave(&id36, &digest36, &layout)?;

        let mut code = String::with_capacity(prefix.as_str().len() + BODY_LEN + 1);
        code.push_str(prefix.as_str());
        code.push_str(&body);
        code.push(layout.index().marker());
        debug_assert_eq!(code.chars().count(), CODE_LEN);

        tracing::debug!(
            prefix = %prefix,
            document_id = %document_id,
            layout = %layout.index(),
            "generated code"
        );

        Ok(Csv {
            code,
            prefix_bytes: prefix.as_str().len(),
            layout: layout.index(),
        })
    }
}

fn validate(prefix: &str, document_id: u64) -> Result<(Prefix, DocumentId), ValidationError> {
    Ok((Prefix::new(prefix)?, DocumentId::new(document_id)?))
}

/// Generates a code for the content yielded by `reader` with the default generator.
pub fn generate_from_reader<R: Read>(prefix: &str, document_id: u64, reader: R) -> CsvResult<Csv> {
    CsvGenerator::new(GeneratorConfig::default()).generate_from_reader(prefix, document_id, reader)
}

/// Generates a code for the content of the file at `path` with the default generator.
pub fn generate_from_file(prefix: &str, document_id: u64, path: &Path) -> CsvResult<Csv> {
    CsvGenerator::new(GeneratorConfig::default()).generate_from_file(prefix, document_id, path)
}

/// Generates a code from a precomputed digest with the default generator.
pub fn generate_from_digest(prefix: &str, document_id: u64, digest: &[u8]) -> CsvResult<Csv> {
    CsvGenerator::new(GeneratorConfig::default()).generate_from_digest(prefix, document_id, digest)
}

/// Digests `content` in memory and generates a code for it with the default generator.
pub fn generate_from_bytes(prefix: &str, document_id: u64, content: &[u8]) -> CsvResult<Csv> {
    let (prefix, document_id) = validate(prefix, document_id)?;
    let digest = Sha512Digest::of(content);
    let generator = CsvGenerator::new(GeneratorConfig::default());
    Ok(generator.encode(&prefix, document_id, digest.as_bytes())?)
}
