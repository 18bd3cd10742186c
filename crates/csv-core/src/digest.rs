//! SHA-512 digesting of document content.
//!
//! Content is read in fixed-size chunks and folded into a running hash state, so documents of
//! any size are digested in bounded memory. Read failures are returned to the caller; there is
//! no partial or empty digest.

use crate::{CsvError, CsvResult};
use sha2::{Digest, Sha512};
use std::fmt;
use std::io::{ErrorKind, Read};

/// Number of bytes in a SHA-512 digest.
pub const SHA512_LEN: usize = 64;

/// A SHA-512 digest of document content.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha512Digest([u8; SHA512_LEN]);

impl Sha512Digest {
    pub fn from_bytes(bytes: [u8; SHA512_LEN]) -> Self {
        Self(bytes)
    }

    /// Digests an in-memory buffer.
    pub fn of(content: &[u8]) -> Self {
        Self::finish(Sha512::new_with_prefix(content))
    }

    fn finish(hasher: Sha512) -> Self {
        let mut bytes = [0u8; SHA512_LEN];
        bytes.copy_from_slice(&hasher.finalize());
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SHA512_LEN] {
        &self.0
    }

    /// Uppercase hexadecimal rendering, two characters per byte.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl AsRef<[u8]> for Sha512Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Sha512Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Sha512Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sha512Digest").field(&self.to_hex()).finish()
    }
}

/// Computes the SHA-512 digest of everything `reader` yields.
///
/// `chunk_size` bounds each read; it must be non-zero (see
/// [`GeneratorConfig`](crate::GeneratorConfig)).
///
/// # Errors
///
/// Returns [`CsvError::DigestRead`] on any read failure other than
/// [`ErrorKind::Interrupted`], which is retried.
pub fn digest_reader<R: Read>(mut reader: R, chunk_size: usize) -> CsvResult<Sha512Digest> {
    let mut hasher = Sha512::new();
    let mut block = vec![0u8; chunk_size.max(1)];
    let mut total: u64 = 0;

    loop {
        match reader.read(&mut block) {
            Ok(0) => break,
            Ok(n) => {
                hasher.update(&block[..n]);
                total += n as u64;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(CsvError::DigestRead(e)),
        }
    }

    tracing::debug!(bytes = total, "digested content");
    Ok(Sha512Digest::finish(hasher))
}
