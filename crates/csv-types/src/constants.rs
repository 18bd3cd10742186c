//! Fixed dimensions of a Secure Verification Code.
//!
//! These values are part of the code format itself. Changing any of them produces codes that no
//! existing decoder can read.

/// Alphabet used for every base-36 rendering (digits first, then uppercase letters).
pub const BASE36_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Radix of the alphabet.
pub const BASE36_RADIX: u64 = 36;

/// Number of characters in a prefix.
pub const PREFIX_LEN: usize = 3;

/// Width of the padded base-36 document identifier.
pub const DOCUMENT_ID_WIDTH: usize = 7;

/// Number of base-36 digest characters carried by a code.
pub const DIGEST_WIDTH: usize = 21;

/// Length of the interleaved body (identifier plus digest characters).
pub const BODY_LEN: usize = DOCUMENT_ID_WIDTH + DIGEST_WIDTH;

/// Total length of a code: prefix, body and the layout marker.
pub const CODE_LEN: usize = PREFIX_LEN + BODY_LEN + 1;

/// Largest document identifier that fits in [`DOCUMENT_ID_WIDTH`] base-36 digits (`ZZZZZZZ`).
pub const MAX_DOCUMENT_ID: u64 = 78_364_164_095;

/// Number of entries in the layout table.
pub const LAYOUT_COUNT: u8 = 36;
