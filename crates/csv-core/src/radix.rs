//! Base-36 rendering of document identifiers and digests.

use csv_code_types::{DocumentId, BASE36_ALPHABET, BASE36_RADIX, DOCUMENT_ID_WIDTH};

/// Renders a document identifier in base 36, left-padded with `'0'` to seven characters.
///
/// `DocumentId` is bounded by `ZZZZZZZ`, so the result is always exactly seven characters.
pub fn document_id_to_base36(id: DocumentId) -> String {
    let mut value = id.get();
    let mut digits = [BASE36_ALPHABET[0]; DOCUMENT_ID_WIDTH];
    for slot in digits.iter_mut().rev() {
        *slot = BASE36_ALPHABET[(value % BASE36_RADIX) as usize];
        value /= BASE36_RADIX;
        if value == 0 {
            break;
        }
    }
    digits.iter().map(|&b| char::from(b)).collect()
}

/// Renders a digest in uppercase base 36.
///
/// The bytes are read as one big-endian unsigned integer of arbitrary width, which is the same
/// number as their uppercase hex rendering parsed in base 16. The result has no leading zeros;
/// an all-zero or empty digest renders as `"0"`.
pub fn digest_to_base36(digest: &[u8]) -> String {
    let start = digest.iter().position(|&b| b != 0).unwrap_or(digest.len());
    let mut num = digest[start..].to_vec();
    // log_36(256) ~= 1.55 digits per byte
    let mut output = Vec::with_capacity(num.len() * 8 / 5 + 1);

    while !num.is_empty() {
        let mut rem: u16 = 0;
        for byte in num.iter_mut() {
            let acc = (rem << 8) | u16::from(*byte);
            *byte = (acc / BASE36_RADIX as u16) as u8;
            rem = acc % BASE36_RADIX as u16;
        }
        output.push(BASE36_ALPHABET[usize::from(rem)]);

        let leading_zeros = num.iter().take_while(|&&b| b == 0).count();
        num.drain(..leading_zeros);
    }

    if output.is_empty() {
        output.push(BASE36_ALPHABET[0]);
    }

    output.iter().rev().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: u64) -> DocumentId {
        DocumentId::new(value).unwrap()
    }

    #[test]
    fn test_document_id_zero_is_all_zeros() {
        assert_eq!(document_id_to_base36(id(0)), "0000000");
    }

    #[test]
    fn test_document_id_is_padded() {
        assert_eq!(document_id_to_base36(id(2018)), "00001K2");
        assert_eq!(document_id_to_base36(id(35)), "000000Z");
        assert_eq!(document_id_to_base36(id(36)), "0000010");
    }

    #[test]
    fn test_document_id_maximum_is_all_z() {
        assert_eq!(document_id_to_base36(DocumentId::MAX), "ZZZZZZZ");
        assert_eq!(document_id_to_base36(id(36u64.pow(6))), "1000000");
    }

    #[test]
    fn test_digest_small_values() {
        assert_eq!(digest_to_base36(&[0xFF]), "73");
        assert_eq!(digest_to_base36(&[0x01, 0x00]), "74");
        assert_eq!(digest_to_base36(&[35]), "Z");
        assert_eq!(digest_to_base36(&[36]), "10");
    }

    #[test]
    fn test_digest_zero_and_empty() {
        assert_eq!(digest_to_base36(&[]), "0");
        assert_eq!(digest_to_base36(&[0, 0, 0]), "0");
    }

    #[test]
    fn test_digest_ignores_leading_zero_bytes() {
        assert_eq!(digest_to_base36(&[0, 0, 0xFF]), digest_to_base36(&[0xFF]));
    }

    #[test]
    fn test_digest_matches_u64_rendering() {
        assert_eq!(digest_to_base36(&u64::MAX.to_be_bytes()), "3W5E11264SGSF");
        assert_eq!(
            digest_to_base36(&78_364_164_095u64.to_be_bytes()),
            document_id_to_base36(DocumentId::MAX)
        );
    }

    #[test]
    fn test_digest_wider_than_u128() {
        // 2^128 = 0x1 followed by 16 zero bytes
        let mut bytes = vec![0x01];
        bytes.extend_from_slice(&[0u8; 16]);
        assert_eq!(digest_to_base36(&bytes), "F5LXX1ZZ5PNORYNQGLHZMSP34");
    }

    #[test]
    fn test_sha512_sized_digest_has_enough_digits() {
        let digest = [0xA5u8; 64];
        let rendered = digest_to_base36(&digest);
        assert!(rendered.len() >= 21);
        assert!(rendered
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
    }
}
