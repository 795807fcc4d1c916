//! Base64url transcoding for the link fragment.
//!
//! Encoding emits the unpadded form; decoding accepts padded and unpadded
//! input alike, so links survive being passed through software that appends
//! or strips `=` characters.

use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{alphabet, Engine};

/// URL-safe alphabet, no padding on encode, indifferent to padding on decode.
const PADDING_AGNOSTIC: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes as unpadded base64url.
pub fn encode_without_padding(bytes: &[u8]) -> String {
    PADDING_AGNOSTIC.encode(bytes)
}

/// Decode base64url input, with or without trailing padding.
pub fn decode_padding_agnostic(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    PADDING_AGNOSTIC.decode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_omits_padding() {
        assert_eq!(encode_without_padding(&[0xFF]), "_w");
        assert_eq!(encode_without_padding(&[0xFF, 0xFF]), "__8");
        assert_eq!(encode_without_padding(&[0xFF, 0xFF, 0xFF]), "____");
    }

    #[test]
    fn test_decode_accepts_both_paddings() {
        assert_eq!(decode_padding_agnostic("_w").unwrap(), vec![0xFF]);
        assert_eq!(decode_padding_agnostic("_w==").unwrap(), vec![0xFF]);
        assert_eq!(decode_padding_agnostic("__8").unwrap(), vec![0xFF, 0xFF]);
        assert_eq!(decode_padding_agnostic("__8=").unwrap(), vec![0xFF, 0xFF]);
    }

    #[test]
    fn test_decode_rejects_standard_alphabet() {
        // '/' belongs to the standard alphabet, not the URL-safe one.
        assert!(decode_padding_agnostic("//8").is_err());
    }

    #[test]
    fn test_decode_rejects_invalid_characters() {
        assert!(decode_padding_agnostic("!!!").is_err());
    }

    #[test]
    fn test_round_trip() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let encoded = encode_without_padding(&bytes);
        assert!(!encoded.contains('='));
        assert_eq!(decode_padding_agnostic(&encoded).unwrap(), bytes);
    }
}
