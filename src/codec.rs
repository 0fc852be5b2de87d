//! Conversions between UTF-8 text, standard Base64, URL-safe Base64 and hex.
//!
//! Every function here is pure. Inputs are validated in full before any
//! bytes are produced, and a failure is always reported as a typed error
//! rather than a truncated or substituted result.

use crate::error::{DecodeError, FormatError};
use crate::hex_encoding::HexString;
use crate::safe_encoding::Base64UrlString;
use crate::standard_encoding::Base64String;
use log::{debug, warn};

pub fn encode_to_base64(text: &str) -> Base64String {
    let result = Base64String::encode(text.as_bytes());
    debug!("Encoded {} UTF-8 bytes as {} base64 characters", text.len(), result.len());
    result
}

pub fn decode_from_base64(base64: &str) -> Result<String, DecodeError> {
    let bytes = Base64String::parse(base64)?.decode()?;
    let text = String::from_utf8(bytes)?;
    debug!("Decoded {} base64 characters to {} UTF-8 bytes", base64.len(), text.len());
    Ok(text)
}

pub fn text_to_hex(text: &str) -> HexString {
    HexString::encode(text.as_bytes())
}

pub fn hex_to_text(hex: &str) -> Result<String, DecodeError> {
    let bytes = HexString::parse(hex)?.decode()?;
    let text = String::from_utf8(bytes)?;
    Ok(text)
}

/// Decodes standard Base64 to hex without interpreting the bytes as text.
pub fn base64_to_hex(base64: &str) -> Result<HexString, DecodeError> {
    let bytes = Base64String::parse(base64)?.decode()?;
    let result = HexString::encode(&bytes);
    debug!("Converted {} bytes from base64 to hex", bytes.len());
    Ok(result)
}

pub fn hex_to_base64(hex: &str) -> Result<Base64String, FormatError> {
    let bytes = HexString::parse(hex)?.decode()?;
    let result = Base64String::encode(&bytes);
    debug!("Converted {} bytes from hex to base64", bytes.len());
    Ok(result)
}

/// Converts a URL-safe Base64 credential, padded or not, to hex.
///
/// The input is checked against the URL-safe alphabet and its length class
/// before translation, so a malformed credential fails here instead of
/// decoding to different bytes.
pub fn base64url_to_hex(base64url: &str) -> Result<HexString, FormatError> {
    let result = Base64UrlString::parse(base64url)
        .and_then(|value| value.decode())
        .map(HexString::encode);
    match &result {
        Ok(hex) => debug!("Converted {} bytes from base64url to hex", hex.len() / 2),
        Err(e) => warn!("Rejected base64url input of length {}: {}", base64url.len(), e),
    }
    result
}

pub fn hex_to_base64url(hex: &str) -> Result<Base64UrlString, FormatError> {
    let bytes = HexString::parse(hex)?.decode()?;
    Ok(Base64UrlString::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Encoding;
    use crate::error::ErrorKind;

    #[test]
    fn encodes_multi_byte_text() {
        assert_eq!(encode_to_base64("test1234").as_str(), "dGVzdDEyMzQ=");
        assert_eq!(encode_to_base64("✓").as_str(), "4pyT");
        assert_eq!(encode_to_base64("™“").as_str(), "4oSi4oCc");
        assert_eq!(encode_to_base64("😀").as_str(), "8J+YgA==");
        assert_eq!(encode_to_base64("").as_str(), "");
    }

    #[test]
    fn decodes_padded_and_unpadded() {
        assert_eq!(decode_from_base64("dGVzdDEyMzQ=").unwrap(), "test1234");
        assert_eq!(decode_from_base64("dGVzdDEyMzQ").unwrap(), "test1234");
        assert_eq!(decode_from_base64("4pyT").unwrap(), "✓");
        assert_eq!(decode_from_base64("4oSi4oCc").unwrap(), "™“");
        assert_eq!(decode_from_base64("8J+YgA==").unwrap(), "😀");
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        // Overlong encoding of U+0000, a bare continuation byte, and 0xff.
        for input in ["wIA=", "gA==", "/w=="] {
            let error = decode_from_base64(input).unwrap_err();
            assert!(matches!(error, DecodeError::InvalidUtf8(_)), "{}", input);
            assert_eq!(error.kind(), ErrorKind::Decode);
        }
    }

    #[test]
    fn decode_rejects_malformed_base64() {
        let error = decode_from_base64("dGVzd").unwrap_err();
        assert_eq!(
            error,
            DecodeError::Format(FormatError::InvalidLength {
                encoding: Encoding::Base64,
                length: 5,
            })
        );
        assert_eq!(error.kind(), ErrorKind::Format);
        assert!(decode_from_base64("dGVz*DEy").is_err());
    }

    #[test]
    fn text_to_hex_is_lowercase_utf8() {
        assert_eq!(text_to_hex("1234567890").as_str(), "31323334353637383930");
        assert_eq!(text_to_hex("!@#$%^&*").as_str(), "21402324255e262a");
        assert_eq!(text_to_hex("✓").as_str(), "e29c93");
        assert_eq!(text_to_hex("😀").as_str(), "f09f9880");
    }

    #[test]
    fn hex_to_text_accepts_mixed_case() {
        assert_eq!(hex_to_text("E29C93").unwrap(), "✓");
        assert_eq!(hex_to_text("").unwrap(), "");
        assert!(matches!(hex_to_text("c0"), Err(DecodeError::InvalidUtf8(_))));
        assert!(matches!(hex_to_text("e29c9"), Err(DecodeError::Format(_))));
    }

    #[test]
    fn base64_and_hex_agree() {
        assert_eq!(base64_to_hex("WkVVUw==").unwrap().as_str(), "5a455553");
        assert_eq!(base64_to_hex("WkVVUw").unwrap().as_str(), "5a455553");
        assert_eq!(hex_to_base64("5a455553").unwrap().as_str(), "WkVVUw==");
        assert_eq!(hex_to_base64("5A455553").unwrap().as_str(), "WkVVUw==");
    }

    #[test]
    fn base64_to_hex_keeps_binary_payloads() {
        assert_eq!(base64_to_hex("7aCA").unwrap().as_str(), "eda080");
        assert_eq!(base64_to_hex("+/8=").unwrap().as_str(), "fbff");
    }

    #[test]
    fn hex_to_base64_rejects_malformed_hex() {
        assert_eq!(
            hex_to_base64("5a45555"),
            Err(FormatError::InvalidLength {
                encoding: Encoding::Hex,
                length: 7,
            })
        );
        assert!(matches!(
            hex_to_base64("5g"),
            Err(FormatError::InvalidCharacter { character: 'g', .. })
        ));
    }

    #[test]
    fn base64url_to_hex_restores_padding() {
        assert_eq!(base64url_to_hex("-_8").unwrap().as_str(), "fbff");
        assert_eq!(base64url_to_hex("-_8=").unwrap().as_str(), "fbff");
        assert_eq!(base64url_to_hex("WkVVUw").unwrap().as_str(), "5a455553");
        assert_eq!(base64url_to_hex("").unwrap().as_str(), "");
    }

    #[test]
    fn base64url_to_hex_validates_before_decoding() {
        assert_eq!(
            base64url_to_hex("AgEDb"),
            Err(FormatError::InvalidLength {
                encoding: Encoding::Base64Url,
                length: 5,
            })
        );
        assert_eq!(
            base64url_to_hex("+/8"),
            Err(FormatError::InvalidCharacter {
                encoding: Encoding::Base64Url,
                character: '+',
                offset: 0,
            })
        );
        assert!(base64url_to_hex("Ag E").is_err());
    }

    #[test]
    fn failures_are_repeatable() {
        for input in ["AgEDb", "+/8", "Wk=V"] {
            let first = base64url_to_hex(input).unwrap_err();
            let second = base64url_to_hex(input).unwrap_err();
            assert_eq!(first, second);
            assert_eq!(first.kind(), second.kind());
        }
        assert_eq!(decode_from_base64("gA==").unwrap_err(), decode_from_base64("gA==").unwrap_err());
    }

    #[test]
    fn hex_to_base64url_is_unpadded() {
        assert_eq!(hex_to_base64url("fbff").unwrap().as_str(), "-_8");
        assert!(hex_to_base64url("fbf").is_err());
    }
}
