use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Error decoding: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Error decoding: result is not valid UTF-8 ({0})")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alphabet {
    #[default]
    Standard,
    /// `-` and `_` instead of `+` and `/`, without padding.
    UrlSafe,
}

impl Alphabet {
    pub fn label(self) -> &'static str {
        match self {
            Alphabet::Standard => "Standard",
            Alphabet::UrlSafe => "URL-safe",
        }
    }
}

/// Encode the UTF-8 bytes of `text`.
pub fn encode(text: &str, alphabet: Alphabet) -> String {
    match alphabet {
        Alphabet::Standard => STANDARD.encode(text.as_bytes()),
        Alphabet::UrlSafe => URL_SAFE_NO_PAD.encode(text.as_bytes()),
    }
}

/// Decode into UTF-8 text. ASCII whitespace in the input is skipped.
pub fn decode(input: &str, alphabet: Alphabet) -> Result<String, CodecError> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = match alphabet {
        Alphabet::Standard => STANDARD.decode(compact.as_bytes())?,
        Alphabet::UrlSafe => URL_SAFE_NO_PAD.decode(compact.trim_end_matches('=').as_bytes())?,
    };

    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_utf8_text() {
        assert_eq!(encode("hello", Alphabet::Standard), "aGVsbG8=");
        assert_eq!(encode("", Alphabet::Standard), "");
        assert_eq!(encode("héllo ✓", Alphabet::Standard), "aMOpbGxvIOKckw==");
    }

    #[test]
    fn url_safe_has_no_padding_or_plus() {
        assert_eq!(encode("??>", Alphabet::Standard), "Pz8+");
        assert_eq!(encode("??>", Alphabet::UrlSafe), "Pz8-");
        assert_eq!(encode("hello", Alphabet::UrlSafe), "aGVsbG8");
    }

    #[test]
    fn decode_skips_whitespace() {
        assert_eq!(decode(" aGVs\nbG8= ", Alphabet::Standard).unwrap(), "hello");
        assert_eq!(decode("aMOpbGxvIOKckw==", Alphabet::Standard).unwrap(), "héllo ✓");
        assert_eq!(decode("aGVsbG8=", Alphabet::UrlSafe).unwrap(), "hello");
    }

    #[test]
    fn decode_rejects_bad_alphabet() {
        let err = decode("not base64!", Alphabet::Standard).unwrap_err();
        assert!(matches!(err, CodecError::Base64(_)));
        assert!(err.to_string().starts_with("Error decoding: "));
    }

    #[test]
    fn decode_rejects_non_utf8_bytes() {
        // 0xff 0xfe
        let err = decode("//4=", Alphabet::Standard).unwrap_err();
        assert!(matches!(err, CodecError::Utf8(_)));
    }
}
