//! Serializable decode reports handed to JavaScript.

use base58_core::{checksum, decode, Alphabet, Error, CHECKSUM_LEN};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// What a base58 string decodes to, with and without checksum verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeReport {
    /// Alphabet name used for decoding.
    pub alphabet: String,
    /// Full decoded payload (hex).
    pub payload_hex: String,
    /// Payload length in bytes.
    pub length: usize,
    /// Number of leading zero bytes.
    pub leading_zeros: usize,
    /// Whether the trailing 4 bytes are a valid Base58Check checksum.
    pub checksum_valid: bool,
    /// Payload without its checksum, when the checksum is valid.
    pub body_hex: Option<String>,
}

impl DecodeReport {
    /// Decode `text` and describe the result.
    ///
    /// A missing or wrong checksum is reported in the result rather than as
    /// an error; only text that is not base58 at all fails.
    pub fn inspect(text: &str, alphabet: &Alphabet) -> Result<Self, Error> {
        let payload = decode(text, alphabet)?;
        let body = payload
            .len()
            .checked_sub(CHECKSUM_LEN)
            .map(|body_len| payload.split_at(body_len))
            .filter(|(body, check)| checksum(body)[..] == check[..])
            .map(|(body, _)| body);

        Ok(DecodeReport {
            alphabet: alphabet.name().to_string(),
            payload_hex: hex::encode(&payload),
            length: payload.len(),
            leading_zeros: payload.iter().take_while(|&&b| b == 0).count(),
            checksum_valid: body.is_some(),
            body_hex: body.map(hex::encode),
        })
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_checksummed_address() {
        let address = "1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2";
        let report = DecodeReport::inspect(address, &Alphabet::BITCOIN).unwrap();

        assert_eq!(report.alphabet, "bitcoin");
        assert_eq!(report.length, 25);
        assert_eq!(report.leading_zeros, 1);
        assert!(report.checksum_valid);
        let body_hex = report.body_hex.unwrap();
        assert_eq!(body_hex.len(), 42);
        assert!(report.payload_hex.starts_with(&body_hex));
    }

    #[test]
    fn test_inspect_without_checksum() {
        let report = DecodeReport::inspect("11Cn8eVZg", &Alphabet::BITCOIN).unwrap();

        assert_eq!(report.payload_hex, "000068656c6c6f");
        assert_eq!(report.length, 7);
        assert_eq!(report.leading_zeros, 2);
        assert!(!report.checksum_valid);
        assert_eq!(report.body_hex, None);

        let short = DecodeReport::inspect("rr", &Alphabet::RIPPLE).unwrap();
        assert_eq!(short.length, 2);
        assert!(!short.checksum_valid);
    }

    #[test]
    fn test_inspect_wrong_checksum() {
        // Same address with the last symbol changed
        let address = "1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN3";
        let report = DecodeReport::inspect(address, &Alphabet::BITCOIN).unwrap();

        assert_eq!(report.length, 25);
        assert!(!report.checksum_valid);
        assert_eq!(report.body_hex, None);

        // Exactly one checksum and nothing else
        let bare = DecodeReport::inspect("3QJmnh", &Alphabet::BITCOIN).unwrap();
        assert!(bare.checksum_valid);
        assert_eq!(bare.body_hex.as_deref(), Some(""));
    }

    #[test]
    fn test_inspect_invalid_text() {
        let result = DecodeReport::inspect("Cn8eVZ0", &Alphabet::BITCOIN);
        assert_eq!(result, Err(Error::InvalidSymbol { symbol: b'0', position: 6 }));
    }

    #[test]
    fn test_report_serialization() {
        let report = DecodeReport::inspect("3QJmnh", &Alphabet::BITCOIN).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["alphabet"], "bitcoin");
        assert_eq!(json["payload_hex"], "5df6e0e2");
        assert_eq!(json["checksum_valid"], true);
        assert_eq!(json["body_hex"], "");

        let parsed: DecodeReport = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, report);
    }
}
