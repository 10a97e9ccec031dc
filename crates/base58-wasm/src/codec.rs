//! JavaScript-facing codec bound to one alphabet.

use base58_core::{BigUint, Error, Input};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::report::DecodeReport;

/// Base58 codec for a chosen alphabet.
#[wasm_bindgen]
pub struct Codec {
    /// The alphabet used by every operation.
    alphabet: base58_core::Alphabet,
}

#[wasm_bindgen]
impl Codec {
    /// Create a codec for the named alphabet ("bitcoin" or "ripple").
    #[wasm_bindgen(constructor)]
    pub fn new(alphabet: &str) -> Result<Codec, JsValue> {
        let alphabet = base58_core::Alphabet::from_name(alphabet)
            .ok_or_else(|| JsValue::from_str("Invalid alphabet"))?;

        Ok(Codec { alphabet })
    }

    /// Get the alphabet name.
    #[wasm_bindgen(getter)]
    pub fn alphabet(&self) -> String {
        self.alphabet.name().to_string()
    }

    /// Get the 58 symbols in order.
    #[wasm_bindgen(getter)]
    pub fn symbols(&self) -> String {
        self.alphabet.as_str().to_string()
    }

    /// Encode raw bytes.
    #[wasm_bindgen]
    pub fn encode(&self, payload: &[u8]) -> String {
        base58_core::encode(payload, &self.alphabet)
    }

    /// Encode ASCII text.
    #[wasm_bindgen]
    pub fn encode_text(&self, text: &str) -> Result<String, JsValue> {
        base58_core::encode_input(text, &self.alphabet).map_err(|e| reject("encode", e))
    }

    /// Decode a string or `Uint8Array` of symbols.
    #[wasm_bindgen]
    pub fn decode(&self, input: JsValue) -> Result<Vec<u8>, JsValue> {
        let input = OwnedInput::from_js(&input)?;
        base58_core::decode(input.as_input(), &self.alphabet).map_err(|e| reject("decode", e))
    }

    /// Encode bytes with a 4-byte double-SHA256 checksum.
    #[wasm_bindgen]
    pub fn encode_check(&self, payload: &[u8]) -> String {
        base58_core::encode_check(payload, &self.alphabet)
    }

    /// Decode and verify a checksummed string or `Uint8Array`.
    #[wasm_bindgen]
    pub fn decode_check(&self, input: JsValue) -> Result<Vec<u8>, JsValue> {
        let input = OwnedInput::from_js(&input)?;
        base58_core::decode_check(input.as_input(), &self.alphabet)
            .map_err(|e| reject("decode_check", e))
    }

    /// Encode a hex-encoded payload.
    #[wasm_bindgen]
    pub fn encode_hex(&self, payload_hex: &str) -> Result<String, JsValue> {
        let payload = hex::decode(payload_hex.trim())
            .map_err(|e| JsValue::from_str(&format!("Invalid hex: {}", e)))?;

        Ok(base58_core::encode(&payload, &self.alphabet))
    }

    /// Decode to a hex string.
    #[wasm_bindgen]
    pub fn decode_to_hex(&self, text: &str) -> Result<String, JsValue> {
        let payload = base58_core::decode(text, &self.alphabet).map_err(|e| reject("decode", e))?;
        Ok(hex::encode(payload))
    }

    /// Encode a non-negative decimal integer.
    ///
    /// # Arguments
    /// * `decimal` - Decimal digits of the integer
    /// * `emit_zero` - Whether zero encodes as the zero-symbol instead of ""
    #[wasm_bindgen]
    pub fn encode_int(&self, decimal: &str, emit_zero: bool) -> Result<String, JsValue> {
        let n: BigUint = decimal.trim().parse().map_err(|e| reject("encode_int", e))?;
        Ok(base58_core::encode_int(&n, &self.alphabet, emit_zero))
    }

    /// Decode symbols to an integer, returned as decimal digits.
    #[wasm_bindgen]
    pub fn decode_int(&self, text: &str) -> Result<String, JsValue> {
        let n = base58_core::decode_int(text, &self.alphabet).map_err(|e| reject("decode_int", e))?;
        Ok(n.to_string())
    }

    /// Describe what a string decodes to, including checksum validity.
    #[wasm_bindgen]
    pub fn inspect(&self, text: &str) -> Result<JsValue, JsValue> {
        DecodeReport::inspect(text, &self.alphabet)
            .map_err(|e| reject("inspect", e))?
            .to_js()
    }
}

/// Decoder input copied out of a JS string or `Uint8Array`.
enum OwnedInput {
    Text(String),
    Bytes(Vec<u8>),
}

impl OwnedInput {
    fn from_js(value: &JsValue) -> Result<Self, JsValue> {
        if let Some(text) = value.as_string() {
            Ok(OwnedInput::Text(text))
        } else if value.is_instance_of::<js_sys::Uint8Array>() {
            Ok(OwnedInput::Bytes(js_sys::Uint8Array::new(value).to_vec()))
        } else {
            Err(JsValue::from_str("Expected a string or Uint8Array"))
        }
    }

    fn as_input(&self) -> Input<'_> {
        match self {
            OwnedInput::Text(text) => Input::Text(text),
            OwnedInput::Bytes(bytes) => Input::Bytes(bytes),
        }
    }
}

/// Log a rejected operation and turn the error into a JS exception value.
fn reject(operation: &str, error: Error) -> JsValue {
    let message = format!("{} failed: {}", operation, error);
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
