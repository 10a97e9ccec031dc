//! Browser-side tests for the JS bindings; run with `wasm-pack test`.

#![cfg(target_arch = "wasm32")]

use base58_wasm::Codec;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_codec_roundtrip() {
    let codec = Codec::new("bitcoin").unwrap();
    assert_eq!(codec.alphabet(), "bitcoin");

    let text = codec.encode(b"\x00\x00hello");
    assert_eq!(text, "11Cn8eVZg");
    assert_eq!(codec.decode(JsValue::from_str(&text)).unwrap(), b"\x00\x00hello");
}

#[wasm_bindgen_test]
fn test_decode_accepts_bytes() {
    let codec = Codec::new("bitcoin").unwrap();
    let symbols = js_sys::Uint8Array::from(&b"Cn8eVZg"[..]);
    assert_eq!(codec.decode(symbols.into()).unwrap(), b"hello");
    assert!(codec.decode(JsValue::from_f64(1.0)).is_err());
}

#[wasm_bindgen_test]
fn test_checksum_and_errors() {
    let codec = Codec::new("ripple").unwrap();
    assert_eq!(codec.encode_check(&[0u8; 21]), "rrrrrrrrrrrrrrrrrrrrrhoLvTp");
    assert_eq!(
        codec.decode_check(JsValue::from_str("rrrrrrrrrrrrrrrrrrrrrhoLvTp")).unwrap(),
        vec![0u8; 21]
    );
    assert!(codec.decode_check(JsValue::from_str("rrrrrrrrrrrrrrrrrrrrrhoLvTr")).is_err());
    assert!(Codec::new("base64").is_err());
}

#[wasm_bindgen_test]
fn test_integer_helpers() {
    let bitcoin = Codec::new("bitcoin").unwrap();
    assert_eq!(
        bitcoin.decode_int("SatoshiNakamoto").unwrap(),
        "124728751148945267645137860"
    );
    assert_eq!(
        bitcoin.encode_int("124728751148945267645137860", true).unwrap(),
        "SatoshiNakamoto"
    );
    assert_eq!(bitcoin.encode_int("0", true).unwrap(), "1");
    assert_eq!(bitcoin.encode_int("0", false).unwrap(), "");

    let ripple = Codec::new("xrp").unwrap();
    assert_eq!(ripple.decode_int("Phemex").unwrap(), "14481167745");
}

#[wasm_bindgen_test]
fn test_hex_helpers() {
    let codec = Codec::new("bitcoin").unwrap();
    assert_eq!(codec.encode_hex("68656c6c6f").unwrap(), "Cn8eVZg");
    assert_eq!(codec.decode_to_hex("11Cn8eVZg").unwrap(), "000068656c6c6f");
    assert!(codec.encode_hex("zz").is_err());
}
