//! WebAssembly bindings for the base58 codec.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Base58 encoding and decoding with the Bitcoin or Ripple alphabet
//! - Base58Check encoding and checksum verification
//! - Integer and hex conveniences on top of the codec
//! - Inspection reports describing a decoded string

use wasm_bindgen::prelude::*;

pub mod codec;
pub mod report;

// Re-export main types for JS access
pub use codec::Codec;
pub use report::DecodeReport;

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
