//! WASM bindings for browser-based conversion.
//!
//! This module exposes the conversion and lookup functions to JavaScript via
//! wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::codes::SECTION_SIGN;
use crate::component::Deserializer;
use crate::minimessage::MiniMessage;

/// Route panics to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert legacy codes to MiniMessage markup.
///
/// `code_identifier` defaults to `§` when omitted.
#[wasm_bindgen]
pub fn to_mini_message(input: &str, code_identifier: Option<char>) -> String {
    crate::to_mini_message(input, code_identifier.unwrap_or(SECTION_SIGN))
}

/// Remove legacy codes entirely, returning plain text.
#[wasm_bindgen]
pub fn strip_codes(input: &str, code_identifier: Option<char>) -> Result<String, JsValue> {
    let markup = crate::to_mini_message(input, code_identifier.unwrap_or(SECTION_SIGN));
    let component = MiniMessage::new()
        .deserialize(&markup)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(component.to_plain_text())
}

/// Look up a two-character color code; returns the color name.
#[wasm_bindgen]
pub fn convert_color_code(code: &str, prefix: Option<char>) -> Option<String> {
    crate::convert_color_code(code, prefix.unwrap_or(crate::AMPERSAND))
        .map(|c| c.name().to_string())
}

/// Map a `#RRGGBB` string to the nearest color name.
#[wasm_bindgen]
pub fn named_color_from_hex(hex: &str) -> Option<String> {
    crate::named_color_from_hex(hex).map(|c| c.name().to_string())
}
