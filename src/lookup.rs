//! Standalone color lookups.
//!
//! These are plain table lookups and never touch the transliterator's state.
//! Absence means "no conversion available", not a failure.

use crate::codes::AMPERSAND;
use crate::color::{NamedColor, TextColor};

/// Convert a two-character legacy color code such as `&a` to a named color.
///
/// The code must be exactly `prefix` followed by a lowercase hex digit.
///
/// # Examples
///
/// ```
/// use retrohue::{NamedColor, convert_color_code};
///
/// assert_eq!(convert_color_code("&a", '&'), Some(NamedColor::Green));
/// assert_eq!(convert_color_code("&p", '&'), None);
/// assert_eq!(convert_color_code("abc123", '&'), None);
/// ```
pub fn convert_color_code(code: &str, prefix: char) -> Option<NamedColor> {
    let mut chars = code.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(first), Some(code_char), None) if first == prefix => NamedColor::from_code(code_char),
        _ => None,
    }
}

/// [`convert_color_code`] with the `&` prefix.
pub fn convert_color_code_default(code: &str) -> Option<NamedColor> {
    convert_color_code(code, AMPERSAND)
}

/// Map a `#RRGGBB` string to the nearest named color.
///
/// # Examples
///
/// ```
/// use retrohue::{NamedColor, named_color_from_hex};
///
/// assert_eq!(named_color_from_hex("#ffaa00"), Some(NamedColor::Gold));
/// assert_eq!(named_color_from_hex("ffaa00"), None);
/// ```
pub fn named_color_from_hex(hex: &str) -> Option<NamedColor> {
    if hex.len() != 7 || !hex.starts_with('#') {
        return None;
    }
    TextColor::from_hex_str(hex).map(NamedColor::nearest_to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_code_lookup() {
        assert_eq!(convert_color_code("&a", '&'), Some(NamedColor::Green));
        assert_eq!(convert_color_code("\u{00a7}0", '\u{00a7}'), Some(NamedColor::Black));
        assert_eq!(convert_color_code_default("&f"), Some(NamedColor::White));
    }

    #[test]
    fn test_color_code_not_found() {
        assert_eq!(convert_color_code("&p", '&'), None);
        // Styles and reset are not colors.
        assert_eq!(convert_color_code("&l", '&'), None);
        assert_eq!(convert_color_code("&r", '&'), None);
        assert_eq!(convert_color_code("&A", '&'), None);
    }

    #[test]
    fn test_color_code_wrong_shape() {
        assert_eq!(convert_color_code("abc123", '&'), None);
        assert_eq!(convert_color_code("", '&'), None);
        assert_eq!(convert_color_code("&", '&'), None);
        assert_eq!(convert_color_code("&aa", '&'), None);
        assert_eq!(convert_color_code("\u{00a7}a", '&'), None);
    }

    #[test]
    fn test_hex_lookup() {
        assert_eq!(named_color_from_hex("#55FF55"), Some(NamedColor::Green));
        assert_eq!(named_color_from_hex("#0000cc"), Some(NamedColor::DarkBlue));
    }

    #[test]
    fn test_hex_lookup_rejects_bad_shape() {
        assert_eq!(named_color_from_hex(""), None);
        assert_eq!(named_color_from_hex("#fff"), None);
        assert_eq!(named_color_from_hex("#ffffff0"), None);
        assert_eq!(named_color_from_hex("ffffff0"), None);
        assert_eq!(named_color_from_hex("#gggggg"), None);
    }
}
