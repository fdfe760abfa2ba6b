//! Legacy code to MiniMessage transliteration.
//!
//! The scanner makes a single pass over the input and keeps a stack of the
//! tags it has opened so that every tag is closed again, innermost first.
//!
//! ## Stale color entries
//!
//! When a new color replaces the current one, the closing tag for the old
//! color is always written, but the old color is only popped from the stack if
//! it is the innermost open tag. After `&a&lX&bY` the stack still holds
//! `green` beneath `bold`, so the end of the input closes it a second time:
//!
//! ```text
//! <green><bold>X</green><aqua>Y</aqua></bold></green>
//! ```
//!
//! Legacy tooling produces and consumes exactly this output, so it is kept.

use tracing::trace;

use crate::codes::LegacyCode;

/// Convert text containing legacy codes into MiniMessage markup.
///
/// `code_identifier` is the character that introduces a code, usually
/// [`SECTION_SIGN`](crate::SECTION_SIGN) or [`AMPERSAND`](crate::AMPERSAND).
/// Code characters are matched case-insensitively. Unrecognized codes, and an
/// identifier at the very end of the input, are copied through unchanged.
///
/// # Examples
///
/// ```
/// use retrohue::to_mini_message;
///
/// assert_eq!(to_mini_message("&aHello!", '&'), "<green>Hello!</green>");
/// assert_eq!(to_mini_message("&a&lHi", '&'), "<green><bold>Hi</bold></green>");
/// assert_eq!(to_mini_message("&p", '&'), "&p");
/// ```
pub fn to_mini_message(input: &str, code_identifier: char) -> String {
    let mut needle = [0u8; 4];
    let needle = code_identifier.encode_utf8(&mut needle);
    if memchr::memmem::find(input.as_bytes(), needle.as_bytes()).is_none() {
        return input.to_owned();
    }

    let mut result = String::with_capacity(input.len() + input.len() / 2);
    // Innermost tag last.
    let mut open_tags: Vec<&'static str> = Vec::new();
    let mut current_color: Option<&'static str> = None;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != code_identifier {
            result.push(c);
            continue;
        }
        let Some(code_char) = chars.next() else {
            result.push(c);
            break;
        };

        let Some(code) = LegacyCode::from_char(code_char) else {
            trace!(code = %code_char, "unrecognized legacy code kept as text");
            result.push(c);
            result.push(code_char);
            continue;
        };

        match code.tag_name() {
            Some(name) if matches!(code, LegacyCode::Color(_)) => {
                if let Some(previous) = current_color {
                    push_close(&mut result, previous);
                    if open_tags.last() == Some(&previous) {
                        open_tags.pop();
                    }
                }
                current_color = Some(name);
                push_open(&mut result, name);
                open_tags.push(name);
            }
            Some(name) => {
                if !open_tags.contains(&name) {
                    push_open(&mut result, name);
                    open_tags.push(name);
                }
            }
            None => {
                close_all(&mut result, &mut open_tags);
                current_color = None;
            }
        }
    }

    close_all(&mut result, &mut open_tags);
    result
}

fn push_open(buf: &mut String, name: &str) {
    buf.push('<');
    buf.push_str(name);
    buf.push('>');
}

fn push_close(buf: &mut String, name: &str) {
    buf.push_str("</");
    buf.push_str(name);
    buf.push('>');
}

fn close_all(buf: &mut String, open_tags: &mut Vec<&'static str>) {
    while let Some(name) = open_tags.pop() {
        push_close(buf, name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::SECTION_SIGN;
    use crate::{Decoration, NamedColor};
    use proptest::prelude::*;

    fn count_tags(output: &str, name: &str) -> (usize, usize) {
        let opens = output.matches(&format!("<{name}>")).count();
        let closes = output.matches(&format!("</{name}>")).count();
        (opens, closes)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_mini_message("", '&'), "");
    }

    #[test]
    fn test_single_color() {
        assert_eq!(to_mini_message("&aHello!", '&'), "<green>Hello!</green>");
    }

    #[test]
    fn test_color_then_style() {
        assert_eq!(to_mini_message("&a&lHi", '&'), "<green><bold>Hi</bold></green>");
    }

    #[test]
    fn test_color_replaces_color() {
        assert_eq!(to_mini_message("&a&bHi", '&'), "<green></green><aqua>Hi</aqua>");
    }

    #[test]
    fn test_same_color_twice() {
        assert_eq!(to_mini_message("&aA&aB", '&'), "<green>A</green><green>B</green>");
    }

    #[test]
    fn test_unrecognized_code_keeps_case() {
        assert_eq!(to_mini_message("&p", '&'), "&p");
        assert_eq!(to_mini_message("&P", '&'), "&P");
        assert_eq!(to_mini_message("1 & 2", '&'), "1 & 2");
    }

    #[test]
    fn test_uppercase_codes() {
        assert_eq!(to_mini_message("&AHi&R!", '&'), "<green>Hi</green>!");
        assert_eq!(to_mini_message("&LHi", '&'), "<bold>Hi</bold>");
    }

    #[test]
    fn test_trailing_identifier() {
        assert_eq!(to_mini_message("abc&", '&'), "abc&");
        assert_eq!(to_mini_message("&", '&'), "&");
        assert_eq!(to_mini_message("&aX&", '&'), "<green>X&</green>");
    }

    #[test]
    fn test_doubled_identifier_consumes_pair() {
        assert_eq!(to_mini_message("&&a", '&'), "&&a");
        assert_eq!(to_mini_message("&&&a", '&'), "&&<green></green>");
    }

    #[test]
    fn test_style_is_idempotent() {
        assert_eq!(to_mini_message("&l&lHi", '&'), "<bold>Hi</bold>");
        assert_eq!(to_mini_message("&lA&a&lB", '&'), "<bold>A<green>B</green></bold>");
    }

    #[test]
    fn test_reset_closes_in_reverse_order() {
        assert_eq!(
            to_mini_message("&a&l&oX&rY", '&'),
            "<green><bold><italic>X</italic></bold></green>Y"
        );
    }

    #[test]
    fn test_reset_clears_color_slot() {
        // After a reset there is no color to close before the next one opens.
        assert_eq!(to_mini_message("&aX&r&bY", '&'), "<green>X</green><aqua>Y</aqua>");
    }

    #[test]
    fn test_reset_with_nothing_open() {
        assert_eq!(to_mini_message("&rPlain", '&'), "Plain");
    }

    #[test]
    fn test_stale_color_entry() {
        assert_eq!(
            to_mini_message("&a&lX&bY", '&'),
            "<green><bold>X</green><aqua>Y</aqua></bold></green>"
        );
    }

    #[test]
    fn test_stale_color_entry_closed_by_reset() {
        assert_eq!(
            to_mini_message("&a&lX&bY&rZ", '&'),
            "<green><bold>X</green><aqua>Y</aqua></bold></green>Z"
        );
    }

    #[test]
    fn test_section_sign_identifier() {
        assert_eq!(
            to_mini_message("\u{00a7}6Gold \u{00a7}nline", SECTION_SIGN),
            "<gold>Gold <underlined>line</underlined></gold>"
        );
        // The other identifier is plain text.
        assert_eq!(to_mini_message("&6Gold", SECTION_SIGN), "&6Gold");
    }

    #[test]
    fn test_every_table_entry() {
        for color in NamedColor::ALL {
            let input = format!("&{}x", color.code());
            assert_eq!(to_mini_message(&input, '&'), format!("<{0}>x</{0}>", color.name()));
        }
        for decoration in Decoration::ALL {
            let input = format!("&{}x", decoration.code());
            assert_eq!(to_mini_message(&input, '&'), format!("<{0}>x</{0}>", decoration.name()));
        }
    }

    #[test]
    fn test_multibyte_text_is_preserved() {
        assert_eq!(to_mini_message("&c\u{2764} h\u{00e9}", '&'), "<red>\u{2764} h\u{00e9}</red>");
    }

    fn legacy_text() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop::sample::select(vec!['&', '0', 'a', 'B', 'f', 'l', 'N', 'o', 'r', 'p', ' ', 'x']),
            0..40,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }

    fn color_only_text() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop::sample::select(vec!['&', '3', 'a', 'E', 'r', 'z', '.']),
            0..40,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_text_without_identifier_is_unchanged(s in "[^&]*") {
            prop_assert_eq!(to_mini_message(&s, '&'), s);
        }

        #[test]
        fn prop_color_only_output_is_balanced(s in color_only_text()) {
            let output = to_mini_message(&s, '&');
            let closes = output.matches("</").count();
            let opens = output.matches('<').count() - closes;
            prop_assert_eq!(opens, closes);
        }

        #[test]
        fn prop_every_opened_tag_is_closed(s in legacy_text()) {
            let output = to_mini_message(&s, '&');
            for decoration in Decoration::ALL {
                let (opens, closes) = count_tags(&output, decoration.name());
                prop_assert_eq!(opens, closes);
            }
            for color in NamedColor::ALL {
                let (opens, closes) = count_tags(&output, color.name());
                prop_assert!(closes >= opens);
            }
        }
    }
}
