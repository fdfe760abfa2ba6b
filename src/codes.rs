//! Legacy formatting code tables.
//!
//! A legacy code is a code identifier followed by one character:
//!
//! - `0`-`9`, `a`-`f`: a [`NamedColor`]
//! - `k`, `l`, `m`, `n`, `o`: a [`Decoration`]
//! - `r`: reset
//!
//! The tables are fixed and case-insensitive through [`LegacyCode::from_char`].

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::color::NamedColor;

/// The canonical legacy code identifier (`§`, U+00A7).
pub const SECTION_SIGN: char = '\u{00a7}';

/// The alternate code identifier used by most plugin configs.
pub const AMPERSAND: char = '&';

/// The code character that closes everything.
pub const RESET_CODE: char = 'r';

/// A text decoration. Decorations toggle independently of each other and of
/// the current color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum Decoration {
    Obfuscated,
    Bold,
    Strikethrough,
    Underlined,
    Italic,
}

impl Decoration {
    /// All decorations in legacy code order.
    pub const ALL: [Decoration; 5] = [
        Decoration::Obfuscated,
        Decoration::Bold,
        Decoration::Strikethrough,
        Decoration::Underlined,
        Decoration::Italic,
    ];

    /// Look up a decoration by its (lowercase) legacy code character.
    pub const fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'k' => Decoration::Obfuscated,
            'l' => Decoration::Bold,
            'm' => Decoration::Strikethrough,
            'n' => Decoration::Underlined,
            'o' => Decoration::Italic,
            _ => return None,
        })
    }

    pub const fn code(self) -> char {
        match self {
            Decoration::Obfuscated => 'k',
            Decoration::Bold => 'l',
            Decoration::Strikethrough => 'm',
            Decoration::Underlined => 'n',
            Decoration::Italic => 'o',
        }
    }

    /// The markup tag name for this decoration.
    pub const fn name(self) -> &'static str {
        match self {
            Decoration::Obfuscated => "obfuscated",
            Decoration::Bold => "bold",
            Decoration::Strikethrough => "strikethrough",
            Decoration::Underlined => "underlined",
            Decoration::Italic => "italic",
        }
    }

    /// Look up a decoration by tag name, including the short aliases
    /// markup authors commonly use (`b`, `i`, `em`, `u`, `st`, `obf`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "b" => Some(Decoration::Bold),
            "i" | "em" => Some(Decoration::Italic),
            "u" => Some(Decoration::Underlined),
            "st" => Some(Decoration::Strikethrough),
            "obf" => Some(Decoration::Obfuscated),
            _ => Self::ALL.into_iter().find(|d| d.name() == name),
        }
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a legacy code character means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyCode {
    Color(NamedColor),
    Decoration(Decoration),
    Reset,
}

impl LegacyCode {
    /// Classify a code character. Lookup is case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use retrohue::{Decoration, LegacyCode, NamedColor};
    ///
    /// assert_eq!(LegacyCode::from_char('A'), Some(LegacyCode::Color(NamedColor::Green)));
    /// assert_eq!(LegacyCode::from_char('l'), Some(LegacyCode::Decoration(Decoration::Bold)));
    /// assert_eq!(LegacyCode::from_char('R'), Some(LegacyCode::Reset));
    /// assert_eq!(LegacyCode::from_char('p'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        let lowered = lowercase(c);
        if let Some(color) = NamedColor::from_code(lowered) {
            Some(LegacyCode::Color(color))
        } else if let Some(decoration) = Decoration::from_code(lowered) {
            Some(LegacyCode::Decoration(decoration))
        } else if lowered == RESET_CODE {
            Some(LegacyCode::Reset)
        } else {
            None
        }
    }

    /// The tag name this code opens, if any.
    pub const fn tag_name(self) -> Option<&'static str> {
        match self {
            LegacyCode::Color(color) => Some(color.name()),
            LegacyCode::Decoration(decoration) => Some(decoration.name()),
            LegacyCode::Reset => None,
        }
    }
}

/// Simple (single character) lowercase mapping. Characters whose lowercase
/// form expands to several characters are returned unchanged.
fn lowercase(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
