//! The named color space shared by legacy codes and markup tags.
//!
//! Legacy formatting only knows sixteen colors ([`NamedColor`]). Markup can
//! carry any RGB value ([`TextColor`]), so this module also provides the
//! mapping from an arbitrary color back to the closest named one.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TextColor {
    /// Create a color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value. The high byte is ignored.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// The packed `0xRRGGBB` value.
    pub const fn value(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parse a `#RRGGBB` string. Digits are case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use retrohue::TextColor;
    ///
    /// assert_eq!(TextColor::from_hex_str("#ff5555"), Some(TextColor::rgb(255, 85, 85)));
    /// assert_eq!(TextColor::from_hex_str("ff5555"), None);
    /// assert_eq!(TextColor::from_hex_str("#ff55"), None);
    /// ```
    pub fn from_hex_str(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(hex, 16).ok().map(Self::from_u32)
    }

    /// Convert to hue/saturation/value, each component in `[0, 1]`.
    pub fn to_hsv(self) -> Hsv {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;

        let max = r.max(g.max(b));
        let min = r.min(g.min(b));
        let delta = max - min;

        let s = if max != 0.0 { delta / max } else { 0.0 };
        if s == 0.0 {
            return Hsv { h: 0.0, s, v: max };
        }

        let mut h = if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        h *= 60.0;
        if h < 0.0 {
            h += 360.0;
        }

        Hsv {
            h: h / 360.0,
            s,
            v: max,
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(feature = "serde")]
impl Serialize for TextColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A color in HSV space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Squared distance with hue weighted three times as heavily as
    /// saturation and value. Hue wraps around.
    pub fn distance(&self, other: &Hsv) -> f32 {
        let hue = (self.h - other.h).abs();
        let hue_distance = 3.0 * hue.min(1.0 - hue);
        let saturation_diff = self.s - other.s;
        let value_diff = self.v - other.v;
        hue_distance * hue_distance + saturation_diff * saturation_diff + value_diff * value_diff
    }
}

/// One of the sixteen legacy colors.
///
/// Variants are declared in legacy code order (`0` through `f`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "snake_case"))]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    /// All named colors in legacy code order.
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// Look up a color by its legacy code character.
    ///
    /// Only lowercase hex digits match; callers that want case-insensitive
    /// lookup lowercase first.
    pub const fn from_code(code: char) -> Option<Self> {
        Some(match code {
            '0' => NamedColor::Black,
            '1' => NamedColor::DarkBlue,
            '2' => NamedColor::DarkGreen,
            '3' => NamedColor::DarkAqua,
            '4' => NamedColor::DarkRed,
            '5' => NamedColor::DarkPurple,
            '6' => NamedColor::Gold,
            '7' => NamedColor::Gray,
            '8' => NamedColor::DarkGray,
            '9' => NamedColor::Blue,
            'a' => NamedColor::Green,
            'b' => NamedColor::Aqua,
            'c' => NamedColor::Red,
            'd' => NamedColor::LightPurple,
            'e' => NamedColor::Yellow,
            'f' => NamedColor::White,
            _ => return None,
        })
    }

    /// The legacy code character for this color.
    pub const fn code(self) -> char {
        match self {
            NamedColor::Black => '0',
            NamedColor::DarkBlue => '1',
            NamedColor::DarkGreen => '2',
            NamedColor::DarkAqua => '3',
            NamedColor::DarkRed => '4',
            NamedColor::DarkPurple => '5',
            NamedColor::Gold => '6',
            NamedColor::Gray => '7',
            NamedColor::DarkGray => '8',
            NamedColor::Blue => '9',
            NamedColor::Green => 'a',
            NamedColor::Aqua => 'b',
            NamedColor::Red => 'c',
            NamedColor::LightPurple => 'd',
            NamedColor::Yellow => 'e',
            NamedColor::White => 'f',
        }
    }

    /// The markup tag name for this color.
    pub const fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// Look up a color by tag name. Accepts the `grey` spellings as aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "grey" => Some(NamedColor::Gray),
            "dark_grey" => Some(NamedColor::DarkGray),
            _ => Self::ALL.into_iter().find(|c| c.name() == name),
        }
    }

    /// The RGB value of this color.
    pub const fn value(self) -> TextColor {
        TextColor::from_u32(match self {
            NamedColor::Black => 0x000000,
            NamedColor::DarkBlue => 0x0000aa,
            NamedColor::DarkGreen => 0x00aa00,
            NamedColor::DarkAqua => 0x00aaaa,
            NamedColor::DarkRed => 0xaa0000,
            NamedColor::DarkPurple => 0xaa00aa,
            NamedColor::Gold => 0xffaa00,
            NamedColor::Gray => 0xaaaaaa,
            NamedColor::DarkGray => 0x555555,
            NamedColor::Blue => 0x5555ff,
            NamedColor::Green => 0x55ff55,
            NamedColor::Aqua => 0x55ffff,
            NamedColor::Red => 0xff5555,
            NamedColor::LightPurple => 0xff55ff,
            NamedColor::Yellow => 0xffff55,
            NamedColor::White => 0xffffff,
        })
    }

    /// Find the named color closest to `color`.
    ///
    /// Exact RGB matches win outright. Otherwise the color with the smallest
    /// [`Hsv::distance`] is chosen; on ties the earlier color in code order
    /// wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use retrohue::{NamedColor, TextColor};
    ///
    /// assert_eq!(NamedColor::nearest_to(TextColor::rgb(0x55, 0xff, 0x55)), NamedColor::Green);
    /// assert_eq!(NamedColor::nearest_to(TextColor::rgb(0, 0, 0xcc)), NamedColor::DarkBlue);
    /// ```
    pub fn nearest_to(color: TextColor) -> Self {
        if let Some(exact) = Self::ALL.into_iter().find(|c| c.value() == color) {
            return exact;
        }

        let target = color.to_hsv();
        let mut nearest = NamedColor::Black;
        let mut nearest_distance = f32::MAX;
        for candidate in Self::ALL {
            let distance = target.distance(&candidate.value().to_hsv());
            if distance < nearest_distance {
                nearest = candidate;
                nearest_distance = distance;
            }
            if distance == 0.0 {
                break;
            }
        }
        nearest
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<NamedColor> for TextColor {
    fn from(color: NamedColor) -> Self {
        color.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_covers_all_colors() {
        for color in NamedColor::ALL {
            assert_eq!(NamedColor::from_code(color.code()), Some(color));
        }
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert_eq!(NamedColor::from_code('a'), Some(NamedColor::Green));
        assert_eq!(NamedColor::from_code('A'), None);
        assert_eq!(NamedColor::from_code('g'), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(NamedColor::from_name("light_purple"), Some(NamedColor::LightPurple));
        assert_eq!(NamedColor::from_name("grey"), Some(NamedColor::Gray));
        assert_eq!(NamedColor::from_name("dark_grey"), Some(NamedColor::DarkGray));
        assert_eq!(NamedColor::from_name("purple"), None);
    }

    #[test]
    fn test_codes_four_and_five() {
        assert_eq!(NamedColor::from_code('4'), Some(NamedColor::DarkRed));
        assert_eq!(NamedColor::from_code('5'), Some(NamedColor::DarkPurple));
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(TextColor::from_hex_str("#ABCDEF"), Some(TextColor::rgb(0xab, 0xcd, 0xef)));
        assert_eq!(TextColor::from_hex_str("#abcdeg"), None);
        assert_eq!(TextColor::from_hex_str("#+12345"), None);
        assert_eq!(TextColor::from_hex_str("#1234567"), None);
        assert_eq!(TextColor::from_hex_str(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(TextColor::rgb(0, 128, 255).to_string(), "#0080ff");
        assert_eq!(NamedColor::DarkAqua.to_string(), "dark_aqua");
    }

    #[test]
    fn test_hsv_grayscale_has_no_saturation() {
        let hsv = TextColor::rgb(0xaa, 0xaa, 0xaa).to_hsv();
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 0.0);
        assert!((hsv.v - 0xaa as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_hsv_primary_hues() {
        assert!((TextColor::rgb(0, 255, 0).to_hsv().h - 1.0 / 3.0).abs() < 1e-6);
        assert!((TextColor::rgb(0, 0, 255).to_hsv().h - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(TextColor::rgb(255, 0, 0).to_hsv().h, 0.0);
    }

    #[test]
    fn test_hue_distance_wraps() {
        let a = Hsv { h: 0.02, s: 1.0, v: 1.0 };
        let b = Hsv { h: 0.98, s: 1.0, v: 1.0 };
        let expected = (3.0f32 * 0.04).powi(2);
        assert!((a.distance(&b) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_nearest_exact() {
        for color in NamedColor::ALL {
            assert_eq!(NamedColor::nearest_to(color.value()), color);
        }
    }

    #[test]
    fn test_nearest_approximate() {
        assert_eq!(NamedColor::nearest_to(TextColor::rgb(0, 0, 0xcc)), NamedColor::DarkBlue);
        assert_eq!(NamedColor::nearest_to(TextColor::rgb(0xfe, 0xfe, 0xfe)), NamedColor::White);
        assert_eq!(NamedColor::nearest_to(TextColor::rgb(0xff, 0xaa, 0x01)), NamedColor::Gold);
        assert_eq!(NamedColor::nearest_to(TextColor::rgb(0x10, 0x10, 0x10)), NamedColor::Black);
    }
}
