//! # retrohue
//!
//! Convert Minecraft-style legacy formatting codes (`§a`, `&l`, ...) into
//! MiniMessage markup, and optionally into a rich text [`Component`] tree.
//!
//! ## Features
//!
//! - Single-pass conversion that always closes the tags it opens
//! - Any code identifier (`§` by default, `&` is common in plugin configs)
//! - Two-character color code lookup and nearest-named-color mapping for hex colors
//! - A minimal MiniMessage deserializer/serializer, replaceable via [`Deserializer`]
//!
//! ## Quick Start
//!
//! ```
//! use retrohue::{AMPERSAND, to_mini_message};
//!
//! let markup = to_mini_message("&aGreen &lbold&r plain", AMPERSAND);
//! assert_eq!(markup, "<green>Green <bold>bold</bold></green> plain");
//! ```
//!
//! ## Rich Text
//!
//! ```
//! use retrohue::{Decoration, RetroHue};
//!
//! let rh = RetroHue::new().with_code_identifier('&');
//! let component = rh.convert_to_component("&a&lHi").unwrap();
//!
//! let green = &component.children[0];
//! let bold = &green.children[0];
//! assert!(bold.style.has_decoration(Decoration::Bold));
//! assert_eq!(component.to_plain_text(), "Hi");
//! ```

pub mod codes;
pub mod color;
pub mod component;
pub mod converter;
pub mod encoding;
pub mod error;
pub mod lookup;
pub mod minimessage;
pub mod transliterate;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use codes::{AMPERSAND, Decoration, LegacyCode, RESET_CODE, SECTION_SIGN};
pub use color::{Hsv, NamedColor, TextColor};
pub use component::{Component, Deserializer, Style};
pub use converter::RetroHue;
pub use encoding::{decode_text, read_text_file};
pub use error::{Error, Result};
pub use lookup::{convert_color_code, convert_color_code_default, named_color_from_hex};
pub use minimessage::MiniMessage;
pub use transliterate::to_mini_message;
