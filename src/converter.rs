//! The [`RetroHue`] converter.

use crate::codes::{AMPERSAND, SECTION_SIGN};
use crate::color::NamedColor;
use crate::component::Deserializer;
use crate::error::Result;
use crate::lookup;
use crate::minimessage::MiniMessage;
use crate::transliterate::to_mini_message;

/// Converts legacy-coded text to markup and on to rich text.
///
/// The default configuration uses `§` as the code identifier and a lenient
/// [`MiniMessage`] deserializer.
///
/// ```
/// use retrohue::RetroHue;
///
/// let rh = RetroHue::new().with_code_identifier('&');
/// assert_eq!(rh.convert_to_mini_message("&aHello!"), "<green>Hello!</green>");
///
/// let component = rh.convert_to_component("&aHello!").unwrap();
/// assert_eq!(component.to_plain_text(), "Hello!");
/// ```
#[derive(Debug, Clone)]
pub struct RetroHue<D = MiniMessage> {
    deserializer: D,
    code_identifier: char,
}

impl RetroHue<MiniMessage> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for RetroHue<MiniMessage> {
    fn default() -> Self {
        Self {
            deserializer: MiniMessage::new(),
            code_identifier: SECTION_SIGN,
        }
    }
}

impl<D: Deserializer> RetroHue<D> {
    /// Replace the deserializer, keeping the code identifier.
    pub fn with_deserializer<E: Deserializer>(self, deserializer: E) -> RetroHue<E> {
        RetroHue {
            deserializer,
            code_identifier: self.code_identifier,
        }
    }

    pub fn with_code_identifier(mut self, code_identifier: char) -> Self {
        self.code_identifier = code_identifier;
        self
    }

    pub fn deserializer(&self) -> &D {
        &self.deserializer
    }

    pub fn code_identifier(&self) -> char {
        self.code_identifier
    }

    /// Convert using the configured code identifier.
    pub fn convert_to_mini_message(&self, content: &str) -> String {
        to_mini_message(content, self.code_identifier)
    }

    pub fn convert_to_mini_message_with(&self, content: &str, code_identifier: char) -> String {
        to_mini_message(content, code_identifier)
    }

    /// Convert to markup, then deserialize it.
    ///
    /// # Errors
    ///
    /// Returns whatever the deserializer rejects; the default lenient
    /// [`MiniMessage`] accepts all converter output.
    pub fn convert_to_component(&self, content: &str) -> Result<D::Output> {
        self.convert_to_component_with(content, self.code_identifier)
    }

    /// # Errors
    ///
    /// See [`RetroHue::convert_to_component`].
    pub fn convert_to_component_with(
        &self,
        content: &str,
        code_identifier: char,
    ) -> Result<D::Output> {
        let markup = to_mini_message(content, code_identifier);
        self.deserializer.deserialize(&markup)
    }

    /// Look up a color code with the `&` prefix, independent of the
    /// configured code identifier.
    pub fn convert_color_code(&self, code: &str) -> Option<NamedColor> {
        lookup::convert_color_code(code, AMPERSAND)
    }

    pub fn convert_color_code_with(&self, code: &str, prefix: char) -> Option<NamedColor> {
        lookup::convert_color_code(code, prefix)
    }

    pub fn named_color_from_hex(&self, hex: &str) -> Option<NamedColor> {
        lookup::named_color_from_hex(hex)
    }
}
