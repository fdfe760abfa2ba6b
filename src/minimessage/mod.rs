//! Minimal MiniMessage markup support.
//!
//! Only the formatting subset is understood:
//!
//! - named colors (`<green>`, `<color:green>`, `<c:green>`) and hex colors
//!   (`<#55ff55>`, `<color:#55ff55>`)
//! - decorations (`<bold>`, `<italic>`, ...) and their short aliases
//!   (`<b>`, `<i>`, `<em>`, `<u>`, `<st>`, `<obf>`)
//! - `<reset>`
//!
//! Any other tag is kept as literal text.
//!
//! ## Strictness
//!
//! In the default lenient mode a closing tag closes every tag opened after
//! the one it names, closing tags with nothing to close are dropped, and
//! whatever is still open at the end is closed implicitly. In strict mode
//! each of these is an [`Error`](crate::Error).

mod lexer;
mod parser;
mod serializer;

pub use lexer::{Token, tokenize};

use crate::component::{Component, Deserializer};
use crate::error::Result;

/// MiniMessage deserializer and serializer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MiniMessage {
    strict: bool,
}

impl MiniMessage {
    /// A lenient instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Write a component tree as markup.
    ///
    /// # Examples
    ///
    /// ```
    /// use retrohue::{Component, MiniMessage, NamedColor, Style};
    ///
    /// let component = Component::styled("Hi", Style::new().with_color(NamedColor::Gold));
    /// assert_eq!(MiniMessage::new().serialize(&component), "<gold>Hi</gold>");
    /// ```
    pub fn serialize(&self, component: &Component) -> String {
        serializer::serialize(component)
    }

    /// Remove all recognized tags, keeping the text.
    ///
    /// Always lenient, whatever this instance's strictness.
    pub fn strip_tags(&self, input: &str) -> String {
        parser::Parser::new(false)
            .parse(input)
            .map_or_else(|_| input.to_owned(), |component| component.to_plain_text())
    }
}

impl Deserializer for MiniMessage {
    type Output = Component;

    fn deserialize(&self, input: &str) -> Result<Component> {
        parser::Parser::new(self.strict).parse(input)
    }
}
