//! Rich text component tree.
//!
//! A [`Component`] is a run of text with a [`Style`] and any number of
//! children, which inherit the parent's style. Markup is turned into a tree by
//! a [`Deserializer`], by default [`MiniMessage`](crate::MiniMessage).

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::codes::Decoration;
use crate::color::TextColor;
use crate::error::Result;

/// Something that turns markup text into a rich text value.
///
/// The converter only hands its markup output to this trait, so any markup
/// parser can be plugged in.
pub trait Deserializer {
    type Output;

    /// Parse markup into the output type.
    fn deserialize(&self, input: &str) -> Result<Self::Output>;
}

/// Visual style of a component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Style {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    color: Option<TextColor>,
    /// Kept sorted and free of duplicates.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    decorations: Vec<Decoration>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: impl Into<TextColor>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.add_decoration(decoration);
        self
    }

    pub fn color(&self) -> Option<TextColor> {
        self.color
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    pub fn has_decoration(&self, decoration: Decoration) -> bool {
        self.decorations.binary_search(&decoration).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.decorations.is_empty()
    }

    /// Combine with a child style. The child's color wins if set; decorations
    /// accumulate.
    pub fn merge(&self, child: &Style) -> Style {
        let mut merged = self.clone();
        if child.color.is_some() {
            merged.color = child.color;
        }
        for &decoration in &child.decorations {
            merged.add_decoration(decoration);
        }
        merged
    }

    fn add_decoration(&mut self, decoration: Decoration) {
        if let Err(pos) = self.decorations.binary_search(&decoration) {
            self.decorations.insert(pos, decoration);
        }
    }
}

/// A styled text node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Component {
    pub content: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Style::is_empty"))]
    pub style: Style,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<Component>,
}

impl Component {
    /// An unstyled component with no text, used as a root.
    pub fn empty() -> Self {
        Self::default()
    }

    /// An unstyled text component.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn styled(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
            children: Vec::new(),
        }
    }

    pub fn append(&mut self, child: Component) {
        self.children.push(child);
    }

    pub fn with_child(mut self, child: Component) -> Self {
        self.append(child);
        self
    }

    /// True when neither this node nor any descendant carries text.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.children.iter().all(Component::is_empty)
    }

    /// All text content, depth-first, without styling.
    ///
    /// # Examples
    ///
    /// ```
    /// use retrohue::Component;
    ///
    /// let component = Component::text("Hello, ").with_child(Component::text("world"));
    /// assert_eq!(component.to_plain_text(), "Hello, world");
    /// ```
    pub fn to_plain_text(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, result: &mut String) {
        result.push_str(&self.content);
        for child in &self.children {
            child.collect_text(result);
        }
    }
}
