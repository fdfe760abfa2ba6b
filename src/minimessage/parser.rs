//! Builds a [`Component`] tree from markup tokens.

use tracing::debug;

use super::lexer::{Token, tokenize};
use crate::codes::Decoration;
use crate::color::{NamedColor, TextColor};
use crate::component::{Component, Style};
use crate::error::{Error, Result};

/// What a recognized tag does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Tag {
    Style(Style),
    Reset,
}

const COLOR_PREFIXES: [&str; 3] = ["color", "colour", "c"];

/// Resolve a lowercased tag name.
pub(crate) fn resolve_tag(name: &str) -> Option<Tag> {
    if name == "reset" {
        return Some(Tag::Reset);
    }
    if let Some((prefix, value)) = name.split_once(':') {
        if COLOR_PREFIXES.contains(&prefix) {
            return resolve_color(value).map(|color| Tag::Style(Style::new().with_color(color)));
        }
        return None;
    }
    if let Some(color) = resolve_color(name) {
        return Some(Tag::Style(Style::new().with_color(color)));
    }
    Decoration::from_name(name).map(|d| Tag::Style(Style::new().with_decoration(d)))
}

fn resolve_color(value: &str) -> Option<TextColor> {
    if value.starts_with('#') {
        TextColor::from_hex_str(value)
    } else {
        NamedColor::from_name(value).map(TextColor::from)
    }
}

/// An open tag and the component collecting its content.
struct Frame {
    name: String,
    component: Component,
}

impl Frame {
    /// Whether a closing tag named `close` ends this frame. `</color>`,
    /// `</colour>` and `</c>` each close any `<color:...>` tag, whichever
    /// prefix it was opened with.
    fn closed_by(&self, close: &str) -> bool {
        if self.name == close {
            return true;
        }
        match self.name.split_once(':') {
            Some((prefix, _)) if COLOR_PREFIXES.contains(&prefix) => {
                COLOR_PREFIXES.contains(&close)
            }
            Some((prefix, _)) => prefix == close,
            None => false,
        }
    }
}

pub(crate) struct Parser {
    strict: bool,
    /// `stack[0]` is the root and is never popped.
    stack: Vec<Frame>,
}

impl Parser {
    pub(crate) fn new(strict: bool) -> Self {
        Self {
            strict,
            stack: vec![Frame {
                name: String::new(),
                component: Component::empty(),
            }],
        }
    }

    pub(crate) fn parse(mut self, input: &str) -> Result<Component> {
        for token in tokenize(input) {
            match token {
                Token::Text(text) => self.push_text(&text),
                Token::Open { name, raw } => self.open(name, &raw),
                Token::Close { name, raw } => self.close(name, &raw)?,
            }
        }

        if self.strict && self.stack.len() > 1 {
            let innermost = self.innermost_name().to_string();
            return Err(Error::UnclosedTag(innermost));
        }
        self.close_down_to(1);

        match self.stack.pop() {
            Some(root) => Ok(root.component),
            None => Ok(Component::empty()),
        }
    }

    fn open(&mut self, name: String, raw: &str) {
        match resolve_tag(&name) {
            Some(Tag::Style(style)) => self.stack.push(Frame {
                name,
                component: Component::styled("", style),
            }),
            Some(Tag::Reset) => self.close_down_to(1),
            None => {
                debug!(tag = %name, "unknown tag kept as text");
                self.push_text(raw);
            }
        }
    }

    fn close(&mut self, name: String, raw: &str) -> Result<()> {
        let found = self
            .stack
            .iter()
            .skip(1)
            .rposition(|frame| frame.closed_by(&name))
            .map(|pos| pos + 1);

        match found {
            Some(pos) => {
                if self.strict && pos != self.stack.len() - 1 {
                    return Err(Error::MismatchedClosingTag {
                        expected: self.innermost_name().to_string(),
                        found: name,
                    });
                }
                self.close_down_to(pos);
            }
            None if is_known_closing_name(&name) => {
                if self.strict {
                    return Err(Error::UnmatchedClosingTag(name));
                }
                debug!(tag = %name, "ignoring closing tag with nothing to close");
            }
            None => {
                debug!(tag = %name, "unknown closing tag kept as text");
                self.push_text(raw);
            }
        }
        Ok(())
    }

    /// Pop frames until only `depth` remain, attaching each to its parent.
    fn close_down_to(&mut self, depth: usize) {
        while self.stack.len() > depth.max(1)
            && let Some(frame) = self.stack.pop()
            && let Some(parent) = self.stack.last_mut()
        {
            parent.component.append(frame.component);
        }
    }

    fn push_text(&mut self, text: &str) {
        let Some(frame) = self.stack.last_mut() else {
            return;
        };
        // Merge with a preceding unstyled leaf so literal tags don't split runs.
        if let Some(last) = frame.component.children.last_mut()
            && last.style.is_empty()
            && last.children.is_empty()
        {
            last.content.push_str(text);
        } else {
            frame.component.append(Component::text(text));
        }
    }

    fn innermost_name(&self) -> &str {
        self.stack.last().map_or("", |frame| frame.name.as_str())
    }
}

fn is_known_closing_name(name: &str) -> bool {
    COLOR_PREFIXES.contains(&name) || resolve_tag(name).is_some()
}
