//! Markup tokenizer.
//!
//! Splits markup into text runs and tags. A `<` only starts a tag when it is
//! followed by an optional `/`, a tag name and `>`; anything else is text.
//! `\<` and `\\` escape a literal `<` and backslash.

/// A lexical unit of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Text(String),
    /// Opening tag. `name` is lowercased; `raw` is the tag as written.
    Open { name: String, raw: String },
    /// Closing tag. `name` is lowercased; `raw` is the tag as written.
    Close { name: String, raw: String },
}

/// Tokenize markup.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut pos = 0;

    while let Some(c) = input[pos..].chars().next() {
        match c {
            '\\' => {
                if let Some(escaped @ ('<' | '\\')) = input[pos + 1..].chars().next() {
                    text.push(escaped);
                    pos += 2;
                    continue;
                }
            }
            '<' => {
                if let Some((token, len)) = scan_tag(&input[pos..]) {
                    if !text.is_empty() {
                        tokens.push(Token::Text(std::mem::take(&mut text)));
                    }
                    tokens.push(token);
                    pos += len;
                    continue;
                }
            }
            _ => {}
        }
        text.push(c);
        pos += c.len_utf8();
    }

    if !text.is_empty() {
        tokens.push(Token::Text(text));
    }
    tokens
}

/// Try to read a tag at the start of `s` (which begins with `<`). Returns the
/// token and the number of bytes it spans.
fn scan_tag(s: &str) -> Option<(Token, usize)> {
    let closing = s[1..].starts_with('/');
    let name_start = if closing { 2 } else { 1 };
    let name_len = s[name_start..]
        .bytes()
        .take_while(|&b| is_name_byte(b))
        .count();
    if name_len == 0 {
        return None;
    }

    let end = name_start + name_len;
    if s.as_bytes().get(end) != Some(&b'>') {
        return None;
    }

    let name = s[name_start..end].to_ascii_lowercase();
    let raw = s[..=end].to_string();
    let token = if closing {
        Token::Close { name, raw }
    } else {
        Token::Open { name, raw }
    };
    Some((token, end + 1))
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'#' | b':' | b'-')
}
