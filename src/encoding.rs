//! Decoding of legacy-coded text files.
//!
//! Configs written by older server tools are frequently not UTF-8; the
//! section sign in particular is often stored as the single Windows-1252
//! byte `0xA7`.

use std::borrow::Cow;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Decode the contents of a config, MOTD or message file.
///
/// Valid UTF-8 (with or without a byte order mark) is returned borrowed.
/// Otherwise the file is assumed to come from a tool that wrote its local
/// code page: `hint_encoding` names that code page by its WHATWG label
/// (`"ibm866"`, `"shift_jis"` and so on), and without a usable hint the
/// bytes are read as Windows-1252, where `0xA7` is `§`.
///
/// # Examples
///
/// ```
/// use retrohue::decode_text;
///
/// assert_eq!(decode_text("\u{00a7}aHi".as_bytes(), None), "\u{00a7}aHi");
/// assert_eq!(decode_text(b"\xa7aHi", None), "\u{00a7}aHi");
/// ```
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (text, _, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return text;
    }

    let code_page = hint_encoding
        .and_then(|label| encoding_rs::Encoding::for_label(label.as_bytes()))
        .unwrap_or(encoding_rs::WINDOWS_1252);
    debug!(encoding = code_page.name(), "input is not UTF-8, decoding as legacy code page");
    code_page.decode(bytes).0
}

/// Read a file and decode it with [`decode_text`].
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read.
pub fn read_text_file(path: impl AsRef<Path>, hint_encoding: Option<&str>) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(decode_text(&bytes, hint_encoding).into_owned())
}
