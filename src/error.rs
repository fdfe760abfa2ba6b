//! Error types for retrohue operations.
//!
//! Legacy code conversion itself never fails; these errors come from reading
//! input and from strict-mode markup deserialization.

use thiserror::Error;

/// Errors that can occur while reading or deserializing markup.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unclosed tag: <{0}>")]
    UnclosedTag(String),

    #[error("Closing tag </{0}> has no matching opening tag")]
    UnmatchedClosingTag(String),

    #[error("Expected </{expected}>, found </{found}>")]
    MismatchedClosingTag { expected: String, found: String },
}

pub type Result<T> = std::result::Result<T, Error>;
