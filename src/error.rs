//! Error types for the langcodes crate.
//!
//! Plain lookups report absence through `Option`; these errors only come out of
//! the tag-oriented helpers, where the caller wants to know why a tag failed.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid language tag `{0}`")]
    InvalidLanguageTag(String),

    #[error("no ISO 639-2/B code for `{0}`")]
    UnknownCode(String),
}

impl Error {
    /// Creates an unknown-code error for the given ISO 639-1 code.
    pub fn unknown_code(code: impl Into<String>) -> Self {
        Error::UnknownCode(code.into())
    }
}
