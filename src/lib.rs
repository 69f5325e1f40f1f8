#![forbid(unsafe_code)]
//! ISO 639-1 → ISO 639-2/B language code translation.
//!
//! Subtitle containers expect three-letter bibliographic language tags, while
//! disc metadata usually carries two-letter ones. This crate maps the latter to
//! the former through a fixed, compile-time checked table.
//!
//! # Quick Start
//!
//! ```rust
//! use langcodes::{CodeTranslator, LookupMode, TranslateOptions, translate, translate_tag};
//!
//! assert_eq!(translate("fr"), Some("fre"));
//! assert_eq!(translate("xx"), None);
//!
//! // Full tags from metadata
//! assert_eq!(translate_tag("pt-BR")?, "por");
//!
//! // Reproduce the old lower-bound matching
//! let legacy = CodeTranslator::with_options(
//!     TranslateOptions::new().with_mode(LookupMode::LowerBound),
//! );
//! assert_eq!(legacy.translate("em"), Some("eng"));
//! # Ok::<(), langcodes::Error>(())
//! ```

pub mod error;
pub mod options;
pub mod table;
pub mod translator;

pub use crate::{
    error::Error,
    options::{LookupMode, TranslateOptions},
    table::{CODE_TABLE, CodeEntry},
    translator::{CodeTranslator, lower_bound, translate, translate_tag},
};
