//! ISO 639-1 → ISO 639-2/B lookup.
//!
//! Lookups binary-search [`CODE_TABLE`] by exact byte comparison. No locale
//! handling and no case folding happen unless [`TranslateOptions`] asks for it.

use tracing::debug;
use unic_langid::LanguageIdentifier;

use crate::{
    error::Error,
    options::{LookupMode, TranslateOptions},
    table::{CODE_TABLE, CodeEntry},
};

/// Translates an ISO 639-1 code to its ISO 639-2/B equivalent.
///
/// Comparison is byte-wise and case-sensitive; codes not in the table yield `None`.
///
/// # Examples
/// ```
/// assert_eq!(langcodes::translate("en"), Some("eng"));
/// assert_eq!(langcodes::translate("de"), Some("ger"));
/// assert_eq!(langcodes::translate("EN"), None);
/// ```
pub fn translate(code: &str) -> Option<&'static str> {
    CodeTranslator::new().translate(code)
}

/// Index of the first table entry whose two-letter code is not less than `code`.
///
/// Equals [`crate::table::len`] when `code` sorts after every entry.
pub fn lower_bound(code: &str) -> usize {
    CODE_TABLE.partition_point(|entry| entry.alpha2 < code)
}

/// Translates the primary language subtag of a BCP 47 style tag.
///
/// Accepts tags such as `"en"`, `"en-US"`, `"pt_BR"` or `"DE"`; the language
/// subtag is lowercased during parsing. Lookup is always exact.
pub fn translate_tag(tag: &str) -> Result<&'static str, Error> {
    let normalized = tag.trim().replace('_', "-");
    let lang: LanguageIdentifier = normalized.parse().map_err(|_| {
        debug!(tag, "rejected language tag");
        Error::InvalidLanguageTag(tag.to_string())
    })?;

    let code = lang.language.as_str();
    translate(code).ok_or_else(|| {
        debug!(tag, code, "no ISO 639-2/B code for language");
        Error::unknown_code(code)
    })
}

/// Code translator over the built-in table.
///
/// Holds only its options, so it is `Copy` and can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodeTranslator {
    options: TranslateOptions,
}

impl CodeTranslator {
    /// Creates a translator with default options (exact, case-sensitive).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TranslateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> TranslateOptions {
        self.options
    }

    /// Looks up `code`, returning the aligned three-letter code or `None`.
    pub fn translate(&self, code: &str) -> Option<&'static str> {
        self.find(code).map(|entry| entry.alpha3)
    }

    /// Like [`CodeTranslator::translate`], but returns the whole matched entry.
    pub fn find(&self, code: &str) -> Option<&'static CodeEntry> {
        let folded;
        let code = if self.options.fold_ascii_case && code.bytes().any(|b| b.is_ascii_uppercase()) {
            folded = code.to_ascii_lowercase();
            folded.as_str()
        } else {
            code
        };

        let entry = CODE_TABLE.get(lower_bound(code))?;
        match self.options.mode {
            LookupMode::Exact if entry.alpha2 != code => None,
            _ => Some(entry),
        }
    }
}
