//! Options controlling how [`crate::CodeTranslator`] matches codes.

use serde::{Deserialize, Serialize};

/// How a binary-search hit is turned into a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupMode {
    /// Return a translation only when the code is present in the table.
    #[default]
    Exact,
    /// Return the translation at the lower-bound position without checking
    /// that the code found there equals the query.
    ///
    /// An absent code that sorts just before a real one yields the neighbour's
    /// translation (`"em"` → `"eng"`). Kept for output compatibility with older
    /// vobsub tooling; new callers want [`LookupMode::Exact`].
    LowerBound,
}

/// Lookup behavior options for [`crate::CodeTranslator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateOptions {
    /// Matching strategy after the binary search.
    pub mode: LookupMode,
    /// Lowercase ASCII letters in the query before searching. Off by default:
    /// `"EN"` does not match `"en"` unless the caller asks for it.
    pub fold_ascii_case: bool,
}

impl TranslateOptions {
    /// Creates default options (exact matching, case-sensitive).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lookup mode.
    pub fn with_mode(mut self, mode: LookupMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables/disables ASCII case folding of the query.
    pub fn with_fold_ascii_case(mut self, fold_ascii_case: bool) -> Self {
        self.fold_ascii_case = fold_ascii_case;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TranslateOptions::new();
        assert_eq!(options.mode, LookupMode::Exact);
        assert!(!options.fold_ascii_case);
    }

    #[test]
    fn test_builder() {
        let options = TranslateOptions::new()
            .with_mode(LookupMode::LowerBound)
            .with_fold_ascii_case(true);
        assert_eq!(options.mode, LookupMode::LowerBound);
        assert!(options.fold_ascii_case);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let options: TranslateOptions = serde_json::from_str(r#"{"mode":"lower_bound"}"#).unwrap();
        assert_eq!(options.mode, LookupMode::LowerBound);
        assert!(!options.fold_ascii_case);

        let options: TranslateOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, TranslateOptions::default());
    }

    #[test]
    fn test_serialize_mode_snake_case() {
        let json = serde_json::to_string(&LookupMode::LowerBound).unwrap();
        assert_eq!(json, r#""lower_bound""#);
    }
}
