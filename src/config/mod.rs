//! Configuration for the keyword processor.
//!
//! This module defines the options controlling case folding, the clean-name
//! collision policy, and the delimiter used to join colliding clean names.

use serde::{Deserialize, Serialize};

/// Configuration options for a [`KeywordProcessor`](crate::KeywordProcessor).
///
/// The configuration is read by both the trie store (case folding on
/// insert/lookup/removal, collision policy on insert) and the scanner
/// (case folding of input text before scanning).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Whether keywords and scanned text are matched case-sensitively.
    ///
    /// When `false`, keywords are folded to lowercase on insertion and
    /// lookup, and input text is folded before scanning. Clean names are
    /// never folded.
    pub case_sensitive: bool,

    /// Collision policy for a keyword inserted twice with different clean
    /// names.
    ///
    /// When `false`, the new clean name is appended to the existing one
    /// joined by [`delimiter`](Self::delimiter). When `true`, the new clean
    /// name replaces the old one.
    pub unique_keyword: bool,

    /// Delimiter used to join colliding clean names.
    ///
    /// Pick a string that cannot occur inside any clean name, otherwise a
    /// joined label is indistinguishable from a single one.
    pub delimiter: String,
}

impl ProcessorConfig {
    /// Creates a new configuration with default settings.
    ///
    /// Default values:
    /// - `case_sensitive`: `true`
    /// - `unique_keyword`: `false`
    /// - `delimiter`: `"|"`
    pub fn new() -> Self {
        Self {
            case_sensitive: true,
            unique_keyword: false,
            delimiter: "|".to_string(),
        }
    }

    /// Sets whether matching is case-sensitive.
    pub fn with_case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    /// Sets whether a colliding clean name replaces the stored one instead
    /// of being joined to it.
    pub fn with_unique_keyword(mut self, value: bool) -> Self {
        self.unique_keyword = value;
        self
    }

    /// Sets the delimiter used to join colliding clean names.
    pub fn with_delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::new()
    }
}
