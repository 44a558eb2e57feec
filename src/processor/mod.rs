//! Keyword processor facade.
//!
//! [`KeywordProcessor`] ties the configuration, the trie store, and the
//! scanner together behind the public API: keyword registration (single,
//! bulk, and file-based), exact lookup, and the three scan operations.
//! Each processor instance is independent, with its own trie and
//! configuration; there is no process-wide state.
//!
//! The processor is single-threaded and synchronous. Callers sharing one
//! instance across threads must serialize mutations (insert/remove)
//! against each other and against concurrent scans.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::config::ProcessorConfig;
use crate::error::{FlashtextError, FlashtextResult};
use crate::scanner::{KeywordSpan, MatchIterator};
use crate::trie::KeywordTrie;

/// Multi-keyword dictionary matcher.
///
/// Keywords are indexed into a codepoint-keyed prefix trie; text is then
/// scanned in a single linear pass. See the crate docs for the matching
/// policy.
///
/// # Example
///
/// ```
/// use flashtext::KeywordProcessor;
///
/// let mut processor = KeywordProcessor::new();
/// processor.add_keyword_with_clean_name("abc", "ABC").unwrap();
///
/// assert_eq!(processor.replace_keywords("say abc now"), "say ABC now");
/// ```
#[derive(Debug, Default)]
pub struct KeywordProcessor {
    /// The trie holding all indexed keywords.
    trie: KeywordTrie,

    /// Configuration options.
    config: ProcessorConfig,
}

impl KeywordProcessor {
    /// Creates a new empty processor with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProcessorConfig::default())
    }

    /// Creates a new empty processor with the specified configuration.
    pub fn with_config(config: ProcessorConfig) -> Self {
        Self {
            trie: KeywordTrie::new(),
            config,
        }
    }

    /// Returns whether matching is case-sensitive.
    pub fn case_sensitive(&self) -> bool {
        self.config.case_sensitive
    }

    /// Sets whether matching is case-sensitive.
    ///
    /// Affects subsequent inserts, lookups, and scans only; keywords
    /// already indexed keep the folding they were inserted with.
    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.config.case_sensitive = case_sensitive;
    }

    /// Returns whether a colliding clean name replaces the stored one.
    pub fn unique_keyword(&self) -> bool {
        self.config.unique_keyword
    }

    /// Sets whether a colliding clean name replaces the stored one instead
    /// of being joined to it.
    pub fn set_unique_keyword(&mut self, unique_keyword: bool) {
        self.config.unique_keyword = unique_keyword;
    }

    /// Returns the delimiter used to join colliding clean names.
    pub fn delimiter(&self) -> &str {
        &self.config.delimiter
    }

    /// Sets the delimiter used to join colliding clean names.
    ///
    /// Make sure the delimiter cannot occur inside any clean name.
    pub fn set_delimiter<S: Into<String>>(&mut self, delimiter: S) {
        self.config.delimiter = delimiter.into();
    }

    /// Returns the keyword counter: the number of successful inserts,
    /// duplicate re-inserts included. Removal does not decrement it; use
    /// `all_keywords().len()` for the live keyword count.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Checks whether no keywords are indexed.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Removes all keywords and resets the keyword counter.
    pub fn clear(&mut self) {
        self.trie.clear();
    }

    /// Checks whether a keyword is indexed.
    pub fn contains(&self, keyword: &str) -> bool {
        self.trie.contains(&self.fold(keyword))
    }

    /// Returns the clean name stored for a keyword, if indexed.
    pub fn get_keyword(&self, keyword: &str) -> Option<String> {
        self.trie.get(&self.fold(keyword)).map(str::to_string)
    }

    /// Enumerates all indexed keywords with their clean names.
    ///
    /// Keywords are reported as stored, i.e. folded to lowercase under
    /// case-insensitive mode. Iteration order is unspecified.
    pub fn all_keywords(&self) -> HashMap<String, String> {
        self.trie.all_keywords()
    }

    /// Adds a keyword whose clean name is the keyword itself.
    ///
    /// Returns [`FlashtextError::EmptyKeyword`] for an empty keyword;
    /// insertion has no other failure mode.
    pub fn add_keyword(&mut self, keyword: &str) -> FlashtextResult<bool> {
        self.add_keyword_with_clean_name(keyword, keyword)
    }

    /// Adds a keyword mapped to an explicit clean name.
    ///
    /// Under case-insensitive mode the keyword is folded to lowercase
    /// before insertion; the clean name is never folded. If the keyword is
    /// already indexed with a different clean name, the collision policy
    /// of the configuration applies.
    pub fn add_keyword_with_clean_name(&mut self, keyword: &str, clean_name: &str) -> FlashtextResult<bool> {
        if keyword.is_empty() {
            return Err(FlashtextError::EmptyKeyword);
        }

        let keyword = self.fold(keyword);
        trace!(keyword = %keyword, clean_name, "adding keyword");
        Ok(self.trie.insert(
            &keyword,
            clean_name,
            self.config.unique_keyword,
            &self.config.delimiter,
        ))
    }

    /// Adds every `(keyword, clean_name)` pair from a map or iterator.
    pub fn add_keywords_from_map<K, V, I>(&mut self, keywords: I) -> FlashtextResult<()>
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (keyword, clean_name) in keywords {
            self.add_keyword_with_clean_name(keyword.as_ref(), clean_name.as_ref())?;
        }
        Ok(())
    }

    /// Adds every keyword from a list, each mapped to itself.
    pub fn add_keywords_from_list<S, I>(&mut self, keywords: I) -> FlashtextResult<()>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        for keyword in keywords {
            self.add_keyword(keyword.as_ref())?;
        }
        Ok(())
    }

    /// Loads keywords from a text file, one rule per line.
    ///
    /// Each non-blank line is either `keyword => clean_name` or a bare
    /// `keyword` mapped to itself; both sides are trimmed of surrounding
    /// whitespace. Blank lines and lines whose keyword side trims to
    /// nothing are skipped. Returns the number of keywords added.
    ///
    /// This is a thin caller of
    /// [`add_keyword_with_clean_name`](Self::add_keyword_with_clean_name);
    /// all trie semantics are identical to inserting the pairs by hand.
    pub fn add_keywords_from_file<P: AsRef<Path>>(&mut self, path: P) -> FlashtextResult<usize> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let added = self.add_keywords_from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), added, "loaded keywords from file");
        Ok(added)
    }

    /// Loads keywords from any buffered reader, with the same line grammar
    /// as [`add_keywords_from_file`](Self::add_keywords_from_file).
    pub fn add_keywords_from_reader<R: BufRead>(&mut self, reader: R) -> FlashtextResult<usize> {
        let mut added = 0;
        for line in reader.lines() {
            let line = line?;
            let (keyword, clean_name) = match line.split_once("=>") {
                Some((keyword, clean_name)) => (keyword.trim(), clean_name.trim()),
                None => {
                    let keyword = line.trim();
                    (keyword, keyword)
                }
            };
            if keyword.is_empty() {
                continue;
            }
            self.add_keyword_with_clean_name(keyword, clean_name)?;
            added += 1;
        }
        Ok(added)
    }

    /// Removes a keyword, pruning now-empty trie nodes bottom-up.
    ///
    /// Returns `false` when the keyword was never indexed.
    pub fn remove_keyword(&mut self, keyword: &str) -> bool {
        let keyword = self.fold(keyword);
        trace!(keyword = %keyword, "removing keyword");
        self.trie.remove(&keyword)
    }

    /// Removes every keyword from a list.
    pub fn remove_keywords_from_list<S, I>(&mut self, keywords: I)
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        for keyword in keywords {
            self.remove_keyword(keyword.as_ref());
        }
    }

    /// Extracts the clean names of all keywords found in `text`, in order
    /// of occurrence.
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        let folded = self.fold(text);
        let chars: Vec<char> = folded.chars().collect();
        MatchIterator::new(&self.trie, &chars)
            .map(|span| span.clean_name)
            .collect()
    }

    /// Extracts all keyword matches with their codepoint spans, in order
    /// of occurrence.
    ///
    /// Offsets index codepoints of the scanned text (the folded text under
    /// case-insensitive mode); `end` is exclusive.
    pub fn extract_keywords_with_spans(&self, text: &str) -> Vec<KeywordSpan> {
        let folded = self.fold(text);
        let chars: Vec<char> = folded.chars().collect();
        MatchIterator::new(&self.trie, &chars).collect()
    }

    /// Replaces every keyword occurrence in `text` with its clean name.
    ///
    /// Non-matched codepoints are copied verbatim from the scanned text;
    /// under case-insensitive mode that is the lowercase-folded text, so
    /// unmatched regions come out folded as well.
    pub fn replace_keywords(&self, text: &str) -> String {
        let folded = self.fold(text);
        let chars: Vec<char> = folded.chars().collect();

        let mut replaced = String::with_capacity(folded.len());
        let mut copied_to = 0;
        for span in MatchIterator::new(&self.trie, &chars) {
            replaced.extend(&chars[copied_to..span.start]);
            replaced.push_str(&span.clean_name);
            copied_to = span.end;
        }
        replaced.extend(&chars[copied_to..]);
        replaced
    }

    /// Case-folds keywords and input text under case-insensitive mode.
    fn fold<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.config.case_sensitive {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(text.to_lowercase())
        }
    }
}
