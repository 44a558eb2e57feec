//! FlashText-style multi-keyword matcher.
//!
//! This library indexes a set of keyword strings (each mapped to a canonical
//! "clean name") into a codepoint-keyed prefix trie, then scans arbitrary
//! text in a single linear pass to extract, locate, or replace occurrences
//! of any indexed keyword. This replaces one `contains`/regex check per
//! keyword with a single traversal of the input.
//!
//! # Architecture
//!
//! - [`trie`]: the trie store — insert, exact lookup, enumeration, and
//!   removal with bottom-up pruning of emptied nodes.
//! - [`scanner`]: the greedy single-pass matching state machine shared by
//!   extract, extract-with-spans, and replace.
//! - [`config`]: case sensitivity, clean-name collision policy, and the
//!   delimiter used to join colliding clean names.
//! - [`processor`]: the [`KeywordProcessor`] facade tying the above
//!   together, plus bulk and file-based keyword loading.
//!
//! # Example
//!
//! ```
//! use flashtext::KeywordProcessor;
//!
//! let mut processor = KeywordProcessor::new();
//! processor.add_keyword_with_clean_name("teacher", "tea").unwrap();
//! processor.add_keyword_with_clean_name("student", "stu").unwrap();
//!
//! let found = processor.extract_keywords("the teacher asked the student");
//! assert_eq!(found, vec!["tea".to_string(), "stu".to_string()]);
//! ```
//!
//! The scanner is intentionally not an Aho-Corasick automaton: there are no
//! failure links, and a failed partial match restarts at the trie root. See
//! [`scanner`] for the exact matching policy.

pub mod config;
pub mod error;
pub mod processor;
pub mod scanner;
pub mod trie;

pub use config::ProcessorConfig;
pub use error::{FlashtextError, FlashtextResult};
pub use processor::KeywordProcessor;
pub use scanner::KeywordSpan;
pub use trie::KeywordTrie;

/// Version information for the flashtext crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
