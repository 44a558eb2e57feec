// Copyright (c) 2026 Flashtext Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Single-pass keyword scanner.
//!
//! This module implements the matching state machine shared by extract,
//! extract-with-spans, and replace. The traversal is greedy, single-pass
//! and non-backtracking: from each attempt position the scanner descends
//! the trie as far as the input allows, remembering the longest terminal
//! value passed on the way, then either commits that match or skips a
//! single codepoint and restarts at the root.
//!
//! # Matching policy
//!
//! This is deliberately not an Aho-Corasick automaton. There is no failure
//! function: when a partial descent fails, the cursor restarts at the trie
//! root instead of falling back to the longest proper suffix that is
//! itself a trie prefix. The scanner can therefore miss an overlapping
//! keyword occurrence whose start lies inside an already committed span.
//! Callers relying on exhaustive overlap detection need a different
//! algorithm; this one trades that for a smaller structure and a simpler
//! pass.

use std::iter::FusedIterator;

use crate::trie::{KeywordTrie, TrieNode};

/// A single keyword match reported by the scanner.
///
/// Offsets are codepoint indices into the scanned (case-folded) text, not
/// byte offsets; `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSpan {
    /// The clean name of the matched keyword.
    pub clean_name: String,

    /// Codepoint offset of the first matched codepoint.
    pub start: usize,

    /// Codepoint offset one past the last matched codepoint.
    pub end: usize,
}

impl KeywordSpan {
    /// Creates a new span.
    pub fn new<S: Into<String>>(clean_name: S, start: usize, end: usize) -> Self {
        Self {
            clean_name: clean_name.into(),
            start,
            end,
        }
    }
}

/// Iterator over keyword matches in a codepoint slice.
///
/// The slice must already be case-folded consistently with the keywords in
/// the trie; the iterator walks the trie read-only and never outlives it.
#[derive(Debug)]
pub struct MatchIterator<'a> {
    /// Root of the trie being matched against.
    root: &'a TrieNode,

    /// The codepoints being scanned.
    chars: &'a [char],

    /// Next attempt position.
    position: usize,
}

impl<'a> MatchIterator<'a> {
    /// Creates an iterator scanning `chars` against `trie`.
    pub(crate) fn new(trie: &'a KeywordTrie, chars: &'a [char]) -> Self {
        Self {
            root: trie.root(),
            chars,
            position: 0,
        }
    }
}

impl<'a> Iterator for MatchIterator<'a> {
    type Item = KeywordSpan;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.chars.len();

        while self.position < len {
            let start = self.position;
            let mut node = self.root;
            let mut best: Option<(&str, usize)> = None;

            // Descend as far as the input allows, tracking the longest
            // terminal value passed. Descent only extends, so the last
            // terminal seen is the longest match of this attempt.
            let mut idx = start;
            while idx < len {
                match node.children.get(&self.chars[idx]) {
                    Some(child) => {
                        node = child;
                        idx += 1;
                        if let Some(clean_name) = child.clean_name.as_deref() {
                            best = Some((clean_name, idx - start));
                        }
                    }
                    None => break,
                }
            }

            match best {
                Some((clean_name, matched)) => {
                    // Commit: resume right after the end of the match,
                    // not after the full tentative descent.
                    self.position = start + matched;
                    return Some(KeywordSpan::new(clean_name, start, start + matched));
                }
                None => {
                    // Failed attempt: only the position that began it is
                    // skipped; the next attempt restarts at the root.
                    self.position = start + 1;
                }
            }
        }

        None
    }
}

impl<'a> FusedIterator for MatchIterator<'a> {}
