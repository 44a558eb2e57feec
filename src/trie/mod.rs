// Copyright (c) 2026 Flashtext Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Keyword trie store.
//!
//! This module provides the prefix trie holding indexed keywords. Keywords
//! sharing a prefix share the nodes along it; the node where a keyword's
//! codepoint path ends carries the keyword's clean name as its terminal
//! value. The store owns insertion, exact lookup, full enumeration, and
//! removal with bottom-up pruning of emptied nodes.
//!
//! All keyword arguments are expected to be already case-folded by the
//! caller; the store never consults the processor configuration itself.

mod node;

use std::collections::HashMap;

pub use node::TrieNode;

/// Prefix trie mapping keywords to clean names.
///
/// The node graph is strictly hierarchical: every node is exclusively
/// owned by its parent, so removal cannot leak subtrees and no reference
/// counting is needed. The trie carries no synchronization of its own;
/// callers sharing one instance across threads serialize access
/// externally.
#[derive(Debug, Default)]
pub struct KeywordTrie {
    /// The root node of the trie.
    root: TrieNode,

    /// Number of successful inserts, duplicate re-inserts included.
    ///
    /// A best-effort size hint, not a live count of distinct keywords:
    /// removal does not decrement it. `all_keywords().len()` gives the
    /// number of currently indexed keywords.
    terms: usize,
}

impl KeywordTrie {
    /// Creates a new empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a keyword with its clean name.
    ///
    /// Walks from the root, descending into existing children and creating
    /// the remaining suffix at the first point of divergence. If the full
    /// path already exists, the collision policy applies at the final
    /// node: a differing clean name is joined to the stored one with
    /// `delimiter` when `unique_keyword` is unset, and replaces it when
    /// set. Re-inserting an identical clean name leaves the label as is.
    ///
    /// Every call increments the keyword counter. Insertion has no failure
    /// mode for non-empty input; empty keywords are rejected by the
    /// processor before reaching the store.
    pub fn insert(&mut self, keyword: &str, clean_name: &str, unique_keyword: bool, delimiter: &str) -> bool {
        let mut node = &mut self.root;
        for ch in keyword.chars() {
            node = node.children.entry(ch).or_default();
        }

        match node.clean_name.as_mut() {
            Some(existing) => {
                if existing.as_str() != clean_name && !unique_keyword {
                    existing.push_str(delimiter);
                    existing.push_str(clean_name);
                } else {
                    *existing = clean_name.to_string();
                }
            }
            None => node.clean_name = Some(clean_name.to_string()),
        }

        self.terms += 1;
        true
    }

    /// Returns the clean name stored for a keyword.
    ///
    /// Returns `None` when any codepoint of the path has no matching child
    /// or the final node carries no terminal value (the keyword is only a
    /// prefix of other keywords).
    pub fn get(&self, keyword: &str) -> Option<&str> {
        let mut node = &self.root;
        for ch in keyword.chars() {
            node = node.children.get(&ch)?;
        }
        node.clean_name.as_deref()
    }

    /// Checks whether a keyword is present in the trie.
    pub fn contains(&self, keyword: &str) -> bool {
        self.get(keyword).is_some()
    }

    /// Removes a keyword from the trie.
    ///
    /// Clears the terminal value at the end of the path, then prunes
    /// now-empty nodes bottom-up, deepest edge first, stopping at the
    /// first ancestor that still has content. Returns `false` when the
    /// path does not fully exist or the final node has no terminal value.
    ///
    /// The keyword counter is not decremented; see [`len`](Self::len).
    pub fn remove(&mut self, keyword: &str) -> bool {
        let chars: Vec<char> = keyword.chars().collect();
        Self::remove_at(&mut self.root, &chars)
    }

    /// Recursive removal helper. The recursion depth equals the keyword
    /// length, mirroring the reverse walk over the recorded path: each
    /// frame prunes its child edge if the removal below emptied the child.
    fn remove_at(node: &mut TrieNode, chars: &[char]) -> bool {
        let (&ch, rest) = match chars.split_first() {
            Some(split) => split,
            None => {
                // End of the path: the terminal value must exist.
                return node.clean_name.take().is_some();
            }
        };

        let (removed, prune) = match node.children.get_mut(&ch) {
            Some(child) => {
                let removed = Self::remove_at(child, rest);
                (removed, removed && child.is_empty())
            }
            None => (false, false),
        };

        if prune {
            node.children.remove(&ch);
        }
        removed
    }

    /// Enumerates all keywords currently in the trie with their clean
    /// names.
    ///
    /// Each node with a terminal value contributes exactly one entry, the
    /// keyword being reconstructed from the root-to-terminal codepoint
    /// path. Traversal order over the child maps is unspecified.
    pub fn all_keywords(&self) -> HashMap<String, String> {
        let mut keywords = HashMap::new();

        // Explicit stack instead of recursion: keyword length is caller
        // controlled and must not be bounded by the call stack.
        let mut stack: Vec<(&TrieNode, String)> = vec![(&self.root, String::new())];
        while let Some((node, path)) = stack.pop() {
            if let Some(clean_name) = &node.clean_name {
                keywords.insert(path.clone(), clean_name.clone());
            }
            for (&ch, child) in &node.children {
                let mut child_path = path.clone();
                child_path.push(ch);
                stack.push((child, child_path));
            }
        }

        keywords
    }

    /// Returns the keyword counter: the number of successful inserts,
    /// duplicate re-inserts included. Removal does not decrement it.
    pub fn len(&self) -> usize {
        self.terms
    }

    /// Checks whether the trie holds no keywords.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty() && self.root.clean_name.is_none()
    }

    /// Clears all keywords and resets the keyword counter.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.terms = 0;
    }

    /// Returns the root node for read-only traversal by the scanner.
    pub(crate) fn root(&self) -> &TrieNode {
        &self.root
    }
}
