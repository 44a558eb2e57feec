//! Node implementation for the keyword trie.
//!
//! Nodes are the fundamental building blocks of the trie, each holding
//! child links keyed by codepoint and an optional terminal value.

use std::collections::HashMap;

/// A node in the keyword trie.
///
/// Each node represents one codepoint along a keyword path and exclusively
/// owns its children; the trie root owns the whole graph. The terminal
/// value is an explicit field rather than a sentinel child key, so no
/// input codepoint can collide with it.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Map of codepoints to child nodes.
    pub children: HashMap<char, TrieNode>,

    /// The clean name of the keyword ending at this node, if any.
    pub clean_name: Option<String>,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the node has no children and no terminal value.
    ///
    /// Empty nodes must not persist in the graph; removal prunes them
    /// bottom-up as soon as they appear.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.clean_name.is_none()
    }
}
