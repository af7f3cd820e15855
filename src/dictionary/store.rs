//! Dictionary store
//!
//! Unbalanced binary search tree holding every known word. Nodes live in an
//! append-only arena, so a `WordId` stays valid for the life of the store and
//! the candidate set can refer to words without owning or copying them.
//!
//! The tree is never rebalanced: inserting words in sorted order degrades it
//! to a list of O(n) height. Search and insert walk iteratively and
//! traversals use an explicit stack, so depth only costs time.

use crate::core::Word;
use crate::error::WordError;
use crate::tree::{self, BinaryTree, InOrder};
use std::cmp::Ordering;

/// Handle to a word owned by a `DictionaryStore`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordId(usize);

impl WordId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Node {
    word: Word,
    left: Option<usize>,
    right: Option<usize>,
}

/// Ordered, append-only set of words of one length
///
/// Duplicates are kept: equal words route to the left subtree, so `contains`
/// stops at the first copy while enumeration yields every copy.
#[derive(Debug)]
pub struct DictionaryStore {
    word_length: usize,
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl DictionaryStore {
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self {
            word_length,
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Length every stored word has
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a word, walking from the root by lexicographic comparison
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the word does not have the
    /// store's length. The tree is left untouched in that case.
    pub fn insert(&mut self, word: Word) -> Result<WordId, WordError> {
        if word.len() != self.word_length {
            return Err(WordError::InvalidLength {
                expected: self.word_length,
                found: word.len(),
            });
        }

        // Find the parent before allocating, so a node is only linked once it exists
        let mut parent: Option<(usize, Ordering)> = None;
        let mut cursor = self.root;
        while let Some(current) = cursor {
            let ordering = word.cmp(&self.nodes[current].word);
            parent = Some((current, ordering));
            cursor = match ordering {
                Ordering::Greater => self.nodes[current].right,
                Ordering::Less | Ordering::Equal => self.nodes[current].left,
            };
        }

        let id = self.nodes.len();
        self.nodes.push(Node {
            word,
            left: None,
            right: None,
        });

        match parent {
            None => self.root = Some(id),
            Some((p, Ordering::Greater)) => self.nodes[p].right = Some(id),
            Some((p, _)) => self.nodes[p].left = Some(id),
        }

        Ok(WordId(id))
    }

    /// Validate and insert a word given as text
    ///
    /// # Errors
    /// Returns `WordError` if `text` is not a valid word of the store's length.
    pub fn insert_str(&mut self, text: &str) -> Result<WordId, WordError> {
        let word = Word::new(text, self.word_length)?;
        self.insert(word)
    }

    /// Exact-match lookup, returning the first copy found
    #[must_use]
    pub fn find(&self, text: &str) -> Option<WordId> {
        let mut cursor = self.root;
        while let Some(current) = cursor {
            cursor = match text.cmp(self.nodes[current].word.text()) {
                Ordering::Equal => return Some(WordId(current)),
                Ordering::Greater => self.nodes[current].right,
                Ordering::Less => self.nodes[current].left,
            };
        }
        None
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.find(word.text()).is_some()
    }

    /// Get the word behind an id handed out by this store
    ///
    /// # Panics
    /// Panics if `id` came from a different store.
    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.nodes[id.0].word
    }

    /// Ids of all words in ascending order
    pub fn ids(&self) -> InOrder<'_, Self> {
        InOrder::new(self)
    }

    /// All words in ascending order, duplicates included
    pub fn iter(&self) -> impl Iterator<Item = &Word> + '_ {
        self.ids().map(|id| self.word(id))
    }

    /// Longest root-to-leaf path
    #[must_use]
    pub fn height(&self) -> usize {
        tree::height(self)
    }
}

impl BinaryTree for DictionaryStore {
    type Item = WordId;

    fn root(&self) -> Option<usize> {
        self.root
    }

    fn left(&self, node: usize) -> Option<usize> {
        self.nodes[node].left
    }

    fn right(&self, node: usize) -> Option<usize> {
        self.nodes[node].right
    }

    fn item(&self, node: usize) -> WordId {
        WordId(node)
    }
}
