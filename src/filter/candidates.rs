//! Candidate set: words still consistent with the game's constraints
//!
//! The set is never edited node by node. Each refinement walks a source tree
//! in order, collects the matching words into a sorted buffer, drops the old
//! tree and rebuilds a balanced one by median split. Nodes refer to words by
//! `WordId`; the dictionary keeps ownership of the text.

use super::ConstraintState;
use crate::core::Word;
use crate::dictionary::{DictionaryStore, WordId};
use crate::tree::{self, BinaryTree, InOrder};

/// Tree the filter pass reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSource {
    /// Every word in the dictionary (first pass of a game, or after insertions)
    Dictionary,
    /// The current candidate tree
    Candidates,
}

#[derive(Debug, Clone, Copy)]
struct CandidateNode {
    word: WordId,
    left: Option<usize>,
    right: Option<usize>,
}

/// Balanced tree of dictionary words satisfying the current constraints
#[derive(Debug, Default)]
pub struct CandidateSet {
    nodes: Vec<CandidateNode>,
    root: Option<usize>,
}

impl CandidateSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a balanced tree from ids already in ascending word order
    #[must_use]
    pub fn from_sorted(sorted: &[WordId]) -> Self {
        let mut set = Self::new();
        set.rebuild(sorted);
        set
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

    #[must_use]
    pub fn height(&self) -> usize {
        tree::height(self)
    }

    /// Candidate ids in ascending word order
    pub fn ids(&self) -> InOrder<'_, Self> {
        InOrder::new(self)
    }

    /// Candidate words in ascending order
    pub fn iter<'a>(&'a self, dictionary: &'a DictionaryStore) -> impl Iterator<Item = &'a Word> {
        self.ids().map(move |id| dictionary.word(id))
    }

    /// Drop the tree
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Re-filter against `constraints` and rebuild the tree
    ///
    /// Returns the number of words that passed, which is also the new size.
    pub fn refine(
        &mut self,
        dictionary: &DictionaryStore,
        constraints: &ConstraintState,
        source: FilterSource,
    ) -> usize {
        let buffer: Vec<WordId> = match source {
            FilterSource::Dictionary => dictionary
                .ids()
                .filter(|&id| constraints.satisfies(dictionary.word(id)))
                .collect(),
            FilterSource::Candidates => self
                .ids()
                .filter(|&id| constraints.satisfies(dictionary.word(id)))
                .collect(),
        };

        self.rebuild(&buffer);

        log::debug!(
            "filter pass over {source:?}: {} matches, height {}",
            buffer.len(),
            self.height()
        );

        buffer.len()
    }

    fn rebuild(&mut self, sorted: &[WordId]) {
        self.clear();
        self.nodes.reserve(sorted.len());
        self.root = self.build(sorted);
    }

    /// Median split: the middle element becomes the node, the halves on
    /// either side become its subtrees. Recursion depth is O(log n).
    fn build(&mut self, sorted: &[WordId]) -> Option<usize> {
        if sorted.is_empty() {
            return None;
        }

        let mid = sorted.len() / 2;
        let left = self.build(&sorted[..mid]);
        let right = self.build(&sorted[mid + 1..]);

        // Children exist before the parent links them
        let id = self.nodes.len();
        self.nodes.push(CandidateNode {
            word: sorted[mid],
            left,
            right,
        });
        Some(id)
    }
}

impl BinaryTree for CandidateSet {
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
        self.nodes[node].word
    }
}
