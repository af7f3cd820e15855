//! Per-game constraint state and the predicate that tests words against it
//!
//! Knowledge accumulated from feedback:
//! - a fixed letter per position (from exact marks)
//! - letters known wrong at each position
//! - a lower bound on each letter's occurrences
//! - an exact occurrence count, once an absent mark proves no further copies exist

use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// Accumulated filter knowledge for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    fixed: Vec<Option<u8>>,
    excluded: Vec<FxHashSet<u8>>,
    min_count: FxHashMap<u8, usize>,
    exact_count: FxHashMap<u8, usize>,
}

impl ConstraintState {
    /// Empty state for words of `word_length` letters
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            fixed: vec![None; word_length],
            excluded: vec![FxHashSet::default(); word_length],
            min_count: FxHashMap::default(),
            exact_count: FxHashMap::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.fixed.len()
    }

    /// True if nothing has been learned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixed.iter().all(Option::is_none)
            && self.excluded.iter().all(FxHashSet::is_empty)
            && self.min_count.is_empty()
            && self.exact_count.is_empty()
    }

    /// Letter known to be at `position`, if any
    #[must_use]
    pub fn fixed(&self, position: usize) -> Option<u8> {
        self.fixed[position]
    }

    #[must_use]
    pub fn is_excluded(&self, position: usize, letter: u8) -> bool {
        self.excluded[position].contains(&letter)
    }

    /// Proven lower bound on occurrences of `letter` (0 when unknown)
    #[must_use]
    pub fn min_count(&self, letter: u8) -> usize {
        self.min_count.get(&letter).copied().unwrap_or(0)
    }

    /// Proven exact number of occurrences of `letter`
    #[must_use]
    pub fn exact_count(&self, letter: u8) -> Option<usize> {
        self.exact_count.get(&letter).copied()
    }

    pub fn set_fixed(&mut self, position: usize, letter: u8) {
        self.fixed[position] = Some(letter);
    }

    pub fn exclude(&mut self, position: usize, letter: u8) {
        self.excluded[position].insert(letter);
    }

    /// Raise the lower bound for `letter`; never lowers it
    pub fn raise_min_count(&mut self, letter: u8, count: usize) {
        if count == 0 {
            return;
        }
        let bound = self.min_count.entry(letter).or_insert(0);
        *bound = (*bound).max(count);
    }

    pub fn set_exact_count(&mut self, letter: u8, count: usize) {
        self.exact_count.insert(letter, count);
    }

    /// Forget everything, keeping the word length
    pub fn reset(&mut self) {
        self.fixed.fill(None);
        self.excluded.iter_mut().for_each(FxHashSet::clear);
        self.min_count.clear();
        self.exact_count.clear();
    }

    /// Test whether `word` is still consistent with everything learned
    ///
    /// Pure: reads the state and the word only.
    ///
    /// # Examples
    /// ```
    /// use word_checker::core::Word;
    /// use word_checker::filter::ConstraintState;
    ///
    /// let mut state = ConstraintState::new(4);
    /// state.set_fixed(0, b'c');
    /// state.set_exact_count(b'i', 0);
    ///
    /// assert!(state.satisfies(&Word::new("cane", 4).unwrap()));
    /// assert!(!state.satisfies(&Word::new("cine", 4).unwrap()));
    /// assert!(!state.satisfies(&Word::new("bane", 4).unwrap()));
    /// ```
    #[must_use]
    pub fn satisfies(&self, word: &Word) -> bool {
        debug_assert_eq!(word.len(), self.word_length());

        for (position, &letter) in word.letters().iter().enumerate() {
            if self.fixed[position].is_some_and(|f| f != letter) {
                return false;
            }
            if self.excluded[position].contains(&letter) {
                return false;
            }
        }

        if self
            .min_count
            .iter()
            .any(|(&letter, &min)| word.count_of(letter) < min)
        {
            return false;
        }

        self.exact_count
            .iter()
            .all(|(&letter, &exact)| word.count_of(letter) == exact)
    }
}
