//! Game controller
//!
//! Runs one game against a fixed target: checks guesses against the
//! dictionary, scores them, refines the candidate set and counts attempts.

use super::evaluator::evaluate;
use crate::core::{Feedback, Word};
use crate::dictionary::DictionaryStore;
use crate::error::{GameError, Result, WordError};
use crate::filter::{CandidateSet, ConstraintState, FilterSource};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Solved,
    Exhausted,
}

/// Report for a scored guess that did not solve the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub feedback: Feedback,
    /// Words still consistent with everything learned
    pub filtered_count: usize,
    /// Attempts left after this guess
    pub remaining_attempts: usize,
}

impl GuessReport {
    /// True if this guess used the last attempt
    #[must_use]
    pub const fn exhausted(&self) -> bool {
        self.remaining_attempts == 0
    }
}

/// What happened to a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not a dictionary word; no attempt used
    NotInDictionary,
    /// Guess equals the target; the game is over
    Solved,
    /// Guess was scored and cost an attempt
    Scored(GuessReport),
}

/// Words listed by a print request
pub enum Listing<'a> {
    Dictionary(Box<dyn Iterator<Item = &'a Word> + 'a>),
    Candidates(Box<dyn Iterator<Item = &'a Word> + 'a>),
}

impl Listing<'_> {
    /// True once the listing comes from a filter pass rather than the
    /// whole dictionary
    #[must_use]
    pub const fn is_filtered(&self) -> bool {
        matches!(self, Self::Candidates(_))
    }
}

impl<'a> Iterator for Listing<'a> {
    type Item = &'a Word;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Dictionary(iter) | Self::Candidates(iter) => iter.next(),
        }
    }
}

/// State of a single game
///
/// The dictionary is passed into each call rather than held, so words can be
/// inserted mid-game through `insert_words`.
#[derive(Debug)]
pub struct Game {
    target: Word,
    max_guesses: usize,
    remaining: usize,
    constraints: ConstraintState,
    candidates: CandidateSet,
    /// A filter pass has run this game
    filtered: bool,
    /// Words were inserted since the last filter pass
    stale: bool,
    status: GameStatus,
}

impl Game {
    /// Start a game against `target` with `max_guesses` attempts
    ///
    /// The target does not need to be in the dictionary. A zero budget
    /// yields a game that is already exhausted.
    ///
    /// # Errors
    /// Returns `GameError::Word` if the target length differs from the
    /// dictionary's word length.
    pub fn new(target: Word, max_guesses: usize, dictionary: &DictionaryStore) -> Result<Self> {
        check_length(&target, dictionary)?;

        log::debug!("new game: {max_guesses} attempts");

        Ok(Self {
            constraints: ConstraintState::new(target.len()),
            target,
            max_guesses,
            remaining: max_guesses,
            candidates: CandidateSet::new(),
            filtered: false,
            stale: false,
            status: if max_guesses == 0 {
                GameStatus::Exhausted
            } else {
                GameStatus::InProgress
            },
        })
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        self.remaining
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    /// Number of candidates, once a filter pass has run
    #[must_use]
    pub fn filtered_count(&self) -> Option<usize> {
        self.filtered.then(|| self.candidates.len())
    }

    /// Play one guess
    ///
    /// # Errors
    /// - `GameError::GameOver` if the game has ended
    /// - `GameError::Word` if the guess has the wrong length
    pub fn guess(&mut self, dictionary: &DictionaryStore, guess: &Word) -> Result<GuessOutcome> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        check_length(guess, dictionary)?;

        if !dictionary.contains(guess) {
            return Ok(GuessOutcome::NotInDictionary);
        }

        let evaluation = evaluate(guess, &self.target, &mut self.constraints);
        if evaluation.solved {
            self.status = GameStatus::Solved;
            self.finish();
            return Ok(GuessOutcome::Solved);
        }

        let filtered_count = self.refine(dictionary);
        self.remaining -= 1;

        if self.remaining == 0 {
            self.status = GameStatus::Exhausted;
            self.finish();
        }

        Ok(GuessOutcome::Scored(GuessReport {
            feedback: evaluation.feedback,
            filtered_count,
            remaining_attempts: self.remaining,
        }))
    }

    /// Insert words into the dictionary during this game
    ///
    /// Returns how many were inserted. Words already accepted stay inserted
    /// if a later one fails.
    ///
    /// # Errors
    /// Returns `GameError::Word` for the first word of the wrong length.
    pub fn insert_words<I>(&mut self, dictionary: &mut DictionaryStore, words: I) -> Result<usize>
    where
        I: IntoIterator<Item = Word>,
    {
        let mut inserted = 0;
        for word in words {
            dictionary.insert(word)?;
            inserted += 1;
            // New words can only enter the candidates through a dictionary scan
            self.stale |= self.filtered;
        }

        Ok(inserted)
    }

    /// Words consistent with the game so far, in ascending order
    ///
    /// Before the first filter pass this is the whole dictionary. If words
    /// were inserted since the last pass, the candidates are rebuilt from the
    /// dictionary first; the constraints are unchanged, so this only adds
    /// the new matching words.
    pub fn candidates<'a>(&'a mut self, dictionary: &'a DictionaryStore) -> Listing<'a> {
        if !self.filtered {
            return Listing::Dictionary(Box::new(dictionary.iter()));
        }

        if self.stale {
            self.refine(dictionary);
        }

        Listing::Candidates(Box::new(self.candidates.iter(dictionary)))
    }

    fn refine(&mut self, dictionary: &DictionaryStore) -> usize {
        let source = if !self.filtered || self.stale {
            FilterSource::Dictionary
        } else {
            FilterSource::Candidates
        };

        let count = self
            .candidates
            .refine(dictionary, &self.constraints, source);
        self.filtered = true;
        self.stale = false;
        count
    }

    /// Release per-game state once the game is decided
    fn finish(&mut self) {
        log::debug!(
            "game over: {:?} after {} attempts",
            self.status,
            self.max_guesses - self.remaining
        );
        self.candidates.clear();
        self.constraints.reset();
        self.filtered = false;
        self.stale = false;
    }
}

fn check_length(word: &Word, dictionary: &DictionaryStore) -> Result<()> {
    if word.len() == dictionary.word_length() {
        Ok(())
    } else {
        Err(WordError::InvalidLength {
            expected: dictionary.word_length(),
            found: word.len(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    fn dictionary(words: &[&str]) -> DictionaryStore {
        let mut store = DictionaryStore::new(4);
        for w in words {
            store.insert_str(w).unwrap();
        }
        store
    }

    fn word(text: &str) -> Word {
        Word::new(text, 4).unwrap()
    }

    fn scored(outcome: GuessOutcome) -> GuessReport {
        match outcome {
            GuessOutcome::Scored(report) => report,
            other => panic!("expected a scored guess, got {other:?}"),
        }
    }

    fn listed(game: &mut Game, dict: &DictionaryStore) -> Vec<String> {
        game.candidates(dict).map(ToString::to_string).collect()
    }

    #[test]
    fn scored_guess_reports_feedback_and_count() {
        let dict = dictionary(&["cane", "cani", "cine"]);
        let mut game = Game::new(word("cane"), 5, &dict).unwrap();

        let report = scored(game.guess(&dict, &word("cani")).unwrap());
        assert_eq!(
            report.feedback.marks(),
            &[Mark::Exact, Mark::Exact, Mark::Exact, Mark::Absent]
        );
        assert_eq!(report.filtered_count, 1);
        assert_eq!(report.remaining_attempts, 4);
        assert_eq!(game.constraints().exact_count(b'i'), Some(0));
        assert_eq!(listed(&mut game, &dict), ["cane"]);
    }

    #[test]
    fn unknown_guess_costs_nothing() {
        let dict = dictionary(&["cane", "cani"]);
        let mut game = Game::new(word("cane"), 1, &dict).unwrap();

        assert_eq!(
            game.guess(&dict, &word("zzzz")).unwrap(),
            GuessOutcome::NotInDictionary
        );
        assert_eq!(game.remaining_attempts(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.constraints().is_empty());
    }

    #[test]
    fn solving_ends_the_game_and_resets_state() {
        let dict = dictionary(&["cane", "cani"]);
        let mut game = Game::new(word("cane"), 3, &dict).unwrap();

        scored(game.guess(&dict, &word("cani")).unwrap());
        assert_eq!(game.guess(&dict, &word("cane")).unwrap(), GuessOutcome::Solved);
        assert_eq!(game.status(), GameStatus::Solved);
        assert!(game.constraints().is_empty());
        assert_eq!(game.filtered_count(), None);
        assert_eq!(game.remaining_attempts(), 2);
        assert_eq!(
            game.guess(&dict, &word("cane")),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn running_out_of_attempts_exhausts_the_game() {
        let dict = dictionary(&["cane", "cani", "cine"]);
        let mut game = Game::new(word("cane"), 2, &dict).unwrap();

        let first = scored(game.guess(&dict, &word("cine")).unwrap());
        assert!(!first.exhausted());

        let second = scored(game.guess(&dict, &word("cani")).unwrap());
        assert!(second.exhausted());
        assert_eq!(second.filtered_count, 1);
        assert_eq!(game.status(), GameStatus::Exhausted);
        assert!(game.constraints().is_empty());
        assert_eq!(game.filtered_count(), None);
    }

    #[test]
    fn zero_budget_is_exhausted_immediately() {
        let dict = dictionary(&["cane"]);
        let mut game = Game::new(word("cane"), 0, &dict).unwrap();
        assert_eq!(game.status(), GameStatus::Exhausted);
        assert_eq!(game.guess(&dict, &word("cane")), Err(GameError::GameOver));
    }

    #[test]
    fn listing_before_first_filter_is_whole_dictionary() {
        let dict = dictionary(&["cine", "cane", "cani"]);
        let mut game = Game::new(word("cane"), 3, &dict).unwrap();

        assert_eq!(game.filtered_count(), None);
        assert!(!game.candidates(&dict).is_filtered());
        assert_eq!(listed(&mut game, &dict), ["cane", "cani", "cine"]);

        scored(game.guess(&dict, &word("cine")).unwrap());
        assert!(game.candidates(&dict).is_filtered());
    }

    #[test]
    fn wrong_length_guess_is_an_error() {
        let dict = dictionary(&["cane"]);
        let mut game = Game::new(word("cane"), 3, &dict).unwrap();
        let long = Word::new("canes", 5).unwrap();

        assert!(matches!(game.guess(&dict, &long), Err(GameError::Word(_))));
        assert_eq!(game.remaining_attempts(), 3);
    }

    #[test]
    fn wrong_length_target_is_rejected() {
        let dict = dictionary(&["cane"]);
        let target = Word::new("canes", 5).unwrap();
        assert!(Game::new(target, 3, &dict).is_err());
    }

    #[test]
    fn insertion_mid_game_rescans_dictionary() {
        let mut dict = dictionary(&["cane", "cani", "cine"]);
        let mut game = Game::new(word("cane"), 5, &dict).unwrap();

        scored(game.guess(&dict, &word("cani")).unwrap());
        assert_eq!(game.filtered_count(), Some(1));

        let inserted = game
            .insert_words(&mut dict, [word("cans"), word("cant"), word("cade")])
            .unwrap();
        assert_eq!(inserted, 3);

        // "cade" fails the fixed 'n'; the last letter is still open
        assert_eq!(listed(&mut game, &dict), ["cane", "cans", "cant"]);
        assert_eq!(game.filtered_count(), Some(3));

        game.insert_words(&mut dict, [word("cone"), word("cane")])
            .unwrap();
        let report = scored(game.guess(&dict, &word("cine")).unwrap());
        assert_eq!(report.filtered_count, 2);
        assert_eq!(listed(&mut game, &dict), ["cane", "cane"]);
    }

    #[test]
    fn failed_batch_keeps_earlier_insertions_visible() {
        let mut dict = dictionary(&["cane", "cani", "cine"]);
        let mut game = Game::new(word("cane"), 5, &dict).unwrap();
        scored(game.guess(&dict, &word("cani")).unwrap());

        let long = Word::new("canes", 5).unwrap();
        let result = game.insert_words(&mut dict, [word("cant"), long]);
        assert!(matches!(result, Err(GameError::Word(_))));
        assert!(dict.contains(&word("cant")));

        let expected: Vec<String> = dict
            .iter()
            .filter(|w| game.constraints().satisfies(w))
            .map(ToString::to_string)
            .collect();
        assert_eq!(expected, ["cane", "cant"]);
        assert_eq!(listed(&mut game, &dict), expected);
        assert_eq!(game.filtered_count(), Some(2));
    }

    #[test]
    fn empty_candidate_set_still_accepts_dictionary_guesses() {
        // "cane" is the target but not in the dictionary: filtering can reach zero
        let dict = dictionary(&["bane", "cani", "cine", "mane"]);
        let mut game = Game::new(word("cane"), 4, &dict).unwrap();

        let first = scored(game.guess(&dict, &word("cani")).unwrap());
        assert_eq!(first.filtered_count, 0);

        let second = scored(game.guess(&dict, &word("mane")).unwrap());
        assert_eq!(second.filtered_count, 0);
        assert_eq!(second.feedback.to_string(), "/+++");
        assert_eq!(listed(&mut game, &dict), Vec::<String>::new());
    }

    #[test]
    fn candidates_always_match_brute_force() {
        let words = [
            "abba", "abbe", "acca", "baba", "babe", "cane", "cani", "cine", "dado", "ebbe",
            "mane", "mare", "nana", "rana",
        ];
        let dict = dictionary(&words);
        let mut game = Game::new(word("nana"), 6, &dict).unwrap();

        for guess in ["abba", "cane", "mare", "rana"] {
            let report = scored(game.guess(&dict, &word(guess)).unwrap());
            let expected: Vec<String> = dict
                .iter()
                .filter(|w| game.constraints().satisfies(w))
                .map(ToString::to_string)
                .collect();
            assert_eq!(report.filtered_count, expected.len());
            assert_eq!(listed(&mut game, &dict), expected);
            assert!(expected.contains(&"nana".to_string()));
        }
    }
}
