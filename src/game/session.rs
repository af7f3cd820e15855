//! Session: the dictionary plus the game currently being played
//!
//! This is the surface a driver talks to. It owns the dictionary for the
//! whole run and at most one `Game` at a time.

use super::controller::{Game, GameStatus, GuessOutcome, Listing};
use crate::core::Word;
use crate::dictionary::DictionaryStore;
use crate::error::{GameError, Result};

#[derive(Debug)]
pub struct Session {
    dictionary: DictionaryStore,
    game: Option<Game>,
}

impl Session {
    /// Empty session for words of `word_length` letters
    #[must_use]
    pub const fn new(word_length: usize) -> Self {
        Self::with_dictionary(DictionaryStore::new(word_length))
    }

    #[must_use]
    pub const fn with_dictionary(dictionary: DictionaryStore) -> Self {
        Self {
            dictionary,
            game: None,
        }
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.dictionary.word_length()
    }

    #[must_use]
    pub const fn dictionary(&self) -> &DictionaryStore {
        &self.dictionary
    }

    /// The current game, finished or not
    #[must_use]
    pub const fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// True while a game is being played
    #[must_use]
    pub fn in_game(&self) -> bool {
        self.game.as_ref().is_some_and(|g| !g.is_over())
    }

    /// Parse `text` as a word of the session's length
    ///
    /// # Errors
    /// Returns `GameError::Word` if `text` is not a valid word.
    pub fn word(&self, text: &str) -> Result<Word> {
        Ok(Word::new(text, self.word_length())?)
    }

    /// Start a new game, replacing any previous one
    ///
    /// # Errors
    /// Returns `GameError::Word` if the target is not a valid word.
    pub fn new_game(&mut self, target: &str, max_guesses: usize) -> Result<GameStatus> {
        let target = self.word(target)?;
        let game = Game::new(target, max_guesses, &self.dictionary)?;
        let status = game.status();
        self.game = Some(game);
        Ok(status)
    }

    /// Add words to the dictionary
    ///
    /// During a game the insertion goes through the game, so its candidates
    /// pick up the new words on the next filter pass.
    ///
    /// # Errors
    /// Returns `GameError::Word` for the first word of the wrong length;
    /// earlier words stay inserted.
    pub fn insert_words<I>(&mut self, words: I) -> Result<usize>
    where
        I: IntoIterator<Item = Word>,
    {
        match self.game.as_mut().filter(|g| !g.is_over()) {
            Some(game) => game.insert_words(&mut self.dictionary, words),
            None => {
                let mut inserted = 0;
                for word in words {
                    self.dictionary.insert(word)?;
                    inserted += 1;
                }
                Ok(inserted)
            }
        }
    }

    /// Words consistent with the current game, or the whole dictionary
    /// when no game is being played
    pub fn print_candidates(&mut self) -> Listing<'_> {
        match self.game.as_mut().filter(|g| !g.is_over()) {
            Some(game) => game.candidates(&self.dictionary),
            None => Listing::Dictionary(Box::new(self.dictionary.iter())),
        }
    }

    /// Every dictionary word in ascending order
    pub fn print_dictionary(&self) -> Listing<'_> {
        Listing::Dictionary(Box::new(self.dictionary.iter()))
    }

    /// Play a guess in the current game
    ///
    /// # Errors
    /// - `GameError::NoActiveGame` if no game was started
    /// - `GameError::GameOver` if the current game has ended
    /// - `GameError::Word` if `text` is not a valid word
    pub fn guess(&mut self, text: &str) -> Result<GuessOutcome> {
        let word = self.word(text)?;
        let game = self.game.as_mut().ok_or(GameError::NoActiveGame)?;
        game.guess(&self.dictionary, &word)
    }
}
