//! Command-stream runner
//!
//! Reads the protocol from a line source, drives a `Session` and writes the
//! results. Input layout:
//!
//! ```text
//! 5                  word length
//! words...           initial dictionary, up to the first command
//! +nuova_partita
//! target
//! 6                  guess budget
//! guesses, +stampa_filtrate, +inserisci_inizio ... +inserisci_fine
//! ```

use super::protocol::{
    Line, OUTPUT_EXHAUSTED, OUTPUT_NOT_IN_DICTIONARY, OUTPUT_SOLVED, normalize_word,
};
use crate::core::Word;
use crate::error::{GameError, ProtocolError};
use crate::game::{GameStatus, GuessOutcome, Session};
use std::io::{BufRead, Lines, Write};

/// Counts gathered over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub games: usize,
    pub solved: usize,
    pub exhausted: usize,
    /// Games cut short by the end of input
    pub unfinished: usize,
    /// Input lines skipped as invalid words
    pub skipped_lines: usize,
}

/// Run a whole command stream
///
/// # Errors
/// Returns `ProtocolError` if the word length line is missing or malformed,
/// a game header is malformed, or reading/writing fails. Invalid words are
/// skipped with a warning rather than failing the run.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<RunSummary, ProtocolError> {
    let mut lines = input.lines();

    let first = lines
        .next()
        .transpose()?
        .ok_or(ProtocolError::MissingWordLength)?;
    let word_length: usize = first
        .trim()
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| ProtocolError::InvalidWordLength(first.clone()))?;

    log::debug!("word length {word_length}");

    let mut runner = Runner {
        lines,
        output,
        session: Session::new(word_length),
        summary: RunSummary::default(),
    };

    let mut next = runner.insert_block()?;
    while let Some(raw) = next {
        match Line::parse(&raw) {
            Line::NewGame => runner.play_game()?,
            Line::InsertStart => {
                runner.insert_block()?;
            }
            other => log::debug!("ignoring {other:?} outside a game"),
        }
        next = runner.next_line()?;
    }

    runner.output.flush()?;
    log::debug!(
        "run finished: {} words, {:?}",
        runner.session.dictionary().len(),
        runner.summary
    );
    Ok(runner.summary)
}

struct Runner<R, W> {
    lines: Lines<R>,
    output: W,
    session: Session,
    summary: RunSummary,
}

impl<R: BufRead, W: Write> Runner<R, W> {
    fn next_line(&mut self) -> Result<Option<String>, ProtocolError> {
        Ok(self.lines.next().transpose()?)
    }

    /// Insert words up to the next command line, which is returned
    fn insert_block(&mut self) -> Result<Option<String>, ProtocolError> {
        let length = self.session.word_length();
        let mut batch: Vec<Word> = Vec::new();

        let terminator = loop {
            let Some(raw) = self.next_line()? else {
                break None;
            };
            if Line::parse(&raw).is_command() {
                break Some(raw);
            }
            match normalize_word(&raw, length) {
                Ok(word) => batch.push(word),
                Err(e) => {
                    log::warn!("skipping dictionary line {raw:?}: {e}");
                    self.summary.skipped_lines += 1;
                }
            }
        };

        let inserted = self.session.insert_words(batch)?;
        log::debug!("inserted {inserted} words");
        Ok(terminator)
    }

    fn play_game(&mut self) -> Result<(), ProtocolError> {
        let (Some(target), Some(budget)) = (self.next_line()?, self.next_line()?) else {
            log::warn!("input ended inside a game header");
            return Ok(());
        };

        let target = normalize_word(&target, self.session.word_length()).map_err(GameError::from)?;
        let budget: usize = budget
            .trim()
            .parse()
            .map_err(|_| ProtocolError::InvalidGuessBudget(budget.clone()))?;

        self.summary.games += 1;
        if self.session.new_game(target.text(), budget)? == GameStatus::Exhausted {
            writeln!(self.output, "{OUTPUT_EXHAUSTED}")?;
            self.summary.exhausted += 1;
            return Ok(());
        }

        while self.session.in_game() {
            let Some(raw) = self.next_line()? else {
                self.summary.unfinished += 1;
                return Ok(());
            };

            match Line::parse(&raw) {
                Line::Text(text) => self.play_guess(text)?,
                Line::PrintFiltered => self.print_candidates()?,
                Line::InsertStart => {
                    self.insert_block()?;
                }
                other => log::warn!("ignoring {other:?} during a game"),
            }
        }

        Ok(())
    }

    fn play_guess(&mut self, text: &str) -> Result<(), ProtocolError> {
        let word = match normalize_word(text, self.session.word_length()) {
            Ok(word) => word,
            Err(e) => {
                log::warn!("skipping guess {text:?}: {e}");
                self.summary.skipped_lines += 1;
                return Ok(());
            }
        };

        match self.session.guess(word.text())? {
            GuessOutcome::NotInDictionary => {
                writeln!(self.output, "{OUTPUT_NOT_IN_DICTIONARY}")?;
            }
            GuessOutcome::Solved => {
                writeln!(self.output, "{OUTPUT_SOLVED}")?;
                self.summary.solved += 1;
            }
            GuessOutcome::Scored(report) => {
                writeln!(self.output, "{}", report.feedback)?;
                writeln!(self.output, "{}", report.filtered_count)?;
                if report.exhausted() {
                    writeln!(self.output, "{OUTPUT_EXHAUSTED}")?;
                    self.summary.exhausted += 1;
                }
            }
        }

        Ok(())
    }

    fn print_candidates(&mut self) -> Result<(), ProtocolError> {
        for word in self.session.print_candidates() {
            writeln!(self.output, "{word}")?;
        }
        Ok(())
    }
}
