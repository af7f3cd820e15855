//! Interactive play mode
//!
//! Text-based game against a random dictionary word, with colored feedback.

use crate::game::{GuessOutcome, Session};
use crate::output::{print_game_over, print_guess_row};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use rand::seq::IteratorRandom;
use std::io::{BufRead, Write};

/// Configuration for interactive play
pub struct PlayConfig {
    pub max_guesses: usize,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self { max_guesses: 6 }
    }
}

/// Games played in one interactive run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    pub games: usize,
    pub solved: usize,
}

/// Run the interactive game loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// dictionary is empty.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play<R: BufRead, W: Write, G: Rng>(
    session: &mut Session,
    config: &PlayConfig,
    rng: &mut G,
    mut input: R,
    output: &mut W,
) -> Result<PlaySummary> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                  Word Checker - Interactive                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Guess the {}-letter word. Commands: ':words' to list candidates,",
        session.word_length()
    )?;
    writeln!(output, "':add <word>...' to extend the dictionary, ':new', ':quit'\n")?;

    let mut summary = PlaySummary::default();
    start_game(session, config, rng, output, &mut summary)?;

    loop {
        let remaining = session.game().map_or(0, |g| g.remaining_attempts());
        let Some(line) = prompt(&mut input, output, &format!("Guess ({remaining} left)"))? else {
            writeln!(output, "\n👋 Thanks for playing!\n")?;
            return Ok(summary);
        };

        let mut parts = line.split_whitespace();
        match parts.next() {
            None => {}
            Some(":quit" | ":q") => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(summary);
            }
            Some(":new") => start_game(session, config, rng, output, &mut summary)?,
            Some(":words") => {
                let listing = session.print_candidates();
                let label = if listing.is_filtered() {
                    "candidates"
                } else {
                    "dictionary words, nothing ruled out yet"
                };
                let words: Vec<String> = listing.map(ToString::to_string).collect();
                writeln!(output, "{} {label}:", words.len())?;
                for word in words {
                    writeln!(output, "  • {word}")?;
                }
            }
            Some(":add") => {
                for text in parts {
                    match session.word(text) {
                        Ok(word) => {
                            session.insert_words([word])?;
                            writeln!(output, "✓ Added {text}")?;
                        }
                        Err(e) => writeln!(output, "{} {text}: {e}", "✗".red())?,
                    }
                }
            }
            Some(text) => {
                if !session.in_game() {
                    writeln!(output, "No game in progress. Type ':new' or ':quit'.")?;
                    continue;
                }

                let word = match session.word(text) {
                    Ok(word) => word,
                    Err(e) => {
                        writeln!(output, "{} {e}", "❌".red())?;
                        continue;
                    }
                };

                match session.guess(word.text())? {
                    GuessOutcome::NotInDictionary => {
                        writeln!(output, "{}", format!("{text} is not in the dictionary").red())?;
                    }
                    GuessOutcome::Solved => {
                        summary.solved += 1;
                        let used = session
                            .game()
                            .map_or(0, |g| g.max_guesses() - g.remaining_attempts() + 1);
                        print_game_over(output, &word, true, used)?;
                        writeln!(output, "Type ':new' for another word or ':quit'.")?;
                    }
                    GuessOutcome::Scored(report) => {
                        print_guess_row(output, &word, &report)?;
                        if report.exhausted() {
                            if let Some(game) = session.game() {
                                print_game_over(output, game.target(), false, game.max_guesses())?;
                            }
                            writeln!(output, "Type ':new' for another word or ':quit'.")?;
                        }
                    }
                }
            }
        }
    }
}

fn start_game<W: Write, G: Rng>(
    session: &mut Session,
    config: &PlayConfig,
    rng: &mut G,
    output: &mut W,
    summary: &mut PlaySummary,
) -> Result<()> {
    let target = session
        .dictionary()
        .iter()
        .choose(rng)
        .context("the dictionary is empty")?
        .text()
        .to_string();

    session.new_game(&target, config.max_guesses)?;
    summary.games += 1;

    writeln!(
        output,
        "{}",
        format!(
            "🔄 New game: {} words in the dictionary, {} attempts",
            session.dictionary().len(),
            config.max_guesses
        )
        .bright_cyan()
    )?;
    Ok(())
}

/// Read one trimmed line after a prompt; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session(words: &[&str]) -> Session {
        let mut session = Session::new(4);
        let words: Vec<_> = words.iter().map(|w| session.word(w).unwrap()).collect();
        session.insert_words(words).unwrap();
        session
    }

    fn play(session: &mut Session, script: &str) -> (PlaySummary, String) {
        colored::control::set_override(false);
        let mut rng = StdRng::seed_from_u64(5);
        let mut output = Vec::new();
        let summary = run_play(
            session,
            &PlayConfig::default(),
            &mut rng,
            script.as_bytes(),
            &mut output,
        )
        .unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn single_word_dictionary_is_solved() {
        let mut session = session(&["cane"]);
        let (summary, _) = play(&mut session, "cane\n:quit\n");
        assert_eq!(summary, PlaySummary { games: 1, solved: 1 });
    }

    #[test]
    fn unknown_word_is_reported() {
        let mut session = session(&["cane"]);
        let (summary, output) = play(&mut session, "zzzz\n");
        assert!(output.contains("zzzz is not in the dictionary"));
        assert_eq!(summary.solved, 0);
        assert_eq!(session.game().unwrap().remaining_attempts(), 6);
    }

    #[test]
    fn add_command_extends_dictionary() {
        let mut session = session(&["cane"]);
        let (_, output) = play(&mut session, ":add cani xy\n:words\n");
        assert!(output.contains("Added cani"));
        assert!(output.contains("2 dictionary words, nothing ruled out yet:"));
        assert_eq!(session.dictionary().len(), 2);
    }

    #[test]
    fn words_command_lists_candidates_after_a_guess() {
        let mut session = session(&["cane"]);
        let (_, output) = play(&mut session, ":add cant cans\ncans\n:words\n");
        assert!(output.contains("2 candidates:"));
        assert!(output.contains("  • cane\n  • cant\n"));
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        let mut session = Session::new(4);
        let mut rng = StdRng::seed_from_u64(5);
        let mut output = Vec::new();
        let result = run_play(
            &mut session,
            &PlayConfig::default(),
            &mut rng,
            "".as_bytes(),
            &mut output,
        );
        assert!(result.is_err());
    }
}
