//! Self-play simulation
//!
//! Plays many games in parallel against random dictionary targets. The
//! guesser picks a random word from the current candidates, so every guess
//! is consistent with everything learned so far. All workers share one
//! read-only dictionary.

use crate::core::Word;
use crate::dictionary::DictionaryStore;
use crate::game::{Game, GuessOutcome};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub games: usize,
    pub max_guesses: usize,
    /// Base seed; game `i` uses `seed + i`, so results do not depend on scheduling
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize) -> Self {
        Self {
            games,
            max_guesses: 6,
            seed: 0,
            show_progress: true,
        }
    }
}

/// Result of a single simulated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub target: String,
    pub guesses: Vec<String>,
    pub solved: bool,
    /// Candidates left after the first scored guess
    pub first_filter_count: Option<usize>,
}

/// Statistics over all simulated games
#[derive(Debug)]
pub struct SimulationResult {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub distribution: HashMap<usize, usize>,
    pub average_guesses: f64,
    pub average_first_filter: f64,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run `config.games` games against `dictionary`
#[must_use]
pub fn run_simulation(dictionary: &DictionaryStore, config: &SimulationConfig) -> SimulationResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let records: Vec<GameRecord> = (0..config.games)
        .into_par_iter()
        .filter_map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let record = play_one(dictionary, config.max_guesses, &mut rng);
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_and_clear();
    summarize(&records, start.elapsed())
}

/// Play one game; `None` if the dictionary is empty
fn play_one(dictionary: &DictionaryStore, max_guesses: usize, rng: &mut StdRng) -> Option<GameRecord> {
    let target = dictionary.iter().choose(rng)?.clone();
    let mut game = Game::new(target.clone(), max_guesses, dictionary).ok()?;

    let mut guesses = Vec::new();
    let mut first_filter_count = None;
    let mut solved = false;

    while !game.is_over() {
        let guess: Word = game.candidates(dictionary).choose(rng)?.clone();
        guesses.push(guess.text().to_string());

        match game.guess(dictionary, &guess).ok()? {
            GuessOutcome::Solved => solved = true,
            GuessOutcome::Scored(report) => {
                if first_filter_count.is_none() {
                    first_filter_count = Some(report.filtered_count);
                }
            }
            // Candidates always come from the dictionary
            GuessOutcome::NotInDictionary => return None,
        }
    }

    Some(GameRecord {
        target: target.text().to_string(),
        guesses,
        solved,
        first_filter_count,
    })
}

fn summarize(records: &[GameRecord], duration: Duration) -> SimulationResult {
    let total_games = records.len();
    let solved = records.iter().filter(|r| r.solved).count();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for record in records.iter().filter(|r| r.solved) {
        *distribution.entry(record.guesses.len()).or_insert(0) += 1;
    }

    let total_guesses: usize = records
        .iter()
        .filter(|r| r.solved)
        .map(|r| r.guesses.len())
        .sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let first_counts: Vec<usize> = records.iter().filter_map(|r| r.first_filter_count).collect();
    let average_first_filter = if first_counts.is_empty() {
        0.0
    } else {
        first_counts.iter().sum::<usize>() as f64 / first_counts.len() as f64
    };

    SimulationResult {
        total_games,
        solved,
        failed: total_games - solved,
        distribution,
        average_guesses,
        average_first_filter,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::{build_dictionary, words_from_slice};
    use crate::wordlists::{EMBEDDED_WORD_LENGTH, WORDS};

    fn embedded_dictionary() -> DictionaryStore {
        let words = words_from_slice(WORDS, EMBEDDED_WORD_LENGTH);
        let mut rng = StdRng::seed_from_u64(3);
        build_dictionary(words, EMBEDDED_WORD_LENGTH, &mut rng).unwrap()
    }

    fn quiet(games: usize) -> SimulationConfig {
        SimulationConfig {
            show_progress: false,
            ..SimulationConfig::new(games)
        }
    }

    #[test]
    fn simulation_plays_every_game() {
        let dictionary = embedded_dictionary();
        let result = run_simulation(&dictionary, &quiet(40));

        assert_eq!(result.total_games, 40);
        assert_eq!(result.solved + result.failed, 40);
        assert_eq!(result.distribution.values().sum::<usize>(), result.solved);
        for &guesses in result.distribution.keys() {
            assert!((1..=6).contains(&guesses));
        }
    }

    #[test]
    fn simulation_is_deterministic_for_a_seed() {
        let dictionary = embedded_dictionary();
        let a = run_simulation(&dictionary, &quiet(20));
        let b = run_simulation(&dictionary, &quiet(20));

        assert_eq!(a.solved, b.solved);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn single_word_dictionary_is_solved_first_try() {
        let mut dictionary = DictionaryStore::new(4);
        dictionary.insert_str("cane").unwrap();

        let result = run_simulation(&dictionary, &quiet(3));
        assert_eq!(result.solved, 3);
        assert_eq!(result.distribution.get(&1), Some(&3));
        assert!((result.average_guesses - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_dictionary_plays_nothing() {
        let dictionary = DictionaryStore::new(4);
        let result = run_simulation(&dictionary, &quiet(5));
        assert_eq!(result.total_games, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn target_survives_every_filter() {
        let dictionary = embedded_dictionary();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..25 {
            let record = play_one(&dictionary, 100, &mut rng).unwrap();
            // With an unlimited budget the candidate guesser always finds the target
            assert!(record.solved, "failed on {}", record.target);
            assert_eq!(record.guesses.last(), Some(&record.target));
        }
    }
}
