//! Word Checker - CLI
//!
//! Drives the word-guessing engine through the line protocol, an
//! interactive game or a batch self-play simulation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use word_checker::{
    commands::{PlayConfig, SimulationConfig, run_play, run_simulation},
    core::Word,
    dictionary::DictionaryStore,
    driver,
    game::Session,
    output::print_simulation_result,
    wordlists::{
        EMBEDDED_WORD_LENGTH, WORDS,
        loader::{build_dictionary, load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_checker",
    about = "Word-guessing game engine with incremental candidate filtering",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist for play/simulate: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Show debug logs
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive the command-stream protocol (default)
    Run {
        /// Read commands from a file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Write results to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Play interactively against a random word
    Play {
        /// Attempts per game
        #[arg(short = 'n', long, default_value = "6")]
        max_guesses: usize,

        /// Seed for the target choice
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run self-play games in parallel and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'g', long, default_value = "1000")]
        games: usize,

        /// Attempts per game
        #[arg(short = 'n', long, default_value = "6")]
        max_guesses: usize,

        /// Base seed; the same seed replays the same games
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries protocol output
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    // Default to Run mode if no command given
    let command = cli.command.unwrap_or(Commands::Run {
        input: None,
        output: None,
    });

    match command {
        Commands::Run { input, output } => run_command(input.as_deref(), output.as_deref()),
        Commands::Play { max_guesses, seed } => run_play_command(&cli.wordlist, max_guesses, seed),
        Commands::Simulate {
            games,
            max_guesses,
            seed,
        } => run_simulate_command(&cli.wordlist, games, max_guesses, seed),
    }
}

fn run_command(input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    let summary = driver::run(reader, BufWriter::new(writer)).context("protocol run failed")?;

    log::info!(
        "{} games: {} solved, {} exhausted, {} unfinished",
        summary.games,
        summary.solved,
        summary.exhausted,
        summary.unfinished
    );
    if summary.skipped_lines > 0 {
        log::warn!("{} input lines skipped", summary.skipped_lines);
    }
    Ok(())
}

fn run_play_command(wordlist: &str, max_guesses: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let dictionary = load_dictionary(wordlist, &mut rng)?;
    let mut session = Session::with_dictionary(dictionary);

    let config = PlayConfig { max_guesses };
    let summary = run_play(
        &mut session,
        &config,
        &mut rng,
        io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;

    log::info!("played {} games, solved {}", summary.games, summary.solved);
    Ok(())
}

fn run_simulate_command(wordlist: &str, games: usize, max_guesses: usize, seed: u64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dictionary = load_dictionary(wordlist, &mut rng)?;

    println!(
        "Simulating {games} games over {} words (tree height {})...",
        dictionary.len(),
        dictionary.height()
    );

    let config = SimulationConfig {
        max_guesses,
        seed,
        ..SimulationConfig::new(games)
    };
    let result = run_simulation(&dictionary, &config);
    print_simulation_result(&result);
    Ok(())
}

/// Load the dictionary selected by the -w flag
///
/// - "embedded": the built-in five-letter list
/// - "<path>": one word per line; the first word sets the length
fn load_dictionary(wordlist: &str, rng: &mut StdRng) -> Result<DictionaryStore> {
    let (words, length): (Vec<Word>, usize) = match wordlist {
        "embedded" => (words_from_slice(WORDS, EMBEDDED_WORD_LENGTH), EMBEDDED_WORD_LENGTH),
        path => {
            let words =
                load_from_file(path).with_context(|| format!("failed to load wordlist {path}"))?;
            let length = words.first().map_or(EMBEDDED_WORD_LENGTH, Word::len);
            (words, length)
        }
    };

    log::debug!("loaded {} words of length {length}", words.len());
    Ok(build_dictionary(words, length, rng)?)
}
