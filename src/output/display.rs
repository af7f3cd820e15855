//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::SimulationResult;
use crate::core::Word;
use crate::game::GuessReport;
use colored::Colorize;
use std::io::{self, Write};

/// Print one scored guess: colored letters, marks and the candidate count
///
/// # Errors
/// Returns an error if writing fails.
pub fn print_guess_row<W: Write>(output: &mut W, word: &Word, report: &GuessReport) -> io::Result<()> {
    writeln!(
        output,
        "  {}  {} {}  {} candidates, {} left",
        colored_guess(word, &report.feedback),
        report.feedback.to_emoji(),
        report.feedback.to_string().bright_black(),
        report.filtered_count.to_string().bright_yellow(),
        report.remaining_attempts
    )
}

/// Print the end-of-game banner
///
/// # Errors
/// Returns an error if writing fails.
pub fn print_game_over<W: Write>(output: &mut W, target: &Word, solved: bool, guesses: usize) -> io::Result<()> {
    writeln!(output)?;
    if solved {
        writeln!(
            output,
            "{}",
            format!("✅ Solved in {guesses} guesses! The word was {}", target.text().to_uppercase())
                .green()
                .bold()
        )
    } else {
        writeln!(
            output,
            "{}",
            format!("❌ Out of guesses after {guesses}. The word was {}", target.text().to_uppercase())
                .red()
                .bold()
        )
    }
}

/// Print the statistics of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let total = result.total_games.max(1) as f64;

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved.to_string().green(),
        result.solved as f64 / total * 100.0
    );
    println!("   Failed:           {}", result.failed.to_string().red());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses).bright_yellow().bold()
    );
    println!(
        "   First filter:     {:.1} candidates left on average",
        result.average_first_filter
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    let Some(&longest) = result.distribution.keys().max() else {
        return;
    };

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=longest {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = count as f64 / total * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
