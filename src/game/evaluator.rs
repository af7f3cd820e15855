//! Guess evaluation
//!
//! Scores a guess against the target and records what the feedback proves in
//! the game's `ConstraintState`. Evaluation mutates that state, so each guess
//! of a game is evaluated exactly once.

use crate::core::{Feedback, Mark, Word};
use crate::filter::ConstraintState;
use rustc_hash::FxHashMap;

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub feedback: Feedback,
    pub solved: bool,
}

/// Score `guess` against `target`, updating `constraints`
///
/// # Algorithm
/// 1. Exact pass: equal letters at the same position are marked exact and
///    both positions are consumed. Every other position learns that the
///    guessed letter does not belong there.
/// 2. Duplicate pass: each remaining guess position, left to right, claims
///    the leftmost unconsumed target position holding the same letter and is
///    marked present. When none is left it is marked absent, which proves the
///    target holds exactly as many copies as have been matched so far.
/// 3. Each letter's lower bound is raised to the number of copies matched.
///
/// # Panics
/// Panics in debug builds if the words differ in length from the state.
///
/// # Examples
/// ```
/// use word_checker::core::Word;
/// use word_checker::filter::ConstraintState;
/// use word_checker::game::evaluate;
///
/// let mut constraints = ConstraintState::new(4);
/// let guess = Word::new("aabb", 4).unwrap();
/// let target = Word::new("abba", 4).unwrap();
///
/// let evaluation = evaluate(&guess, &target, &mut constraints);
/// assert_eq!(evaluation.feedback.to_string(), "+|+|");
/// assert!(!evaluation.solved);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word, constraints: &mut ConstraintState) -> Evaluation {
    let length = constraints.word_length();
    debug_assert_eq!(guess.len(), length);
    debug_assert_eq!(target.len(), length);

    let guess_letters = guess.letters();
    let target_letters = target.letters();

    let mut marks: Vec<Option<Mark>> = vec![None; length];
    let mut consumed = vec![false; length];
    let mut matched: FxHashMap<u8, usize> = FxHashMap::default();

    // Allow: Index needed to compare guess[i] with target[i] and set marks[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..length {
        let letter = guess_letters[i];
        if letter == target_letters[i] {
            marks[i] = Some(Mark::Exact);
            consumed[i] = true;
            constraints.set_fixed(i, letter);
            *matched.entry(letter).or_insert(0) += 1;
        } else {
            constraints.exclude(i, letter);
        }
    }

    #[allow(clippy::needless_range_loop)]
    for j in 0..length {
        if marks[j].is_some() {
            continue;
        }

        let letter = guess_letters[j];
        let claim = (0..length).find(|&k| !consumed[k] && target_letters[k] == letter);

        if let Some(k) = claim {
            consumed[k] = true;
            marks[j] = Some(Mark::Present);
            *matched.entry(letter).or_insert(0) += 1;
        } else {
            marks[j] = Some(Mark::Absent);
            let proven = matched.get(&letter).copied().unwrap_or(0);
            constraints.set_exact_count(letter, proven);
        }
    }

    for (&letter, &count) in &matched {
        constraints.raise_min_count(letter, count);
    }

    let feedback = Feedback::new(marks.into_iter().map(|m| m.unwrap_or(Mark::Absent)).collect());
    let solved = feedback.is_solved();

    Evaluation { feedback, solved }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(guess: &str, target: &str, constraints: &mut ConstraintState) -> Evaluation {
        let length = constraints.word_length();
        evaluate(
            &Word::new(guess, length).unwrap(),
            &Word::new(target, length).unwrap(),
            constraints,
        )
    }

    #[test]
    fn exact_guess_is_solved() {
        let mut constraints = ConstraintState::new(4);
        let evaluation = run("cane", "cane", &mut constraints);

        assert!(evaluation.solved);
        assert_eq!(evaluation.feedback.to_string(), "++++");
        assert_eq!(constraints.fixed(0), Some(b'c'));
        assert_eq!(constraints.min_count(b'a'), 1);
    }

    #[test]
    fn unmatched_letter_gets_exact_count_zero() {
        let mut constraints = ConstraintState::new(4);
        let evaluation = run("cani", "cane", &mut constraints);

        assert!(!evaluation.solved);
        assert_eq!(
            evaluation.feedback.marks(),
            &[Mark::Exact, Mark::Exact, Mark::Exact, Mark::Absent]
        );
        assert_eq!(constraints.exact_count(b'i'), Some(0));
        assert!(constraints.is_excluded(3, b'i'));
        assert_eq!(constraints.fixed(3), None);
    }

    #[test]
    fn duplicate_letters_resolve_left_to_right() {
        let mut constraints = ConstraintState::new(4);
        let evaluation = run("aabb", "abba", &mut constraints);

        assert!(!evaluation.solved);
        assert_eq!(
            evaluation.feedback.marks(),
            &[Mark::Exact, Mark::Present, Mark::Exact, Mark::Present]
        );
        assert!(constraints.min_count(b'a') >= 2);
        assert!(constraints.min_count(b'b') >= 2);
        assert_eq!(constraints.exact_count(b'a'), None);
        assert_eq!(constraints.exact_count(b'b'), None);
    }

    #[test]
    fn surplus_copy_proves_exact_count() {
        // Target has one 'e'; the guess has two, neither in place
        let mut constraints = ConstraintState::new(5);
        let evaluation = run("eerie", "crane", &mut constraints);

        assert_eq!(evaluation.feedback.to_string(), "//|/+");
        assert_eq!(constraints.min_count(b'e'), 1);
        assert_eq!(constraints.exact_count(b'e'), Some(1));
        assert_eq!(constraints.min_count(b'r'), 1);
        assert_eq!(constraints.exact_count(b'i'), Some(0));
    }

    #[test]
    fn present_marks_claim_each_target_copy_once() {
        // Both guessed 'l's find one of the target's two 'l's
        let mut constraints = ConstraintState::new(5);
        let evaluation = run("llama", "hello", &mut constraints);

        assert_eq!(evaluation.feedback.to_string(), "||///");
        assert_eq!(constraints.min_count(b'l'), 2);
        assert_eq!(constraints.exact_count(b'l'), None);
    }

    #[test]
    fn claimed_target_copy_is_not_reused() {
        let mut constraints = ConstraintState::new(5);
        let evaluation = run("speed", "abide", &mut constraints);

        // The 'd' and the first 'e' are present; the second 'e' finds the
        // target's single 'e' already claimed
        assert_eq!(evaluation.feedback.to_string(), "//|/|");
        assert_eq!(constraints.exact_count(b'e'), Some(1));
        assert_eq!(constraints.exact_count(b's'), Some(0));
    }

    #[test]
    fn min_count_never_decreases_across_guesses() {
        let mut constraints = ConstraintState::new(4);
        let target = "abba";
        let mut previous_a = 0;
        let mut previous_b = 0;

        for guess in ["aabb", "cdef", "bxyz", "abba"] {
            let _ = run(guess, target, &mut constraints);
            assert!(constraints.min_count(b'a') >= previous_a);
            assert!(constraints.min_count(b'b') >= previous_b);
            previous_a = constraints.min_count(b'a');
            previous_b = constraints.min_count(b'b');
        }

        assert_eq!(previous_a, 2);
        assert_eq!(previous_b, 2);
    }

    #[test]
    fn target_always_satisfies_learned_constraints() {
        let mut constraints = ConstraintState::new(5);
        let target = Word::new("abide", 5).unwrap();

        for guess in ["speed", "eerie", "aback", "bidet", "abode"] {
            let _ = run(guess, target.text(), &mut constraints);
            assert!(constraints.satisfies(&target), "after {guess}");
        }
    }
}
