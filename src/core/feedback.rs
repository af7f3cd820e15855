//! Guess feedback representation
//!
//! One mark per position:
//! - `+` = Exact (right letter, right position)
//! - `|` = Present (letter occurs elsewhere in the target)
//! - `/` = Absent (no unmatched occurrence left in the target)

use std::fmt;
use std::str::FromStr;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

impl Mark {
    /// Symbol used on the command stream
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => '+',
            Self::Present => '|',
            Self::Absent => '/',
        }
    }

    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Exact),
            '|' => Some(Self::Present),
            '/' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, one `Mark` per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    #[must_use]
    pub fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Exact)
    }

    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Exact).count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩"
    ///
    /// # Examples
    /// ```
    /// use word_checker::core::Feedback;
    ///
    /// let f: Feedback = "+|/+".parse().unwrap();
    /// assert_eq!(f.to_emoji(), "🟩🟨⬜🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|m| match m {
                Mark::Exact => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("empty feedback string".to_string());
        }

        s.chars()
            .map(|ch| Mark::from_symbol(ch).ok_or_else(|| format!("Invalid feedback string: {s}")))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
