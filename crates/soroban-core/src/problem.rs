//! The generated practice problem.

use serde::{Deserialize, Serialize};

/// A finished problem: terms, running totals after each term, and the answer.
///
/// `answer == steps[last] == numbers.iter().sum()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub numbers: Vec<i32>,
    pub answer: i32,
    pub steps: Vec<i32>,
}

impl Problem {
    /// Derive running totals and the answer from the terms.
    pub fn from_numbers(numbers: Vec<i32>) -> Self {
        let steps = running_totals(&numbers);
        let answer = steps.last().copied().unwrap_or(0);
        Self {
            numbers,
            answer,
            steps,
        }
    }

    pub fn term_count(&self) -> usize {
        self.numbers.len()
    }

    /// Whether steps and answer agree with the terms.
    pub fn is_consistent(&self) -> bool {
        self.steps == running_totals(&self.numbers)
            && self.answer == self.numbers.iter().sum::<i32>()
    }
}

/// Prefix sums of `numbers`.
pub fn running_totals(numbers: &[i32]) -> Vec<i32> {
    numbers
        .iter()
        .scan(0, |total, &n| {
            *total += n;
            Some(*total)
        })
        .collect()
}
