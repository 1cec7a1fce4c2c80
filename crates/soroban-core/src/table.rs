//! Candidate tables: legal next deltas per running total.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::bead::{classify, normalize, MoveKind, DELTA_MAX, STATE_MAX};

/// Legal increments for one class, keyed by normalized running total.
///
/// Built once from the class's admitted move kinds; lookups never allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTable {
    first: Vec<i32>,
    next: BTreeMap<i32, Vec<i32>>,
}

impl CandidateTable {
    /// Build the table for a first-term range and a set of admitted moves.
    ///
    /// Every state in `0..=19` gets an entry, possibly empty.
    pub fn build(first: RangeInclusive<i32>, moves: &[MoveKind]) -> Self {
        debug_assert!(!first.is_empty(), "First-term range must not be empty");
        debug_assert!(!moves.is_empty(), "A class must admit at least one move");

        let next = (0..=STATE_MAX)
            .map(|state| {
                let deltas: Vec<i32> = (-DELTA_MAX..=DELTA_MAX)
                    .filter(|&delta| classify(state, delta).is_some_and(|k| moves.contains(&k)))
                    .collect();
                (state, deltas)
            })
            .collect();

        Self {
            first: first.collect(),
            next,
        }
    }

    /// Legal increments from `current`.
    ///
    /// For the first term this is the class's starting-value table. Later
    /// terms look up the normalized total; totals outside the table's domain
    /// have no candidates.
    pub fn candidates(&self, current: i32, is_first: bool) -> &[i32] {
        if is_first {
            return &self.first;
        }
        self.next
            .get(&normalize(current))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn first_terms(&self) -> &[i32] {
        &self.first
    }

    /// `(state, deltas)` pairs in ascending state order.
    pub fn entries(&self) -> impl Iterator<Item = (i32, &[i32])> {
        self.next
            .iter()
            .map(|(&state, deltas)| (state, deltas.as_slice()))
    }
}
