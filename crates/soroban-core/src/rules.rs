//! Structural requirements over a whole sequence.
//!
//! A requirement is a conjunction of presence rules ("at least one carry")
//! and absence rules ("never a five-complement"). Rules look at each
//! transition's pre-transition total and signed delta, since whether a move
//! uses the five bead or crosses the tens rod depends on where it started.

use std::fmt;

use serde::Serialize;

use crate::bead::{classify, normalize, MoveKind};

/// One term applied to a running total.
///
/// The first term of a problem places its value on an empty abacus and is
/// not a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub pre: i32,
    pub delta: i32,
}

impl Transition {
    pub fn new(pre: i32, delta: i32) -> Self {
        Self { pre, delta }
    }

    pub fn post(&self) -> i32 {
        self.pre + self.delta
    }

    /// Bead classification, from the normalized pre-transition total.
    pub fn kind(&self) -> Option<MoveKind> {
        classify(normalize(self.pre), self.delta)
    }
}

/// Transitions of a generated sequence: terms 2..n against the preceding step.
pub fn transitions<'a>(
    numbers: &'a [i32],
    steps: &'a [i32],
) -> impl Iterator<Item = Transition> + 'a {
    debug_assert_eq!(numbers.len(), steps.len(), "numbers and steps must align");
    steps
        .iter()
        .zip(numbers.iter().skip(1))
        .map(|(&pre, &delta)| Transition::new(pre, delta))
}

/// A category of transition a rule counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Kind(MoveKind),
    AnyFiveComplement,
    AnyMixedComplement,
    /// Addition taking the ones digit from below five to five or more, same ten.
    FiveCrossingUp,
    /// Subtraction taking the ones digit from five or more to below five, same ten.
    FiveCrossingDown,
    /// From below ten to ten or more.
    TensCrossingUp,
    /// From ten or more to below ten.
    TensCrossingDown,
}

impl Category {
    pub fn matches(&self, t: &Transition) -> bool {
        let post = t.post();
        let same_ten = t.pre.div_euclid(10) == post.div_euclid(10);
        let ones_pre = t.pre.rem_euclid(10);
        let ones_post = post.rem_euclid(10);

        match self {
            Category::Kind(kind) => t.kind() == Some(*kind),
            Category::AnyFiveComplement => t.kind().is_some_and(|k| k.uses_five_complement()),
            Category::AnyMixedComplement => matches!(
                t.kind(),
                Some(MoveKind::MixedComplementAdd | MoveKind::MixedComplementSub)
            ),
            Category::FiveCrossingUp => t.delta > 0 && same_ten && ones_pre < 5 && ones_post >= 5,
            Category::FiveCrossingDown => t.delta < 0 && same_ten && ones_pre >= 5 && ones_post < 5,
            Category::TensCrossingUp => t.pre < 10 && post >= 10,
            Category::TensCrossingDown => t.pre >= 10 && post < 10,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Kind(kind) => f.write_str(kind.description()),
            Category::AnyFiveComplement => f.write_str("any five-complement"),
            Category::AnyMixedComplement => f.write_str("any mixed complement"),
            Category::FiveCrossingUp => f.write_str("crossing five upward"),
            Category::FiveCrossingDown => f.write_str("crossing five downward"),
            Category::TensCrossingUp => f.write_str("crossing ten upward"),
            Category::TensCrossingDown => f.write_str("crossing ten downward"),
        }
    }
}

/// A single presence or absence constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rule {
    AtLeast(Category, u8),
    Never(Category),
}

impl Rule {
    pub fn category(&self) -> Category {
        match self {
            Rule::AtLeast(category, _) | Rule::Never(category) => *category,
        }
    }

    /// Count at which this rule's counter saturates.
    fn saturation(&self) -> u8 {
        match self {
            Rule::AtLeast(_, n) => *n,
            Rule::Never(_) => 1,
        }
    }

    fn holds_at(&self, count: u8) -> bool {
        match self {
            Rule::AtLeast(_, n) => count >= *n,
            Rule::Never(_) => count == 0,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::AtLeast(category, 1) => write!(f, "at least one {}", category),
            Rule::AtLeast(category, n) => write!(f, "at least {} x {}", n, category),
            Rule::Never(category) => write!(f, "never {}", category),
        }
    }
}

/// Conjunction of rules attached to a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    rules: &'static [Rule],
}

impl Requirement {
    pub const fn new(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Fresh incremental evaluation.
    pub fn progress(&self) -> RequirementProgress {
        RequirementProgress {
            counts: vec![0; self.rules.len()],
        }
    }

    /// Evaluate every transition once; all rules must hold.
    pub fn is_satisfied_by<I>(&self, transitions: I) -> bool
    where
        I: IntoIterator<Item = Transition>,
    {
        let mut progress = self.progress();
        for t in transitions {
            progress.observe(self, &t);
        }
        progress.is_satisfied(self)
    }
}

/// Saturating per-rule counters.
///
/// Small and hashable so model checkers can keep it in their state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequirementProgress {
    counts: Vec<u8>,
}

impl RequirementProgress {
    pub fn observe(&mut self, requirement: &Requirement, t: &Transition) {
        debug_assert_eq!(self.counts.len(), requirement.rules.len());
        for (count, rule) in self.counts.iter_mut().zip(requirement.rules) {
            if *count < rule.saturation() && rule.category().matches(t) {
                *count += 1;
            }
        }
    }

    /// Whether some absence rule has already been broken.
    pub fn is_violated(&self, requirement: &Requirement) -> bool {
        self.counts
            .iter()
            .zip(requirement.rules)
            .any(|(&count, rule)| matches!(rule, Rule::Never(_)) && count > 0)
    }

    pub fn is_satisfied(&self, requirement: &Requirement) -> bool {
        self.counts
            .iter()
            .zip(requirement.rules)
            .all(|(&count, rule)| rule.holds_at(count))
    }

    /// Per-rule counters, in rule order.
    pub fn counts(&self) -> &[u8] {
        &self.counts
    }
}
