//! The fixed class catalogue.
//!
//! | Class | Terms | Max | First | Moves | Requirement |
//! |-------|-------|-----|-------|-------|-------------|
//! | 1A | 2-10 | 9 | 1-4 | lower beads | never cross five |
//! | 1B | 2-10 | 9 | 1-9 | direct | one direct five-bead move |
//! | 1C | 2-10 | 9 | 5-9 | direct | one drop below five |
//! | 2A | 2-10 | 9 | 1-9 | direct, 5-comp add | one 5-comp add, no 5-comp sub |
//! | 2B | 2-10 | 9 | 1-9 | direct, 5-comp sub | one 5-comp sub, no 5-comp add |
//! | 2C | 3-10 | 9 | 1-9 | direct, 5-comps | one of each 5-comp |
//! | 2D | 4-12 | 9 | 1-9 | direct, 5-comps | three 5-comps |
//! | 2E | 3-15 | 9 | 1-9 | direct, 5-comps | - |
//! | 3A | 2-10 | 19 | 1-9 | direct, carry | one carry, no 5-comps |
//! | 3B | 2-10 | 19 | 10-19 | direct, borrow | one borrow, no 5-comps |
//! | 3C | 3-12 | 19 | 1-9 | direct, carry, borrow | one of each, no 5-comps |
//! | 3D | 2-12 | 19 | 1-9 | all | one mixed complement |
//! | 3E | 3-15 | 19 | 1-9 | all | - |

use std::ops::RangeInclusive;
use std::sync::OnceLock;

use crate::bead::MoveKind;
use crate::class::ClassId;
use crate::error::ConfigError;
use crate::rules::{Category, Requirement, Rule};
use crate::table::CandidateTable;

const DIRECT: &[MoveKind] = &[MoveKind::LowerDirect, MoveKind::UpperDirect];

const FIVE_ADD: &[MoveKind] = &[
    MoveKind::LowerDirect,
    MoveKind::UpperDirect,
    MoveKind::FiveComplementAdd,
];

const FIVE_SUB: &[MoveKind] = &[
    MoveKind::LowerDirect,
    MoveKind::UpperDirect,
    MoveKind::FiveComplementSub,
];

const FIVES: &[MoveKind] = &[
    MoveKind::LowerDirect,
    MoveKind::UpperDirect,
    MoveKind::FiveComplementAdd,
    MoveKind::FiveComplementSub,
];

const TEN_ADD: &[MoveKind] = &[
    MoveKind::LowerDirect,
    MoveKind::UpperDirect,
    MoveKind::TenComplementAdd,
];

const TEN_SUB: &[MoveKind] = &[
    MoveKind::LowerDirect,
    MoveKind::UpperDirect,
    MoveKind::TenComplementSub,
];

const TENS: &[MoveKind] = &[
    MoveKind::LowerDirect,
    MoveKind::UpperDirect,
    MoveKind::TenComplementAdd,
    MoveKind::TenComplementSub,
];

const EVERYTHING: &[MoveKind] = &MoveKind::ALL;

/// One difficulty class: a tagged configuration value.
#[derive(Debug, Clone)]
pub struct ClassConfig {
    pub id: ClassId,
    pub title: &'static str,
    pub min_terms: usize,
    pub max_terms: usize,
    /// Largest running total allowed at any step.
    pub max_value: i32,
    pub moves: &'static [MoveKind],
    pub table: CandidateTable,
    pub requirement: Option<Requirement>,
}

impl ClassConfig {
    pub fn new(
        id: ClassId,
        title: &'static str,
        terms: RangeInclusive<usize>,
        max_value: i32,
        first: RangeInclusive<i32>,
        moves: &'static [MoveKind],
        requirement: Option<Requirement>,
    ) -> Self {
        debug_assert!(*terms.start() >= 1, "A problem has at least one term");
        debug_assert!(terms.start() <= terms.end(), "Empty term range");
        debug_assert!(max_value > 0, "Max value must be positive");

        Self {
            id,
            title,
            min_terms: *terms.start(),
            max_terms: *terms.end(),
            max_value,
            moves,
            table: CandidateTable::build(first, moves),
            requirement,
        }
    }

    /// Legal increments from `current` (see [`CandidateTable::candidates`]).
    pub fn candidates(&self, current: i32, is_first: bool) -> &[i32] {
        self.table.candidates(current, is_first)
    }

    pub fn in_range(&self, total: i32) -> bool {
        (0..=self.max_value).contains(&total)
    }

    pub fn check_term_count(&self, term_count: usize) -> Result<(), ConfigError> {
        if (self.min_terms..=self.max_terms).contains(&term_count) {
            Ok(())
        } else {
            Err(ConfigError::TermCountOutOfRange {
                class: self.id,
                requested: term_count,
                min: self.min_terms,
                max: self.max_terms,
            })
        }
    }
}

fn standard_classes() -> Vec<ClassConfig> {
    use Category::*;
    use MoveKind::*;

    const REQ_1A: Requirement = Requirement::new(&[
        Rule::Never(FiveCrossingUp),
        Rule::Never(FiveCrossingDown),
    ]);
    const REQ_1B: Requirement = Requirement::new(&[Rule::AtLeast(Kind(UpperDirect), 1)]);
    const REQ_1C: Requirement = Requirement::new(&[Rule::AtLeast(FiveCrossingDown, 1)]);
    const REQ_2A: Requirement = Requirement::new(&[
        Rule::AtLeast(Kind(FiveComplementAdd), 1),
        Rule::Never(Kind(FiveComplementSub)),
    ]);
    const REQ_2B: Requirement = Requirement::new(&[
        Rule::AtLeast(Kind(FiveComplementSub), 1),
        Rule::Never(Kind(FiveComplementAdd)),
    ]);
    const REQ_2C: Requirement = Requirement::new(&[
        Rule::AtLeast(Kind(FiveComplementAdd), 1),
        Rule::AtLeast(Kind(FiveComplementSub), 1),
    ]);
    const REQ_2D: Requirement = Requirement::new(&[Rule::AtLeast(AnyFiveComplement, 3)]);
    const REQ_3A: Requirement = Requirement::new(&[
        Rule::AtLeast(TensCrossingUp, 1),
        Rule::Never(AnyFiveComplement),
    ]);
    const REQ_3B: Requirement = Requirement::new(&[
        Rule::AtLeast(TensCrossingDown, 1),
        Rule::Never(AnyFiveComplement),
    ]);
    const REQ_3C: Requirement = Requirement::new(&[
        Rule::AtLeast(TensCrossingUp, 1),
        Rule::AtLeast(TensCrossingDown, 1),
        Rule::Never(AnyFiveComplement),
    ]);
    const REQ_3D: Requirement = Requirement::new(&[Rule::AtLeast(AnyMixedComplement, 1)]);

    vec![
        ClassConfig::new(
            ClassId::C1A,
            "Lower beads only",
            2..=10,
            9,
            1..=4,
            &[LowerDirect],
            Some(REQ_1A),
        ),
        ClassConfig::new(
            ClassId::C1B,
            "Direct moves with the five bead",
            2..=10,
            9,
            1..=9,
            DIRECT,
            Some(REQ_1B),
        ),
        ClassConfig::new(
            ClassId::C1C,
            "Direct subtraction through five",
            2..=10,
            9,
            5..=9,
            DIRECT,
            Some(REQ_1C),
        ),
        ClassConfig::new(
            ClassId::C2A,
            "Five-complement addition",
            2..=10,
            9,
            1..=9,
            FIVE_ADD,
            Some(REQ_2A),
        ),
        ClassConfig::new(
            ClassId::C2B,
            "Five-complement subtraction",
            2..=10,
            9,
            1..=9,
            FIVE_SUB,
            Some(REQ_2B),
        ),
        ClassConfig::new(
            ClassId::C2C,
            "Five-complements both ways",
            3..=10,
            9,
            1..=9,
            FIVES,
            Some(REQ_2C),
        ),
        ClassConfig::new(
            ClassId::C2D,
            "Five-complement drill",
            4..=12,
            9,
            1..=9,
            FIVES,
            Some(REQ_2D),
        ),
        ClassConfig::new(
            ClassId::C2E,
            "Single rod review",
            3..=15,
            9,
            1..=9,
            FIVES,
            None,
        ),
        ClassConfig::new(
            ClassId::C3A,
            "Carry into the tens",
            2..=10,
            19,
            1..=9,
            TEN_ADD,
            Some(REQ_3A),
        ),
        ClassConfig::new(
            ClassId::C3B,
            "Borrow from the tens",
            2..=10,
            19,
            10..=19,
            TEN_SUB,
            Some(REQ_3B),
        ),
        ClassConfig::new(
            ClassId::C3C,
            "Carry and borrow",
            3..=12,
            19,
            1..=9,
            TENS,
            Some(REQ_3C),
        ),
        ClassConfig::new(
            ClassId::C3D,
            "Mixed complements",
            2..=12,
            19,
            1..=9,
            EVERYTHING,
            Some(REQ_3D),
        ),
        ClassConfig::new(
            ClassId::C3E,
            "Two rod review",
            3..=15,
            19,
            1..=9,
            EVERYTHING,
            None,
        ),
    ]
}

static REGISTRY: OnceLock<Vec<ClassConfig>> = OnceLock::new();

/// Every class, in [`ClassId::ALL`] order. Built on first use.
pub fn registry() -> &'static [ClassConfig] {
    REGISTRY.get_or_init(standard_classes)
}

impl ClassId {
    /// The class's configuration record.
    pub fn config(self) -> &'static ClassConfig {
        // Registry order is ClassId::ALL order.
        &registry()[self as usize]
    }
}

/// Resolve a class name and term count, rejecting anything out of range.
pub fn resolve(class: &str, term_count: usize) -> Result<&'static ClassConfig, ConfigError> {
    let id: ClassId = class.parse()?;
    let config = id.config();
    config.check_term_count(term_count)?;
    Ok(config)
}
