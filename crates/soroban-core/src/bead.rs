//! Bead-move classification on a two-rod soroban.
//!
//! A running total in `0..=19` occupies a tens rod and a ones rod. Each rod
//! has one upper bead worth five (godama) and four lower beads worth one
//! (ichidama). Applying a signed delta is either a direct move, a move that
//! needs a complement, or impossible.
//!
//! | Kind | Example | Beads on the ones rod |
//! |------|---------|-----------------------|
//! | LowerDirect | 6+2 | lower beads only |
//! | UpperDirect | 2+5, 9-7 | godama toggles, lower beads direct |
//! | FiveComplementAdd | 4+1 | +5, -4 |
//! | FiveComplementSub | 5-1 | -5, +4 |
//! | TenComplementAdd | 9+1 | tens +1, ones -9 direct |
//! | MixedComplementAdd | 5+6 | tens +1, ones -4 via -5 +1 |
//! | TenComplementSub | 13-4 | tens -1, ones +6 direct |
//! | MixedComplementSub | 12-6 | tens -1, ones +4 via +5 -1 |

use serde::{Deserialize, Serialize};

/// Largest normalized running total a table is defined for.
pub const STATE_MAX: i32 = 19;

/// Largest magnitude of a single non-first term.
pub const DELTA_MAX: i32 = 9;

/// Value of the upper bead.
const GODAMA: i32 = 5;

/// How a delta is carried out on the beads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    LowerDirect,
    UpperDirect,
    FiveComplementAdd,
    FiveComplementSub,
    TenComplementAdd,
    TenComplementSub,
    MixedComplementAdd,
    MixedComplementSub,
}

impl MoveKind {
    /// Every move kind.
    pub const ALL: [MoveKind; 8] = [
        MoveKind::LowerDirect,
        MoveKind::UpperDirect,
        MoveKind::FiveComplementAdd,
        MoveKind::FiveComplementSub,
        MoveKind::TenComplementAdd,
        MoveKind::TenComplementSub,
        MoveKind::MixedComplementAdd,
        MoveKind::MixedComplementSub,
    ];

    /// Both direct kinds.
    pub const DIRECT: [MoveKind; 2] = [MoveKind::LowerDirect, MoveKind::UpperDirect];

    /// Whether the move borrows or gives back a five-bead complement.
    pub fn uses_five_complement(&self) -> bool {
        matches!(
            self,
            MoveKind::FiveComplementAdd
                | MoveKind::FiveComplementSub
                | MoveKind::MixedComplementAdd
                | MoveKind::MixedComplementSub
        )
    }

    /// Whether the move changes the tens rod.
    pub fn uses_ten_complement(&self) -> bool {
        matches!(
            self,
            MoveKind::TenComplementAdd
                | MoveKind::TenComplementSub
                | MoveKind::MixedComplementAdd
                | MoveKind::MixedComplementSub
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            MoveKind::LowerDirect => "direct, lower beads only",
            MoveKind::UpperDirect => "direct, with the five bead",
            MoveKind::FiveComplementAdd => "five-complement addition",
            MoveKind::FiveComplementSub => "five-complement subtraction",
            MoveKind::TenComplementAdd => "ten-complement addition (carry)",
            MoveKind::TenComplementSub => "ten-complement subtraction (borrow)",
            MoveKind::MixedComplementAdd => "carry needing a five-complement",
            MoveKind::MixedComplementSub => "borrow needing a five-complement",
        }
    }
}

/// Fold a running total into the ones-and-tens window the tables cover.
///
/// Totals of 20 and above keep only their ones digit above a single ten.
pub fn normalize(value: i32) -> i32 {
    if value >= 20 {
        10 + value % 10
    } else {
        value
    }
}

/// Lower beads set on a rod showing `digit`.
fn lower(digit: i32) -> i32 {
    digit % GODAMA
}

/// Whether `amount` can be added to a rod showing `digit` without complements.
fn direct_add(digit: i32, amount: i32) -> bool {
    if digit + amount > 9 {
        return false;
    }
    if amount >= GODAMA {
        digit < GODAMA && lower(digit) + (amount - GODAMA) <= 4
    } else {
        lower(digit) + amount <= 4
    }
}

/// Whether `amount` can be removed from a rod showing `digit` without complements.
fn direct_sub(digit: i32, amount: i32) -> bool {
    if digit < amount {
        return false;
    }
    if amount >= GODAMA {
        digit >= GODAMA && lower(digit) >= amount - GODAMA
    } else {
        lower(digit) >= amount
    }
}

/// Classify applying `delta` to the running total `value`.
///
/// Returns `None` for a zero or oversized delta, a value outside `0..=19`,
/// or a borrow with nothing on the tens rod.
pub fn classify(value: i32, delta: i32) -> Option<MoveKind> {
    if !(0..=STATE_MAX).contains(&value) || delta == 0 || delta.abs() > DELTA_MAX {
        return None;
    }

    let ones = value % 10;
    let tens = value / 10;

    if delta > 0 {
        if ones + delta <= 9 {
            return Some(if delta >= GODAMA {
                MoveKind::UpperDirect
            } else if direct_add(ones, delta) {
                MoveKind::LowerDirect
            } else {
                MoveKind::FiveComplementAdd
            });
        }
        let complement = 10 - delta;
        return Some(if direct_sub(ones, complement) {
            MoveKind::TenComplementAdd
        } else {
            MoveKind::MixedComplementAdd
        });
    }

    let amount = -delta;
    if ones >= amount {
        return Some(if amount >= GODAMA {
            MoveKind::UpperDirect
        } else if direct_sub(ones, amount) {
            MoveKind::LowerDirect
        } else {
            MoveKind::FiveComplementSub
        });
    }
    if tens == 0 {
        return None;
    }
    let complement = 10 - amount;
    Some(if direct_add(ones, complement) {
        MoveKind::TenComplementSub
    } else {
        MoveKind::MixedComplementSub
    })
}
