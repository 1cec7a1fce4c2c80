//! Difficulty class identifiers.
//!
//! Classes are named by tier digit and letter, `1A` through `3E`. Tier 1
//! drills direct bead moves, tier 2 the five-complements, tier 3 carries and
//! borrows across the tens rod.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Identifier of one difficulty class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ClassId {
    C1A,
    C1B,
    C1C,
    C2A,
    C2B,
    C2C,
    C2D,
    C2E,
    C3A,
    C3B,
    C3C,
    C3D,
    C3E,
}

impl ClassId {
    /// Every class, in curriculum order.
    pub const ALL: [ClassId; 13] = [
        ClassId::C1A,
        ClassId::C1B,
        ClassId::C1C,
        ClassId::C2A,
        ClassId::C2B,
        ClassId::C2C,
        ClassId::C2D,
        ClassId::C2E,
        ClassId::C3A,
        ClassId::C3B,
        ClassId::C3C,
        ClassId::C3D,
        ClassId::C3E,
    ];

    /// Short name as used by callers ("1A", "3E", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassId::C1A => "1A",
            ClassId::C1B => "1B",
            ClassId::C1C => "1C",
            ClassId::C2A => "2A",
            ClassId::C2B => "2B",
            ClassId::C2C => "2C",
            ClassId::C2D => "2D",
            ClassId::C2E => "2E",
            ClassId::C3A => "3A",
            ClassId::C3B => "3B",
            ClassId::C3C => "3C",
            ClassId::C3D => "3D",
            ClassId::C3E => "3E",
        }
    }

    /// Tier number (1, 2 or 3).
    pub fn tier(&self) -> u8 {
        match self {
            ClassId::C1A | ClassId::C1B | ClassId::C1C => 1,
            ClassId::C2A | ClassId::C2B | ClassId::C2C | ClassId::C2D | ClassId::C2E => 2,
            ClassId::C3A | ClassId::C3B | ClassId::C3C | ClassId::C3D | ClassId::C3E => 3,
        }
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ClassId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownClass(s.to_string()))
    }
}

impl TryFrom<String> for ClassId {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClassId> for String {
    fn from(id: ClassId) -> Self {
        id.as_str().to_string()
    }
}
