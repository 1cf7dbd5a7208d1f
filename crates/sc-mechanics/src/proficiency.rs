//! Proficiency tiers and the bonus each tier grants.

use std::str::FromStr;

use crate::error::{CheckError, CheckResult};

/// Degree of training in a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProficiencyTier {
    /// Explicitly untrained. Code `" "`.
    Untrained,
    /// Proficient. Code `"P"`.
    Proficient,
    /// Expertise, double proficiency. Code `"E"`.
    Expert,
}

impl ProficiencyTier {
    /// All tiers, weakest first.
    pub const ALL: [ProficiencyTier; 3] = [Self::Untrained, Self::Proficient, Self::Expert];

    /// The one-character marker shown in brackets before a skill.
    pub fn symbol(self) -> char {
        match self {
            Self::Untrained => ' ',
            Self::Proficient => 'P',
            Self::Expert => 'E',
        }
    }

    /// How many times the base proficiency bonus this tier adds.
    pub fn multiplier(self) -> i32 {
        match self {
            Self::Untrained => 0,
            Self::Proficient => 1,
            Self::Expert => 2,
        }
    }

    /// Parse a tier from its one-character code.
    pub fn from_code(code: &str) -> CheckResult<Self> {
        match code {
            " " => Ok(Self::Untrained),
            "P" => Ok(Self::Proficient),
            "E" => Ok(Self::Expert),
            other => Err(CheckError::UnknownProficiencyTier(other.to_string())),
        }
    }

    /// Parse an optional code. Absent stays absent.
    pub fn from_optional_code(code: Option<&str>) -> CheckResult<Option<Self>> {
        code.map(Self::from_code).transpose()
    }
}

impl FromStr for ProficiencyTier {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// Marker for an optional tier: the tier's symbol, or a space when absent.
pub fn marker(tier: Option<ProficiencyTier>) -> char {
    tier.map_or(' ', ProficiencyTier::symbol)
}

/// Proficiency bonus by character level, levels 1 through 20.
const BONUS_BY_LEVEL: [i32; 20] = [2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 6, 6, 6, 6];

/// Maps a proficiency tier to its bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProficiencyTable {
    base: i32,
}

impl ProficiencyTable {
    /// The notebook character's base proficiency bonus.
    pub const BASE: i32 = 3;

    /// Table using [`Self::BASE`].
    pub const DEFAULT: Self = Self::new(Self::BASE);

    /// Table with a given base proficiency bonus.
    pub const fn new(base: i32) -> Self {
        Self { base }
    }

    /// Table for a character level. Levels outside 1-20 get a base of 0.
    pub fn for_level(level: u32) -> Self {
        let base = level
            .checked_sub(1)
            .and_then(|i| BONUS_BY_LEVEL.get(i as usize))
            .copied()
            .unwrap_or(0);
        Self::new(base)
    }

    /// The base proficiency bonus.
    pub fn base(&self) -> i32 {
        self.base
    }

    /// Bonus for an optional tier. Absent and untrained both give 0.
    pub fn bonus(&self, tier: Option<ProficiencyTier>) -> i32 {
        tier.map_or(0, |t| t.multiplier().saturating_mul(self.base))
    }
}

impl Default for ProficiencyTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}
