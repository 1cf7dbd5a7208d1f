//! The eighteen standard skills and their default abilities.

use std::str::FromStr;

use crate::ability::Ability;
use crate::error::{CheckError, CheckResult};

/// A standard skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skill {
    /// Acrobatics (DEX).
    Acrobatics,
    /// Animal Handling (WIS).
    AnimalHandling,
    /// Arcana (INT).
    Arcana,
    /// Athletics (STR).
    Athletics,
    /// Deception (CHA).
    Deception,
    /// History (INT).
    History,
    /// Insight (WIS).
    Insight,
    /// Intimidation (CHA).
    Intimidation,
    /// Investigation (INT).
    Investigation,
    /// Medicine (WIS).
    Medicine,
    /// Nature (INT).
    Nature,
    /// Perception (WIS).
    Perception,
    /// Performance (CHA).
    Performance,
    /// Persuasion (CHA).
    Persuasion,
    /// Religion (INT).
    Religion,
    /// Sleight of Hand (DEX).
    SleightOfHand,
    /// Stealth (DEX).
    Stealth,
    /// Survival (WIS).
    Survival,
}

impl Skill {
    /// All skills in alphabetical order.
    pub const ALL: [Skill; 18] = [
        Self::Acrobatics,
        Self::AnimalHandling,
        Self::Arcana,
        Self::Athletics,
        Self::Deception,
        Self::History,
        Self::Insight,
        Self::Intimidation,
        Self::Investigation,
        Self::Medicine,
        Self::Nature,
        Self::Perception,
        Self::Performance,
        Self::Persuasion,
        Self::Religion,
        Self::SleightOfHand,
        Self::Stealth,
        Self::Survival,
    ];

    /// Display name, e.g. `"Sleight of Hand"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Acrobatics => "Acrobatics",
            Self::AnimalHandling => "Animal Handling",
            Self::Arcana => "Arcana",
            Self::Athletics => "Athletics",
            Self::Deception => "Deception",
            Self::History => "History",
            Self::Insight => "Insight",
            Self::Intimidation => "Intimidation",
            Self::Investigation => "Investigation",
            Self::Medicine => "Medicine",
            Self::Nature => "Nature",
            Self::Perception => "Perception",
            Self::Performance => "Performance",
            Self::Persuasion => "Persuasion",
            Self::Religion => "Religion",
            Self::SleightOfHand => "Sleight of Hand",
            Self::Stealth => "Stealth",
            Self::Survival => "Survival",
        }
    }

    /// The ability normally used for this skill.
    pub fn default_ability(self) -> Ability {
        match self {
            Self::Athletics => Ability::Str,
            Self::Acrobatics | Self::SleightOfHand | Self::Stealth => Ability::Dex,
            Self::Arcana
            | Self::History
            | Self::Investigation
            | Self::Nature
            | Self::Religion => Ability::Int,
            Self::AnimalHandling
            | Self::Insight
            | Self::Medicine
            | Self::Perception
            | Self::Survival => Ability::Wis,
            Self::Deception | Self::Intimidation | Self::Performance | Self::Persuasion => {
                Ability::Cha
            }
        }
    }

    /// Parse a skill from its exact display name.
    pub fn from_name(name: &str) -> CheckResult<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| CheckError::UnknownSkill(name.to_string()))
    }
}

impl FromStr for Skill {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
