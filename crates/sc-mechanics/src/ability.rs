//! The six abilities and the table of their modifiers.

use std::str::FromStr;

use crate::error::{CheckError, CheckResult};

/// A character ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ability {
    /// Strength.
    Str,
    /// Dexterity.
    Dex,
    /// Constitution.
    Con,
    /// Intelligence.
    Int,
    /// Wisdom.
    Wis,
    /// Charisma.
    Cha,
}

impl Ability {
    /// All abilities in sheet order.
    pub const ALL: [Ability; 6] = [
        Self::Str,
        Self::Dex,
        Self::Con,
        Self::Int,
        Self::Wis,
        Self::Cha,
    ];

    /// The three-letter upper-case code, e.g. `"STR"`.
    pub fn code(self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Dex => "DEX",
            Self::Con => "CON",
            Self::Int => "INT",
            Self::Wis => "WIS",
            Self::Cha => "CHA",
        }
    }

    /// Full name, e.g. `"Strength"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Dex => "Dexterity",
            Self::Con => "Constitution",
            Self::Int => "Intelligence",
            Self::Wis => "Wisdom",
            Self::Cha => "Charisma",
        }
    }

    /// Parse an ability from its exact code.
    pub fn from_code(code: &str) -> CheckResult<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.code() == code)
            .ok_or_else(|| CheckError::UnknownAbility(code.to_string()))
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Ability {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Fixed ability modifiers for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityTable {
    modifiers: [i32; 6],
}

impl AbilityTable {
    /// The notebook character: STR 0, DEX 1, CON 2, INT 2, WIS 3, CHA 1.
    pub const DEFAULT: Self = Self::from_modifiers([0, 1, 2, 2, 3, 1]);

    /// Build a table from modifiers given in [`Ability::ALL`] order.
    pub const fn from_modifiers(modifiers: [i32; 6]) -> Self {
        Self { modifiers }
    }

    /// Build a table from raw ability scores given in [`Ability::ALL`] order.
    pub fn from_scores(scores: [i32; 6]) -> Self {
        Self {
            modifiers: scores.map(modifier_for_score),
        }
    }

    /// Replace one ability's modifier.
    pub fn with(mut self, ability: Ability, modifier: i32) -> Self {
        self.modifiers[ability.index()] = modifier;
        self
    }

    /// The modifier for an ability.
    pub fn modifier(&self, ability: Ability) -> i32 {
        self.modifiers[ability.index()]
    }
}

impl Default for AbilityTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Modifier for an ability score: `floor((score - 10) / 2)`.
pub fn modifier_for_score(score: i32) -> i32 {
    score.saturating_sub(10).div_euclid(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for ability in Ability::ALL {
            assert_eq!(Ability::from_code(ability.code()), Ok(ability));
        }
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!(
            Ability::from_code("str"),
            Err(CheckError::UnknownAbility("str".to_string()))
        );
        assert_eq!(
            "LUCK".parse::<Ability>(),
            Err(CheckError::UnknownAbility("LUCK".to_string()))
        );
    }

    #[test]
    fn default_table() {
        let t = AbilityTable::default();
        assert_eq!(t.modifier(Ability::Str), 0);
        assert_eq!(t.modifier(Ability::Dex), 1);
        assert_eq!(t.modifier(Ability::Con), 2);
        assert_eq!(t.modifier(Ability::Int), 2);
        assert_eq!(t.modifier(Ability::Wis), 3);
        assert_eq!(t.modifier(Ability::Cha), 1);
    }

    #[test]
    fn score_modifiers_round_down() {
        assert_eq!(modifier_for_score(10), 0);
        assert_eq!(modifier_for_score(11), 0);
        assert_eq!(modifier_for_score(8), -1);
        assert_eq!(modifier_for_score(9), -1);
        assert_eq!(modifier_for_score(18), 4);
        assert_eq!(modifier_for_score(1), -5);
        assert_eq!(modifier_for_score(i32::MIN), i32::MIN / 2);
    }

    #[test]
    fn from_scores_and_override() {
        let t = AbilityTable::from_scores([8, 14, 14, 12, 10, 18]).with(Ability::Wis, 5);
        assert_eq!(t.modifier(Ability::Str), -1);
        assert_eq!(t.modifier(Ability::Dex), 2);
        assert_eq!(t.modifier(Ability::Cha), 4);
        assert_eq!(t.modifier(Ability::Wis), 5);
    }

    #[test]
    fn display_uses_code() {
        assert_eq!(Ability::Wis.to_string(), "WIS");
        assert_eq!(Ability::Wis.name(), "Wisdom");
    }
}
