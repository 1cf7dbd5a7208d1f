//! d20 roll expressions and roll modes.
//!
//! A check is always one d20 plus a flat bonus. Advantage and disadvantage
//! roll the d20 twice and keep the higher or lower result, written in
//! `2d20max` / `2d20min` notation.

pub mod link;

pub use link::RollTarget;

use std::str::FromStr;

use crate::error::{CheckError, CheckResult};

/// How the d20 is rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RollMode {
    /// One d20.
    #[default]
    Regular,
    /// Two d20s, keep the higher.
    Advantage,
    /// Two d20s, keep the lower.
    Disadvantage,
}

impl RollMode {
    /// Parse a mode from `regular`, `adv` or `dis` (long forms accepted).
    pub fn from_code(code: &str) -> CheckResult<Self> {
        match code {
            "regular" | "reg" => Ok(Self::Regular),
            "adv" | "advantage" => Ok(Self::Advantage),
            "dis" | "disadvantage" => Ok(Self::Disadvantage),
            other => Err(CheckError::UnknownRollMode(other.to_string())),
        }
    }
}

impl FromStr for RollMode {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// A d20 plus a flat bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct D20Roll {
    /// Flat bonus added to the die.
    pub bonus: i32,
}

impl D20Roll {
    /// A d20 with the given bonus.
    pub fn new(bonus: i32) -> Self {
        Self { bonus }
    }

    /// Expression for a roll mode: `d20+5`, `2d20max+5` or `2d20min+5`.
    pub fn expression(&self, mode: RollMode) -> String {
        let dice = match mode {
            RollMode::Regular => "d20",
            RollMode::Advantage => "2d20max",
            RollMode::Disadvantage => "2d20min",
        };
        format!("{dice}{}", signed(self.bonus))
    }
}

impl std::fmt::Display for D20Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d20{}", signed(self.bonus))
    }
}

/// A bonus with an explicit sign: `+5`, `+0`, `-2`.
pub fn signed(bonus: i32) -> String {
    if bonus >= 0 {
        format!("+{bonus}")
    } else {
        bonus.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_expression() {
        assert_eq!(D20Roll::new(5).to_string(), "d20+5");
        assert_eq!(D20Roll::new(0).to_string(), "d20+0");
        assert_eq!(D20Roll::new(-2).to_string(), "d20-2");
    }

    #[test]
    fn mode_expressions() {
        let roll = D20Roll::new(6);
        assert_eq!(roll.expression(RollMode::Regular), "d20+6");
        assert_eq!(roll.expression(RollMode::Advantage), "2d20max+6");
        assert_eq!(roll.expression(RollMode::Disadvantage), "2d20min+6");
        assert_eq!(D20Roll::new(-2).expression(RollMode::Disadvantage), "2d20min-2");
    }

    #[test]
    fn parse_modes() {
        assert_eq!(RollMode::from_code("adv"), Ok(RollMode::Advantage));
        assert_eq!("disadvantage".parse::<RollMode>(), Ok(RollMode::Disadvantage));
        assert_eq!(RollMode::from_code("reg"), Ok(RollMode::Regular));
        assert_eq!(
            RollMode::from_code("lucky"),
            Err(CheckError::UnknownRollMode("lucky".to_string()))
        );
    }

    #[test]
    fn signed_bonus() {
        assert_eq!(signed(3), "+3");
        assert_eq!(signed(0), "+0");
        assert_eq!(signed(-1), "-1");
    }
}
