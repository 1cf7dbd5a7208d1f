//! Roll links that dice apps and sites understand.

use std::str::FromStr;

use super::{D20Roll, RollMode};
use crate::error::{CheckError, CheckResult};

/// Where a roll link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RollTarget {
    /// A local dice app via the `dice://roll/` scheme.
    #[default]
    App,
    /// The dice.run website.
    Site,
}

impl RollTarget {
    /// Parse a target from `app` or `site`.
    pub fn from_code(code: &str) -> CheckResult<Self> {
        match code {
            "app" => Ok(Self::App),
            "site" => Ok(Self::Site),
            other => Err(CheckError::UnknownRollTarget(other.to_string())),
        }
    }

    /// The URL that rolls `roll` in `mode`.
    ///
    /// The app scheme takes the plain expression and a `(ADV)` / `(DIS)`
    /// suffix. The site takes `2d20max` / `2d20min` notation.
    pub fn url(self, roll: D20Roll, mode: RollMode) -> String {
        match self {
            Self::App => {
                let suffix = match mode {
                    RollMode::Regular => "",
                    RollMode::Advantage => "(ADV)",
                    RollMode::Disadvantage => "(DIS)",
                };
                format!("dice://roll/{roll}{suffix}")
            }
            Self::Site => format!("https://dice.run/#/d/{}", roll.expression(mode)),
        }
    }
}

impl FromStr for RollTarget {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_urls() {
        let roll = D20Roll::new(5);
        assert_eq!(RollTarget::App.url(roll, RollMode::Regular), "dice://roll/d20+5");
        assert_eq!(
            RollTarget::App.url(roll, RollMode::Advantage),
            "dice://roll/d20+5(ADV)"
        );
        assert_eq!(
            RollTarget::App.url(roll, RollMode::Disadvantage),
            "dice://roll/d20+5(DIS)"
        );
    }

    #[test]
    fn site_urls() {
        let roll = D20Roll::new(-1);
        assert_eq!(
            RollTarget::Site.url(roll, RollMode::Regular),
            "https://dice.run/#/d/d20-1"
        );
        assert_eq!(
            RollTarget::Site.url(roll, RollMode::Advantage),
            "https://dice.run/#/d/2d20max-1"
        );
    }

    #[test]
    fn parse_targets() {
        assert_eq!("site".parse::<RollTarget>(), Ok(RollTarget::Site));
        assert_eq!(
            RollTarget::from_code("web"),
            Err(CheckError::UnknownRollTarget("web".to_string()))
        );
    }
}
