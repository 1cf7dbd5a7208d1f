//! The JSON document a character sheet is loaded from.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::ops::RangeInclusive;

use serde::Deserialize;

use crate::ability::{Ability, AbilityTable};
use crate::error::{CheckError, CheckResult};
use crate::proficiency::{ProficiencyTable, ProficiencyTier};
use crate::skill::Skill;

/// Accepted ability scores.
const SCORE_RANGE: RangeInclusive<i32> = 1..=30;

/// Accepted ability modifiers.
const MODIFIER_RANGE: RangeInclusive<i32> = -30..=30;

/// Accepted proficiency bonuses.
const PROFICIENCY_RANGE: RangeInclusive<i32> = 0..=30;

/// Raw sheet fields, before codes are checked.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SheetSource {
    pub name: String,
    /// Ability scores keyed by code. Exclusive with `modifiers`.
    #[serde(default)]
    pub abilities: Option<BTreeMap<String, i32>>,
    /// Ability modifiers keyed by code. Exclusive with `abilities`.
    #[serde(default)]
    pub modifiers: Option<BTreeMap<String, i32>>,
    /// Character level. Exclusive with `proficiency_bonus`.
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub proficiency_bonus: Option<i32>,
    /// Skill name to tier code.
    #[serde(default)]
    pub skills: BTreeMap<String, String>,
    /// Ability codes proficient in saving throws.
    #[serde(default)]
    pub saves: Vec<String>,
}

impl SheetSource {
    pub fn parse(json: &str) -> CheckResult<Self> {
        serde_json::from_str(json).map_err(|e| CheckError::InvalidSheet(e.to_string()))
    }

    pub fn ability_table(&self) -> CheckResult<AbilityTable> {
        match (&self.abilities, &self.modifiers) {
            (Some(scores), None) => Ok(AbilityTable::from_scores(by_ability(
                scores,
                "score",
                SCORE_RANGE,
            )?)),
            (None, Some(mods)) => Ok(AbilityTable::from_modifiers(by_ability(
                mods,
                "modifier",
                MODIFIER_RANGE,
            )?)),
            (Some(_), Some(_)) => Err(CheckError::InvalidSheet(
                "give either \"abilities\" or \"modifiers\", not both".to_string(),
            )),
            (None, None) => Err(CheckError::InvalidSheet(
                "missing \"abilities\" or \"modifiers\"".to_string(),
            )),
        }
    }

    pub fn proficiency_table(&self) -> CheckResult<ProficiencyTable> {
        match (self.level, self.proficiency_bonus) {
            (Some(_), Some(_)) => Err(CheckError::InvalidSheet(
                "give either \"level\" or \"proficiency_bonus\", not both".to_string(),
            )),
            (Some(level), None) => Ok(ProficiencyTable::for_level(level)),
            (None, Some(base)) => {
                check_range(base, "proficiency_bonus", &PROFICIENCY_RANGE)?;
                Ok(ProficiencyTable::new(base))
            }
            (None, None) => Ok(ProficiencyTable::DEFAULT),
        }
    }

    pub fn skill_tiers(&self) -> CheckResult<HashMap<Skill, ProficiencyTier>> {
        self.skills
            .iter()
            .map(|(skill, tier)| Ok((Skill::from_name(skill)?, ProficiencyTier::from_code(tier)?)))
            .collect()
    }

    pub fn save_abilities(&self) -> CheckResult<HashSet<Ability>> {
        self.saves.iter().map(|code| Ability::from_code(code)).collect()
    }
}

/// Reorder a code-keyed map into [`Ability::ALL`] order.
fn by_ability(
    values: &BTreeMap<String, i32>,
    what: &str,
    range: RangeInclusive<i32>,
) -> CheckResult<[i32; 6]> {
    for code in values.keys() {
        Ability::from_code(code)?;
    }

    let mut out = [0; 6];
    for (slot, ability) in out.iter_mut().zip(Ability::ALL) {
        *slot = *values
            .get(ability.code())
            .ok_or_else(|| CheckError::InvalidSheet(format!("missing {what} for {ability}")))?;
        check_range(*slot, &format!("{what} for {ability}"), &range)?;
    }
    Ok(out)
}

fn check_range(value: i32, what: &str, range: &RangeInclusive<i32>) -> CheckResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(CheckError::InvalidSheet(format!(
            "{what} {value} is outside {}..={}",
            range.start(),
            range.end()
        )))
    }
}
