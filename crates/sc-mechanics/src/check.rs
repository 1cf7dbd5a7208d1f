//! Ability checks: bonus computation and the rendered markdown line.
//!
//! A check's bonus is the ability modifier plus the proficiency bonus for
//! its tier. The rendered line looks like
//!
//! ```text
//! `[P]`Arcana (INT) [d20+5](dice://roll/d20+5)
//! ```
//!
//! with the tier marker in brackets (a space when no tier is given), the
//! skill, the ability code, and a roll link labelled with the same roll.

use crate::ability::{Ability, AbilityTable};
use crate::dice::{D20Roll, RollMode, RollTarget};
use crate::error::CheckResult;
use crate::proficiency::{self, ProficiencyTable, ProficiencyTier};
use crate::render::Renderer;

/// The two lookup tables a bonus is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BonusTables {
    /// Ability modifiers.
    pub abilities: AbilityTable,
    /// Proficiency bonuses.
    pub proficiency: ProficiencyTable,
}

impl BonusTables {
    /// The notebook character's tables.
    pub const DEFAULT: Self = Self::new(AbilityTable::DEFAULT, ProficiencyTable::DEFAULT);

    /// Pair an ability table with a proficiency table.
    pub const fn new(abilities: AbilityTable, proficiency: ProficiencyTable) -> Self {
        Self {
            abilities,
            proficiency,
        }
    }

    /// `abilities[ability] + proficiency[tier]`.
    pub fn bonus(&self, ability: Ability, tier: Option<ProficiencyTier>) -> i32 {
        self.abilities
            .modifier(ability)
            .saturating_add(self.proficiency.bonus(tier))
    }
}

/// Bonus for a check against the default tables.
pub fn compute_bonus(ability: Ability, tier: Option<ProficiencyTier>) -> i32 {
    BonusTables::DEFAULT.bonus(ability, tier)
}

/// How a check's roll link is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckFormat {
    /// Regular, advantage or disadvantage.
    pub mode: RollMode,
    /// Dice app or dice site.
    pub target: RollTarget,
}

impl CheckFormat {
    /// Set the roll mode.
    pub fn with_mode(mut self, mode: RollMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the link target.
    pub fn with_target(mut self, target: RollTarget) -> Self {
        self.target = target;
        self
    }
}

/// A single check, created per call and rendered immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityCheck {
    /// Display text for the check, usually a skill name.
    pub skill: String,
    /// The ability whose modifier applies.
    pub ability: Ability,
    /// Proficiency tier, if one was given.
    pub proficiency: Option<ProficiencyTier>,
}

impl AbilityCheck {
    /// Create a check from typed parts.
    pub fn new(
        skill: impl Into<String>,
        ability: Ability,
        proficiency: Option<ProficiencyTier>,
    ) -> Self {
        Self {
            skill: skill.into(),
            ability,
            proficiency,
        }
    }

    /// Create a check from an ability code and an optional tier code.
    pub fn parse(skill: &str, ability: &str, proficiency: Option<&str>) -> CheckResult<Self> {
        Ok(Self::new(
            skill,
            Ability::from_code(ability)?,
            ProficiencyTier::from_optional_code(proficiency)?,
        ))
    }

    /// The check's total bonus.
    pub fn bonus(&self, tables: &BonusTables) -> i32 {
        tables.bonus(self.ability, self.proficiency)
    }

    /// The d20 roll for this check.
    pub fn roll(&self, tables: &BonusTables) -> D20Roll {
        D20Roll::new(self.bonus(tables))
    }

    /// The markdown line with a regular roll and a dice-app link.
    pub fn render(&self, tables: &BonusTables) -> String {
        self.render_with(tables, CheckFormat::default())
    }

    /// The markdown line with the given roll mode and link target.
    ///
    /// The visible label is always the plain roll; only the link carries the mode.
    pub fn render_with(&self, tables: &BonusTables, format: CheckFormat) -> String {
        let roll = self.roll(tables);
        format!(
            "`[{}]`{} ({}) [{}]({})",
            proficiency::marker(self.proficiency),
            self.skill,
            self.ability,
            roll,
            format.target.url(roll, format.mode),
        )
    }
}

/// Parse, compute and display one check, returning its bonus.
///
/// Nothing is displayed when either code is unknown.
pub fn ability_check<R: Renderer + ?Sized>(
    renderer: &mut R,
    tables: &BonusTables,
    skill: &str,
    ability: &str,
    proficiency: Option<&str>,
) -> CheckResult<i32> {
    let check = AbilityCheck::parse(skill, ability, proficiency)?;
    let bonus = check.bonus(tables);
    tracing::debug!(skill = %check.skill, ability = %check.ability, bonus, "ability check");
    renderer.display(&check.render(tables));
    Ok(bonus)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::error::CheckError;
    use crate::render::RecordingRenderer;

    fn render(skill: &str, ability: &str, prof: Option<&str>) -> String {
        let mut out = RecordingRenderer::new();
        ability_check(&mut out, &BonusTables::DEFAULT, skill, ability, prof).unwrap();
        assert_eq!(out.blocks().len(), 1);
        out.into_blocks().remove(0)
    }

    #[test]
    fn notebook_bonuses() {
        assert_eq!(compute_bonus(Ability::Str, None), 0);
        assert_eq!(compute_bonus(Ability::Int, Some(ProficiencyTier::Proficient)), 5);
        assert_eq!(compute_bonus(Ability::Int, Some(ProficiencyTier::Expert)), 8);
        assert_eq!(compute_bonus(Ability::Wis, Some(ProficiencyTier::Untrained)), 3);
    }

    #[test]
    fn notebook_lines() {
        assert_eq!(
            render("Athletics", "STR", None),
            "`[ ]`Athletics (STR) [d20+0](dice://roll/d20+0)"
        );
        assert_eq!(
            render("Arcana", "INT", Some("P")),
            "`[P]`Arcana (INT) [d20+5](dice://roll/d20+5)"
        );
        assert_eq!(
            render("Arcana", "INT", Some("E")),
            "`[E]`Arcana (INT) [d20+8](dice://roll/d20+8)"
        );
    }

    #[test]
    fn explicit_untrained_renders_like_absent() {
        assert_eq!(render("Insight", "WIS", Some(" ")), render("Insight", "WIS", None));
    }

    #[test]
    fn returns_bonus() {
        let mut out = RecordingRenderer::new();
        let bonus = ability_check(&mut out, &BonusTables::DEFAULT, "Stealth", "DEX", Some("E"));
        assert_eq!(bonus, Ok(7));
    }

    #[test]
    fn unknown_ability_renders_nothing() {
        let mut out = RecordingRenderer::new();
        let err = ability_check(&mut out, &BonusTables::DEFAULT, "Luck", "LCK", None);
        assert_eq!(err, Err(CheckError::UnknownAbility("LCK".to_string())));
        assert!(out.blocks().is_empty());
    }

    #[test]
    fn unknown_tier_renders_nothing() {
        let mut out = RecordingRenderer::new();
        let err = ability_check(&mut out, &BonusTables::DEFAULT, "Arcana", "INT", Some("X"));
        assert_eq!(err, Err(CheckError::UnknownProficiencyTier("X".to_string())));
        assert!(out.blocks().is_empty());
    }

    #[test]
    fn advantage_on_site() {
        let check = AbilityCheck::new("Arcana", Ability::Int, Some(ProficiencyTier::Proficient));
        let format = CheckFormat::default()
            .with_mode(RollMode::Advantage)
            .with_target(RollTarget::Site);
        assert_eq!(
            check.render_with(&BonusTables::DEFAULT, format),
            "`[P]`Arcana (INT) [d20+5](https://dice.run/#/d/2d20max+5)"
        );
    }

    #[test]
    fn disadvantage_in_app() {
        let check = AbilityCheck::new("Athletics", Ability::Str, None);
        let format = CheckFormat::default().with_mode(RollMode::Disadvantage);
        assert_eq!(
            check.render_with(&BonusTables::DEFAULT, format),
            "`[ ]`Athletics (STR) [d20+0](dice://roll/d20+0(DIS))"
        );
    }

    #[test]
    fn negative_bonus_keeps_sign() {
        let tables = BonusTables::new(
            AbilityTable::DEFAULT.with(Ability::Str, -1),
            ProficiencyTable::DEFAULT,
        );
        let check = AbilityCheck::new("Athletics", Ability::Str, None);
        assert_eq!(
            check.render(&tables),
            "`[ ]`Athletics (STR) [d20-1](dice://roll/d20-1)"
        );
    }

    fn any_ability() -> impl Strategy<Value = Ability> {
        prop::sample::select(Ability::ALL.to_vec())
    }

    fn any_tier() -> impl Strategy<Value = Option<ProficiencyTier>> {
        prop::option::of(prop::sample::select(ProficiencyTier::ALL.to_vec()))
    }

    proptest! {
        #[test]
        fn default_bonus_is_table_sum(ability in any_ability(), tier in any_tier()) {
            let expected = AbilityTable::DEFAULT.modifier(ability)
                + ProficiencyTable::DEFAULT.bonus(tier);
            prop_assert_eq!(compute_bonus(ability, tier), expected);
        }

        #[test]
        fn rendered_line_repeats_bonus(
            modifiers in prop::array::uniform6(0i32..=10),
            base in 0i32..=6,
            ability in any_ability(),
            tier in any_tier(),
        ) {
            let tables = BonusTables::new(
                AbilityTable::from_modifiers(modifiers),
                ProficiencyTable::new(base),
            );
            let check = AbilityCheck::new("Skill", ability, tier);
            let bonus = check.bonus(&tables);
            let line = check.render(&tables);
            let expected_tail = format!("[d20+{bonus}](dice://roll/d20+{bonus})");
            prop_assert!(line.ends_with(&expected_tail), "{}", line);
            let expected_head = format!("`[{}]`Skill ({})", proficiency::marker(tier), ability);
            prop_assert!(line.starts_with(&expected_head), "{}", line);
        }
    }
}
