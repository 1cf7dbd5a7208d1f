//! Character sheets: a whole character's checks from one JSON document.
//!
//! A sheet holds ability scores (or modifiers), a proficiency bonus (given
//! directly or derived from level), skill tiers and saving-throw
//! proficiencies. It expands these into the eighteen skill checks, six
//! saving throws and six plain ability checks, and renders them as markdown.
//!
//! ```json
//! {
//!   "name": "Meg",
//!   "abilities": { "STR": 8, "DEX": 14, "CON": 14, "INT": 12, "WIS": 10, "CHA": 18 },
//!   "level": 1,
//!   "skills": { "Arcana": "P", "Stealth": "E" },
//!   "saves": ["WIS", "CHA"]
//! }
//! ```

mod source;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::ability::Ability;
use crate::check::{AbilityCheck, BonusTables, CheckFormat};
use crate::error::{CheckError, CheckResult};
use crate::proficiency::ProficiencyTier;
use crate::render::Renderer;
use crate::skill::Skill;

use source::SheetSource;

/// A character's checks.
#[derive(Debug, Clone)]
pub struct CharacterSheet {
    /// Character name.
    pub name: String,
    /// Ability modifiers and proficiency bonus.
    pub tables: BonusTables,
    /// Trained skills. Skills not listed are untrained.
    pub skills: HashMap<Skill, ProficiencyTier>,
    /// Abilities with saving-throw proficiency.
    pub saves: HashSet<Ability>,
}

impl CharacterSheet {
    /// An empty sheet over the given tables.
    pub fn new(name: impl Into<String>, tables: BonusTables) -> Self {
        Self {
            name: name.into(),
            tables,
            skills: HashMap::new(),
            saves: HashSet::new(),
        }
    }

    /// Set a skill's tier.
    pub fn with_skill(mut self, skill: Skill, tier: ProficiencyTier) -> Self {
        self.skills.insert(skill, tier);
        self
    }

    /// Add saving-throw proficiency for an ability.
    pub fn with_save(mut self, ability: Ability) -> Self {
        self.saves.insert(ability);
        self
    }

    /// Parse a sheet from JSON.
    pub fn from_json(json: &str) -> CheckResult<Self> {
        let source = SheetSource::parse(json)?;
        let tables = BonusTables::new(source.ability_table()?, source.proficiency_table()?);
        Ok(Self {
            skills: source.skill_tiers()?,
            saves: source.save_abilities()?,
            name: source.name,
            tables,
        })
    }

    /// Load a sheet from a JSON file.
    pub fn load(path: &Path) -> CheckResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            CheckError::InvalidSheet(format!("cannot read {}: {e}", path.display()))
        })?;
        let sheet = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), name = %sheet.name, "loaded character sheet");
        Ok(sheet)
    }

    /// The tier recorded for a skill, if any.
    pub fn skill_tier(&self, skill: Skill) -> Option<ProficiencyTier> {
        self.skills.get(&skill).copied()
    }

    /// One check per skill, in [`Skill::ALL`] order.
    pub fn skill_checks(&self) -> Vec<AbilityCheck> {
        Skill::ALL
            .into_iter()
            .map(|skill| {
                AbilityCheck::new(skill.name(), skill.default_ability(), self.skill_tier(skill))
            })
            .collect()
    }

    /// One saving throw per ability. Proficient saves get tier `P`.
    pub fn saving_throws(&self) -> Vec<AbilityCheck> {
        Ability::ALL
            .into_iter()
            .map(|ability| {
                let tier = self
                    .saves
                    .contains(&ability)
                    .then_some(ProficiencyTier::Proficient);
                AbilityCheck::new(format!("{} Save", ability.name()), ability, tier)
            })
            .collect()
    }

    /// One untrained check per ability.
    pub fn ability_checks(&self) -> Vec<AbilityCheck> {
        Ability::ALL
            .into_iter()
            .map(|ability| AbilityCheck::new(ability.name(), ability, None))
            .collect()
    }

    /// Render the sheet as markdown, one block per heading or check.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R, format: CheckFormat) {
        renderer.display(&format!("## {}", self.name));

        let sections = [
            ("Skills", self.skill_checks()),
            ("Saving Throws", self.saving_throws()),
            ("Ability Checks", self.ability_checks()),
        ];
        for (title, checks) in sections {
            renderer.display(&format!("### {title}"));
            for check in &checks {
                renderer.display(&check.render_with(&self.tables, format));
            }
        }
    }
}
