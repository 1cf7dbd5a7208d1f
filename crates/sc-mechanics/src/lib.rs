//! Ability-check bonuses and their markdown rendering for Skillcheck.
//!
//! A check's bonus is an ability modifier plus a proficiency bonus for the
//! check's tier (untrained, proficient or expert). Checks render as one
//! markdown line carrying a clickable d20 roll link, handed to a
//! [`Renderer`]. Character sheets expand a whole character into its skill
//! checks, saving throws and ability checks.

pub mod ability;
pub mod check;
pub mod dice;
pub mod error;
pub mod proficiency;
pub mod render;
pub mod sheet;
pub mod skill;

pub use ability::{Ability, AbilityTable};
pub use check::{AbilityCheck, BonusTables, CheckFormat, ability_check, compute_bonus};
pub use dice::{D20Roll, RollMode, RollTarget};
pub use error::{CheckError, CheckResult};
pub use proficiency::{ProficiencyTable, ProficiencyTier};
pub use render::{RecordingRenderer, Renderer, StdoutRenderer};
pub use sheet::CharacterSheet;
pub use skill::Skill;
