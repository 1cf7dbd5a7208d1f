//! Error types for ability checks and character sheets.

/// Errors that can occur while building or rendering a check.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CheckError {
    /// An ability code is not one of STR, DEX, CON, INT, WIS, CHA.
    #[error("unknown ability: {0}")]
    UnknownAbility(String),

    /// A proficiency code is not one of " ", "P", "E".
    #[error("unknown proficiency tier: {0:?}")]
    UnknownProficiencyTier(String),

    /// A skill name is not one of the eighteen standard skills.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    /// A roll mode is not one of regular, adv, dis.
    #[error("unknown roll mode: {0}")]
    UnknownRollMode(String),

    /// A roll target is not one of app, site.
    #[error("unknown roll target: {0}")]
    UnknownRollTarget(String),

    /// A character sheet document is malformed.
    #[error("invalid character sheet: {0}")]
    InvalidSheet(String),
}

/// Convenience result type for check operations.
pub type CheckResult<T> = Result<T, CheckError>;
