use std::path::Path;

use sc_mechanics::{
    AbilityCheck, BonusTables, CharacterSheet, CheckFormat, Renderer, StdoutRenderer,
};

pub fn run(
    skill: &str,
    ability: &str,
    prof: Option<&str>,
    sheet: Option<&Path>,
    format: CheckFormat,
) -> Result<(), String> {
    let tables = match sheet {
        Some(path) => CharacterSheet::load(path).map_err(|e| e.to_string())?.tables,
        None => BonusTables::DEFAULT,
    };

    let check = AbilityCheck::parse(skill, ability, prof).map_err(|e| e.to_string())?;
    tracing::info!(bonus = check.bonus(&tables), "rendering {skill} ({ability})");

    StdoutRenderer.display(&check.render_with(&tables, format));
    Ok(())
}
