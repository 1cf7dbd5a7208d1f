use std::path::Path;

use sc_mechanics::{CharacterSheet, CheckFormat, StdoutRenderer};

pub fn run(file: &Path, format: CheckFormat) -> Result<(), String> {
    let sheet = CharacterSheet::load(file).map_err(|e| e.to_string())?;
    tracing::info!(name = %sheet.name, "rendering character sheet");
    sheet.render(&mut StdoutRenderer, format);
    Ok(())
}
