use sc_mechanics::{BonusTables, StdoutRenderer, ability_check};

/// The checks the original notebook rendered.
const NOTEBOOK_CHECKS: [(&str, &str, Option<&str>); 3] = [
    ("Athletics", "STR", None),
    ("Arcana", "INT", Some("P")),
    ("Arcana", "INT", Some("E")),
];

pub fn run() -> Result<(), String> {
    let mut out = StdoutRenderer;
    for (skill, ability, prof) in NOTEBOOK_CHECKS {
        ability_check(&mut out, &BonusTables::DEFAULT, skill, ability, prof)
            .map_err(|e| e.to_string())?;
    }
    Ok(())
}
