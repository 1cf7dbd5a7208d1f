pub mod check;
pub mod demo;
pub mod sheet;
pub mod skills;

use sc_mechanics::{CheckFormat, RollMode, RollTarget};

/// Build a check format from the `--mode` and `--target` flags.
pub fn format(mode: &str, target: &str) -> Result<CheckFormat, String> {
    let mode = RollMode::from_code(mode).map_err(|e| e.to_string())?;
    let target = RollTarget::from_code(target).map_err(|e| e.to_string())?;
    Ok(CheckFormat::default().with_mode(mode).with_target(target))
}
