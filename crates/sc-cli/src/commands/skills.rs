use comfy_table::{ContentArrangement, Table};
use sc_mechanics::Skill;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Skill", "Ability"]);

    for skill in Skill::ALL {
        table.add_row(vec![skill.name(), skill.default_ability().code()]);
    }

    println!("{table}");
    println!();
    println!("  {} skills", Skill::ALL.len());

    Ok(())
}
