use colored::Colorize;

use realm_core::{RealmConfig, RecallMode};

pub fn run(config: &RealmConfig, technique: &str, first: bool) -> Result<(), String> {
    let mode = if first {
        RecallMode::FirstMatch
    } else {
        config.recall_mode
    };

    let memory = super::trained_memory();
    let mut chronicle = config.chronicle();
    let handled = memory.recall(technique, mode, &mut chronicle);

    super::print_heading(&format!("Recalling '{technique}' ({mode})"));
    if handled == 0 {
        println!("  {}", "(nothing stirs)".dimmed());
    } else {
        super::print_chronicle(&chronicle);
    }

    Ok(())
}
