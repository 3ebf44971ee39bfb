use colored::Colorize;

use realm_core::{Kingdom, RealmConfig};

const LOOKOUT_REPORT: &str = "I see ten boats";

pub fn run(config: &RealmConfig) -> Result<(), String> {
    let mut chronicle = config.chronicle();

    // The kingdom
    let kingdom = Kingdom::instance();
    super::print_heading(&format!("I. The Kingdom of {}", kingdom.name()));
    kingdom.proclaim(&mut chronicle);
    super::print_chronicle(&chronicle);
    println!();

    // The barracks
    chronicle.clear();
    let barracks = config.barracks();
    super::print_heading("II. The Barracks");
    for _ in 0..2 {
        barracks.summon().report(&mut chronicle);
    }
    super::print_chronicle(&chronicle);
    println!();

    // The fighting memory
    let memory = super::trained_memory();
    super::print_heading(&format!("III. The Fighting Memory ({})", config.recall_mode));
    for technique in ["doubleCut", "parry"] {
        chronicle.clear();
        memory.recall(technique, config.recall_mode, &mut chronicle);
        println!("  {} {technique}", "recall".dimmed());
        super::print_chronicle(&chronicle);
    }
    println!();

    // The watchtowers
    chronicle.clear();
    let point = super::guarded_coast();
    super::print_heading("IV. The Watchtowers");
    point.dispatch(LOOKOUT_REPORT, &mut chronicle);
    super::print_chronicle(&chronicle);
    println!();

    Ok(())
}
