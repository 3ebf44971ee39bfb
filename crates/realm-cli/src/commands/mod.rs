pub mod alarm;
pub mod kingdom;
pub mod recall;
pub mod roster;
pub mod summon;
pub mod tale;

use std::path::Path;

use colored::Colorize;

use realm_core::{
    BellWatchtower, Chronicle, FightingMemory, HornWatchtower, RealmConfig, ShieldTechnique,
    StrategicPoint, SwordTechnique,
};

/// Load the config file if one was given, otherwise use defaults.
pub fn load_config(path: Option<&Path>) -> Result<RealmConfig, String> {
    let config = match path {
        Some(path) => RealmConfig::load(path).map_err(|e| e.to_string())?,
        None => RealmConfig::default(),
    };
    tracing::debug!(
        armament = %config.armament,
        recall_mode = %config.recall_mode,
        chronicle_capacity = config.chronicle_capacity,
        "loaded config"
    );
    Ok(config)
}

/// The memory of a fighter who knows the sword and the shield.
fn trained_memory() -> FightingMemory {
    let mut memory = FightingMemory::new();
    memory.add(SwordTechnique);
    memory.add(ShieldTechnique);
    memory
}

/// A coastal point watched by a horn tower and a bell tower.
fn guarded_coast() -> StrategicPoint {
    let mut point = StrategicPoint::new();
    point.add(HornWatchtower);
    point.add(BellWatchtower);
    point
}

/// Print every chronicle line, indented, with its source dimmed.
fn print_chronicle(chronicle: &Chronicle) {
    for entry in chronicle.proclamations() {
        println!("  {} {}", format!("[{}]", entry.source).dimmed(), entry.line);
    }
}

fn print_heading(title: &str) {
    println!("  {}", title.bold().underline());
    println!();
}
