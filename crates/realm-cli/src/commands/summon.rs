use colored::Colorize;

use realm_core::{Armament, Barracks, RealmConfig};

pub fn run(config: &RealmConfig, count: usize, armament: Option<&str>) -> Result<(), String> {
    let barracks = match armament {
        Some(name) => Barracks::new(name.parse::<Armament>().map_err(|e| e.to_string())?),
        None => config.barracks(),
    };

    if count == 0 {
        println!("  {}", "No warriors summoned.".dimmed());
        return Ok(());
    }

    let mut chronicle = config.chronicle();
    for _ in 0..count {
        barracks.summon().report(&mut chronicle);
    }

    super::print_heading(&format!(
        "Barracks ({} warrior{}, armed with {})",
        count,
        if count == 1 { "" } else { "s" },
        barracks.armament()
    ));
    super::print_chronicle(&chronicle);

    Ok(())
}
