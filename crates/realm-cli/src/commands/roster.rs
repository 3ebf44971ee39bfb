use comfy_table::{ContentArrangement, Table};

use realm_core::Chronicle;

pub fn run() -> Result<(), String> {
    let memory = super::trained_memory();
    let point = super::guarded_coast();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Kind", "Name", "Says"]);

    for name in memory.names() {
        let mut scratch = Chronicle::unbounded();
        memory.dispatch_first(name, &mut scratch);
        table.add_row(vec![
            "technique".to_string(),
            name.to_string(),
            scratch.to_string(),
        ]);
    }

    let mut alarms = Chronicle::unbounded();
    point.dispatch("<message>", &mut alarms);
    for name in point.names() {
        table.add_row(vec![
            "watchtower".to_string(),
            name.to_string(),
            alarms.lines_from(name).join("\n"),
        ]);
    }

    super::print_heading("Roster");
    println!("{table}");

    Ok(())
}
