use realm_core::RealmConfig;

pub fn run(config: &RealmConfig, message: &str) -> Result<(), String> {
    let point = super::guarded_coast();
    let mut chronicle = config.chronicle();
    let alerted = point.dispatch(message, &mut chronicle);

    super::print_heading(&format!(
        "Alarm ({} tower{} alerted)",
        alerted,
        if alerted == 1 { "" } else { "s" }
    ));
    super::print_chronicle(&chronicle);

    Ok(())
}
