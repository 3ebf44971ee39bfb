use colored::Colorize;

use realm_core::{Chronicle, Kingdom};

pub fn run() -> Result<(), String> {
    let first = Kingdom::instance();
    let second = Kingdom::instance();

    let mut chronicle = Chronicle::unbounded();
    first.proclaim(&mut chronicle);

    super::print_heading(&format!("The Kingdom of {}", first.name()));
    super::print_chronicle(&chronicle);
    println!();

    let same = if std::ptr::eq(first, second) {
        "yes".green()
    } else {
        "no".red()
    };
    println!("  Asked twice, same kingdom both times: {same}");

    Ok(())
}
