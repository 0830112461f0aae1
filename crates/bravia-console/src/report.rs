// Operator-facing reporting: status-line prefixes, help menu, tables,
// and the unauthorized remediation block.
//
// Every diagnostic is a single line; the console loop always continues
// after printing one.

use std::io::{self, IsTerminal};

use owo_colors::OwoColorize;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Color only on a real terminal, and never when NO_COLOR is set.
fn use_color() -> bool {
    io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err()
}

pub fn status(message: &str) {
    if use_color() {
        println!("{} {message}", "[*]".green());
    } else {
        println!("[*] {message}");
    }
}

pub fn info(message: &str) {
    if use_color() {
        println!("{} {message}", "[-]".cyan());
    } else {
        println!("[-] {message}");
    }
}

pub fn warning(message: &str) {
    if use_color() {
        println!("{} {message}", "[!]".yellow());
    } else {
        println!("[!] {message}");
    }
}

pub fn error(message: &str) {
    if use_color() {
        println!("{} {message}", "[!]".red());
    } else {
        println!("[!] {message}");
    }
}

/// Remediation block for a rejected key, naming the configured value
/// verbatim so the operator can mirror it on the TV.
pub fn print_unauthorized(psk: &str) {
    error(&format!(
        "Error: Unauthorized. Please check you have configured the Pre-Shared Key correctly on the TV to {psk}."
    ));
    println!("Instructions to setup PSK (Pre-Shared Key) on TV:");
    println!("1. Navigate to: [Settings] -> [Network] -> [Home Network Setup] -> [IP Control]");
    println!("2. Set [Authentication] to [Normal and Pre-Shared Key]");
    println!("3. There should be a new menu entry [Pre-Shared Key]. Set it to '{psk}'");
    println!("Note: To modify the PSK in this console enter 'set option psk <value>'");
}

pub fn print_help() {
    println!("Commands:");
    let entries = [
        ("find tv", "Searches for the TV on the local LAN."),
        ("configure", "Auto configures the console."),
        ("show options", "Displays the current options and their values."),
        ("set option <name>", "Manually changes a setting."),
        ("update commands", "Updates the TV remote control commands."),
        ("show commands", "Displays the TV remote control commands."),
        ("search <command>", "Searches the TV remote control commands."),
        ("update info", "Updates the system information."),
        ("show info", "Displays the system information."),
        ("quit", "Exits the console."),
    ];
    for (name, description) in entries {
        println!("{name:<20} {description}");
    }
}

/// Render rows as a rounded table (used by `show info` / `show options`).
pub fn render_table<R>(rows: R) -> String
where
    R: IntoIterator<Item = Vec<String>>,
{
    let mut builder = Builder::default();
    for row in rows {
        builder.push_record(row);
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}
