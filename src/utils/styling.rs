//! Terminal styling utilities - phase status lines and markers

use std::io::Write;
use std::path::Path;

use console::style;

/// Column the status marker is aligned to.
const STATUS_COLUMN: usize = 66;

/// Print a phase start line padded with dots, without a newline, so
/// the completion marker lands on the same line.
pub fn phase(message: &str) {
    let message = format!("* {}", message);
    let dots = STATUS_COLUMN.saturating_sub(message.chars().count()).max(3);
    print!("{}{}", message, ".".repeat(dots));
    let _ = std::io::stdout().flush();
}

pub fn done() {
    println!("{}", style("[ DONE ]").green());
}

pub fn warning() {
    println!("{}", style("[ WARNING ]").yellow());
}

pub fn fail() {
    println!("{}", style("[ FAIL ]").red());
}

/// Print an explanation line following a WARNING or FAIL marker.
pub fn explain(message: &str) {
    println!("  {}", style(message).dim());
}

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "{} {}",
        style("mwbook").cyan().bold(),
        style("MediaWiki book builder").dim()
    );
    println!("{}", style(format!("v{}", version)).dim());
    println!("{}", style("─".repeat(50)).dim());
    println!();
}

/// Print the resolved configuration card
pub fn print_config(
    input: &Path,
    output: &Path,
    doc_type: &str,
    lang: &str,
    from_format: &str,
    to_format: &str,
) {
    println!("  Input:    {}", style(input.display()).white());
    println!("  Output:   {}", style(output.display()).white());
    println!(
        "  Formats:  {} {} {}",
        style(from_format).white(),
        style("→").dim(),
        style(to_format).white()
    );
    println!("  Type:     {}", style(doc_type).white());
    println!("  Language: {}", style(lang).white());
    println!();
}
