use std::io::{self, Write};

use console::style;

use crate::urbandict::Entry;

const FOOTER: &str = "Brought to you by Chubbs Solutions.";

fn headline(entry: &Entry) -> String {
    format!(
        "Word of the day: {}   ++Thumbs Up: {}   --Thumbs Down: {}",
        entry.word, entry.thumbs_up, entry.thumbs_down
    )
}

pub fn render(entry: &Entry) -> String {
    let mut text = headline(entry);
    text.push_str("\n\n");
    text.push_str(&entry.definition_text);
    text.push_str("\n\n");
    text.push_str(&format!("Example: {}\n\n", entry.example));
    text.push_str(&format!("Courtesy of {}\n\n\n", entry.author));
    text.push_str(FOOTER);
    text
}

/// Colored version of [`render`] for the terminal.
pub fn print_entry(out: &mut dyn Write, entry: &Entry) -> io::Result<()> {
    write!(out, "{}\n\n", style(headline(entry)).cyan())?;
    write!(out, "{}\n\n", style(&entry.definition_text).green())?;
    write!(out, "{}\n\n", style(format!("Example: {}", entry.example)).blue())?;
    write!(out, "{}\n\n\n", style(format!("Courtesy of {}", entry.author)).yellow())?;
    writeln!(out, "{}", style(FOOTER).dim())
}
