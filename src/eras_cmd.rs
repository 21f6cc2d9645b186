//! eras command: print the tabulated era table.

use anyhow::Result;

use wareki_core::Era;

/// Prints one line per tabulated era, oldest first.
pub fn run() -> Result<()> {
    let current = Era::current();
    for era in Era::all() {
        let ended = match era.ended() {
            Some(d) => d.to_string(),
            None => "open".to_string(),
        };
        let marker = if *era == current { "  (current)" } else { "" };
        println!(
            "{:<8} {}  {} .. {}{marker}",
            era.name(),
            era.kanji(),
            era.started(),
            ended
        );
    }
    Ok(())
}
