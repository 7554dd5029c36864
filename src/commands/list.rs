use std::io::{self, Write};

use anyhow::Result;
use eventlist_core::EventManager;
use owo_colors::OwoColorize;

pub fn run(manager: &EventManager) -> Result<()> {
    write_list(&mut io::stdout().lock(), manager)
}

fn write_list(out: &mut impl Write, manager: &EventManager) -> Result<()> {
    if manager.is_empty() {
        let note = format!("No events in {}", manager.path().display());
        writeln!(out, "{}", note.dimmed())?;
        return Ok(());
    }

    for event in manager.events() {
        writeln!(out, "{event}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lists_events_in_file_form() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.txt");
        std::fs::write(&path, "25.12.2023 Christmas\n31.10.2023 Halloween\n").unwrap();
        let manager = EventManager::load(&path).unwrap();

        let mut out = Vec::new();
        write_list(&mut out, &manager).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "31.10.2023 Halloween\n25.12.2023 Christmas\n"
        );
    }

    #[test]
    fn empty_list_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.txt");
        let manager = EventManager::load(&path).unwrap();

        let mut out = Vec::new();
        write_list(&mut out, &manager).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No events in"));
        assert!(text.contains("events.txt"));
    }
}
