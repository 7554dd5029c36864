use std::path::PathBuf;

use anyhow::{Context, Result};
use eventlist_core::{Event, EventManager, parse_date};
use owo_colors::OwoColorize;

pub fn run(
    manager: &mut EventManager,
    date: &str,
    description: &[String],
    output: Option<PathBuf>,
) -> Result<()> {
    let event = build_event(date, description)?;
    tracing::debug!(%event, "adding event");

    manager.add_event(event.clone());

    match output {
        Some(path) => manager
            .save_to_file(&path)
            .with_context(|| format!("Failed to save events to {}", path.display()))?,
        None => manager
            .save()
            .with_context(|| format!("Failed to save events to {}", manager.path().display()))?,
    }

    println!(
        "{} {} on {}",
        "Added".green(),
        event.description(),
        event.date().format("%Y-%m-%d")
    );
    Ok(())
}

fn build_event(date: &str, description: &[String]) -> Result<Event> {
    let date = parse_date(date)?;
    let description = description.join(" ");

    if description.contains(['\n', '\r']) {
        anyhow::bail!("Descriptions must fit on a single line");
    }

    Ok(Event::new(date, description))
}
