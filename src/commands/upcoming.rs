use std::io::{self, Write};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use eventlist_core::{Event, EventManager, parse_date};
use owo_colors::OwoColorize;

pub fn run(
    manager: &EventManager,
    from: Option<&str>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let from = match from {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let events = manager.upcoming_events(from, limit);
    tracing::debug!(%from, ?limit, found = events.len(), "upcoming events");

    let mut out = io::stdout().lock();
    if json {
        write_json(&mut out, &events)
    } else {
        write_text(&mut out, &events, from)
    }
}

fn write_text(out: &mut impl Write, events: &[Event], from: NaiveDate) -> Result<()> {
    if events.is_empty() {
        writeln!(out, "{}", format!("No events on or after {}", from.format("%Y-%m-%d")).dimmed())?;
        return Ok(());
    }

    for event in events {
        writeln!(
            out,
            "{} on {}",
            event.description(),
            event.date().format("%Y-%m-%d").to_string().cyan()
        )?;
    }
    Ok(())
}

fn write_json(out: &mut impl Write, events: &[Event]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, events)?;
    writeln!(out)?;
    Ok(())
}
