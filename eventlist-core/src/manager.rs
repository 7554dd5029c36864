//! In-memory event list backed by a text file.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use crate::error::{EventError, EventResult};
use crate::event::Event;

/// Events kept in ascending date order, loaded from and saved to a
/// line-oriented file (`DD.MM.YYYY description` per line).
///
/// Events sharing a date stay in the order they were loaded or added.
#[derive(Debug)]
pub struct EventManager {
    path: PathBuf,
    events: Vec<Event>,
}

impl EventManager {
    /// Load events from `path`.
    ///
    /// A missing file gives an empty manager. Blank lines are skipped. Any
    /// other line whose date does not parse fails the whole load with
    /// [`EventError::Load`].
    pub fn load(path: impl AsRef<Path>) -> EventResult<Self> {
        let path = path.as_ref().to_path_buf();

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no events file, starting empty");
                return Ok(EventManager {
                    path,
                    events: Vec::new(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let mut events = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let event = line.parse::<Event>().map_err(|e| EventError::Load {
                path: path.clone(),
                line: idx + 1,
                source: Box::new(e),
            })?;
            events.push(event);
        }

        // Stable, so same-day events keep file order
        events.sort_by_key(Event::date);

        tracing::debug!(path = %path.display(), count = events.len(), "loaded events");
        Ok(EventManager { path, events })
    }

    /// The path this manager was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All events, ascending by date.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Insert `event` after every event on or before its date.
    pub fn add_event(&mut self, event: Event) {
        let idx = self.events.partition_point(|e| e.date() <= event.date());
        self.events.insert(idx, event);
    }

    /// Events dated on or after `from`, ascending, at most `limit` of them.
    pub fn upcoming_events(&self, from: NaiveDate, limit: Option<usize>) -> Vec<Event> {
        let start = self.events.partition_point(|e| e.date() < from);

        self.events[start..]
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }

    /// Write every event to `path`, replacing any existing file.
    ///
    /// The content goes to a uniquely named temp file in the target's
    /// directory and is renamed into place. A symlinked target is resolved
    /// first so the file it points at gets the new content, and an existing
    /// target keeps its permissions. The manager's own path is left unchanged.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> EventResult<()> {
        let path = path.as_ref();
        let target = match std::fs::canonicalize(path) {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == ErrorKind::NotFound => path.to_path_buf(),
            Err(e) => return Err(e.into()),
        };

        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let content: String = self
            .events
            .iter()
            .map(|event| format!("{event}\n"))
            .collect();

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(content.as_bytes())?;
        if let Ok(metadata) = std::fs::metadata(&target) {
            temp.as_file().set_permissions(metadata.permissions())?;
        }
        temp.persist(&target).map_err(|e| e.error)?;

        tracing::debug!(
            path = %target.display(),
            count = self.events.len(),
            "saved events"
        );
        Ok(())
    }

    /// Write every event back to the path the manager was loaded from.
    pub fn save(&self) -> EventResult<()> {
        self.save_to_file(&self.path)
    }
}
