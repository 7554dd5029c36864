//! Error types for the event list.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while parsing dates or loading/saving events.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("Invalid date format '{0}'. Expected DD.MM.YYYY")]
    Format(String),

    #[error("Invalid calendar date '{0}'")]
    InvalidDate(String),

    #[error("Failed to load {}: line {line}: {source}", .path.display())]
    Load {
        path: PathBuf,
        line: usize,
        #[source]
        source: Box<EventError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for event list operations.
pub type EventResult<T> = Result<T, EventError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_names_file_and_line() {
        let load = EventError::Load {
            path: PathBuf::from("events.txt"),
            line: 4,
            source: Box::new(EventError::InvalidDate("31.02.2023".into())),
        };
        assert_eq!(
            load.to_string(),
            "Failed to load events.txt: line 4: Invalid calendar date '31.02.2023'"
        );
    }
}
