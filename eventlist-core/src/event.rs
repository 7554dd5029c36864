//! The event value type.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::date::{DATE_TOKEN_LEN, format_date, parse_date};
use crate::error::{EventError, EventResult};

/// A dated event with a free-form description.
///
/// Values are never modified after construction. Ordering within an
/// [`EventManager`](crate::EventManager) uses the date only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    date: NaiveDate,
    description: String,
}

impl Event {
    /// The description is stored as given. It must not contain a line
    /// break (`\n` or `\r`): the stored file holds one event per line, so
    /// such a description does not survive [`EventManager::save_to_file`]
    /// followed by a reload.
    ///
    /// [`EventManager::save_to_file`]: crate::EventManager::save_to_file
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        Event {
            date,
            description: description.into(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// The stored line form: `DD.MM.YYYY description`.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", format_date(self.date), self.description)
    }
}

/// Parse one stored line.
///
/// The description is everything after the date token and a single space,
/// kept verbatim. A line holding only the date token gets an empty description.
impl FromStr for Event {
    type Err = EventError;

    fn from_str(line: &str) -> EventResult<Self> {
        let (token, rest) = match line.char_indices().nth(DATE_TOKEN_LEN) {
            Some((idx, _)) => line.split_at(idx),
            None => (line, ""),
        };

        let date = parse_date(token)?;

        let description = match rest.strip_prefix(' ') {
            Some(description) => description,
            None if rest.is_empty() => "",
            None => return Err(EventError::Format(line.to_string())),
        };

        Ok(Event::new(date, description))
    }
}
