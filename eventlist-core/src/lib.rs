//! Core types for eventlist.
//!
//! - [`Event`]: a date paired with a description
//! - [`EventManager`]: the sorted event list and its backing file
//! - [`parse_date`] / [`format_date`]: the `DD.MM.YYYY` date token

pub mod date;
pub mod error;
pub mod event;
pub mod manager;

pub use date::{format_date, parse_date};
pub use error::{EventError, EventResult};
pub use event::Event;
pub use manager::EventManager;
