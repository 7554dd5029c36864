pub mod add;
pub mod list;
pub mod upcoming;

use std::path::Path;

use anyhow::{Context, Result};
use eventlist_core::EventManager;

use crate::config;

/// Resolve the events file from the flag/config and load it.
pub fn open_manager(file: Option<&Path>, config_file: Option<&Path>) -> Result<EventManager> {
    let cfg = config::load_config(config_file)?;
    let path = config::resolve_events_file(file, &cfg)?;

    EventManager::load(&path)
        .with_context(|| format!("Failed to open events file {}", path.display()))
}
