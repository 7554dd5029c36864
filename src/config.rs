use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Events file used when `--file` is not given
    pub events_file: Option<String>,
}

/// Get the config directory path (~/.config/eventlist)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("eventlist");
    Ok(config_dir)
}

/// Get the config file path (~/.config/eventlist/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from `explicit`, or from ~/.config/eventlist/config.toml.
///
/// The default file is optional; an explicitly named one must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file");
                return Ok(Config::default());
            }
            path
        }
    };

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Pick the events file: the `--file` flag wins over `events_file` in config.
pub fn resolve_events_file(flag: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }

    match &config.events_file {
        Some(path) => Ok(expand_path(path)),
        None => {
            let config_hint = config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "config.toml".to_string());
            anyhow::bail!(
                "No events file given.\n\n\
                Pass one with --file <PATH>, or set it in {}:\n\n\
                events_file = \"~/events.txt\"",
                config_hint
            )
        }
    }
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_config_is_parsed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "events_file = \"/var/lib/events.txt\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.events_file.as_deref(), Some("/var/lib/events.txt"));
    }

    #[test]
    fn empty_config_has_no_events_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(config.events_file.is_none());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "events_file = [1, 2]\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn flag_wins_over_config() {
        let config = Config {
            events_file: Some("/from/config.txt".to_string()),
        };
        let path = resolve_events_file(Some(Path::new("/from/flag.txt")), &config).unwrap();
        assert_eq!(path, PathBuf::from("/from/flag.txt"));
    }

    #[test]
    fn config_used_without_flag() {
        let config = Config {
            events_file: Some("/from/config.txt".to_string()),
        };
        let path = resolve_events_file(None, &config).unwrap();
        assert_eq!(path, PathBuf::from("/from/config.txt"));
    }

    #[test]
    fn no_flag_and_no_config_is_an_error() {
        let err = resolve_events_file(None, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("--file"));
    }

    #[test]
    fn expand_path_leaves_plain_paths() {
        assert_eq!(expand_path("/tmp/events.txt"), PathBuf::from("/tmp/events.txt"));
        assert_eq!(expand_path("events.txt"), PathBuf::from("events.txt"));
    }

    #[test]
    fn expand_path_replaces_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~/events.txt"), home.join("events.txt"));
        }
    }
}
