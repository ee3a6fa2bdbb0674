use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::store::TASKS_KEY;

pub const CONFIG_VERSION: u64 = 1;

pub const APP_ID: &str = "dev.simpletodo.app";

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("simpletodo")
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, CosmicConfigEntry)]
pub struct TodoConfig {
    pub data_directory: PathBuf,
    pub debug_logging: bool,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_dir(),
            debug_logging: false,
        }
    }
}

impl TodoConfig {
    /// Load the config from cosmic-config, falling back to defaults on any
    /// error. Problems are returned so they can be logged once a logger exists.
    pub fn load() -> (Self, Vec<String>) {
        match cosmic_config::Config::new(APP_ID, CONFIG_VERSION) {
            Ok(handle) => Self::resolve_entry(Self::get_entry(&handle)),
            Err(e) => (Self::default(), vec![format!("Failed to open config: {:?}", e)]),
        }
    }

    fn resolve_entry<E: std::fmt::Debug>(
        entry: Result<Self, (Vec<E>, Self)>,
    ) -> (Self, Vec<String>) {
        match entry {
            Ok(config) => (config, Vec::new()),
            Err((errs, config)) => {
                let issues = errs
                    .iter()
                    .map(|e| format!("Config entry error: {:?}", e))
                    .collect();
                (config, issues)
            }
        }
    }

    /// File backing the persisted task list.
    pub fn store_path(&self) -> PathBuf {
        self.data_directory.join(format!("{}.json", TASKS_KEY))
    }

    pub fn ensure_data_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_path_lives_in_data_directory() {
        let config = TodoConfig {
            data_directory: PathBuf::from("/tmp/simpletodo-test"),
            debug_logging: false,
        };
        assert_eq!(
            config.store_path(),
            PathBuf::from("/tmp/simpletodo-test/tasks.json")
        );
    }

    #[test]
    fn default_has_debug_logging_off() {
        let config = TodoConfig::default();
        assert!(!config.debug_logging);
        assert!(config.data_directory.ends_with("simpletodo"));
    }

    #[test]
    fn entry_errors_are_returned_not_dropped() {
        let fallback = TodoConfig {
            data_directory: PathBuf::from("/tmp/fallback"),
            debug_logging: true,
        };
        let (config, issues) =
            TodoConfig::resolve_entry(Err((vec!["bad debug_logging"], fallback.clone())));
        assert_eq!(config, fallback);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("bad debug_logging"));

        let (config, issues) = TodoConfig::resolve_entry::<&str>(Ok(TodoConfig::default()));
        assert_eq!(config, TodoConfig::default());
        assert!(issues.is_empty());
    }
}
