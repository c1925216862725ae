use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Defaults for the menu driver: how many workers populate the tree, the
/// key range offered as a default, and where the timing summary is saved.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub workers: usize,
    pub key_min: i64,
    pub key_max: i64,
    pub report_path: String,
}

impl Config {
    pub fn new() -> Self {
        Config {
            workers: 4,
            key_min: 1,
            key_max: 1_000_000,
            report_path: "avl_timings.txt".to_string(),
        }
    }

    /// Loads a TOML config file, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match fs::read_to_string(path.as_ref()) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!("invalid config file, using defaults: {}", e);
                    Config::new()
                }
            },
            Err(_) => Config::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
