use crate::error::{LibrisError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`LibrisConfig::get`] and [`LibrisConfig::set`].
pub const CONFIG_KEYS: [&str; 3] = ["seed", "persist-sort", "unique-ids"];

/// Configuration for libris, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibrisConfig {
    /// Load the sample books and borrowers at startup
    #[serde(default = "default_true")]
    pub load_seed_data: bool,

    /// Listing books sorts the catalog in place instead of a copy
    #[serde(default = "default_true")]
    pub persist_sort_order: bool,

    /// Refuse to add a book whose ID is already catalogued
    #[serde(default)]
    pub unique_book_ids: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LibrisConfig {
    fn default() -> Self {
        Self {
            load_seed_data: true,
            persist_sort_order: true,
            unique_book_ids: false,
        }
    }
}

impl LibrisConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: LibrisConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content).map_err(LibrisError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "seed" => self.load_seed_data,
            "persist-sort" => self.persist_sort_order,
            "unique-ids" => self.unique_book_ids,
            _ => return None,
        };
        Some(value.to_string())
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let target = match key {
            "seed" => &mut self.load_seed_data,
            "persist-sort" => &mut self.persist_sort_order,
            "unique-ids" => &mut self.unique_book_ids,
            _ => return Err(format!("Unknown config key: {}", key)),
        };
        *target = parse_flag(value)
            .ok_or_else(|| format!("Invalid value for {}: {} (expected true/false)", key, value))?;
        Ok(())
    }

    /// `(key, value)` pairs for every known key, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
