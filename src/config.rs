//! Tool configuration: where to look for packs.
//!
//! Loaded from `packdex.toml`. All fields have defaults matching the
//! reference editor layout, so running with no config file at all works
//! in a checkout that keeps its packs in `assets/` (with the legacy
//! `bgmapeditor_tiles/` still searched second):
//!
//! ```toml
//! # Storage roots, priority order. The first root that contains a pack
//! # id wins; the last root is the fallback base for stray paths.
//! roots = ["assets", "bgmapeditor_tiles"]
//!
//! # Directory-name prefix that marks a pack even without a root cfg.
//! pack_prefix = "G-Zombicide-"
//! ```
//!
//! Config files are sparse — set only what you want to override.
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings for one packdex invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Storage roots searched for packs, priority order.
    pub roots: Vec<PathBuf>,
    /// Directory-name prefix that marks a pack directory.
    pub pack_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            roots: vec![
                PathBuf::from("assets"),
                PathBuf::from("bgmapeditor_tiles"),
            ],
            pack_prefix: "G-Zombicide-".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roots.is_empty() {
            return Err(ConfigError::Validation(
                "roots must list at least one directory".into(),
            ));
        }
        Ok(())
    }
}

/// Load settings from `path`, or defaults when the file doesn't exist.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let settings = if path.is_file() {
        toml::from_str(&fs::read_to_string(path)?)?
    } else {
        Settings::default()
    };
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_file_missing() {
        let tmp = TempDir::new().unwrap();
        let settings = load_settings(&tmp.path().join("packdex.toml")).unwrap();
        assert_eq!(settings.roots.len(), 2);
        assert_eq!(settings.pack_prefix, "G-Zombicide-");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("packdex.toml");
        fs::write(&path, "pack_prefix = \"MyPacks-\"\n").unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.pack_prefix, "MyPacks-");
        assert_eq!(settings.roots, Settings::default().roots);
    }

    #[test]
    fn unknown_keys_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("packdex.toml");
        fs::write(&path, "rootz = [\"assets\"]\n").unwrap();
        assert!(matches!(load_settings(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn empty_roots_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("packdex.toml");
        fs::write(&path, "roots = []\n").unwrap();
        assert!(matches!(
            load_settings(&path),
            Err(ConfigError::Validation(_))
        ));
    }
}
