// SPDX-License-Identifier: MPL-2.0
//! Preference store boundary.
//!
//! The manager talks to storage through [`PreferenceStore`], a single string
//! slot holding one of the literal values `"light"`, `"dark"`, `"system"`.
//! [`ConfigStore`] is the durable implementation backed by the crate's
//! `settings.toml`; tests inject the in-memory fake from
//! [`crate::test_utils`].

use crate::config;
use crate::error::Result;
use crate::theme::ThemeMode;
use std::path::PathBuf;

pub trait PreferenceStore {
    /// Returns the stored preference string, or `None` when nothing usable is
    /// stored.
    fn get(&self) -> Option<String>;

    /// Overwrites the stored preference. Callers treat failure as
    /// best-effort: in-memory state moves on regardless.
    fn set(&mut self, value: &str) -> Result<()>;
}

/// File-backed store persisting the preference in `settings.toml`.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    base_dir: Option<PathBuf>,
}

impl ConfigStore {
    /// Store under the platform config directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store under an explicit directory (tests, `--config-dir`).
    #[must_use]
    pub fn with_dir(dir: PathBuf) -> Self {
        Self {
            base_dir: Some(dir),
        }
    }
}

impl PreferenceStore for ConfigStore {
    fn get(&self) -> Option<String> {
        // A corrupt file degrades to defaults, which reads as "absent" here.
        let (config, _warning) = config::load_with_override(self.base_dir.clone());
        config.theme_mode.map(|mode| mode.as_str().to_string())
    }

    fn set(&mut self, value: &str) -> Result<()> {
        let mode: ThemeMode = value.parse()?;
        let (mut config, _warning) = config::load_with_override(self.base_dir.clone());
        config.theme_mode = Some(mode);
        config::save_with_override(&config, self.base_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn get_returns_none_for_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let store = ConfigStore::with_dir(temp_dir.path().to_path_buf());

        assert_eq!(store.get(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut store = ConfigStore::with_dir(temp_dir.path().to_path_buf());

        store.set("dark").expect("failed to persist preference");

        assert_eq!(store.get(), Some("dark".to_string()));
    }

    #[test]
    fn set_rejects_values_outside_the_enumerated_set() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut store = ConfigStore::with_dir(temp_dir.path().to_path_buf());

        assert!(store.set("blue").is_err());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn get_treats_corrupt_file_as_absent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("settings.toml"), "theme_mode = \"blue\"")
            .expect("failed to write config");
        let store = ConfigStore::with_dir(temp_dir.path().to_path_buf());

        assert_eq!(store.get(), None);
    }

    #[test]
    fn set_survives_a_corrupt_existing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("settings.toml"), "not = valid = toml")
            .expect("failed to write config");
        let mut store = ConfigStore::with_dir(temp_dir.path().to_path_buf());

        store.set("light").expect("failed to persist preference");

        assert_eq!(store.get(), Some("light".to_string()));
    }
}
