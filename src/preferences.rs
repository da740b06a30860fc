//! Client-side preferences.
//!
//! A small JSON key/value file that survives between runs. The only
//! consumer today is the splash gate: it reads its flag once on init and
//! writes it when the user dismisses the splash.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

/// Key under which splash dismissal is stored
pub const SPLASH_DISMISSED_KEY: &str = "knacky-splash-dismissed";

/// Persistent key/value preferences
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    /// Backing file
    path: PathBuf,
    /// Values as last loaded or written
    values: BTreeMap<String, String>,
}

/// On-disk format
#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl PreferenceStore {
    /// Load the store from `path`; a missing file is an empty store
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let values = if path.exists() {
            let content = fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read preferences: {}", path.display()))?;
            let file: PreferenceFile =
                serde_json::from_str(&content).context("Failed to parse preferences JSON")?;
            file.values
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    /// Load the store from the configured location
    pub async fn open_default() -> Result<Self> {
        Self::load(crate::config::paths::preferences_file()?).await
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Write a value and persist the store
    pub async fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save().await
    }

    async fn save(&self) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let file = PreferenceFile {
            values: self.values.clone(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, content)
            .await
            .with_context(|| format!("Failed to write preferences: {}", self.path.display()))?;

        debug!(path = %self.path.display(), "Saved preferences");
        Ok(())
    }
}

/// Whether the welcome splash should be shown
#[derive(Debug)]
pub struct SplashGate {
    store: PreferenceStore,
    dismissed: bool,
}

impl SplashGate {
    /// Read the dismissal flag from the store
    pub fn load(store: PreferenceStore) -> Self {
        let dismissed = store.get(SPLASH_DISMISSED_KEY) == Some("true");
        Self { store, dismissed }
    }

    pub fn should_show(&self) -> bool {
        !self.dismissed
    }

    /// Record dismissal; later loads will not show the splash
    pub async fn dismiss(&mut self) -> Result<()> {
        self.store.set(SPLASH_DISMISSED_KEY, "true").await?;
        self.dismissed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = PreferenceStore::load(temp.path().join("prefs.json")).await.unwrap();
        assert_eq!(store.get("anything"), None);
    }

    #[tokio::test]
    async fn test_set_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("prefs.json");

        let mut store = PreferenceStore::load(&path).await.unwrap();
        store.set("theme", "dark").await.unwrap();

        assert!(path.exists());
        let reloaded = PreferenceStore::load(&path).await.unwrap();
        assert_eq!(reloaded.get("theme"), Some("dark"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(PreferenceStore::load(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_splash_only_dismissed_by_true() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.json");

        let mut store = PreferenceStore::load(&path).await.unwrap();
        store.set(SPLASH_DISMISSED_KEY, "yes").await.unwrap();

        let gate = SplashGate::load(store);
        assert!(gate.should_show());
    }
}
