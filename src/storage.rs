//! On-disk persistence for history and preferences
//!
//! History and the theme preference are stored as JSON files under the
//! per-user data directory (overridable with `--data-dir`). A missing file
//! is not an error, it simply yields the defaults, so a first run starts
//! clean and a wiped data directory heals itself.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::history::History;
use crate::theme::ThemeKind;

const HISTORY_FILE: &str = "history.json";
const PREFERENCES_FILE: &str = "preferences.json";

/// User preferences persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Active display theme.
    pub theme: ThemeKind,
}

/// Handle to the application's data directory.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Create a storage handle rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve the data directory: an explicit override wins, otherwise the
    /// platform data directory (falling back to the working directory when
    /// the platform reports none).
    pub fn resolve(override_dir: Option<&Path>) -> Self {
        let dir = match override_dir {
            Some(dir) => dir.to_path_buf(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("calctui"),
        };
        Self::new(dir)
    }

    /// The directory this storage reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the saved history; an absent file yields an empty history.
    pub fn load_history(&self) -> Result<History> {
        self.load_json(HISTORY_FILE)
    }

    /// Save the history, creating the data directory if needed.
    pub fn save_history(&self, history: &History) -> Result<()> {
        self.save_json(HISTORY_FILE, history)
    }

    /// Load the saved preferences; an absent file yields the defaults.
    pub fn load_preferences(&self) -> Result<Preferences> {
        self.load_json(PREFERENCES_FILE)
    }

    /// Save the preferences, creating the data directory if needed.
    pub fn save_preferences(&self, preferences: &Preferences) -> Result<()> {
        self.save_json(PREFERENCES_FILE, preferences)
    }

    fn load_json<T: for<'de> Deserialize<'de> + Default>(&self, file: &str) -> Result<T> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(T::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {path:?}"))?;
        serde_json::from_str(&content).with_context(|| format!("Failed to parse {path:?}"))
    }

    fn save_json<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create data directory {:?}", self.dir))?;

        let path = self.dir.join(file);
        let json = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize {file}"))?;
        fs::write(&path, json).with_context(|| format!("Failed to write {path:?}"))?;

        Ok(())
    }
}
