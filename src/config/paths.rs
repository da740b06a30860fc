//! Canonical paths for knacky client state.
//!
//! Single source of truth - import this instead of hardcoding paths.
//!
//! ```rust,ignore
//! use knacky::config::paths;
//!
//! let prefs = paths::preferences_file()?;
//! ```

use std::path::PathBuf;

use anyhow::Result;

/// Preference file name inside the knacky home
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Get the knacky home directory (~/.knacky)
pub fn knacky_home() -> Result<PathBuf> {
    Ok(crate::config::config()?.home.clone())
}

/// Get the preference store path (~/.knacky/preferences.json)
pub fn preferences_file() -> Result<PathBuf> {
    Ok(knacky_home()?.join(PREFERENCES_FILE))
}
