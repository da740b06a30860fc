//! Configuration for the knacky client.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (KNACKY_HOME, KNACKY_API_URL, KNACKY_USER_ID)
//! 2. Config file (.knacky/config.yaml)
//! 3. Defaults (~/.knacky, http://localhost:8000, demo-user)
//!
//! Config file discovery:
//! - Searches current directory and parents for .knacky/config.yaml
//! - `home` in the config file is relative to the .knacky/ directory

pub mod paths;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::client::ReadRetry;

/// Default backend base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default fixed user identity
pub const DEFAULT_USER_ID: &str = "demo-user";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    /// Client state directory (relative to .knacky/)
    #[serde(default)]
    pub home: Option<String>,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Backend base URL
    pub base_url: Option<String>,
    /// Identity used for every write
    pub user_id: Option<String>,
    /// Retry policy for reads
    #[serde(default)]
    pub read_retry: Option<ReadRetry>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute path to knacky home (client state)
    pub home: PathBuf,
    /// Backend base URL
    pub api_base_url: String,
    /// Fixed user identity
    pub user_id: String,
    /// Retry policy for idempotent reads
    pub read_retry: ReadRetry,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".knacky").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's parent
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Merge a parsed config file (if any) with environment and defaults
fn resolve(
    config: Option<(&Path, ConfigFile)>,
    default_home: PathBuf,
) -> ResolvedConfig {
    let (config_file, file) = match config {
        Some((path, file)) => (Some(path.to_path_buf()), Some(file)),
        None => (None, None),
    };

    let home = if let Some(env_home) = env_var("KNACKY_HOME") {
        PathBuf::from(env_home)
    } else if let (Some(path), Some(home)) = (
        config_file.as_deref(),
        file.as_ref().and_then(|f| f.home.as_deref()),
    ) {
        let knacky_dir = path.parent().unwrap_or(Path::new("."));
        resolve_path(knacky_dir, home)
    } else {
        default_home
    };

    let api = file.map(|f| f.api).unwrap_or_default();

    let api_base_url = env_var("KNACKY_API_URL")
        .or(api.base_url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let user_id = env_var("KNACKY_USER_ID")
        .or(api.user_id)
        .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

    ResolvedConfig {
        home,
        api_base_url,
        user_id,
        read_retry: api.read_retry.unwrap_or_default(),
        config_file,
    }
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let default_home = dirs::home_dir()
        .context("Failed to determine home directory")?
        .join(".knacky");

    match find_config_file() {
        Some(path) => {
            let file = load_config_file(&path)?;
            Ok(resolve(Some((path.as_path(), file)), default_home))
        }
        None => Ok(resolve(None, default_home)),
    }
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
