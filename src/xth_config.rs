// User preferences and their persistence as TOML

use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration
/// Persisted to disk as TOML
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub ascii_art: bool,   // Draw the gallows with plain ASCII instead of box drawing
    pub confirm_new: bool, // Ask before abandoning a round in progress
    pub seed: Option<u64>, // Fixed RNG seed for reproducible word sequences
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ascii_art: false,
            confirm_new: false,
            seed: None,
        }
    }
}

/// Per-application directory holding the config and log files
/// Uses the platform config directory (e.g., ~/.config/xthgmn/ on Linux)
/// Falls back to the current directory if ProjectDirs is unavailable
pub fn app_dir() -> Option<(PathBuf, String)> {
    let exe = env::current_exe().ok()?;
    let name = exe.file_stem().and_then(|s| s.to_str())?.to_string();
    match ProjectDirs::from("com", "xhbl", &name) {
        Some(proj) => Some((proj.config_dir().to_path_buf(), name)),
        None => env::current_dir().ok().map(|dir| (dir, name)),
    }
}

/// Get the configuration file path (<app_dir>/<exe_name>.toml)
pub fn config_path() -> Option<PathBuf> {
    app_dir().map(|(dir, name)| dir.join(format!("{}.toml", name)))
}

/// Parse a config file; None on any read or parse error
pub fn load_config_from(path: &Path) -> Option<Config> {
    let s = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            warn!("cannot read {}: {}", path.display(), e);
            return None;
        }
    };
    match toml::from_str::<Config>(&s) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            warn!("ignoring malformed config {}: {}", path.display(), e);
            None
        }
    }
}

/// Write a config file, creating its parent directory when needed
pub fn save_config_to(path: &Path, cfg: &Config) {
    let s = match toml::to_string(cfg) {
        Ok(s) => s,
        Err(e) => {
            warn!("cannot serialize config: {}", e);
            return;
        }
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Err(e) = fs::write(path, s) {
        warn!("cannot write {}: {}", path.display(), e);
    }
}

/// Load configuration from disk, or create default if not found
pub fn load_or_create_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    if path.exists() {
        if let Some(cfg) = load_config_from(&path) {
            info!("loaded config from {}", path.display());
            return cfg;
        }
    }
    let cfg = Config::default();
    save_config_to(&path, &cfg);
    info!("created default config at {}", path.display());
    cfg
}
