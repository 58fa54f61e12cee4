use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Name of the config file inside the data directory
pub const CONFIG_FILE: &str = "moodboard.toml";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "MOODBOARD_DIR";

/// Resolve the data directory: explicit override, then `MOODBOARD_DIR`,
/// then `$XDG_DATA_HOME/moodboard`, then `~/.local/share/moodboard`.
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    if let Ok(dir) = std::env::var(DATA_DIR_ENV)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    let data_home = std::env::var("XDG_DATA_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| dirs_home().join(".local").join("share"));
    data_home.join("moodboard")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read moodboard.toml from the data directory.
/// A missing file gives the defaults. A corrupted file is backed up as
/// `.bak` and the defaults are used.
pub fn read_config(data_dir: &Path) -> Config {
    let path = data_dir.join(CONFIG_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Config::default(),
    };
    match toml::from_str::<Config>(&content) {
        Ok(config) => config,
        Err(e) => {
            let bak = path.with_extension("toml.bak");
            let _ = fs::copy(&path, &bak);
            eprintln!(
                "warning: could not parse {} (backed up as {}): {}",
                path.display(),
                bak.display(),
                e
            );
            Config::default()
        }
    }
}
