use serde::{Deserialize, Serialize};

/// Configuration from moodboard.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub lock: LockConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Tags shown per pin in listings
    #[serde(default = "default_tag_limit")]
    pub tag_limit: usize,
    /// Width of the title column in listings
    #[serde(default = "default_title_width")]
    pub title_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            tag_limit: default_tag_limit(),
            title_width: default_title_width(),
        }
    }
}

fn default_tag_limit() -> usize {
    3
}

fn default_title_width() -> usize {
    40
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockConfig {
    /// How long write commands wait for the data directory lock
    #[serde(default = "default_lock_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for LockConfig {
    fn default() -> Self {
        LockConfig {
            timeout_ms: default_lock_timeout_ms(),
        }
    }
}

fn default_lock_timeout_ms() -> u64 {
    5000
}
