//! Path utilities for tradebook.
//!
//! All data lives under `~/.tradebook/`:
//! - `~/.tradebook/config.toml` - main configuration
//! - `~/.tradebook/tradebook.db` - journal database (see `[storage]`)

use std::path::PathBuf;

/// Returns the tradebook home directory (`~/.tradebook/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tradebook")
}

/// Returns the default config file path (`~/.tradebook/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
