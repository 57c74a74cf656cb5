//! Storage location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Database path used when nothing else is configured.
pub const DEFAULT_DATABASE: &str = "~/.tradebook/tradebook.db";

/// Environment variable overriding `[storage] database`.
pub const DATABASE_ENV: &str = "TRADEBOOK_DATABASE";

/// `[storage]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file; a leading `~/` expands to the home directory.
    pub database: String,
}

impl StorageConfig {
    /// The database path with `~` expanded.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        expand_home(&self.database)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database: DEFAULT_DATABASE.into(),
        }
    }
}

/// Expand a leading `~` or `~/` against the user's home directory.
#[must_use]
pub fn expand_home(path: &str) -> PathBuf {
    let home = || dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    if path == "~" {
        home()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home().join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_home("/tmp/journal.db"), PathBuf::from("/tmp/journal.db"));
        assert_eq!(expand_home("journal.db"), PathBuf::from("journal.db"));
    }

    #[test]
    fn tilde_expands_under_home() {
        let path = expand_home("~/.tradebook/tradebook.db");
        assert!(path.ends_with(".tradebook/tradebook.db"));
        assert!(!path.to_string_lossy().starts_with('~'));
    }
}
