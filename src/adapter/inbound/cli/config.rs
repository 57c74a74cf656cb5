//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::format::money;
use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::Config;

/// Default config template with documentation.
pub const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    if output::is_json() {
        output::json_output(json!({
            "command": "config.init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note("2. Run: tradebook config validate");
    output::note("3. Run: tradebook add --capital <amount>");
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(config: &Config, path: &Path, database: &Path) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "exists": path.exists(),
            "database": database.display().to_string(),
            "config": config,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("File", path.display());
    if !path.exists() {
        output::note("(file not found, using defaults)");
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Storage");
    output::field("Database", database.display());

    output::section("Journal");
    output::field(
        "Initial capital",
        money(config.journal.default_initial_capital),
    );
    Ok(())
}

/// Execute `config validate`.
///
/// Loading already validated the file; this reports the outcome.
pub fn execute_validate(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ConfigError::ReadFile(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} does not exist", path.display()),
        ))
        .into());
    }
    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
        }));
        return Ok(());
    }
    output::section("Config Validation");
    output::field("Path", path.display());
    output::success("Config file is valid");
    output::hint("run `tradebook config show` to see the effective settings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn template_parses_to_the_defaults() {
        let parsed: Config = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        execute_init(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);

        assert!(execute_init(&path, false).is_err());
        assert!(execute_init(&path, true).is_ok());
    }

    #[test]
    fn validate_requires_an_existing_file() {
        let dir = TempDir::new().unwrap();
        assert!(execute_validate(&dir.path().join("missing.toml")).is_err());
    }
}
