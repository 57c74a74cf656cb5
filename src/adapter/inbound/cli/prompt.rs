//! Confirmation prompts.
//!
//! Destructive commands ask before applying a change. `--yes` skips the
//! prompt; without it, JSON mode and non-interactive stdin refuse instead of
//! guessing.

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::error::{Error, Result};

/// Word the user has to type to confirm a reset.
pub const RESET_PHRASE: &str = "DELETE";

fn ensure_interactive(action: &str) -> Result<()> {
    require_terminal(
        action,
        !super::output::is_json() && std::io::stdin().is_terminal(),
    )
}

fn require_terminal(action: &str, interactive: bool) -> Result<()> {
    if interactive {
        Ok(())
    } else {
        Err(Error::ConfirmationRequired(action.to_string()))
    }
}

/// Ask a yes/no question, defaulting to no.
///
/// # Errors
/// Fails when confirmation is impossible (JSON mode, no terminal) or the
/// prompt itself fails.
pub fn confirm(question: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    ensure_interactive(question)?;
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(question)
        .default(false)
        .interact()?)
}

/// Require the user to type [`RESET_PHRASE`].
///
/// # Errors
/// Same as [`confirm`].
pub fn confirm_phrase(question: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    ensure_interactive(question)?;
    let typed: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{question} Type {RESET_PHRASE} to confirm"))
        .allow_empty(true)
        .interact_text()?;
    Ok(typed.trim() == RESET_PHRASE)
}
