//! Handlers for `export`, `import` and `reset`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::command::{ConfirmArg, ExportCommand, ImportArgs};
use crate::adapter::inbound::cli::{output, prompt};
use crate::adapter::outbound::export::{parse_backup, to_backup_json, write_days};
use crate::application::Journal;
use crate::error::Result;

fn destination(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}

fn written(kind: &str, path: Option<&Path>, count: usize) {
    let Some(path) = path else {
        return;
    };
    if output::is_json() {
        output::json_output(json!({
            "command": format!("export.{kind}"),
            "path": path.display().to_string(),
            "entries": count,
        }));
    } else {
        output::success(&format!("Exported {count} entries to {}", path.display()));
    }
}

/// Execute an `export` subcommand.
///
/// Without `--output` the document itself goes to stdout.
pub fn execute_export(journal: &Journal, command: &ExportCommand) -> Result<()> {
    match command {
        ExportCommand::Csv(args) => {
            let path = args.output.as_deref();
            let snapshot = journal.snapshot();
            write_days(destination(path)?, &snapshot.days)?;
            written("csv", path, snapshot.days.len());
        }
        ExportCommand::Backup(args) => {
            let path = args.output.as_deref();
            let document = to_backup_json(journal.entries(), journal.config())?;
            let mut out = destination(path)?;
            writeln!(out, "{document}")?;
            out.flush()?;
            written("backup", path, journal.entries().len());
        }
    }
    Ok(())
}

/// Execute `import`.
pub fn execute_import(journal: &mut Journal, args: &ImportArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.file)?;
    let backup = parse_backup(&text)?;

    if !output::is_json() {
        output::section("Backup");
        output::field("File", args.file.display());
        if let Some(timestamp) = &backup.timestamp {
            output::field("Created", timestamp);
        }
        output::field("Entries", backup.entries.len());
        if let Some((first, last)) = backup.date_span() {
            output::field("Dates", format!("{first} to {last}"));
        }
        if backup.config.is_none() {
            output::note("No capital settings in the file; current settings are kept.");
        }
        output::warning("Importing replaces every entry in the journal.");
    }

    if !prompt::confirm("Replace the journal with this backup?", args.confirm.yes)? {
        if output::is_json() {
            output::json_output(json!({ "command": "import", "outcome": "cancelled" }));
        } else {
            output::note("Nothing changed.");
        }
        return Ok(());
    }

    let config = backup.config.unwrap_or_else(|| journal.config().clone());
    let summary = journal.import(backup.entries, config);

    if output::is_json() {
        output::json_output(json!({
            "command": "import",
            "outcome": "imported",
            "imported": summary.imported,
            "dropped": summary.dropped,
            "assignedIds": summary.assigned_ids,
        }));
        return Ok(());
    }
    output::success(&format!("Imported {} entries", summary.imported));
    if summary.dropped > 0 {
        output::warning(&format!(
            "Skipped {} records without a valid date or final capital",
            summary.dropped
        ));
    }
    Ok(())
}

/// Execute `reset`.
pub fn execute_reset(journal: &mut Journal, args: ConfirmArg) -> Result<()> {
    if !output::is_json() {
        output::warning(&format!(
            "This deletes all {} entries and restores default settings.",
            journal.entries().len()
        ));
    }
    if !prompt::confirm_phrase("Reset the journal?", args.yes)? {
        if output::is_json() {
            output::json_output(json!({ "command": "reset", "outcome": "cancelled" }));
        } else {
            output::note("Nothing changed.");
        }
        return Ok(());
    }

    journal.reset();
    if output::is_json() {
        output::json_output(json!({ "command": "reset", "outcome": "reset" }));
    } else {
        output::success("Journal reset");
    }
    Ok(())
}
