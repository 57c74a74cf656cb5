//! CLI module graph and command dispatch.

pub mod calendar;
pub mod capital;
pub mod chart;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod entry;
pub mod format;
pub mod funds;
pub mod notes;
pub mod output;
pub mod paths;
pub mod periods;
pub mod prompt;
pub mod summary;
pub mod transfer;

use std::path::PathBuf;

use crate::application::Journal;
use crate::error::Result;
use crate::infrastructure::bootstrap::open_journal;
use crate::infrastructure::config::Config;

use command::{Commands, ConfigCommand};

/// Settings resolved from flags, environment and the config file.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    pub config_path: PathBuf,
    /// Journal database after `--db` and `TRADEBOOK_DATABASE` are applied.
    pub database: PathBuf,
}

impl Session {
    fn journal(&self) -> Result<Journal> {
        open_journal(&self.config, &self.database)
    }
}

/// Run one parsed command.
///
/// # Errors
/// Returns the first error raised by the command.
pub fn execute(command: Commands, session: &Session) -> Result<()> {
    match command {
        Commands::Add(args) => entry::execute_add(&mut session.journal()?, args),
        Commands::Edit(args) => entry::execute_edit(&mut session.journal()?, args),
        Commands::Delete(args) => entry::execute_delete(&mut session.journal()?, args),
        Commands::List(args) => entry::execute_list(&session.journal()?, &args),
        Commands::Summary => summary::execute_summary(&session.journal()?),
        Commands::Periods(args) => periods::execute(&session.journal()?, &args),
        Commands::Stats => summary::execute_stats(&session.journal()?),
        Commands::Funds(args) => funds::execute(&session.journal()?, &args),
        Commands::Notes(args) => notes::execute(&session.journal()?, &args),
        Commands::Calendar(args) => calendar::execute(&session.journal()?, &args),
        Commands::Chart(args) => chart::execute(&session.journal()?, &args),
        Commands::Capital(command) => capital::execute(&mut session.journal()?, command),
        Commands::Export(command) => transfer::execute_export(&session.journal()?, &command),
        Commands::Import(args) => transfer::execute_import(&mut session.journal()?, &args),
        Commands::Reset(args) => transfer::execute_reset(&mut session.journal()?, args),
        Commands::Config(ConfigCommand::Init(args)) => {
            config::execute_init(&session.config_path, args.force)
        }
        Commands::Config(ConfigCommand::Show) => {
            config::execute_show(&session.config, &session.config_path, &session.database)
        }
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(&session.config_path),
    }
}
