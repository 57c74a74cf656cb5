use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use tradebook::adapter::inbound::cli::command::{Cli, ColorChoice, Commands, ConfigCommand};
use tradebook::adapter::inbound::cli::output::{self, OutputConfig};
use tradebook::adapter::inbound::cli::{config, diagnostic, execute, paths, Session};
use tradebook::error::{ConfigError, Error};
use tradebook::infrastructure::config::Config;

fn use_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    }
}

fn report(err: &Error) -> ExitCode {
    output::error(&err.to_string());
    ExitCode::FAILURE
}

/// Print a config failure, with the file excerpt when the TOML is malformed.
fn report_config(err: &Error, path: &Path) -> ExitCode {
    if let Error::Config(ConfigError::Parse(parse)) = err {
        if !output::is_json() {
            if let Ok(src) = std::fs::read_to_string(path) {
                let diagnostic = diagnostic::ConfigError::from_toml(path, &src, parse);
                eprintln!("{:?}", miette::Report::new(diagnostic));
                return ExitCode::FAILURE;
            }
        }
    }
    report(err)
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    output::configure(OutputConfig::new(
        cli.json,
        cli.quiet,
        cli.verbose,
        use_color(cli.color),
    ));

    let config_path = cli.config.clone().unwrap_or_else(paths::default_config);

    // A broken file must not stop `config init --force` from replacing it.
    if let Commands::Config(ConfigCommand::Init(args)) = &cli.command {
        return match config::execute_init(&config_path, args.force) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => report(&e),
        };
    }

    let loaded = if cli.config.is_some() {
        Config::load(&config_path)
    } else {
        Config::load_or_default(&config_path)
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => return report_config(&e, &config_path),
    };
    config.init_logging(cli.verbose);

    let database = cli
        .db
        .clone()
        .unwrap_or_else(|| config.storage.database_path());
    debug!(config = %config_path.display(), database = %database.display(), "Settings resolved");

    let session = Session {
        config,
        config_path,
        database,
    };
    match execute(cli.command, &session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}
