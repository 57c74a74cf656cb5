//! Command-line interface definitions.
//!
//! Defines the CLI structure for the tradebook application using `clap`.
//! Subcommands record and edit daily entries, render the derived views and
//! move the journal in and out of files.

use chrono::{NaiveDate, Weekday};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::application::funds::FundsView;
use crate::application::notes::Outcome;
use crate::domain::Period;

/// Trading-capital journal: daily closing capital, cash flows and P/L rollups
#[derive(Parser, Debug)]
#[command(name = "tradebook")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file [default: ~/.tradebook/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the journal database (overrides config and TRADEBOOK_DATABASE)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the tradebook CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record the closing capital of a trading day
    Add(AddArgs),

    /// Edit an existing entry
    Edit(EditArgs),

    /// Delete an entry
    Delete(DeleteArgs),

    /// List calculated days, newest first
    List(ListArgs),

    /// Show the dashboard for the latest recorded day
    Summary,

    /// Show weekly, monthly, quarterly or yearly summaries
    Periods(PeriodsArgs),

    /// Show journal-wide statistics
    Stats,

    /// Show deposits and withdrawals
    Funds(FundsArgs),

    /// Browse the notes journal
    Notes(NotesArgs),

    /// Show a month as a calendar
    Calendar(CalendarArgs),

    /// Chart capital and daily P/L in the terminal
    Chart(ChartArgs),

    /// Manage the capital baseline and month start overrides
    #[command(subcommand)]
    Capital(CapitalCommand),

    /// Export the journal
    #[command(subcommand)]
    Export(ExportCommand),

    /// Replace the journal with a backup file
    Import(ImportArgs),

    /// Delete every entry and restore default settings
    Reset(ConfirmArg),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Shared `--yes` flag for commands that ask before changing data.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct ConfirmArg {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for `add`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Trading day (YYYY-MM-DD) [default: today]
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Account balance at the close of the day
    #[arg(long)]
    pub capital: Decimal,

    /// Cash deposited during the day
    #[arg(long, default_value = "0")]
    pub deposit: Decimal,

    /// Cash withdrawn during the day
    #[arg(long, default_value = "0")]
    pub withdrawal: Decimal,

    /// Number of trades executed
    #[arg(long, default_value = "0")]
    pub trades: u32,

    /// Free-form notes for the day
    #[arg(long, default_value = "")]
    pub notes: String,

    #[command(flatten)]
    pub confirm: ConfirmArg,
}

/// Arguments for `edit`. Omitted fields keep their current value.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Entry id (see `tradebook list`)
    pub id: String,

    /// Move the entry to another day
    #[arg(long)]
    pub date: Option<NaiveDate>,

    #[arg(long)]
    pub capital: Option<Decimal>,

    #[arg(long)]
    pub deposit: Option<Decimal>,

    #[arg(long)]
    pub withdrawal: Option<Decimal>,

    #[arg(long)]
    pub trades: Option<u32>,

    #[arg(long)]
    pub notes: Option<String>,

    #[command(flatten)]
    pub confirm: ConfirmArg,
}

/// Arguments for `delete`.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Entry id (see `tradebook list`)
    pub id: String,

    #[command(flatten)]
    pub confirm: ConfirmArg,
}

/// Arguments for `list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show at most this many days
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Summary granularity accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PeriodArg {
    Week,
    Month,
    Quarter,
    Year,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Week => Period::Week,
            PeriodArg::Month => Period::Month,
            PeriodArg::Quarter => Period::Quarter,
            PeriodArg::Year => Period::Year,
        }
    }
}

/// Arguments for `periods`.
#[derive(Args, Debug)]
pub struct PeriodsArgs {
    /// Granularity of the summaries
    #[arg(value_enum, default_value = "month")]
    pub period: PeriodArg,

    /// Show at most this many periods
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Cash-flow granularity accepted on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FundsViewArg {
    #[default]
    Global,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl From<FundsViewArg> for FundsView {
    fn from(arg: FundsViewArg) -> Self {
        match arg {
            FundsViewArg::Global => FundsView::Global,
            FundsViewArg::Daily => FundsView::Daily,
            FundsViewArg::Weekly => FundsView::Period(Period::Week),
            FundsViewArg::Monthly => FundsView::Period(Period::Month),
            FundsViewArg::Quarterly => FundsView::Period(Period::Quarter),
            FundsViewArg::Yearly => FundsView::Period(Period::Year),
        }
    }
}

/// Arguments for `funds`.
#[derive(Args, Debug)]
pub struct FundsArgs {
    /// Granularity of the report
    #[arg(long, value_enum, default_value = "global")]
    pub view: FundsViewArg,
}

/// Outcome filter accepted on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutcomeArg {
    #[default]
    All,
    Winners,
    Losers,
}

impl From<OutcomeArg> for Outcome {
    fn from(arg: OutcomeArg) -> Self {
        match arg {
            OutcomeArg::All => Outcome::All,
            OutcomeArg::Winners => Outcome::Winners,
            OutcomeArg::Losers => Outcome::Losers,
        }
    }
}

/// Arguments for `notes`.
#[derive(Args, Debug)]
pub struct NotesArgs {
    /// Case-insensitive text to look for in notes and dates
    #[arg(short, long)]
    pub search: Option<String>,

    /// Keep winning or losing days only
    #[arg(long, value_enum, default_value = "all")]
    pub outcome: OutcomeArg,

    /// Keep one weekday only (mon, tue, ...)
    #[arg(long)]
    pub weekday: Option<Weekday>,

    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// List the oldest day first
    #[arg(long)]
    pub oldest_first: bool,

    /// Write the selection as a text report instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `calendar`.
#[derive(Args, Debug)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM) [default: month of the latest entry]
    #[arg(long)]
    pub month: Option<String>,
}

/// Arguments for `chart`.
#[derive(Args, Debug)]
pub struct ChartArgs {
    /// Chart this many of the latest days
    #[arg(short = 'n', long, default_value_t = 30)]
    pub limit: usize,
}

/// Subcommands for `tradebook capital`.
#[derive(Subcommand, Debug)]
pub enum CapitalCommand {
    /// Show the baseline and month start overrides
    Show,
    /// Set the capital held before the first entry
    Set {
        /// New baseline capital
        amount: Decimal,
    },
    /// Pin the start capital of a month
    Month {
        /// Month (YYYY-MM)
        month: String,
        /// Start capital for the month
        amount: Decimal,
    },
    /// Remove a month start override
    ClearMonth {
        /// Month (YYYY-MM)
        month: String,
    },
}

/// Subcommands for `tradebook export`.
#[derive(Subcommand, Debug)]
pub enum ExportCommand {
    /// Calculated days as a spreadsheet
    Csv(OutputArg),
    /// Entries and settings as a JSON backup
    Backup(OutputArg),
}

/// Shared output destination.
#[derive(Args, Debug)]
pub struct OutputArg {
    /// Output file path (writes to stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `import`.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Backup file produced by `tradebook export backup`
    pub file: PathBuf,

    #[command(flatten)]
    pub confirm: ConfirmArg,
}

/// Subcommands for `tradebook config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied
    Show,
    /// Validate the configuration file
    Validate,
}

/// Arguments for `config init`.
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite the file if it already exists
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tradebook").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn color_choice_defaults_to_auto() {
        let cli = parse(&["stats"]);
        assert!(matches!(cli.color, ColorChoice::Auto));
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = parse(&["list", "--json", "-vv", "--db", "/tmp/j.db", "--color", "never"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/j.db")));
        assert!(matches!(cli.color, ColorChoice::Never));
    }

    #[test]
    fn add_parses_amounts_and_date() {
        let cli = parse(&[
            "add",
            "--date",
            "2024-01-02",
            "--capital",
            "1100.50",
            "--deposit",
            "200",
            "--trades",
            "3",
            "--notes",
            "gap fill",
            "--yes",
        ]);
        let Commands::Add(args) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(args.capital, dec!(1100.50));
        assert_eq!(args.deposit, dec!(200));
        assert_eq!(args.withdrawal, Decimal::ZERO);
        assert_eq!(args.trades, 3);
        assert_eq!(args.notes, "gap fill");
        assert!(args.confirm.yes);
    }

    #[test]
    fn add_requires_capital() {
        assert!(Cli::try_parse_from(["tradebook", "add", "--date", "2024-01-02"]).is_err());
    }

    #[test]
    fn add_rejects_bad_dates() {
        assert!(Cli::try_parse_from(["tradebook", "add", "--date", "02/01/2024", "--capital", "1"])
            .is_err());
    }

    #[test]
    fn edit_keeps_unspecified_fields_empty() {
        let cli = parse(&["edit", "abc", "--notes", "revised"]);
        let Commands::Edit(args) = cli.command else {
            panic!("expected edit");
        };
        assert_eq!(args.id, "abc");
        assert_eq!(args.notes.as_deref(), Some("revised"));
        assert!(args.capital.is_none());
        assert!(args.date.is_none());
    }

    #[test]
    fn chart_defaults_to_thirty_days() {
        let Commands::Chart(args) = parse(&["chart"]).command else {
            panic!("expected chart");
        };
        assert_eq!(args.limit, 30);

        let Commands::Chart(args) = parse(&["chart", "-n", "5"]).command else {
            panic!("expected chart");
        };
        assert_eq!(args.limit, 5);
    }

    #[test]
    fn periods_default_to_month() {
        let Commands::Periods(args) = parse(&["periods"]).command else {
            panic!("expected periods");
        };
        assert_eq!(Period::from(args.period), Period::Month);

        let Commands::Periods(args) = parse(&["periods", "quarter", "-n", "4"]).command else {
            panic!("expected periods");
        };
        assert_eq!(Period::from(args.period), Period::Quarter);
        assert_eq!(args.limit, Some(4));
    }

    #[test]
    fn funds_views_map_to_granularities() {
        let Commands::Funds(args) = parse(&["funds", "--view", "weekly"]).command else {
            panic!("expected funds");
        };
        assert_eq!(FundsView::from(args.view), FundsView::Period(Period::Week));
        assert_eq!(FundsView::from(FundsViewArg::default()), FundsView::Global);
    }

    #[test]
    fn notes_filters_parse() {
        let Commands::Notes(args) = parse(&[
            "notes",
            "--search",
            "fomc",
            "--outcome",
            "losers",
            "--weekday",
            "fri",
            "--from",
            "2024-01-01",
            "--oldest-first",
        ])
        .command
        else {
            panic!("expected notes");
        };
        assert_eq!(args.search.as_deref(), Some("fomc"));
        assert_eq!(Outcome::from(args.outcome), Outcome::Losers);
        assert_eq!(args.weekday, Some(Weekday::Fri));
        assert_eq!(args.from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert!(args.oldest_first);
    }

    #[test]
    fn capital_subcommands_parse() {
        let Commands::Capital(CapitalCommand::Month { month, amount }) =
            parse(&["capital", "month", "2024-02", "1500"]).command
        else {
            panic!("expected capital month");
        };
        assert_eq!(month, "2024-02");
        assert_eq!(amount, dec!(1500));

        assert!(matches!(
            parse(&["capital", "clear-month", "2024-02"]).command,
            Commands::Capital(CapitalCommand::ClearMonth { .. })
        ));
    }

    #[test]
    fn export_and_config_subcommands_parse() {
        assert!(matches!(
            parse(&["export", "csv", "-o", "out.csv"]).command,
            Commands::Export(ExportCommand::Csv(OutputArg { output: Some(_) }))
        ));
        assert!(matches!(
            parse(&["config", "init", "--force"]).command,
            Commands::Config(ConfigCommand::Init(ConfigInitArgs { force: true }))
        ));
        assert!(matches!(
            parse(&["reset", "--yes"]).command,
            Commands::Reset(ConfirmArg { yes: true })
        ));
    }
}
