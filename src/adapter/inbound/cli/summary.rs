//! Handlers for `summary` and `stats`.

use serde_json::json;

use crate::adapter::inbound::cli::format::{money, percent, pl, pl_money};
use crate::adapter::inbound::cli::output;
use crate::application::{Journal, Snapshot};
use crate::domain::{GlobalStats, WinLossAverages};
use crate::error::Result;

/// Execute `summary`.
pub fn execute_summary(journal: &Journal) -> Result<()> {
    let snapshot = journal.snapshot();
    let dashboard = snapshot.dashboard();

    if output::is_json() {
        output::json_output(json!({
            "command": "summary",
            "dashboard": dashboard,
            "config": journal.config(),
            "entries": journal.entries().len(),
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    let Some(dashboard) = dashboard else {
        output::section("Summary");
        output::field("Baseline", money(journal.config().total_initial_capital));
        output::note("No entries yet.");
        output::hint("record a day with `tradebook add --capital <amount>`");
        return Ok(());
    };

    output::section(&format!("Summary for {}", dashboard.date.format("%Y-%m-%d")));
    output::field("Capital", output::highlight(money(dashboard.current_capital)));
    output::field(
        "Day",
        pl(dashboard.daily_pl_dollar, dashboard.daily_pl_percent),
    );
    if let Some(week) = &dashboard.week {
        output::field("Week", pl(week.pl_dollar, week.pl_percent));
        output::field("", output::muted(&week.label));
    }
    output::field(
        "Month",
        pl(dashboard.month_pl_dollar, dashboard.month_pl_percent),
    );
    output::field(
        "",
        output::muted(format!(
            "{} started at {}",
            dashboard.month_id,
            money(dashboard.month_start_capital)
        )),
    );
    output::field(
        "Total",
        pl(dashboard.total_pl_dollar, dashboard.total_pl_percent),
    );

    output::section("Capital");
    let config = journal.config();
    output::field("Baseline", money(config.total_initial_capital));
    output::field("Net invested", money(dashboard.net_invested));
    output::field("Deposits", money(snapshot.stats.total_deposits));
    output::field("Withdrawals", money(snapshot.stats.total_withdrawals));
    output::field("Recorded days", snapshot.days.len());
    Ok(())
}

fn print_averages(title: &str, averages: &WinLossAverages) {
    output::section(title);
    output::field(
        "Average win",
        format!(
            "{} ({})",
            pl_money(averages.avg_win_dollar),
            percent(averages.avg_win_percent)
        ),
    );
    output::field(
        "Average loss",
        format!(
            "{} ({})",
            pl_money(averages.avg_loss_dollar),
            percent(averages.avg_loss_percent)
        ),
    );
}

fn print_stats(stats: &GlobalStats) {
    output::section("Performance");
    output::field("Capital", output::highlight(money(stats.current_capital)));
    output::field("Net invested", money(stats.total_initial_capital));
    output::field("Total P/L", pl(stats.total_pl_dollar, stats.total_pl_percent));
    output::field(
        "Expectancy",
        pl(stats.avg_general_dollar, stats.avg_general_percent),
    );

    output::section("Cash flow");
    output::field("Deposits", money(stats.total_deposits));
    output::field("Withdrawals", money(stats.total_withdrawals));
    output::field("Net", pl_money(stats.net_cash_flow));

    output::section("Track record");
    if let Some(start) = stats.start_date {
        output::field("Since", start.format("%Y-%m-%d"));
    }
    output::field(
        "Duration",
        format!(
            "{:.1} weeks, {:.1} months, {:.2} years",
            stats.duration_weeks, stats.duration_months, stats.duration_years
        ),
    );
    output::field(
        "Days",
        format!(
            "{} won, {} lost ({} win rate)",
            stats.winning_days,
            stats.losing_days,
            percent(stats.win_rate)
        ),
    );
    output::field(
        "Streaks",
        format!(
            "{} wins, {} losses",
            stats.max_consecutive_wins, stats.max_consecutive_losses
        ),
    );
    output::field(
        "Best day",
        pl(stats.max_win_daily_dollar, stats.max_win_daily_percent),
    );
    output::field(
        "Worst day",
        pl(stats.max_loss_daily_dollar, stats.max_loss_daily_percent),
    );

    output::section("Activity");
    output::field("Trades", stats.total_trades);
    output::field(
        "Per day",
        format!(
            "{:.2} (max {})",
            stats.avg_trades_per_day.round_dp(2),
            stats.max_trades_per_day
        ),
    );
    output::field("Per week", format!("{:.2}", stats.avg_trades_per_week.round_dp(2)));
    output::field("Per month", format!("{:.2}", stats.avg_trades_per_month.round_dp(2)));

    print_averages("Daily", &stats.daily);
    print_averages("Weekly", &stats.weekly);
    print_averages("Monthly", &stats.monthly);
}

/// Execute `stats`.
pub fn execute_stats(journal: &Journal) -> Result<()> {
    let Snapshot { stats, days, .. } = journal.snapshot();

    if output::is_json() {
        output::json_output(json!({
            "command": "stats",
            "stats": stats,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }
    if days.is_empty() {
        output::section("Statistics");
        output::note("No entries yet.");
        return Ok(());
    }

    print_stats(&stats);
    Ok(())
}
