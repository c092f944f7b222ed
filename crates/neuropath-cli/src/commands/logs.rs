//! Logs & progress commands. Reads may target any day.

use chrono::NaiveDate;
use clap::Subcommand;
use neuropath_core::{DateKey, ProgressReport, MAX_HISTORY_DAYS};

use crate::context::AppContext;

#[derive(Subcommand)]
pub enum LogsAction {
    /// Show exercise completion and high score for one day
    Show {
        /// Day to show (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = super::parse_date)]
        date: Option<NaiveDate>,
    },
    /// Show recent days, newest first
    History {
        /// Number of days ending today (default from config history.days)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_HISTORY_DAYS)))]
        days: Option<u32>,
        /// Start of an explicit range (YYYY-MM-DD)
        #[arg(long, value_parser = super::parse_date, requires = "to")]
        from: Option<NaiveDate>,
        /// End of an explicit range (YYYY-MM-DD)
        #[arg(long, value_parser = super::parse_date, requires = "from")]
        to: Option<NaiveDate>,
    },
}

pub fn run(action: LogsAction, ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let report = ProgressReport::new(&ctx.store);

    match action {
        LogsAction::Show { date } => {
            let date = DateKey::format(date.unwrap_or_else(|| ctx.today()));
            let summary = report.day(&date);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        LogsAction::History { days, from, to } => {
            let summaries = match (from, to) {
                (Some(from), Some(to)) => report.history(from, to)?,
                _ => report.recent(ctx.today(), days.unwrap_or(ctx.config.history.days))?,
            };
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
    }
    Ok(())
}
