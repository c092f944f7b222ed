pub mod config;
pub mod exercise;
pub mod game;
pub mod info;
pub mod logs;

use chrono::NaiveDate;
use neuropath_core::DateKey;

/// clap value parser for `YYYY-MM-DD` arguments.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    DateKey::parse(s)
        .ok()
        .and_then(|key| key.date())
        .ok_or_else(|| format!("invalid date '{s}': expected YYYY-MM-DD"))
}
