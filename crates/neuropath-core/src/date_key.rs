//! Canonical `YYYY-MM-DD` day keys.
//!
//! A [`DateKey`] is the only join key between the completion log and the
//! score log: entries for the same day are related purely by string
//! equality of their keys.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::ValidationError;

const FORMAT: &str = "%Y-%m-%d";

/// Zero-padded `YYYY-MM-DD` string for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Format a calendar date. Same day, same key.
    pub fn format(date: NaiveDate) -> Self {
        Self(date.format(FORMAT).to_string())
    }

    /// Key for the clock's current local day.
    pub fn today(clock: &impl Clock) -> Self {
        Self::format(clock.today())
    }

    /// Parse user input. The result is re-formatted, so `2024-6-1` becomes
    /// `2024-06-01`. Only four-digit years (0000 to 9999) are accepted.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(input.trim(), FORMAT)
            .ok()
            .filter(|date| (0..=9999).contains(&date.year()))
            .map(Self::format)
            .ok_or_else(|| ValidationError::InvalidDate {
                input: input.to_string(),
            })
    }

    /// Calendar date this key names, if it is a well-formed key.
    ///
    /// Keys read back from storage are not re-validated, so this can fail
    /// for hand-edited data.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, FORMAT).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DateKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::format(date)
    }
}

impl AsRef<str> for DateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
