use std::fmt::Write;

use anyhow::{bail, Context, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, Utc};

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Default, Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parses a date the way a date input submits it. An empty value means the
/// date is not specified.
pub fn parse_date_input(input: &str) -> Result<Option<NaiveDate>> {
    let input = input.trim();

    if input.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(input, DATE_INPUT_FORMAT)
        .map(Some)
        .context(format!("Error on parsing a date from {}", input))
}

/// Accepts only patterns a calendar date can be formatted with. Time and
/// offset specifiers parse fine but fail on a `NaiveDate`.
pub fn validate_date_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        bail!("invalid date format: {}", format);
    }

    let sample = NaiveDate::from_ymd_opt(2024, 1, 5).context("invalid sample date")?;
    let mut formatted = String::new();
    if write!(formatted, "{}", sample.format(format)).is_err() {
        bail!("date format {} needs more than a calendar date", format);
    }

    Ok(())
}

pub fn format_date(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}
