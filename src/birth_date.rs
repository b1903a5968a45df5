// 📅 Birth date - day/month/year as independent digit sources
//
// Numerology never needs a real calendar date: 2021-02-30 is accepted and
// its components are used as they are.

use crate::error::{NumerologyError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest year the four-digit date forms can carry.
pub const MAX_YEAR: u32 = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl BirthDate {
    /// Build from components. `year` must be 0..=9999, `month` 1..=12 and
    /// `day` 1..=31.
    pub fn new(year: u32, month: u32, day: u32) -> Result<Self> {
        let date = BirthDate { year, month, day };
        date.check_ranges(&date.to_string())?;
        Ok(date)
    }

    /// Parse the engine's input form `YYYY-MM-DD`.
    ///
    /// A trailing time part (`1990-01-15T00:00:00Z`) is ignored.
    pub fn parse_iso(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(NumerologyError::EmptyBirthDate);
        }

        let trimmed = input.trim();
        let date_part = trimmed.split(['T', ' ']).next().unwrap_or(trimmed);
        let parts: Vec<&str> = date_part.split('-').collect();
        if parts.len() != 3 || parts[0].len() != 4 {
            return Err(NumerologyError::invalid_date(input, "expected YYYY-MM-DD"));
        }

        let date = BirthDate {
            year: parse_component(input, parts[0], "year")?,
            month: parse_component(input, parts[1], "month")?,
            day: parse_component(input, parts[2], "day")?,
        };
        date.check_ranges(input)?;
        Ok(date)
    }

    /// Parse the CRM display form `DD/MM/YYYY`.
    pub fn parse_display(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(NumerologyError::EmptyBirthDate);
        }

        let trimmed = input.trim();
        let parts: Vec<&str> = trimmed.split('/').collect();
        if parts.len() != 3 || parts[2].len() != 4 {
            return Err(NumerologyError::invalid_date(input, "expected DD/MM/YYYY"));
        }

        let date = BirthDate {
            day: parse_component(input, parts[0], "day")?,
            month: parse_component(input, parts[1], "month")?,
            year: parse_component(input, parts[2], "year")?,
        };
        date.check_ranges(input)?;
        Ok(date)
    }

    /// Try `DD/MM/YYYY` when the input contains a slash, ISO otherwise.
    pub fn parse_any(input: &str) -> Result<Self> {
        if input.contains('/') {
            Self::parse_display(input)
        } else {
            Self::parse_iso(input)
        }
    }

    fn check_ranges(&self, input: &str) -> Result<()> {
        if self.year > MAX_YEAR {
            return Err(NumerologyError::invalid_date(
                input,
                format!("year {} out of range 0-{}", self.year, MAX_YEAR),
            ));
        }
        if !(1..=12).contains(&self.month) {
            return Err(NumerologyError::invalid_date(
                input,
                format!("month {} out of range 1-12", self.month),
            ));
        }
        if !(1..=31).contains(&self.day) {
            return Err(NumerologyError::invalid_date(
                input,
                format!("day {} out of range 1-31", self.day),
            ));
        }
        Ok(())
    }
}

fn parse_component(input: &str, raw: &str, what: &str) -> Result<u32> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(NumerologyError::invalid_date(
            input,
            format!("{} '{}' is not a number", what, raw),
        ));
    }
    raw.parse()
        .map_err(|_| NumerologyError::invalid_date(input, format!("{} '{}' is too large", what, raw)))
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        BirthDate {
            year: date.year().max(0) as u32,
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// ============================================================================
// TESTS
// ============================================================================
