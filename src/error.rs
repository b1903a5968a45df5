// ⚠️ Error types for the numerology engine

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the strict engine API.
///
/// `calculate_numerology_data` never surfaces these: it folds them into a
/// `ReportOutcome` instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumerologyError {
    /// Full name was empty.
    #[error("full name is empty")]
    EmptyName,

    /// Birth date was empty.
    #[error("birth date is empty")]
    EmptyBirthDate,

    /// Birth date could not be split into day/month/year.
    #[error("invalid birth date '{input}': {reason}")]
    InvalidBirthDate { input: String, reason: String },

    /// Engine configuration could not be loaded.
    #[error("invalid engine config {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl NumerologyError {
    pub(crate) fn invalid_date(input: &str, reason: impl Into<String>) -> Self {
        NumerologyError::InvalidBirthDate {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Empty input is the documented degenerate case, not a failure.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, NumerologyError::EmptyName | NumerologyError::EmptyBirthDate)
    }
}

pub type Result<T> = std::result::Result<T, NumerologyError>;
