// ⚙️ Numerology Engine - name + birth date → NumerologyReport
//
// Two entry points:
// - NumerologyEngine::calculate → Result<NumerologyReport, NumerologyError>
// - calculate_numerology_data   → ReportOutcome (never fails: {} / report / {error})

use crate::birth_date::BirthDate;
use crate::calculations as calc;
use crate::error::{NumerologyError, Result};
use crate::normalize::normalize;
use crate::report::{FieldValue, NumerologyReport, ReportEntry, ReportField, ReportOutcome};
use chrono::{Datelike, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

// ============================================================================
// CONFIGURATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// "Today" for personal year/month cycles. None = local clock.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,

    /// Emit the `_detailed` array alongside the flat fields.
    #[serde(default = "default_true")]
    pub include_detailed: bool,
}

fn default_true() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            reference_date: None,
            include_detailed: true,
        }
    }
}

impl EngineConfig {
    /// Load from a JSON file, e.g. `{ "reference_date": "2026-01-01" }`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| NumerologyError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| NumerologyError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Builder: pin the reference date
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// Stateless calculator; the config only decides "today" and output shape.
#[derive(Debug, Clone, Default)]
pub struct NumerologyEngine {
    config: EngineConfig,
}

impl NumerologyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        NumerologyEngine { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn today(&self) -> NaiveDate {
        self.config
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Compute a full report from a raw name and an ISO birth date.
    pub fn calculate(&self, full_name: &str, birth_date: &str) -> Result<NumerologyReport> {
        if full_name.is_empty() {
            return Err(NumerologyError::EmptyName);
        }
        if birth_date.is_empty() {
            return Err(NumerologyError::EmptyBirthDate);
        }

        let date = BirthDate::parse_iso(birth_date)?;
        Ok(self.calculate_for(full_name, &date))
    }

    /// Compute a report for an already parsed birth date.
    pub fn calculate_for(&self, full_name: &str, date: &BirthDate) -> NumerologyReport {
        let name = normalize(full_name);
        let today = self.today();
        let current_year = today.year().max(0) as u32;
        let current_month = today.month();

        let walks_of_life = calc::walks_of_life(date);
        let mission = calc::mission(&name);
        let soul = calc::soul(&name);
        let personality = calc::personality(&name);
        let missing = calc::missing_numbers(&name);
        let months = calc::month_individuals(date, current_year, current_month);

        let values: [(ReportField, FieldValue); 22] = [
            (ReportField::WalksOfLife, walks_of_life.into()),
            (ReportField::Mission, mission.into()),
            (ReportField::Soul, soul.into()),
            (ReportField::Connect, calc::connect(walks_of_life, mission).into()),
            (ReportField::Personality, personality.into()),
            (ReportField::Passion, calc::passion(&name).into()),
            (ReportField::Mature, calc::mature(walks_of_life, mission).into()),
            (ReportField::Balance, calc::balance(&name).into()),
            (ReportField::SubconsciousPower, calc::subconscious_power(&missing).into()),
            (ReportField::MissingNumbers, calc::format_missing(&missing).into()),
            (ReportField::RationalThinking, calc::rational_thinking(&name, date.day).into()),
            (ReportField::Way, calc::format_spaced(&calc::ways(date)).into()),
            (ReportField::Challenges, calc::format_spaced(&calc::challenges(date)).into()),
            (ReportField::DateOfBirth, calc::date_of_birth(date.day).into()),
            (ReportField::YearIndividual, calc::year_individual(date, current_year, 0).into()),
            (ReportField::YearIndividual1, calc::year_individual(date, current_year, 1).into()),
            (ReportField::YearIndividual2, calc::year_individual(date, current_year, 2).into()),
            (ReportField::MonthIndividual, months[0].into()),
            (ReportField::MonthIndividual1, months[1].into()),
            (ReportField::MonthIndividual2, months[2].into()),
            (ReportField::MonthIndividual3, months[3].into()),
            (ReportField::LinkPersonalityAndSoul, calc::link_personality_and_soul(personality, soul).into()),
        ];

        let entries: Vec<ReportEntry> = values
            .into_iter()
            .map(|(field, value)| ReportEntry { field, value })
            .collect();

        debug!(
            birth_date = %date,
            walks_of_life,
            mission,
            reference = %today,
            "numerology report computed"
        );

        NumerologyReport::new(entries, Utc::now()).with_detailed(self.config.include_detailed)
    }

    /// Never-failing wrapper: `{}` on empty input, `{error}` on any failure.
    pub fn calculate_outcome(&self, full_name: &str, birth_date: &str) -> ReportOutcome {
        match self.calculate(full_name, birth_date) {
            Ok(report) => ReportOutcome::Report(report),
            Err(e) if e.is_empty_input() => ReportOutcome::Empty,
            Err(e) => {
                warn!(error = %e, "numerology calculation failed");
                ReportOutcome::Failed
            }
        }
    }
}

/// Compute the numerology report for a customer with the default engine.
///
/// `birth_date` is ISO `YYYY-MM-DD`; convert `DD/MM/YYYY` first (see
/// `BirthDate::parse_display`).
pub fn calculate_numerology_data(full_name: &str, birth_date: &str) -> ReportOutcome {
    NumerologyEngine::new().calculate_outcome(full_name, birth_date)
}

// ============================================================================
// TESTS
// ============================================================================
