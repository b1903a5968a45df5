// Thần Số Học - Numerology Library
// Pure computation used by the CRM customer panel, the CLI, and tests

pub mod alphabet;       // Letter values A..Z → 1..9
pub mod normalize;      // Vietnamese diacritics → plain upper-case Latin
pub mod reduce;         // Digit-sum reduction + master numbers
pub mod birth_date;     // YYYY-MM-DD / DD/MM/YYYY components
pub mod calculations;   // One function per report field
pub mod report;         // Flat report + labeled detail records
pub mod engine;         // calculate_numerology_data + EngineConfig
pub mod batch;          // CSV of customers → JSON Lines
pub mod error;

// Re-export commonly used types
pub use alphabet::{letter_value, is_vowel, VOWELS};
pub use normalize::normalize;
pub use reduce::{abs_diff, reduce, reduce_default, ReduceMode, MASTER_NUMBERS};
pub use birth_date::BirthDate;
pub use report::{
    FieldValue, NumerologyReport, ReportEntry, ReportField, ReportOutcome, FAILURE_MESSAGE,
};
pub use engine::{calculate_numerology_data, EngineConfig, NumerologyEngine};
pub use batch::{BatchRecord, BatchSummary, CustomerRecord};
pub use error::NumerologyError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
