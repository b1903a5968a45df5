// 📋 Numerology report - flat key/value output + labeled detail records
//
// JSON shape:
//   { "walksOfLife": 8, ..., "way": " 7 9 7 11",
//     "_detailed": [ { "key": "walksOfLife", "label": "Đường đời", "value": 8 }, ... ],
//     "_calculated_at": "2026-10-16T08:00:00Z" }

use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::fmt;

/// Message returned in place of a report when computation fails.
pub const FAILURE_MESSAGE: &str = "Failed to calculate numerology data";

// ============================================================================
// REPORT FIELDS
// ============================================================================

/// Every field present in a report, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportField {
    WalksOfLife,
    Mission,
    Soul,
    Connect,
    Personality,
    Passion,
    Mature,
    Balance,
    SubconsciousPower,
    MissingNumbers,
    RationalThinking,
    Way,
    Challenges,
    DateOfBirth,
    YearIndividual,
    YearIndividual1,
    YearIndividual2,
    MonthIndividual,
    MonthIndividual1,
    MonthIndividual2,
    MonthIndividual3,
    LinkPersonalityAndSoul,
}

impl ReportField {
    pub const ALL: [ReportField; 22] = [
        ReportField::WalksOfLife,
        ReportField::Mission,
        ReportField::Soul,
        ReportField::Connect,
        ReportField::Personality,
        ReportField::Passion,
        ReportField::Mature,
        ReportField::Balance,
        ReportField::SubconsciousPower,
        ReportField::MissingNumbers,
        ReportField::RationalThinking,
        ReportField::Way,
        ReportField::Challenges,
        ReportField::DateOfBirth,
        ReportField::YearIndividual,
        ReportField::YearIndividual1,
        ReportField::YearIndividual2,
        ReportField::MonthIndividual,
        ReportField::MonthIndividual1,
        ReportField::MonthIndividual2,
        ReportField::MonthIndividual3,
        ReportField::LinkPersonalityAndSoul,
    ];

    /// Canonical English key used in the flat report.
    pub fn key(&self) -> &'static str {
        match self {
            ReportField::WalksOfLife => "walksOfLife",
            ReportField::Mission => "mission",
            ReportField::Soul => "soul",
            ReportField::Connect => "connect",
            ReportField::Personality => "personality",
            ReportField::Passion => "passion",
            ReportField::Mature => "mature",
            ReportField::Balance => "balance",
            ReportField::SubconsciousPower => "subconsciousPower",
            ReportField::MissingNumbers => "missingNumbers",
            ReportField::RationalThinking => "rationalThinking",
            ReportField::Way => "way",
            ReportField::Challenges => "challenges",
            ReportField::DateOfBirth => "dateOfBirth",
            ReportField::YearIndividual => "yearIndividual",
            ReportField::YearIndividual1 => "yearIndividual_1",
            ReportField::YearIndividual2 => "yearIndividual_2",
            ReportField::MonthIndividual => "monthIndividual",
            ReportField::MonthIndividual1 => "monthIndividual_1",
            ReportField::MonthIndividual2 => "monthIndividual_2",
            ReportField::MonthIndividual3 => "monthIndividual_3",
            ReportField::LinkPersonalityAndSoul => "linkPersonalityAndSoul",
        }
    }

    /// Vietnamese display label shown in the customer panel.
    pub fn label(&self) -> &'static str {
        match self {
            ReportField::WalksOfLife => "Đường đời",
            ReportField::Mission => "Sứ mệnh",
            ReportField::Soul => "Linh hồn",
            ReportField::Connect => "Kết nối đường đời và sứ mệnh",
            ReportField::Personality => "Nhân cách",
            ReportField::Passion => "Đam mê",
            ReportField::Mature => "Trưởng thành",
            ReportField::Balance => "Cân bằng",
            ReportField::SubconsciousPower => "Sức mạnh tiềm thức",
            ReportField::MissingNumbers => "Số thiếu",
            ReportField::RationalThinking => "Tư duy lý trí",
            ReportField::Way => "Chặng đường",
            ReportField::Challenges => "Thách thức",
            ReportField::DateOfBirth => "Ngày sinh",
            ReportField::YearIndividual => "Năm cá nhân",
            ReportField::YearIndividual1 => "Năm cá nhân +1",
            ReportField::YearIndividual2 => "Năm cá nhân +2",
            ReportField::MonthIndividual => "Tháng cá nhân",
            ReportField::MonthIndividual1 => "Tháng cá nhân +1",
            ReportField::MonthIndividual2 => "Tháng cá nhân +2",
            ReportField::MonthIndividual3 => "Tháng cá nhân +3",
            ReportField::LinkPersonalityAndSoul => "Liên kết nhân cách và linh hồn",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }
}

// ============================================================================
// FIELD VALUES
// ============================================================================

/// A report value: a reduced number, or a string packing several numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(u32),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<u32> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(n)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One tagged record of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub field: ReportField,
    pub value: FieldValue,
}

impl Serialize for ReportEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("ReportEntry", 3)?;
        record.serialize_field("key", self.field.key())?;
        record.serialize_field("label", self.field.label())?;
        record.serialize_field("value", &self.value)?;
        record.end()
    }
}

// ============================================================================
// NUMEROLOGY REPORT
// ============================================================================

/// Full numerology report for one person.
///
/// Holds one entry per `ReportField`, always in `ReportField::ALL` order.
#[derive(Debug, Clone, PartialEq)]
pub struct NumerologyReport {
    entries: Vec<ReportEntry>,
    pub calculated_at: DateTime<Utc>,
    include_detailed: bool,
}

impl NumerologyReport {
    pub(crate) fn new(entries: Vec<ReportEntry>, calculated_at: DateTime<Utc>) -> Self {
        NumerologyReport {
            entries,
            calculated_at,
            include_detailed: true,
        }
    }

    /// Builder: toggle the `_detailed` array in serialized output.
    pub fn with_detailed(mut self, include: bool) -> Self {
        self.include_detailed = include;
        self
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn value(&self, field: ReportField) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .map(|e| &e.value)
    }

    /// Lookup by English key, e.g. `"walksOfLife"`.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        ReportField::from_key(key).and_then(|f| self.value(f))
    }

    pub fn number(&self, field: ReportField) -> Option<u32> {
        self.value(field).and_then(FieldValue::as_number)
    }

    pub fn text(&self, field: ReportField) -> Option<&str> {
        self.value(field).and_then(FieldValue::as_text)
    }

    /// Numeric and string fields only, without `_detailed`/`_calculated_at`.
    pub fn values_eq(&self, other: &NumerologyReport) -> bool {
        self.entries == other.entries
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for NumerologyReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = if self.include_detailed { 2 } else { 1 };
        let mut map = serializer.serialize_map(Some(self.entries.len() + extra))?;
        for entry in &self.entries {
            map.serialize_entry(entry.field.key(), &entry.value)?;
        }
        if self.include_detailed {
            map.serialize_entry("_detailed", &self.entries)?;
        }
        map.serialize_entry("_calculated_at", &self.calculated_at)?;
        map.end()
    }
}

// ============================================================================
// REPORT OUTCOME
// ============================================================================

/// What the top-level wrapper returns. Never an `Err`.
///
/// - `Empty` serializes as `{}` (name or birth date missing)
/// - `Failed` serializes as `{"error": "Failed to calculate numerology data"}`
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    Empty,
    Report(NumerologyReport),
    Failed,
}

impl ReportOutcome {
    pub fn report(&self) -> Option<&NumerologyReport> {
        match self {
            ReportOutcome::Report(report) => Some(report),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ReportOutcome::Empty)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ReportOutcome::Failed)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for ReportOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ReportOutcome::Report(report) => report.serialize(serializer),
            ReportOutcome::Empty => serializer.serialize_map(Some(0))?.end(),
            ReportOutcome::Failed => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", FAILURE_MESSAGE)?;
                map.end()
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_report() -> NumerologyReport {
        let entries = ReportField::ALL
            .iter()
            .map(|&field| ReportEntry {
                field,
                value: match field {
                    ReportField::Way => FieldValue::Text(" 7 9 7 11".to_string()),
                    ReportField::Challenges => FieldValue::Text(" 14 1975 1961 1989".to_string()),
                    ReportField::MissingNumbers => FieldValue::Text("2 3".to_string()),
                    _ => FieldValue::Number(1),
                },
            })
            .collect();
        NumerologyReport::new(entries, Utc::now())
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = ReportField::ALL.iter().map(|f| f.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), ReportField::ALL.len());
    }

    #[test]
    fn test_from_key_round_trip() {
        for field in ReportField::ALL {
            assert_eq!(ReportField::from_key(field.key()), Some(field));
        }
        assert_eq!(ReportField::from_key("unknown"), None);
    }

    #[test]
    fn test_report_json_shape() {
        let json = sample_report().to_json();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), ReportField::ALL.len() + 2);
        assert_eq!(object["walksOfLife"], json!(1));
        assert_eq!(object["way"], json!(" 7 9 7 11"));
        assert!(object["_calculated_at"].is_string());

        let detailed = object["_detailed"].as_array().unwrap();
        assert_eq!(detailed.len(), ReportField::ALL.len());
        assert_eq!(detailed[0]["key"], json!("walksOfLife"));
        assert_eq!(detailed[0]["label"], json!("Đường đời"));
        assert_eq!(detailed[0]["value"], json!(1));
    }

    #[test]
    fn test_report_without_detailed() {
        let json = sample_report().with_detailed(false).to_json();
        assert!(json.get("_detailed").is_none());
        assert!(json.get("_calculated_at").is_some());
    }

    #[test]
    fn test_outcome_json() {
        assert_eq!(ReportOutcome::Empty.to_json(), json!({}));
        assert_eq!(
            ReportOutcome::Failed.to_json(),
            json!({ "error": "Failed to calculate numerology data" })
        );
    }

    #[test]
    fn test_typed_access() {
        let report = sample_report();
        assert_eq!(report.number(ReportField::Soul), Some(1));
        assert_eq!(report.text(ReportField::Way), Some(" 7 9 7 11"));
        assert_eq!(report.get("missingNumbers"), Some(&FieldValue::Text("2 3".to_string())));
        assert_eq!(report.number(ReportField::Way), None);
    }
}
