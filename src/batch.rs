// 📦 Batch computation - numerology for a CSV export of CRM customers
//
// Input headers: full_name, birth_date[, customer_id]
// birth_date may be ISO (YYYY-MM-DD) or display form (DD/MM/YYYY).

use crate::birth_date::BirthDate;
use crate::engine::NumerologyEngine;
use crate::report::ReportOutcome;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// One customer row from the CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomerRecord {
    #[serde(default)]
    pub customer_id: Option<String>,
    pub full_name: String,
    pub birth_date: String,
}

/// Result for one customer. Serializes as one JSON line.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub full_name: String,
    pub numerology: ReportOutcome,
}

/// Counts per outcome kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub computed: usize,
    pub empty: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn summary(&self) -> String {
        format!(
            "{} customers: {} computed, {} empty, {} failed",
            self.total, self.computed, self.empty, self.failed
        )
    }
}

pub fn load_customers(csv_path: &Path) -> Result<Vec<CustomerRecord>> {
    let rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open customer CSV: {:?}", csv_path))?;
    read_customers(rdr)
}

/// Read customers from any CSV source (file, stdin, in-memory).
pub fn read_customers<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<CustomerRecord>> {
    let mut customers = Vec::new();

    for (index, result) in rdr.deserialize().enumerate() {
        let customer: CustomerRecord = result
            .with_context(|| format!("Failed to deserialize customer on row {}", index + 1))?;
        customers.push(customer);
    }

    Ok(customers)
}

/// Compute every customer. A bad row never aborts the batch.
pub fn compute_batch(engine: &NumerologyEngine, customers: &[CustomerRecord]) -> Vec<BatchRecord> {
    customers
        .iter()
        .map(|customer| BatchRecord {
            customer_id: customer.customer_id.clone(),
            full_name: customer.full_name.clone(),
            numerology: compute_customer(engine, customer),
        })
        .collect()
}

fn compute_customer(engine: &NumerologyEngine, customer: &CustomerRecord) -> ReportOutcome {
    let _span = tracing::debug_span!(
        "customer",
        id = customer.customer_id.as_deref().unwrap_or("-")
    )
    .entered();
    compute_one(engine, &customer.full_name, &customer.birth_date)
}

/// Like `calculate_outcome`, but also accepts `DD/MM/YYYY` birth dates.
pub fn compute_one(engine: &NumerologyEngine, full_name: &str, birth_date: &str) -> ReportOutcome {
    // DD/MM/YYYY → ISO before handing over to the engine
    match BirthDate::parse_any(birth_date) {
        Ok(date) => engine.calculate_outcome(full_name, &date.to_string()),
        Err(e) if e.is_empty_input() => ReportOutcome::Empty,
        Err(e) => {
            warn!(error = %e, "unreadable birth date");
            ReportOutcome::Failed
        }
    }
}

pub fn summarize(records: &[BatchRecord]) -> BatchSummary {
    let mut summary = BatchSummary {
        total: records.len(),
        ..BatchSummary::default()
    };

    for record in records {
        match record.numerology {
            ReportOutcome::Report(_) => summary.computed += 1,
            ReportOutcome::Empty => summary.empty += 1,
            ReportOutcome::Failed => summary.failed += 1,
        }
    }

    info!("{}", summary.summary());
    summary
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineConfig;
    use crate::report::ReportField;
    use chrono::NaiveDate;
    use std::io::Write;

    const CSV: &str = "customer_id,full_name,birth_date\n\
                       KH001,Nguyễn Văn An,1990-01-15\n\
                       KH002,Trần Thị Bình,15/01/1990\n\
                       KH003,,1990-01-15\n\
                       KH004,Lê Văn Cường,31/13/1990\n";

    fn engine() -> NumerologyEngine {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        NumerologyEngine::with_config(EngineConfig::default().with_reference_date(today))
    }

    #[test]
    fn test_read_customers() {
        let customers = read_customers(csv::Reader::from_reader(CSV.as_bytes())).unwrap();

        assert_eq!(customers.len(), 4);
        assert_eq!(customers[0].customer_id.as_deref(), Some("KH001"));
        assert_eq!(customers[1].birth_date, "15/01/1990");
        assert_eq!(customers[2].full_name, "");
    }

    #[test]
    fn test_compute_batch_mixed_rows() {
        let customers = read_customers(csv::Reader::from_reader(CSV.as_bytes())).unwrap();
        let records = compute_batch(&engine(), &customers);

        assert_eq!(records.len(), 4);
        assert!(records[0].numerology.report().is_some());
        // DD/MM/YYYY converted before calculation: same life path as ISO
        assert_eq!(
            records[1].numerology.report().unwrap().number(ReportField::WalksOfLife),
            Some(8)
        );
        assert!(records[2].numerology.is_empty());
        assert!(records[3].numerology.is_failed());

        let summary = summarize(&records);
        assert_eq!(summary, BatchSummary { total: 4, computed: 2, empty: 1, failed: 1 });
        assert!(!summary.summary().is_empty());
    }

    #[test]
    fn test_missing_customer_id_column() {
        let csv = "full_name,birth_date\nAn,1990-01-15\n";
        let customers = read_customers(csv::Reader::from_reader(csv.as_bytes())).unwrap();
        assert_eq!(customers[0].customer_id, None);

        let records = compute_batch(&engine(), &customers);
        let json = serde_json::to_value(&records[0]).unwrap();
        assert!(json.get("customer_id").is_none());
        assert_eq!(json["numerology"]["mission"], serde_json::json!(6));
    }

    #[test]
    fn test_compute_one_accepts_both_forms() {
        let iso = compute_one(&engine(), "An", "1990-01-15");
        let display = compute_one(&engine(), "An", "15/01/1990");
        assert!(iso.report().unwrap().values_eq(display.report().unwrap()));

        assert!(compute_one(&engine(), "An", "").is_empty());
        assert!(compute_one(&engine(), "", "15/01/1990").is_empty());
        assert!(compute_one(&engine(), "An", "15/01/90").is_failed());
        assert!(compute_one(&engine(), "An", "   ").is_failed());
    }

    #[test]
    fn test_load_customers_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();

        let customers = load_customers(file.path()).unwrap();
        assert_eq!(customers.len(), 4);
    }

    #[test]
    fn test_load_customers_missing_file() {
        assert!(load_customers(Path::new("/nonexistent/customers.csv")).is_err());
    }
}
