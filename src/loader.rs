// 📂 CSV Ingest - read the Fundamentus export
//
// Read-only: the CSV is input data, nothing is ever written back.

use crate::company::Company;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

/// Default export filename, alongside the binary.
pub const DEFAULT_CSV_PATH: &str = "fundamentus_data.csv";

/// Load every company row from the export.
///
/// Row-level numeric junk is coerced to None by the model; only a missing
/// file or a structurally broken row fails the load.
pub fn load_companies(csv_path: &Path) -> Result<Vec<Company>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;

    let mut companies = Vec::new();

    for result in rdr.deserialize() {
        let company: Company = result.context("Failed to deserialize company row")?;
        companies.push(company);
    }

    Ok(companies)
}

/// Scrape date of the dataset: first row that carries one.
pub fn execution_date(companies: &[Company]) -> Option<NaiveDate> {
    companies.iter().find_map(|c| c.execution_date())
}

// ============================================================================
// TESTS
// ============================================================================
