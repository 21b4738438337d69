use std::path::Path;
use vanilla_mc::{MarketParams, SweepConfig};

/// One parsed data row of a written report
#[derive(Debug, serde::Deserialize)]
#[allow(dead_code)] // Not every test reads every column
pub struct ReportRow {
    #[serde(rename = "NUM_SIMS")]
    pub num_sims: usize,
    #[serde(rename = "BS_CALL")]
    pub bs_call: f64,
    #[serde(rename = "EST_CALL")]
    pub est_call: f64,
    #[serde(rename = "DIFF_CALL")]
    pub diff_call: f64,
    #[serde(rename = "BS_PUT")]
    pub bs_put: f64,
    #[serde(rename = "EST_PUT")]
    pub est_put: f64,
    #[serde(rename = "DIFF_PUT")]
    pub diff_put: f64,
}

/// Load the data rows of a report written by `run_report`
#[allow(dead_code)]
pub fn load_report(path: &Path) -> Result<Vec<ReportRow>, Box<dyn std::error::Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

/// The contract used throughout the report tests
#[allow(dead_code)]
pub fn standard_market() -> MarketParams {
    MarketParams::new(100.0, 100.0, 0.05, 0.5, 0.25)
}

/// Quick, silent sweep writing to `path`
#[allow(dead_code)]
pub fn create_test_config(path: &Path) -> SweepConfig {
    SweepConfig {
        output_path: path.to_path_buf(),
        ..SweepConfig::quick()
    }
}

/// Sample standard deviation
#[allow(dead_code)]
pub fn std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
}
