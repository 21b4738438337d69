use crate::error::{PricingError, PricingResult};
use crate::sweep::types::MarketParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration struct for a convergence sweep
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SweepConfig {
    /// Contract and market inputs, held fixed across the sweep
    #[serde(default)]
    pub market: MarketParams,

    /// Seed for the pseudo-random stream, applied once per sweep
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Sample sizes to evaluate, in the order they are written
    #[serde(default = "default_sim_counts")]
    pub sim_counts: Vec<usize>,

    /// Destination of the CSV report
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Verbosity level (0=silent, 1=progress, 2=progress and results)
    #[serde(default = "default_verbosity")]
    pub verbosity: u8,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            market: MarketParams::default(),
            seed: default_seed(),
            sim_counts: default_sim_counts(),
            output_path: default_output_path(),
            verbosity: default_verbosity(),
        }
    }
}

impl SweepConfig {
    /// Full sweep from 100 to 1,000,000 samples
    pub fn standard() -> Self {
        Self::default()
    }

    /// Short sweep for tests and quick checks
    pub fn quick() -> Self {
        Self {
            sim_counts: vec![100, 1_000, 10_000],
            verbosity: 0,
            ..Self::default()
        }
    }

    /// Parse a TOML document; missing keys fall back to the defaults.
    pub fn from_toml_str(s: &str) -> PricingResult<Self> {
        let config: SweepConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> PricingResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject configurations that cannot produce a single row.
    pub fn validate(&self) -> PricingResult<()> {
        self.market.validate()?;
        if self.sim_counts.is_empty() {
            return Err(PricingError::ArithmeticDegeneracy(
                "sweep has no sample sizes".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_seed() -> u64 {
    1234
}

fn default_sim_counts() -> Vec<usize> {
    vec![100, 1_000, 10_000, 100_000, 1_000_000]
}

fn default_output_path() -> PathBuf {
    PathBuf::from("assignment3_results.csv")
}

fn default_verbosity() -> u8 {
    1
}
