use crate::error::PricingResult;
use crate::evaluate_options;
use crate::sweep::config::SweepConfig;
use crate::sweep::types::{EvaluationResult, REPORT_HEADER};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// A configured sweep that writes its report to `config.output_path`
pub struct ReportProcess {
    config: SweepConfig,
}

impl ReportProcess {
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    /// Override the seed of the pseudo-random stream
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Replace the list of sample sizes
    pub fn with_sim_counts(mut self, sim_counts: Vec<usize>) -> Self {
        self.config.sim_counts = sim_counts;
        self
    }

    /// Write the report somewhere other than the configured path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Run the sweep and return every evaluated row
    pub fn run(&self) -> PricingResult<Vec<EvaluationResult>> {
        run_report(&self.config)
    }
}

/// Create (or truncate) the configured output file and run the sweep into it.
///
/// The file is closed when this returns, whether the sweep finished or not.
pub fn run_report(config: &SweepConfig) -> PricingResult<Vec<EvaluationResult>> {
    let file = File::create(&config.output_path)?;
    run_sweep(config, file)
}

/// Run the convergence sweep, writing the CSV report to `out`.
///
/// The generator is seeded once from `config.seed` and shared across every
/// sample size, so row `n` depends on the draws consumed by rows `0..n`.
/// Each row is flushed as soon as it is written; on failure the rows before
/// the failing sample size stay in `out` and nothing after it is written.
pub fn run_sweep<W: Write>(
    config: &SweepConfig,
    out: W,
) -> PricingResult<Vec<EvaluationResult>> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(REPORT_HEADER)?;
    writer.flush()?;

    let mut results = Vec::with_capacity(config.sim_counts.len());
    for &num_sims in &config.sim_counts {
        if config.verbosity > 0 {
            println!("Running {}", num_sims);
        }

        let result = evaluate_options(&config.market, num_sims, &mut rng)?;
        if config.verbosity > 1 {
            println!(
                "  call: bs={:.4} est={:.4} | put: bs={:.4} est={:.4}",
                result.call_bs, result.call_estimate, result.put_bs, result.put_estimate
            );
        }

        writer.write_record(result.to_record())?;
        writer.flush()?;
        results.push(result);
    }

    Ok(results)
}
