//! Writes the Black-Scholes vs Monte Carlo convergence report for the
//! standard contract to `assignment3_results.csv`.

use anyhow::Result;
use vanilla_mc::{default_configs, run_report};

fn run() -> Result<()> {
    let config = default_configs::standard();
    run_report(&config)?;
    Ok(())
}

fn main() {
    // Failures are reported, not propagated: the process always exits 0
    if let Err(e) = run() {
        println!("We ran into trouble");
        println!("{}", e);
    }
}
