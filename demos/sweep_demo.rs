// demos/sweep_demo.rs

//! Demonstration of Monte Carlo convergence towards Black-Scholes
//!
//! This example shows how to:
//! 1. Price a European call and put analytically
//! 2. Estimate the same prices by Monte Carlo for growing sample sizes
//! 3. Watch the estimation error shrink as the sample grows

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use vanilla_mc::{bs_call_price, bs_put_price, evaluate_options, MarketParams};

fn main() -> Result<()> {
    println!("Black-Scholes vs Monte Carlo Demo");
    println!("=================================");

    let params = MarketParams::new(100.0, 105.0, 0.03, 1.0, 0.2);
    println!(
        "S={:.0} K={:.0} r={:.2}% T={:.1}y sigma={:.0}%",
        params.spot,
        params.strike,
        params.rate * 100.0,
        params.expiry,
        params.sigma * 100.0
    );

    println!("\nStep 1: Closed-form values");
    println!("  Call: {:.4}", bs_call_price(&params)?);
    println!("  Put:  {:.4}", bs_put_price(&params)?);

    println!("\nStep 2: Monte Carlo estimates");
    println!(
        "{:<10} {:<12} {:<12} {:<12} {:<12}",
        "Samples", "Call est", "Call err", "Put est", "Put err"
    );
    println!("{}", "-".repeat(60));

    let mut rng = StdRng::seed_from_u64(2024);
    for num_sims in [500, 5_000, 50_000, 500_000] {
        let result = evaluate_options(&params, num_sims, &mut rng)?;
        println!(
            "{:<10} {:<12.4} {:<12.4} {:<12.4} {:<12.4}",
            num_sims,
            result.call_estimate,
            result.call_diff(),
            result.put_estimate,
            result.put_diff()
        );
    }

    Ok(())
}
