//! # Vanilla-MC: Black-Scholes vs Monte Carlo for European Options
//!
//! `vanilla-mc` prices European calls and puts two ways, with the closed-form
//! Black-Scholes formula and with a Monte Carlo average of discounted payoffs
//! over simulated terminal prices, then reports both side by side for
//! increasing sample sizes so the convergence of the estimate is visible.
//!
//! ## Core Features
//!
//! - **Analytic pricing**: Black-Scholes call and put values
//! - **Path simulation**: i.i.d. lognormal terminal returns under risk-neutral drift
//! - **Payoff aggregation**: discounted intrinsic values averaged over the samples
//! - **Convergence report**: CSV table of analytic, estimated and difference columns
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use vanilla_mc::{evaluate_options, MarketParams};
//!
//! let params = MarketParams::new(100.0, 100.0, 0.05, 0.5, 0.25);
//! let mut rng = StdRng::seed_from_u64(1234);
//!
//! let result = evaluate_options(&params, 10_000, &mut rng)?;
//! println!("call: bs={:.2} mc={:.2}", result.call_bs, result.call_estimate);
//! println!("put:  bs={:.2} mc={:.2}", result.put_bs, result.put_estimate);
//! # Ok::<(), vanilla_mc::PricingError>(())
//! ```
//!
//! ## Configuration Presets
//!
//! - `standard()`: sweep of 100 to 1,000,000 samples, seed 1234
//! - `quick()`: sweep of 100 to 10,000 samples, silent

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod sweep;

// ================================================================================================
// IMPORTS
// ================================================================================================

use rand::Rng;

use models::{
    bs::bs_prices,
    mc::{average_discounted_payoffs, simulate_returns, terminal_prices},
};

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{ErrorKind, PricingError, PricingResult};

pub use models::bs::{bs_call_price, bs_put_price};
pub use models::utils::{discounted_call_intrinsic, discounted_put_intrinsic};

pub use sweep::{
    config::SweepConfig,
    pipeline::{run_report, run_sweep, ReportProcess},
    types::{EvaluationResult, MarketParams, REPORT_HEADER},
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured sweep settings.
///
/// # Available Configurations
///
/// - [`standard()`]: the full convergence sweep
/// - [`quick()`]: a short sweep for tests and smoke runs
pub mod default_configs {
    use crate::sweep::config::SweepConfig;

    /// The full sweep written by the `vanilla-mc` binary.
    ///
    /// **Characteristics:**
    /// - Market: S=100, K=100, r=5%, T=0.5y, sigma=25%
    /// - Sample sizes: 100, 1,000, 10,000, 100,000, 1,000,000
    /// - Seed: 1234
    /// - Output: `assignment3_results.csv`
    ///
    /// # Example
    ///
    /// ```rust
    /// use vanilla_mc::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.sim_counts.len(), 5);
    /// ```
    pub fn standard() -> SweepConfig {
        SweepConfig::standard()
    }

    /// Short, silent sweep over 100, 1,000 and 10,000 samples.
    pub fn quick() -> SweepConfig {
        SweepConfig::quick()
    }
}

/// Price a European call and put analytically and by Monte Carlo.
///
/// Draws `num_sims` terminal prices from `rng` under risk-neutral dynamics
/// (the simulator's drift is the risk-free rate), averages the discounted
/// call and put intrinsic values, and pairs those estimates with the
/// Black-Scholes values for the same contract.
///
/// # Arguments
///
/// * `params` - Spot, strike, rate, expiry and volatility of the contract
/// * `num_sims` - Number of simulated terminal prices; must be positive
/// * `rng` - Pseudo-random stream, advanced by exactly `num_sims` normal draws
///
/// # Errors
///
/// * [`PricingError::ArithmeticDegeneracy`] if `num_sims` is zero (the average
///   is a division by zero)
/// * [`PricingError::ArithmeticDegeneracy`] if the market parameters violate
///   the Black-Scholes preconditions (non-positive spot, strike, expiry or
///   volatility)
///
/// # Example
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use vanilla_mc::{evaluate_options, ErrorKind, MarketParams};
///
/// let mut rng = StdRng::seed_from_u64(1234);
/// let err = evaluate_options(&MarketParams::default(), 0, &mut rng).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::ArithmeticDegeneracy);
/// ```
pub fn evaluate_options<R: Rng + ?Sized>(
    params: &MarketParams,
    num_sims: usize,
    rng: &mut R,
) -> PricingResult<EvaluationResult> {
    // Risk-neutral valuation: drift is r, horizon is the full expiry
    let returns = simulate_returns(params.rate, params.sigma, params.expiry, num_sims, rng)?;
    let terminal = terminal_prices(params.spot, &returns);

    let (call_estimate, put_estimate) =
        average_discounted_payoffs(&terminal, params.strike, params.rate, params.expiry)?;

    let (call_bs, put_bs) = bs_prices(params)?;

    Ok(EvaluationResult {
        call_bs,
        call_estimate,
        put_bs,
        put_estimate,
        num_sims,
    })
}
