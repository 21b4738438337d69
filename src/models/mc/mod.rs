//! Monte Carlo building blocks: lognormal return sampling and discounted
//! payoff averaging over simulated terminal prices.
//!
//! Terminal prices follow the exact GBM solution
//! `S_T = S_0 exp((mu - sigma²/2) T + sigma sqrt(T) Z)` with `Z ~ N(0, 1)`,
//! so no time stepping is involved.

use crate::error::{PricingError, PricingResult};
use crate::models::utils::{discounted_call_intrinsic, discounted_put_intrinsic, standard_normal};
use rand::distributions::Distribution;
use rand::Rng;

/// Draw `num_sims` independent log-returns over a horizon of `dt` years.
///
/// Each sample is `(mu - 0.5 sigma²) dt + sigma sqrt(dt) Z` with `Z` taken from
/// `rng`. The result always has exactly `num_sims` entries; zero samples yields
/// an empty vector.
///
/// # Errors
///
/// [`PricingError::ArithmeticDegeneracy`] if `sigma` or `dt` is negative or
/// any input is non-finite.
pub fn simulate_returns<R: Rng + ?Sized>(
    mu: f64,
    sigma: f64,
    dt: f64,
    num_sims: usize,
    rng: &mut R,
) -> PricingResult<Vec<f64>> {
    if !(mu.is_finite() && sigma.is_finite() && dt.is_finite()) || sigma < 0.0 || dt < 0.0 {
        return Err(PricingError::ArithmeticDegeneracy(format!(
            "invalid simulation inputs: mu={}, sigma={}, dt={}",
            mu, sigma, dt
        )));
    }

    let normal = standard_normal()?;
    let drift = (mu - 0.5 * sigma * sigma) * dt;
    let vol = sigma * dt.sqrt();

    let mut returns = Vec::with_capacity(num_sims);
    for _ in 0..num_sims {
        let z = normal.sample(rng);
        returns.push(drift + vol * z);
    }
    Ok(returns)
}

/// Map log-returns to terminal prices `S * exp(ret)`.
pub fn terminal_prices(spot: f64, returns: &[f64]) -> Vec<f64> {
    returns.iter().map(|ret| spot * ret.exp()).collect()
}

/// Average discounted call and put intrinsic values over the terminal prices.
///
/// Returns `(call_estimate, put_estimate)`.
///
/// # Errors
///
/// [`PricingError::ArithmeticDegeneracy`] when `terminal` is empty, since the
/// average is undefined.
pub fn average_discounted_payoffs(
    terminal: &[f64],
    strike: f64,
    rate: f64,
    expiry: f64,
) -> PricingResult<(f64, f64)> {
    if terminal.is_empty() {
        return Err(PricingError::ArithmeticDegeneracy(
            "division by zero: cannot average over zero simulations".to_string(),
        ));
    }

    let (call_sum, put_sum) = terminal.iter().fold((0.0_f64, 0.0_f64), |(call, put), &s_end| {
        (
            call + discounted_call_intrinsic(s_end, strike, rate, expiry),
            put + discounted_put_intrinsic(s_end, strike, rate, expiry),
        )
    });

    let n = terminal.len() as f64;
    Ok((call_sum / n, put_sum / n))
}
