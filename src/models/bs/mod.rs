// Closed-form Black-Scholes values for European calls and puts without dividends.
// Degenerate inputs are reported as errors rather than priced at intrinsic value.

use crate::error::PricingResult;
use crate::models::utils::{discount_factor, standard_normal};
use crate::sweep::types::MarketParams;
use statrs::distribution::ContinuousCDF;

/// The `(d1, d2)` pair of the Black-Scholes formula.
#[allow(non_snake_case)]
pub fn d1_d2(params: &MarketParams) -> PricingResult<(f64, f64)> {
    params.validate()?;
    let MarketParams {
        spot: S,
        strike: K,
        rate: r,
        expiry: T,
        sigma,
    } = *params;

    let vol_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    Ok((d1, d2))
}

/// Price of a European call option under Black-Scholes assumptions.
pub fn bs_call_price(params: &MarketParams) -> PricingResult<f64> {
    let (d1, d2) = d1_d2(params)?;
    let n = standard_normal()?;
    let df = discount_factor(params.rate, params.expiry);
    Ok(params.spot * n.cdf(d1) - params.strike * df * n.cdf(d2))
}

/// Price of a European put option under Black-Scholes assumptions.
pub fn bs_put_price(params: &MarketParams) -> PricingResult<f64> {
    let (d1, d2) = d1_d2(params)?;
    let n = standard_normal()?;
    let df = discount_factor(params.rate, params.expiry);
    Ok(params.strike * df * n.cdf(-d2) - params.spot * n.cdf(-d1))
}

/// Call and put values for the same contract, in that order.
pub fn bs_prices(params: &MarketParams) -> PricingResult<(f64, f64)> {
    Ok((bs_call_price(params)?, bs_put_price(params)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn reference_values_for_default_contract() {
        let (call, put) = bs_prices(&MarketParams::default()).unwrap();
        assert!((call - 8.2600).abs() < 1e-3, "call = {}", call);
        assert!((put - 5.7910).abs() < 1e-3, "put = {}", put);
    }

    #[test]
    fn put_call_parity_holds() {
        let cases = [
            MarketParams::new(100.0, 100.0, 0.05, 0.5, 0.25),
            MarketParams::new(80.0, 100.0, 0.01, 2.0, 0.4),
            MarketParams::new(120.0, 95.0, 0.10, 0.1, 0.15),
            MarketParams::new(50.0, 60.0, -0.01, 1.0, 0.8),
        ];
        for p in cases {
            let (call, put) = bs_prices(&p).unwrap();
            let forward_gap = p.spot - p.strike * (-p.rate * p.expiry).exp();
            assert!(
                (call - put - forward_gap).abs() < 1e-9,
                "parity violated for {:?}",
                p
            );
        }
    }

    #[test]
    fn at_the_money_options_have_time_value() {
        for (r, t, sigma) in [(0.05, 0.5, 0.25), (0.0, 1.0, 0.1), (0.2, 3.0, 0.6)] {
            let p = MarketParams::new(100.0, 100.0, r, t, sigma);
            let (call, put) = bs_prices(&p).unwrap();
            assert!(call > 0.0);
            assert!(put > 0.0);
        }
    }

    #[test]
    fn d2_is_d1_shifted_by_total_vol() {
        let p = MarketParams::default();
        let (d1, d2) = d1_d2(&p).unwrap();
        assert!((d1 - d2 - p.sigma * p.expiry.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn zero_volatility_or_expiry_is_degenerate() {
        let zero_vol = MarketParams {
            sigma: 0.0,
            ..MarketParams::default()
        };
        let zero_t = MarketParams {
            expiry: 0.0,
            ..MarketParams::default()
        };
        assert_eq!(
            bs_call_price(&zero_vol).unwrap_err().kind(),
            ErrorKind::ArithmeticDegeneracy
        );
        assert_eq!(
            bs_put_price(&zero_t).unwrap_err().kind(),
            ErrorKind::ArithmeticDegeneracy
        );
    }
}
