use crate::error::{PricingError, PricingResult};
use serde::{Deserialize, Serialize};

/// Market and contract inputs shared by every pricer in the crate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketParams {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Time to maturity in years (T)
    pub expiry: f64,
    /// Annualised volatility (sigma)
    pub sigma: f64,
}

impl Default for MarketParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            rate: 0.05,
            expiry: 0.5,
            sigma: 0.25,
        }
    }
}

impl MarketParams {
    pub fn new(spot: f64, strike: f64, rate: f64, expiry: f64, sigma: f64) -> Self {
        Self {
            spot,
            strike,
            rate,
            expiry,
            sigma,
        }
    }

    /// Check the closed-form preconditions: S, K, T and sigma strictly positive, r finite.
    pub fn validate(&self) -> PricingResult<()> {
        let positive = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("expiry", self.expiry),
            ("sigma", self.sigma),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(PricingError::ArithmeticDegeneracy(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        if !self.rate.is_finite() {
            return Err(PricingError::ArithmeticDegeneracy(format!(
                "rate must be finite, got {}",
                self.rate
            )));
        }
        Ok(())
    }
}

/// Analytic and simulated prices for one sample size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// Black-Scholes call value
    pub call_bs: f64,
    /// Monte Carlo call estimate
    pub call_estimate: f64,
    /// Black-Scholes put value
    pub put_bs: f64,
    /// Monte Carlo put estimate
    pub put_estimate: f64,
    /// Number of simulated terminal prices behind the estimates
    pub num_sims: usize,
}

impl EvaluationResult {
    /// Analytic minus simulated call value
    pub fn call_diff(&self) -> f64 {
        self.call_bs - self.call_estimate
    }

    /// Analytic minus simulated put value
    pub fn put_diff(&self) -> f64 {
        self.put_bs - self.put_estimate
    }

    /// The report row for this result, floats fixed to two decimals.
    pub fn to_record(&self) -> [String; 7] {
        [
            self.num_sims.to_string(),
            format!("{:.2}", self.call_bs),
            format!("{:.2}", self.call_estimate),
            format!("{:.2}", self.call_diff()),
            format!("{:.2}", self.put_bs),
            format!("{:.2}", self.put_estimate),
            format!("{:.2}", self.put_diff()),
        ]
    }
}

/// Header row of the comparison report
pub const REPORT_HEADER: [&str; 7] = [
    "NUM_SIMS",
    "BS_CALL",
    "EST_CALL",
    "DIFF_CALL",
    "BS_PUT",
    "EST_PUT",
    "DIFF_PUT",
];
