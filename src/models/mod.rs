pub mod bs;
pub mod mc;

/// Utility functions shared by the analytic and simulated pricers
pub mod utils {
    use crate::error::PricingResult;
    use statrs::distribution::Normal;

    /// Standard normal distribution N(0, 1), used both for Φ and for sampling
    pub fn standard_normal() -> PricingResult<Normal> {
        Ok(Normal::new(0.0, 1.0)?)
    }

    /// Discount factor e^(-rT)
    pub fn discount_factor(r: f64, t: f64) -> f64 {
        (-r * t).exp()
    }

    /// Discounted call intrinsic value: max(0, (S - K) * e^(-rT))
    #[allow(non_snake_case)]
    pub fn discounted_call_intrinsic(S: f64, K: f64, r: f64, T: f64) -> f64 {
        ((S - K) * discount_factor(r, T)).max(0.0)
    }

    /// Discounted put intrinsic value: max(0, (K - S) * e^(-rT))
    #[allow(non_snake_case)]
    pub fn discounted_put_intrinsic(S: f64, K: f64, r: f64, T: f64) -> f64 {
        ((K - S) * discount_factor(r, T)).max(0.0)
    }

}
