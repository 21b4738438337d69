/// Failures surfaced by the pricing pipeline and the report driver.
///
/// Nothing inside the pipeline recovers locally: every failure travels up to
/// the caller, which decides whether to log and carry on.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("arithmetic degeneracy: {0}")]
    ArithmeticDegeneracy(String),

    #[error("i/o failure: {0}")]
    IoFailure(String),
}

/// Coarse origin of a [`PricingError`], without the message payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ArithmeticDegeneracy,
    IoFailure,
}

impl PricingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PricingError::ArithmeticDegeneracy(_) => ErrorKind::ArithmeticDegeneracy,
            PricingError::IoFailure(_) => ErrorKind::IoFailure,
        }
    }
}

impl From<std::io::Error> for PricingError {
    fn from(e: std::io::Error) -> Self {
        PricingError::IoFailure(e.to_string())
    }
}

impl From<csv::Error> for PricingError {
    fn from(e: csv::Error) -> Self {
        PricingError::IoFailure(e.to_string())
    }
}

impl From<statrs::StatsError> for PricingError {
    fn from(e: statrs::StatsError) -> Self {
        PricingError::ArithmeticDegeneracy(e.to_string())
    }
}

impl From<toml::de::Error> for PricingError {
    fn from(e: toml::de::Error) -> Self {
        PricingError::IoFailure(e.to_string())
    }
}

pub type PricingResult<T> = Result<T, PricingError>;
