use serde::{Deserialize, Serialize};

/// Advertised nominal annual flat rate, in percent.
pub const DEFAULT_FLAT_RATE_PERCENT: f64 = 4.88;

/// Highest debt service ratio (percent) that still pre-approves an applicant.
pub const DEFAULT_APPROVED_DSR_CEILING: f64 = 50.0;

/// Highest debt service ratio (percent) that still qualifies conditionally.
pub const DEFAULT_CONDITIONAL_DSR_CEILING: f64 = 60.0;

pub const DEFAULT_MAX_TENURE_YEARS: u32 = 10;

/// Longest tenure any configuration may offer; bounds the reference table.
pub const TENURE_CAP_YEARS: u32 = 50;

/// Ratio reported when there is no income to service any debt.
pub const UNAFFORDABLE_DSR: f64 = 100_000.0;

/// Upper bound accepted for any single amount at intake.
pub const MAX_AMOUNT: f64 = 1e12;

/// Business parameters shared by every estimate.
///
/// The same flat rate drives both the requested-loan instalment and the
/// maximum-loan inversion so the two figures stay comparable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    pub flat_rate_percent: f64,
    pub approved_dsr_ceiling: f64,
    pub conditional_dsr_ceiling: f64,
    pub max_tenure_years: u32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            flat_rate_percent: DEFAULT_FLAT_RATE_PERCENT,
            approved_dsr_ceiling: DEFAULT_APPROVED_DSR_CEILING,
            conditional_dsr_ceiling: DEFAULT_CONDITIONAL_DSR_CEILING,
            max_tenure_years: DEFAULT_MAX_TENURE_YEARS,
        }
    }
}

impl EstimatorConfig {
    /// Annual flat rate as a fraction (4.88% -> 0.0488).
    pub fn flat_rate(&self) -> f64 {
        self.flat_rate_percent / 100.0
    }

    pub fn validate(&self) -> Result<(), EstimatorConfigError> {
        if !self.flat_rate_percent.is_finite() || !(0.0..=100.0).contains(&self.flat_rate_percent)
        {
            return Err(EstimatorConfigError::FlatRateOutOfRange(
                self.flat_rate_percent,
            ));
        }

        for ceiling in [self.approved_dsr_ceiling, self.conditional_dsr_ceiling] {
            if !ceiling.is_finite() || ceiling <= 0.0 {
                return Err(EstimatorConfigError::InvalidCeiling(ceiling));
            }
        }

        if self.approved_dsr_ceiling >= self.conditional_dsr_ceiling {
            return Err(EstimatorConfigError::CeilingsOutOfOrder {
                approved: self.approved_dsr_ceiling,
                conditional: self.conditional_dsr_ceiling,
            });
        }

        if self.max_tenure_years == 0 {
            return Err(EstimatorConfigError::ZeroTenure);
        }

        if self.max_tenure_years > TENURE_CAP_YEARS {
            return Err(EstimatorConfigError::TenureTooLong(self.max_tenure_years));
        }

        Ok(())
    }
}

/// Rejected estimator parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimatorConfigError {
    #[error("flat rate {0}% must be a finite percentage between 0 and 100")]
    FlatRateOutOfRange(f64),
    #[error("DSR ceiling {0} must be a finite positive percentage")]
    InvalidCeiling(f64),
    #[error("approved DSR ceiling {approved} must be below conditional ceiling {conditional}")]
    CeilingsOutOfOrder { approved: f64, conditional: f64 },
    #[error("maximum tenure must be at least one year")]
    ZeroTenure,
    #[error("maximum tenure of {0} years exceeds the {TENURE_CAP_YEARS}-year cap")]
    TenureTooLong(u32),
}
