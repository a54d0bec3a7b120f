use tracing::debug;

use super::config::{EstimatorConfig, EstimatorConfigError, MAX_AMOUNT, UNAFFORDABLE_DSR};
use super::domain::{EligibilityInput, EligibilityResult, EligibilityStatus};

/// Instalment figures for one principal/tenure pair at a flat rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FlatRateQuote {
    pub monthly_payment: f64,
    pub total_interest: f64,
}

/// Flat-rate interest is charged once on the original principal for the
/// whole tenure and spread evenly over every month.
pub(crate) fn flat_rate_quote(principal: f64, tenure_years: u32, rate: f64) -> FlatRateQuote {
    let years = f64::from(tenure_years);
    let total_interest = principal * rate * years;
    FlatRateQuote {
        monthly_payment: (principal + total_interest) / (years * 12.0),
        total_interest,
    }
}

/// Clamp caller-supplied amounts into `[0, MAX_AMOUNT]`; NaN becomes zero.
fn sanitize_amount(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, MAX_AMOUNT)
}

/// Stateless estimator that applies one configuration to any number of inputs.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    /// Build an estimator, rejecting parameters that could break the
    /// finite-output guarantee of [`Estimator::estimate`].
    pub fn new(config: EstimatorConfig) -> Result<Self, EstimatorConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Compute the eligibility outcome for `input`.
    ///
    /// Total over every input: negative or non-finite amounts are clamped to
    /// zero and a zero tenure is treated as one year, so every numeric field
    /// of the result is finite and non-negative. Zero income short-circuits to
    /// [`EligibilityStatus::Declined`] with [`UNAFFORDABLE_DSR`] and no loan
    /// headroom. The ratio saturates at [`UNAFFORDABLE_DSR`].
    pub fn estimate(&self, input: &EligibilityInput) -> EligibilityResult {
        let income = sanitize_amount(input.income);
        let commitments = sanitize_amount(input.commitments);
        let loan_amount = sanitize_amount(input.loan_amount);
        let tenure_years = input.tenure_years.max(1);

        let quote = flat_rate_quote(loan_amount, tenure_years, self.config.flat_rate());

        let result = if income > 0.0 {
            let dsr = ((commitments + quote.monthly_payment) * 100.0 / income).min(UNAFFORDABLE_DSR);
            EligibilityResult {
                status: self.classify(dsr),
                dsr,
                max_loan_amount: self.max_loan_amount(income, commitments, tenure_years),
                monthly_payment: quote.monthly_payment,
                total_interest: quote.total_interest,
            }
        } else {
            EligibilityResult {
                status: EligibilityStatus::Declined,
                dsr: UNAFFORDABLE_DSR,
                max_loan_amount: 0.0,
                monthly_payment: quote.monthly_payment,
                total_interest: quote.total_interest,
            }
        };

        debug!(
            status = result.status.as_str(),
            dsr = result.dsr,
            max_loan_amount = result.max_loan_amount,
            "eligibility estimated"
        );

        result
    }

    /// Map a debt service ratio onto the configured ceilings.
    pub fn classify(&self, dsr: f64) -> EligibilityStatus {
        if dsr <= self.config.approved_dsr_ceiling {
            EligibilityStatus::Approved
        } else if dsr <= self.config.conditional_dsr_ceiling {
            EligibilityStatus::Conditional
        } else {
            EligibilityStatus::Declined
        }
    }

    /// Largest principal whose instalment keeps the ratio at the conditional
    /// ceiling. Linear inversion of [`flat_rate_quote`]:
    /// `P = budget * months / (1 + rate * years)`.
    fn max_loan_amount(&self, income: f64, commitments: f64, tenure_years: u32) -> f64 {
        let budget = self.config.conditional_dsr_ceiling * income / 100.0 - commitments;
        if budget <= 0.0 {
            return 0.0;
        }

        let years = f64::from(tenure_years);
        budget * years * 12.0 / (1.0 + self.config.flat_rate() * years)
    }
}

/// Estimate with the default product parameters.
pub fn estimate(input: &EligibilityInput) -> EligibilityResult {
    Estimator::default().estimate(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_rate_quote_spreads_interest_evenly() {
        let quote = flat_rate_quote(12_000.0, 1, 0.05);
        assert!((quote.total_interest - 600.0).abs() < 1e-9);
        assert!((quote.monthly_payment - 1050.0).abs() < 1e-9);
    }

    #[test]
    fn sanitize_amount_handles_non_finite_values() {
        assert_eq!(sanitize_amount(f64::NAN), 0.0);
        assert_eq!(sanitize_amount(-5.0), 0.0);
        assert_eq!(sanitize_amount(f64::INFINITY), MAX_AMOUNT);
        assert_eq!(sanitize_amount(42.5), 42.5);
    }

    #[test]
    fn new_rejects_negative_rate_and_nan_ceiling() {
        let negative_rate = EstimatorConfig {
            flat_rate_percent: -20.0,
            ..EstimatorConfig::default()
        };
        assert_eq!(
            Estimator::new(negative_rate).err(),
            Some(EstimatorConfigError::FlatRateOutOfRange(-20.0))
        );

        let nan_ceiling = EstimatorConfig {
            conditional_dsr_ceiling: f64::NAN,
            ..EstimatorConfig::default()
        };
        assert!(matches!(
            Estimator::new(nan_ceiling),
            Err(EstimatorConfigError::InvalidCeiling(_))
        ));
    }

    #[test]
    fn new_accepts_valid_overrides() {
        let estimator = Estimator::new(EstimatorConfig {
            flat_rate_percent: 0.0,
            ..EstimatorConfig::default()
        })
        .expect("zero rate is valid");
        assert_eq!(estimator.config().flat_rate_percent, 0.0);
    }

    #[test]
    fn max_loan_is_zero_when_commitments_consume_budget() {
        let estimator = Estimator::default();
        assert_eq!(estimator.max_loan_amount(3_000.0, 2_000.0, 3), 0.0);
    }
}
