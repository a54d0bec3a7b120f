use serde::{Deserialize, Serialize};

/// Caller-supplied figures, all monthly amounts in a single currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityInput {
    /// Monthly net income.
    pub income: f64,
    /// Monthly sum of existing debt obligations.
    pub commitments: f64,
    /// Desired principal.
    pub loan_amount: f64,
    pub tenure_years: u32,
}

/// Three-way affordability outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EligibilityStatus {
    Approved,
    Conditional,
    Declined,
}

impl EligibilityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EligibilityStatus::Approved => "Pre-Approved!",
            EligibilityStatus::Conditional => "Conditionally Eligible",
            EligibilityStatus::Declined => "Not Eligible",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EligibilityStatus::Approved => "approved",
            EligibilityStatus::Conditional => "conditional",
            EligibilityStatus::Declined => "declined",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            EligibilityStatus::Declined => 0,
            EligibilityStatus::Conditional => 1,
            EligibilityStatus::Approved => 2,
        }
    }

    /// True when `self` is as good as or better than `other`.
    pub fn is_at_least(&self, other: EligibilityStatus) -> bool {
        self.rank() >= other.rank()
    }
}

/// Outcome of a single estimate. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub status: EligibilityStatus,
    /// Debt service ratio in percent, including the requested loan.
    pub dsr: f64,
    pub max_loan_amount: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
}

impl EligibilityResult {
    pub fn summary(&self) -> String {
        match self.status {
            EligibilityStatus::Approved => format!(
                "pre-approved at {:.1}% DSR with a monthly payment of {:.2}",
                self.dsr, self.monthly_payment
            ),
            EligibilityStatus::Conditional => format!(
                "conditionally eligible at {:.1}% DSR; loans up to {:.2} fit the limit",
                self.dsr, self.max_loan_amount
            ),
            EligibilityStatus::Declined if self.max_loan_amount > 0.0 => format!(
                "not eligible at {:.1}% DSR; consider a loan of at most {:.2}",
                self.dsr, self.max_loan_amount
            ),
            EligibilityStatus::Declined => {
                "not eligible: income does not cover any additional instalment".to_string()
            }
        }
    }
}
