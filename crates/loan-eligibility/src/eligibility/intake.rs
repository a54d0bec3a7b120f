use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::{EstimatorConfig, MAX_AMOUNT};
use super::domain::EligibilityInput;

/// A form field as submitted: browsers and CLIs send text, API clients send numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Text(String),
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Untrusted calculator submission, converted into an [`EligibilityInput`]
/// only after every field has been checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityForm {
    #[serde(default)]
    pub income: Option<FormValue>,
    #[serde(default)]
    pub commitments: Option<FormValue>,
    #[serde(default, alias = "loan_amount")]
    pub loan_amount: Option<FormValue>,
    #[serde(default, alias = "tenure_years")]
    pub tenure_years: Option<FormValue>,
}

impl EligibilityForm {
    pub fn from_text(income: &str, commitments: &str, loan_amount: &str, tenure_years: &str) -> Self {
        Self {
            income: Some(income.into()),
            commitments: Some(commitments.into()),
            loan_amount: Some(loan_amount.into()),
            tenure_years: Some(tenure_years.into()),
        }
    }

    pub fn parse(&self, config: &EstimatorConfig) -> Result<EligibilityInput, IntakeError> {
        let income = parse_amount(IntakeField::Income, self.income.as_ref())?;
        let commitments = parse_amount(IntakeField::Commitments, self.commitments.as_ref())?;
        let loan_amount = parse_loan_amount(self.loan_amount.as_ref())?;
        let tenure_years = parse_tenure(self.tenure_years.as_ref(), config.max_tenure_years)?;

        Ok(EligibilityInput {
            income,
            commitments,
            loan_amount,
            tenure_years,
        })
    }
}

/// Names the form field an [`IntakeError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IntakeField {
    Income,
    Commitments,
    LoanAmount,
    TenureYears,
}

impl IntakeField {
    pub fn name(&self) -> &'static str {
        match self {
            IntakeField::Income => "income",
            IntakeField::Commitments => "commitments",
            IntakeField::LoanAmount => "loanAmount",
            IntakeField::TenureYears => "tenureYears",
        }
    }
}

impl fmt::Display for IntakeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reasons a submission cannot be turned into an estimate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("{field} is required")]
    Missing { field: IntakeField },
    #[error("{field} must be a number, got '{raw}'")]
    NotANumber { field: IntakeField, raw: String },
    #[error("{field} must be a finite number")]
    NonFinite { field: IntakeField },
    #[error("{field} must not be negative")]
    Negative { field: IntakeField },
    #[error("{field} must be greater than zero")]
    NotPositive { field: IntakeField },
    #[error("{field} exceeds the maximum of {max}")]
    TooLarge { field: IntakeField, max: f64 },
    #[error("{field} must be a whole number of years")]
    FractionalTenure { field: IntakeField },
    #[error("{field} must be between 1 and {max} years")]
    TenureOutOfRange { field: IntakeField, max: u32 },
}

impl IntakeError {
    pub fn field(&self) -> IntakeField {
        match self {
            IntakeError::Missing { field }
            | IntakeError::NotANumber { field, .. }
            | IntakeError::NonFinite { field }
            | IntakeError::Negative { field }
            | IntakeError::NotPositive { field }
            | IntakeError::TooLarge { field, .. }
            | IntakeError::FractionalTenure { field }
            | IntakeError::TenureOutOfRange { field, .. } => *field,
        }
    }
}

fn parse_number(field: IntakeField, value: Option<&FormValue>) -> Result<f64, IntakeError> {
    let number = match value {
        None => return Err(IntakeError::Missing { field }),
        Some(FormValue::Number(number)) => *number,
        Some(FormValue::Text(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(IntakeError::Missing { field });
            }
            strip_thousands_separators(trimmed)
                .and_then(|cleaned| cleaned.parse::<f64>().ok())
                .ok_or_else(|| IntakeError::NotANumber {
                    field,
                    raw: raw.clone(),
                })?
        }
    };

    if !number.is_finite() {
        return Err(IntakeError::NonFinite { field });
    }

    Ok(number)
}

/// Drop `,`/`_` grouping separators. Each separator must sit in the integer
/// part, follow a digit, and be followed by exactly three digits.
fn strip_thousands_separators(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut cleaned = String::with_capacity(chars.len());
    let mut in_fraction = false;

    for (index, c) in chars.iter().enumerate() {
        match c {
            ',' | '_' => {
                let after_digit = index > 0 && chars[index - 1].is_ascii_digit();
                let full_group = chars
                    .get(index + 1..index + 4)
                    .is_some_and(|group| group.iter().all(char::is_ascii_digit));
                let group_ends = chars
                    .get(index + 4)
                    .map_or(true, |next| !next.is_ascii_digit());
                if in_fraction || !after_digit || !full_group || !group_ends {
                    return None;
                }
            }
            '.' | 'e' | 'E' => {
                in_fraction = true;
                cleaned.push(*c);
            }
            _ => cleaned.push(*c),
        }
    }

    Some(cleaned)
}

fn parse_amount(field: IntakeField, value: Option<&FormValue>) -> Result<f64, IntakeError> {
    let amount = parse_number(field, value)?;
    if amount < 0.0 {
        return Err(IntakeError::Negative { field });
    }
    if amount > MAX_AMOUNT {
        return Err(IntakeError::TooLarge {
            field,
            max: MAX_AMOUNT,
        });
    }
    Ok(amount)
}

/// Parse a standalone loan amount, e.g. for the reference table.
pub fn parse_loan_amount(value: Option<&FormValue>) -> Result<f64, IntakeError> {
    let field = IntakeField::LoanAmount;
    let amount = parse_number(field, value)?;
    if amount <= 0.0 {
        return Err(IntakeError::NotPositive { field });
    }
    if amount > MAX_AMOUNT {
        return Err(IntakeError::TooLarge {
            field,
            max: MAX_AMOUNT,
        });
    }
    Ok(amount)
}

fn parse_tenure(value: Option<&FormValue>, max_tenure_years: u32) -> Result<u32, IntakeError> {
    let field = IntakeField::TenureYears;
    let years = parse_number(field, value)?;
    if years.fract() != 0.0 {
        return Err(IntakeError::FractionalTenure { field });
    }
    if years < 1.0 || years > f64::from(max_tenure_years) {
        return Err(IntakeError::TenureOutOfRange {
            field,
            max: max_tenure_years,
        });
    }
    Ok(years as u32)
}
