use serde::Serialize;

use super::estimator::{flat_rate_quote, Estimator};

/// One tenure option for a fixed principal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceRow {
    pub tenure_years: u32,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_repayment: f64,
}

/// Instalments for a principal across every supported tenure at the advertised rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceTable {
    pub loan_amount: f64,
    pub flat_rate_percent: f64,
    pub rows: Vec<ReferenceRow>,
}

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("failed to write reference table: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush reference table: {0}")]
    Flush(String),
}

impl Estimator {
    pub fn reference_table(&self, loan_amount: f64) -> ReferenceTable {
        let config = self.config();
        let rows = (1..=config.max_tenure_years)
            .map(|tenure_years| {
                let quote = flat_rate_quote(loan_amount, tenure_years, config.flat_rate());
                ReferenceRow {
                    tenure_years,
                    monthly_payment: quote.monthly_payment,
                    total_interest: quote.total_interest,
                    total_repayment: loan_amount + quote.total_interest,
                }
            })
            .collect();

        ReferenceTable {
            loan_amount,
            flat_rate_percent: config.flat_rate_percent,
            rows,
        }
    }
}

impl ReferenceTable {
    pub fn to_csv(&self) -> Result<String, ScheduleError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            "tenure_years",
            "monthly_payment",
            "total_interest",
            "total_repayment",
        ])?;

        for row in &self.rows {
            writer.write_record([
                row.tenure_years.to_string(),
                format!("{:.2}", round_currency(row.monthly_payment)),
                format!("{:.2}", round_currency(row.total_interest)),
                format!("{:.2}", round_currency(row.total_repayment)),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|err| ScheduleError::Flush(err.to_string()))?;
        String::from_utf8(bytes).map_err(|err| ScheduleError::Flush(err.to_string()))
    }
}

/// Round to cents, half away from zero. Presentation only.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
