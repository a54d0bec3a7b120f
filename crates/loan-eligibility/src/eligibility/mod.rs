//! Debt service ratio eligibility estimation.
//!
//! The estimator is a pure function of its input and configuration: no I/O,
//! no shared mutable state, and no error path for well-formed input. Untrusted
//! form data passes through [`intake`] first, and [`router`] exposes both over
//! HTTP for the calculator widget.

pub mod config;
pub mod domain;
mod estimator;
pub mod intake;
pub mod router;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use config::{EstimatorConfig, EstimatorConfigError};
pub use domain::{EligibilityInput, EligibilityResult, EligibilityStatus};
pub use estimator::{estimate, Estimator};
pub use intake::{parse_loan_amount, EligibilityForm, FormValue, IntakeError, IntakeField};
pub use router::{eligibility_router, EstimateResponse};
pub use schedule::{round_currency, ReferenceRow, ReferenceTable, ScheduleError};
