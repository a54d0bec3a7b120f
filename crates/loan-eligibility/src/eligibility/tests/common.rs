use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::eligibility::{eligibility_router, EligibilityInput, Estimator, EstimatorConfig};

pub(super) fn input(
    income: f64,
    commitments: f64,
    loan_amount: f64,
    tenure_years: u32,
) -> EligibilityInput {
    EligibilityInput {
        income,
        commitments,
        loan_amount,
        tenure_years,
    }
}

/// The shipped calculator scenario that shows "Pre-Approved!".
pub(super) fn salaried_applicant() -> EligibilityInput {
    input(8_000.0, 1_500.0, 50_000.0, 5)
}

pub(super) fn overextended_applicant() -> EligibilityInput {
    input(3_000.0, 2_000.0, 200_000.0, 3)
}

pub(super) fn stretched_applicant() -> EligibilityInput {
    input(5_000.0, 2_000.0, 40_000.0, 5)
}

pub(super) fn estimator() -> Estimator {
    Estimator::default()
}

/// Zero interest keeps instalments exact so ratio boundaries can be hit precisely.
pub(super) fn interest_free_estimator() -> Estimator {
    Estimator::new(EstimatorConfig {
        flat_rate_percent: 0.0,
        ..EstimatorConfig::default()
    })
    .expect("interest-free config is valid")
}

pub(super) fn router() -> axum::Router {
    eligibility_router(Arc::new(estimator()))
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
