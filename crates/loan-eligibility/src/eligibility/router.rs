use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::domain::{EligibilityInput, EligibilityResult};
use super::estimator::Estimator;
use super::intake::{parse_loan_amount, EligibilityForm, FormValue, IntakeError};
use super::schedule::ReferenceTable;

/// Router builder exposing the calculator endpoints. Handlers share the
/// estimator read-only, so concurrent requests never interact.
pub fn eligibility_router(estimator: Arc<Estimator>) -> Router {
    Router::new()
        .route("/api/v1/eligibility/estimate", post(estimate_handler))
        .route(
            "/api/v1/eligibility/reference-table",
            post(reference_table_handler),
        )
        .with_state(estimator)
}

/// Payload returned for a successful estimate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    pub input: EligibilityInput,
    pub result: EligibilityResult,
    pub headline: &'static str,
    pub summary: String,
    pub evaluated_at: DateTime<Utc>,
}

impl EstimateResponse {
    pub fn new(input: EligibilityInput, result: EligibilityResult) -> Self {
        Self {
            input,
            result,
            headline: result.status.label(),
            summary: result.summary(),
            evaluated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceTableRequest {
    #[serde(default, alias = "loan_amount")]
    pub loan_amount: Option<FormValue>,
}

pub(crate) async fn estimate_handler(
    State(estimator): State<Arc<Estimator>>,
    axum::Json(form): axum::Json<EligibilityForm>,
) -> Response {
    match form.parse(estimator.config()) {
        Ok(input) => {
            let result = estimator.estimate(&input);
            let body = EstimateResponse::new(input, result);
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => intake_rejection(error),
    }
}

pub(crate) async fn reference_table_handler(
    State(estimator): State<Arc<Estimator>>,
    axum::Json(request): axum::Json<ReferenceTableRequest>,
) -> Response {
    match parse_loan_amount(request.loan_amount.as_ref()) {
        Ok(loan_amount) => {
            let table: ReferenceTable = estimator.reference_table(loan_amount);
            (StatusCode::OK, axum::Json(table)).into_response()
        }
        Err(error) => intake_rejection(error),
    }
}

fn intake_rejection(error: IntakeError) -> Response {
    warn!(field = error.field().name(), %error, "eligibility submission rejected");
    let payload = json!({
        "error": error.to_string(),
        "field": error.field().name(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
